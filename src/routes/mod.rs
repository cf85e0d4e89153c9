mod api;
mod attributes;
mod category_ads;
mod health;
mod home;
mod post_ad;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::Html,
    routing::get,
};

use crate::{
    AppState,
    error::Result,
    i18n::Locale,
    middleware::locale_middleware,
    models::Category,
    utils::extractors::{CurrentPath, RequestLocale},
    views::{self, Page, PageContext},
};

pub fn create_router(default_locale: Locale) -> Router<AppState> {
    let mut router = Router::new()
        .merge(page_routes())
        .nest("/api", api_routes())
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .fallback(fallback);

    for locale in Locale::ALL.into_iter().filter(|l| *l != default_locale) {
        router = router.nest(
            &format!("/{}", locale.code()),
            page_routes().layer(middleware::from_fn_with_state(locale, locale_middleware)),
        );
    }

    router
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/ads/{slug}", get(category_ads::category_ads))
        .route("/post-ad", get(post_ad::category_picker))
        .route(
            "/post-ad/attributes",
            get(attributes::show_form).post(attributes::submit_form),
        )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(api::get_category_tree))
        .route("/categories/{id}/fields", get(api::get_category_fields))
}

/// Categories for the navbar. A failed fetch renders the page without them.
fn categories_or_empty(result: Result<Vec<Category>>) -> Vec<Category> {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to load categories: {}", e);
        Vec::new()
    })
}

fn not_found_page(ctx: &PageContext<'_>, categories: &[Category]) -> (StatusCode, Html<String>) {
    let page = views::render_page(
        ctx,
        Page {
            title: ctx.t("errors.notFound"),
            categories,
            content: views::layout::not_found(ctx),
        },
    );
    (StatusCode::NOT_FOUND, page)
}

async fn fallback(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    CurrentPath(path): CurrentPath,
) -> (StatusCode, Html<String>) {
    tracing::debug!("No route for {}", path);
    let categories = categories_or_empty(state.catalog.fetch_categories().await);
    let ctx = state.page_context(locale, &path);
    not_found_page(&ctx, &categories)
}
