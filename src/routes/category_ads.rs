use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;

use super::{categories_or_empty, not_found_page};
use crate::{
    AppState,
    queries::category_queries,
    services::ads_service,
    utils::extractors::{CurrentPath, RequestLocale},
    views::{self, Page, escape},
};

pub async fn category_ads(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    RequestLocale(locale): RequestLocale,
    CurrentPath(path): CurrentPath,
) -> Response {
    let (categories, ads) = tokio::join!(
        state.catalog.fetch_categories(),
        ads_service::category_ads(state.catalog.as_ref(), &slug)
    );
    let categories = categories_or_empty(categories);
    let ctx = state.page_context(locale, &path);

    let category = category_queries::find_by_slug(&categories, &slug);
    if category.is_none() && ads.is_empty() {
        tracing::info!("Unknown category {}", slug);
        return not_found_page(&ctx, &categories).into_response();
    }

    let trail = category
        .map(|c| category_queries::build_category_path(c, &categories))
        .unwrap_or_default();
    let heading = match category {
        Some(c) => c.display_name(locale).to_string(),
        None => ads
            .first()
            .map(|ad| ad.category.clone())
            .unwrap_or_else(|| slug.clone()),
    };

    let content = views::category_ads::category_ads(&ctx, &heading, &trail, &ads, Utc::now());
    let page: Html<String> = views::render_page(
        &ctx,
        Page {
            title: escape(&heading),
            categories: &categories,
            content,
        },
    );
    page.into_response()
}
