use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    services::navigator::{NavEvent, Navigator},
    utils::extractors::{CurrentPath, RequestLocale, parse_id_list},
    views::{self, Page},
};

/// Picker state carried in the link of every category tile.
#[derive(Debug, Default, Deserialize)]
pub struct PickerParams {
    pub path: Option<String>,
    pub level: Option<usize>,
    pub pick: Option<i64>,
}

pub async fn category_picker(
    State(state): State<AppState>,
    Query(params): Query<PickerParams>,
    RequestLocale(locale): RequestLocale,
    CurrentPath(path): CurrentPath,
) -> Response {
    let ctx = state.page_context(locale, &path);

    let categories = match state.catalog.fetch_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::error!("Failed to load categories for the picker: {}", e);
            let page = views::render_page(
                &ctx,
                Page {
                    title: ctx.t("postAd.title"),
                    categories: &[],
                    content: views::post_ad::load_error(&ctx, e.user_message()),
                },
            );
            return (StatusCode::BAD_GATEWAY, page).into_response();
        }
    };

    let path_ids = params.path.as_deref().map(parse_id_list).unwrap_or_default();
    let mut navigator = Navigator::restore(&categories, &path_ids);
    if let Some(category_id) = params.pick {
        navigator.apply(NavEvent::Pick {
            level: params.level.unwrap_or(0),
            category_id,
        });
    }

    if let Some(selected) = navigator.selection() {
        let trail: Vec<&str> = navigator.trail().iter().map(|c| c.name.as_str()).collect();
        tracing::info!(
            "Category {} selected for a new ad ({})",
            selected.id,
            trail.join(" > ")
        );
        let target = locale.href(
            state.settings.default_locale,
            &format!("/post-ad/attributes?categoryId={}", selected.id),
        );
        return Redirect::to(&target).into_response();
    }

    views::render_page(
        &ctx,
        Page {
            title: ctx.t("postAd.title"),
            categories: &categories,
            content: views::post_ad::category_picker(&ctx, &navigator),
        },
    )
    .into_response()
}
