use axum::{extract::State, response::Html};
use chrono::Utc;

use super::categories_or_empty;
use crate::{
    AppState,
    models::AdsQuery,
    queries::ads_queries,
    services::ads_service,
    utils::extractors::{CurrentPath, RequestLocale},
    views::{self, Page},
};

pub async fn home(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    CurrentPath(path): CurrentPath,
) -> Html<String> {
    let query = AdsQuery::default();
    let (categories, ads) = tokio::join!(
        state.catalog.fetch_categories(),
        ads_service::fetch_ads_or_mock(state.catalog.as_ref(), &query)
    );
    let categories = categories_or_empty(categories);
    let sections = ads_queries::group_for_home(&ads, state.settings.ads_per_section);

    let ctx = state.page_context(locale, &path);
    let content = views::home::home(&ctx, &categories, &sections, Utc::now());

    views::render_page(
        &ctx,
        Page {
            title: String::new(),
            categories: &categories,
            content,
        },
    )
}
