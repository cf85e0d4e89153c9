use chrono::{Duration, Utc};
use serde_json::Value;

use crate::{
    error::{AppError, Result},
    models::{Ad, AdsQuery},
    queries::ads_queries,
    services::catalog_client::CatalogApi,
};

const MOCK_ADS: &str = include_str!("../../data/mock_ads.json");

/// Ads from the marketplace, or the built-in catalogue when the API fails or
/// answers with nothing usable.
pub async fn fetch_ads_or_mock(catalog: &dyn CatalogApi, query: &AdsQuery) -> Vec<Ad> {
    match catalog.fetch_ads(query).await {
        Ok(ads) => return ads,
        Err(e) => tracing::warn!(
            "Failed to fetch ads from {}, using mock data: {}",
            catalog.source_name(),
            e
        ),
    }

    match mock_ads() {
        Ok(ads) => match query.category.as_deref() {
            Some(category) => ads
                .into_iter()
                .filter(|ad| ad.in_category(category))
                .collect(),
            None => ads,
        },
        Err(e) => {
            tracing::error!("Mock ads are unusable: {}", e);
            Vec::new()
        }
    }
}

/// The built-in catalogue. Posting dates are derived from each entry's
/// `ageDays` so the cards always show recent ads.
pub fn mock_ads() -> Result<Vec<Ad>> {
    let entries: Vec<Value> = serde_json::from_str(MOCK_ADS)?;
    let today = Utc::now();

    entries
        .into_iter()
        .map(|mut entry| {
            let age_days = entry
                .as_object_mut()
                .and_then(|obj| obj.remove("ageDays"))
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let posted = today - Duration::seconds((age_days * 86_400.0) as i64);
            entry["datePosted"] = Value::String(posted.format("%Y-%m-%d").to_string());

            serde_json::from_value::<Ad>(entry).map_err(AppError::from)
        })
        .collect()
}

/// Ads for one category page.
pub async fn category_ads(catalog: &dyn CatalogApi, category: &str) -> Vec<Ad> {
    let query = AdsQuery {
        category: Some(category.to_string()),
        ..Default::default()
    };
    let ads = fetch_ads_or_mock(catalog, &query).await;

    // The API may ignore the category filter.
    ads_queries::filter_by_category(&ads, category)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalogue_parses() {
        let ads = mock_ads().unwrap();
        assert_eq!(ads.len(), 28);
        assert!(ads.iter().all(|ad| ad.date_posted.is_some()));
        assert!(ads.iter().all(|ad| ad.category_slug.is_some()));
    }

    #[test]
    fn mock_catalogue_covers_home_sections() {
        let ads = mock_ads().unwrap();
        for section in ads_queries::HOME_SECTION_ORDER {
            assert!(
                !ads_queries::filter_by_category(&ads, section).is_empty(),
                "no mock ads for {}",
                section
            );
        }
    }
}
