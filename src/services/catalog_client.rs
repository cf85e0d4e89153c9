use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::ApiConfig,
    error::{AppError, Result},
    models::{
        Ad, AdsPayload, AdsQuery, CategoriesPayload, Category, CategoryFieldsParams,
        CategoryFieldsResponse,
    },
};

const NO_QUERY: &[(&str, &str)] = &[];

/// Read access to the marketplace catalogue.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>>;

    async fn fetch_category_fields(
        &self,
        params: &CategoryFieldsParams,
    ) -> Result<CategoryFieldsResponse>;

    async fn fetch_ads(&self, query: &AdsQuery) -> Result<Vec<Ad>>;

    fn source_name(&self) -> &'static str;
}

/// `CatalogApi` over the marketplace's public JSON endpoints.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    http: reqwest::Client,
    base_url: String,
}

impl MarketplaceClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn get_json<T, Q>(&self, endpoint: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + Sync + ?Sized,
    {
        let url = self.url(endpoint);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("Request to {} failed: {}", url, e))?
            .error_for_status()
            .inspect_err(|e| tracing::warn!("{} answered with an error: {}", url, e))?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            AppError::InvalidResponse(format!("Failed to parse {} response: {}", endpoint, e))
        })
    }
}

#[async_trait]
impl CatalogApi for MarketplaceClient {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let payload: CategoriesPayload = self.get_json("categories", NO_QUERY).await?;
        let categories = payload.into_categories();
        tracing::info!("Fetched {} root categories", categories.len());
        Ok(categories)
    }

    async fn fetch_category_fields(
        &self,
        params: &CategoryFieldsParams,
    ) -> Result<CategoryFieldsResponse> {
        let raw: Value = self.get_json("categoryFields", params).await?;
        Ok(CategoryFieldsResponse::from_value(raw))
    }

    async fn fetch_ads(&self, query: &AdsQuery) -> Result<Vec<Ad>> {
        let payload: AdsPayload = self.get_json("ads", query).await?;
        Ok(payload.into_ads())
    }

    fn source_name(&self) -> &'static str {
        "marketplace-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoint_without_double_slash() {
        let client = MarketplaceClient::new(&ApiConfig {
            base_url: "https://www.olx.com.lb/api/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(client.url("categories"), "https://www.olx.com.lb/api/categories");
    }
}
