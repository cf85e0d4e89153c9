#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use souk_storefront::{
    AppState,
    app,
    config::{ApiConfig, AppConfig, CorsConfig, ServerConfig, StorefrontConfig},
    error::{AppError, Result},
    models::{Ad, AdsQuery, Category, CategoryFieldsParams, CategoryFieldsResponse},
    services::catalog_client::CatalogApi,
};

pub const BOUNDARY: &str = "souk-test-boundary";

/// Catalogue double. A `None` source fails like an unreachable API.
#[derive(Clone)]
pub struct StubCatalog {
    pub categories: Option<Vec<Category>>,
    pub fields: Option<Value>,
    pub ads: Option<Vec<Ad>>,
}

impl StubCatalog {
    pub fn healthy() -> Self {
        Self {
            categories: Some(categories()),
            fields: Some(car_fields()),
            ads: Some(ads()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            categories: None,
            fields: None,
            ads: None,
        }
    }
}

fn unavailable() -> AppError {
    AppError::InvalidResponse("stub catalogue is offline".to_string())
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.categories.clone().ok_or_else(unavailable)
    }

    async fn fetch_category_fields(
        &self,
        _params: &CategoryFieldsParams,
    ) -> Result<CategoryFieldsResponse> {
        self.fields
            .clone()
            .map(CategoryFieldsResponse::from_value)
            .ok_or_else(unavailable)
    }

    async fn fetch_ads(&self, query: &AdsQuery) -> Result<Vec<Ad>> {
        let ads = self.ads.clone().ok_or_else(unavailable)?;
        Ok(match query.category.as_deref() {
            Some(category) => ads.into_iter().filter(|ad| ad.in_category(category)).collect(),
            None => ads,
        })
    }

    fn source_name(&self) -> &'static str {
        "stub"
    }
}

pub fn categories() -> Vec<Category> {
    serde_json::from_value(json!([
        {
            "id": 1, "name": "Vehicles", "name_l1": "مركبات", "externalID": "1",
            "slug": "vehicles", "level": 0, "parentID": null, "displayPriority": 1,
            "children": [
                {
                    "id": 23, "name": "Cars for Sale", "name_l1": "سيارات للبيع",
                    "externalID": "23", "slug": "cars-for-sale", "level": 1,
                    "parentID": 1, "displayPriority": 1
                },
                {
                    "id": 24, "name": "Motorcycles & ATVs", "externalID": "24",
                    "slug": "motorcycles-atv", "level": 1, "parentID": 1, "displayPriority": 2,
                    "children": [
                        {"id": 25, "name": "ATVs", "externalID": "25", "slug": "atvs", "level": 2, "parentID": 24}
                    ]
                }
            ]
        },
        {
            "id": 2, "name": "Mobile Phones & Accessories", "externalID": "2",
            "slug": "mobile-phones-accessories", "level": 0, "displayPriority": 2
        }
    ]))
    .expect("category fixture")
}

pub fn car_fields() -> Value {
    json!({
        "23": {"flatFields": [
            {
                "id": 100, "name": "Make", "attribute": "make", "categoryID": 23,
                "valueType": "enum", "filterType": "single_choice", "isMandatory": true,
                "displayPriority": 1, "groupIndex": 0,
                "choices": [
                    {"id": 1, "value": "toyota", "label": "Toyota"},
                    {"id": 2, "value": "honda", "label": "Honda"}
                ]
            },
            {
                "id": 101, "name": "Kilometers", "attribute": "mileage", "categoryID": 23,
                "valueType": "integer", "filterType": "range", "isMandatory": false,
                "displayPriority": 2, "groupIndex": 0, "minValue": 0, "maxValue": 1000000
            },
            {
                "id": 102, "name": "Internal code", "attribute": "internal_code", "categoryID": 23,
                "valueType": "string", "filterType": "text", "displayPriority": 3,
                "roles": ["exclude_from_post_an_ad"]
            },
            {
                "id": 103, "name": "Ad title", "attribute": "title", "categoryID": 23,
                "valueType": "string", "filterType": "text", "isMandatory": true,
                "displayPriority": 4, "maxLength": 70
            }
        ]},
        "common_category_fields": {"flatFields": [
            {
                "id": 200, "name": "Title", "attribute": "title",
                "valueType": "string", "filterType": "text", "isMandatory": true,
                "displayPriority": 1, "maxLength": 50
            },
            {
                "id": 201, "name": "Description", "attribute": "description",
                "valueType": "string", "filterType": "text", "isMandatory": true,
                "displayPriority": 2, "minLength": 10, "maxLength": 4096
            }
        ]}
    })
}

pub fn ads() -> Vec<Ad> {
    serde_json::from_value(json!([
        {
            "id": "a1", "title": "Toyota Corolla 2018", "price": 12500, "currency": "USD",
            "location": "Beirut", "category": "Cars for Sale", "categorySlug": "cars-for-sale",
            "images": ["https://img.example/corolla.jpg"], "datePosted": "2024-05-01",
            "metadata": {"km": "85000", "year": "2018", "negotiable": true}
        },
        {
            "id": 7, "title": "iPhone 13", "price": 600,
            "location": "Jounieh", "category": "Mobile Phones", "categorySlug": "mobile-phones",
            "images": [], "datePosted": "2024-05-09"
        }
    ]))
    .expect("ads fixture")
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_body_size: 10 * 1024 * 1024,
        },
        api: ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        storefront: StorefrontConfig::default(),
    }
}

/// The production router around `catalog`.
pub fn build_test_app(catalog: StubCatalog) -> Router {
    let config = test_config();
    let state = AppState::new(Arc::new(catalog), config.storefront.clone()).expect("app state");
    app::build_router(state, &config).expect("router")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let request = Request::post(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("request");

    app.oneshot(request).await.expect("response")
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
    },
}

fn multipart_body(parts: &[Part<'_>]) -> String {
    let mut body = String::new();
    for part in parts {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match part {
            Part::Text(name, value) => {
                body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    name, value
                ));
            }
            Part::File {
                name,
                file_name,
                content_type,
            } => {
                body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\nbinary\r\n",
                    name, file_name, content_type
                ));
            }
        }
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).expect("json body")
}
