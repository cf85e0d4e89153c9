use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    config::{AppConfig, StorefrontConfig},
    error::{AppError, Result},
    i18n::{Locale, Translations},
    routes,
    services::catalog_client::{CatalogApi, MarketplaceClient},
    views::PageContext,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogApi>,
    pub translations: Arc<Translations>,
    pub settings: Arc<StorefrontConfig>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogApi>, settings: StorefrontConfig) -> Result<Self> {
        Ok(Self {
            catalog,
            translations: Arc::new(Translations::load()?),
            settings: Arc::new(settings),
        })
    }

    pub fn page_context<'a>(&'a self, locale: Locale, current_path: &'a str) -> PageContext<'a> {
        PageContext {
            locale,
            default_locale: self.settings.default_locale,
            i18n: &self.translations,
            site_name: &self.settings.site_name,
            current_path,
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let client = MarketplaceClient::new(&config.api)?;
    tracing::info!("Using marketplace API at {}", config.api.base_url);

    let state = AppState::new(Arc::new(client), config.storefront.clone())?;
    build_router(state, config)
}

/// Router with the production middleware stack around any catalogue source.
pub fn build_router(state: AppState, config: &AppConfig) -> Result<Router> {
    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = routes::create_router(state.settings.default_locale)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    Ok(app)
}
