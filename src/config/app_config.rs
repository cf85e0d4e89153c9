use crate::error::{AppError, Result};
use crate::i18n::Locale;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub cors: CorsConfig,
    pub storefront: StorefrontConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub default_locale: Locale,
    pub max_images: usize,
    pub ads_per_section: usize,
    pub site_name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            max_images: 15,
            ads_per_section: 4,
            site_name: "OLX Lebanon".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", name)))
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let default_locale = env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", "3000")?,
                max_body_size: parse_var("MAX_BODY_SIZE", "52428800")?,
            },
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "https://www.olx.com.lb/api".to_string()),
                timeout_secs: parse_var("API_TIMEOUT_SECS", "15")?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            storefront: StorefrontConfig {
                default_locale: Locale::from_code(&default_locale).ok_or_else(|| {
                    AppError::ConfigError(format!("Unsupported DEFAULT_LOCALE {}", default_locale))
                })?,
                max_images: parse_var("MAX_IMAGES", "15")?,
                ads_per_section: parse_var("ADS_PER_SECTION", "4")?,
                site_name: env::var("SITE_NAME").unwrap_or_else(|_| "OLX Lebanon".to_string()),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
