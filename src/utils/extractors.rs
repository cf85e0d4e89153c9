use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};

use crate::{
    AppState,
    error::AppError,
    i18n::{Locale, split_locale_prefix},
};

/// Locale picked by the URL prefix middleware, or the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .extensions
            .get::<Locale>()
            .copied()
            .unwrap_or(state.settings.default_locale);

        Ok(RequestLocale(locale))
    }
}

/// Path and query of the request without its locale prefix, used for the
/// language switcher and retry links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPath(pub String);

impl<S: Send + Sync> FromRequestParts<S> for CurrentPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers see a stripped URI; the original keeps the prefix.
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or(&parts.uri);

        let (_, path) = split_locale_prefix(uri.path());
        let current = match uri.query() {
            Some(query) => format!("{}?{}", path, query),
            None => path.to_string(),
        };

        Ok(CurrentPath(current))
    }
}

/// Comma-separated id list such as `12,40,41`. Unparsable entries end the list.
pub fn parse_id_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map_while(|part| part.parse().ok())
        .collect()
}
