use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::i18n::Locale;

/// Marks requests served under a locale prefix such as `/ar` with that locale.
pub async fn locale_middleware(
    State(locale): State<Locale>,
    mut req: Request,
    next: Next,
) -> Response {
    tracing::debug!("Serving {} in {}", req.uri().path(), locale.code());

    req.extensions_mut().insert(locale);

    next.run(req).await
}
