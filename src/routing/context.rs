//! Per-request locale binding.

use crate::i18n::Locale;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use tracing::error;

/// The locale resolved for one request, plus the path below the prefix.
///
/// Inserted into the request extensions by the routing middleware and
/// dropped with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub locale: Locale,

    /// Page path without the locale prefix (`""` for the locale root)
    pub remainder: String,
}

impl RequestContext {
    pub fn new(locale: Locale, remainder: impl Into<String>) -> Self {
        Self {
            locale,
            remainder: remainder.into(),
        }
    }

    /// The prefixed path this context was derived from.
    pub fn localized_path(&self) -> String {
        format!("/{}{}", self.locale, self.remainder)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    /// Missing context means a handler was reached without the routing
    /// middleware having bound a locale, which is a wiring bug.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestContext>().cloned().ok_or_else(|| {
            error!("No locale bound for {}", parts.uri.path());
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}
