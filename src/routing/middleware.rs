//! axum middleware applying the locale policy to every request.

use crate::i18n::I18nMetrics;
use crate::routing::{Decision, LocalePolicy, RequestContext};
use axum::extract::{Request, State};
use axum::http::header::LOCATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::debug;

/// State for [`route_locale`].
#[derive(Debug, Clone)]
pub struct LocaleRouting {
    pub policy: Arc<LocalePolicy>,
    pub metrics: Arc<I18nMetrics>,
}

/// Redirect unprefixed paths, bind the locale for prefixed ones, and leave
/// excluded paths untouched.
///
/// Install with `axum::middleware::from_fn_with_state` after the routes and
/// the fallback have been added, so that it also runs for the fallback.
pub async fn route_locale(
    State(routing): State<LocaleRouting>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = routing
        .policy
        .decide(request.uri().path(), request.uri().query());

    match decision {
        Decision::PassThrough => next.run(request).await,
        Decision::Localized { locale, remainder } => {
            request
                .extensions_mut()
                .insert(RequestContext::new(locale, remainder));
            next.run(request).await
        }
        Decision::Redirect { location, status } => {
            debug!("Redirecting {} to {}", request.uri(), location);
            routing.metrics.record_redirect();
            (status, [(LOCATION, location)]).into_response()
        }
    }
}
