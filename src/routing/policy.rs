//! Redirect/rewrite policy: turns a route classification into an action.

use crate::i18n::{Locale, LocaleRegistry};
use crate::routing::matcher::{classify, RouteMatch};
use axum::http::StatusCode;
use std::sync::Arc;

/// Action to take for an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Serve as-is with no locale bound.
    PassThrough,

    /// Serve with `locale` bound; `remainder` is the effective page path.
    Localized { locale: Locale, remainder: String },

    /// Redirect to the default-locale-prefixed equivalent.
    Redirect { location: String, status: StatusCode },
}

/// Decides pass-through vs. redirect for every request.
#[derive(Debug, Clone)]
pub struct LocalePolicy {
    registry: Arc<LocaleRegistry>,
    redirect_status: StatusCode,
}

impl LocalePolicy {
    /// `redirect_status` must be a redirection status (3xx).
    pub fn new(registry: Arc<LocaleRegistry>, redirect_status: StatusCode) -> Self {
        debug_assert!(redirect_status.is_redirection());
        Self {
            registry,
            redirect_status,
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn redirect_status(&self) -> StatusCode {
        self.redirect_status
    }

    /// Decide what to do with `path` and its raw query string.
    ///
    /// Unprefixed paths redirect to `/{default}{path}`, keeping trailing
    /// slashes and the query string exactly as received. The bare root
    /// redirects to `/{default}`.
    pub fn decide(&self, path: &str, query: Option<&str>) -> Decision {
        match classify(path, &self.registry) {
            RouteMatch::Excluded => Decision::PassThrough,
            RouteMatch::Prefixed { locale, remainder } => Decision::Localized {
                locale,
                remainder: remainder.to_string(),
            },
            RouteMatch::Unprefixed { remainder } => Decision::Redirect {
                location: self.redirect_target(remainder, query),
                status: self.redirect_status,
            },
        }
    }

    /// `/{default}{remainder}` with the query string re-attached.
    pub fn redirect_target(&self, remainder: &str, query: Option<&str>) -> String {
        let mut location = format!("/{}{}", self.registry.default_locale(), remainder);
        if let Some(query) = query {
            location.push('?');
            location.push_str(query);
        }
        location
    }
}

/// Parse a configured redirect status. Only 301, 302, 307 and 308 are
/// accepted.
pub fn parse_redirect_status(value: &str) -> Result<StatusCode, String> {
    let code: u16 = value
        .trim()
        .parse()
        .map_err(|_| format!("redirect status '{}' is not a number", value))?;
    match code {
        301 | 302 | 307 | 308 => {
            StatusCode::from_u16(code).map_err(|e| format!("invalid redirect status: {}", e))
        }
        _ => Err(format!(
            "redirect status {} is not one of 301, 302, 307, 308",
            code
        )),
    }
}
