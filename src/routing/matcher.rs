//! Route matcher: classifies a request path by its locale prefix.

use crate::i18n::{Locale, LocaleRegistry};

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// Asset or internal path; no locale processing.
    Excluded,

    /// First segment is a registered locale code.
    Prefixed { locale: Locale, remainder: &'a str },

    /// Anything else. The bare root yields an empty remainder.
    Unprefixed { remainder: &'a str },
}

/// Whether `path` bypasses locale handling.
///
/// Any path containing a `.` is treated as a file (`/logo.png`,
/// `/sitemap.xml`, `/en/brochure.pdf`). A first segment starting with `_`
/// marks framework internals (`/_health`, `/_next/...`).
pub fn is_excluded(path: &str) -> bool {
    path.contains('.') || first_segment(path).starts_with('_')
}

fn first_segment(path: &str) -> &str {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    trimmed.split('/').next().unwrap_or("")
}

/// Classify `path` (without query string) against `registry`.
///
/// Total over all inputs. Locale codes match whole segments exactly, so
/// `/enterprise` and `/EN/about` are both unprefixed. A page segment that
/// collides with a locale code is always read as the locale.
pub fn classify<'a>(path: &'a str, registry: &LocaleRegistry) -> RouteMatch<'a> {
    if is_excluded(path) {
        return RouteMatch::Excluded;
    }

    if path.is_empty() || path == "/" {
        return RouteMatch::Unprefixed { remainder: "" };
    }

    if let Some(rest) = path.strip_prefix('/') {
        let (segment, remainder) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        if let Some(locale) = registry.get(segment) {
            return RouteMatch::Prefixed { locale, remainder };
        }
    }

    RouteMatch::Unprefixed { remainder: path }
}
