//! Canonical and alternate-locale link metadata.

use crate::i18n::{Locale, LocaleRegistry};

/// Link metadata for one page in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// Absolute canonical URL (`{base}/{locale}{path}`)
    pub canonical: String,

    /// One site-relative URL per registered locale (`/{code}{path}`)
    pub alternates: Vec<(Locale, String)>,

    /// Open Graph locale of the page (`en_US`)
    pub og_locale: &'static str,

    /// Open Graph locales of the other translations
    pub og_alternates: Vec<&'static str>,
}

impl PageLinks {
    /// Build links for `path` (a locale-free page path, `""` for home).
    pub fn new(base_url: &str, registry: &LocaleRegistry, locale: Locale, path: &str) -> Self {
        let alternates = registry
            .locales()
            .iter()
            .map(|&alt| (alt, localized_path(alt, path)))
            .collect();

        let og_alternates = registry
            .locales()
            .iter()
            .filter(|&&alt| alt != locale)
            .map(|alt| alt.og_locale())
            .collect();

        Self {
            canonical: absolute_url(base_url, locale, path),
            alternates,
            og_locale: locale.og_locale(),
            og_alternates,
        }
    }

    /// The alternate URL for `locale`, used by the language switcher.
    pub fn alternate(&self, locale: Locale) -> Option<&str> {
        self.alternates
            .iter()
            .find(|(alt, _)| *alt == locale)
            .map(|(_, url)| url.as_str())
    }
}

/// `/{locale}{path}`
pub fn localized_path(locale: Locale, path: &str) -> String {
    format!("/{}{}", locale, path)
}

/// `{base_url}/{locale}{path}`; `base_url` must not end with `/`.
pub fn absolute_url(base_url: &str, locale: Locale, path: &str) -> String {
    format!("{}{}", base_url, localized_path(locale, path))
}
