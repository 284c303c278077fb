//! Locale registry: the locales this process serves and its default.
//!
//! The registry is built once from configuration and then shared read-only
//! (behind an `Arc`) by the route matcher, the redirect policy and the
//! translator. There is no global instance.

use crate::i18n::{I18nError, Locale};

/// The set of served locales plus exactly one default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleRegistry {
    /// Build a registry from locale codes and a default code.
    ///
    /// Duplicate codes are ignored; order of first appearance is kept.
    ///
    /// # Errors
    /// * `NoLocales` if `codes` is empty
    /// * `UnknownLocale` if a code (or the default) is not supported
    /// * `DefaultLocaleNotRegistered` if the default is not among `codes`
    pub fn new<S: AsRef<str>>(codes: &[S], default: &str) -> Result<Self, I18nError> {
        if codes.is_empty() {
            return Err(I18nError::NoLocales);
        }

        let mut locales = Vec::with_capacity(codes.len());
        for code in codes {
            let locale: Locale = code.as_ref().parse()?;
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }

        let default_locale: Locale = default.parse()?;
        if !locales.contains(&default_locale) {
            return Err(I18nError::DefaultLocaleNotRegistered(default.to_string()));
        }

        Ok(Self {
            locales,
            default: default_locale,
        })
    }

    /// The locale unprefixed paths are redirected to.
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    /// All registered locales in configuration order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Resolve a path segment to a registered locale.
    ///
    /// Returns `None` for unsupported codes and for supported locales that
    /// this registry does not serve.
    pub fn get(&self, code: &str) -> Option<Locale> {
        Locale::from_code(code).filter(|locale| self.locales.contains(locale))
    }

    pub fn is_registered(&self, locale: Locale) -> bool {
        self.locales.contains(&locale)
    }
}

impl Default for LocaleRegistry {
    /// English and Indonesian, English as default.
    fn default() -> Self {
        Self {
            locales: Locale::ALL.to_vec(),
            default: Locale::English,
        }
    }
}
