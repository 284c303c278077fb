//! Locale type: the closed set of languages the site is published in.
//!
//! Each locale carries static metadata (names, Open Graph locale). Which of
//! them are actually served, and which one is the default, is decided by the
//! [`LocaleRegistry`](crate::i18n::LocaleRegistry).

use crate::i18n::I18nError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Static metadata for a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// ISO 639-1 code used as the URL prefix (e.g., "en", "id")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Indonesian")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Bahasa Indonesia")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "en_US", "id_ID")
    pub og_locale: &'static str,
}

const ENGLISH: LocaleConfig = LocaleConfig {
    code: "en",
    name: "English",
    native_name: "English",
    og_locale: "en_US",
};

const INDONESIAN: LocaleConfig = LocaleConfig {
    code: "id",
    name: "Indonesian",
    native_name: "Bahasa Indonesia",
    og_locale: "id_ID",
};

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum Locale {
    English,
    Indonesian,
}

impl Locale {
    /// Every locale the site knows about, in display order.
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Indonesian];

    /// Look up a locale by its exact code.
    ///
    /// Matching is case-sensitive: `"EN"` is not a locale code.
    ///
    /// # Returns
    /// * `Some(Locale)` if the code names a supported locale
    /// * `None` otherwise
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Get the static metadata for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        match self {
            Locale::English => &ENGLISH,
            Locale::Indonesian => &INDONESIAN,
        }
    }

    /// The URL prefix / file stem for this locale (e.g., "en").
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
    }
}

impl From<Locale> for &'static str {
    fn from(locale: Locale) -> Self {
        locale.code()
    }
}
