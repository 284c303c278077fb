//! Error taxonomy for locale resolution and message lookup.

use crate::i18n::Locale;
use thiserror::Error;

/// Errors raised by the registry, the message store and the translator.
///
/// Registry and store errors are startup failures: the process refuses to
/// serve. `MissingTranslationKey` is the only variant expected at request
/// time, and callers decide how to recover from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// A registered locale has no backing message data.
    #[error("message data for locale '{locale}' is unavailable: {reason}")]
    LocaleDataUnavailable { locale: Locale, reason: String },

    /// Message data exists but cannot be turned into a message tree.
    #[error("message data for locale '{locale}' is invalid: {reason}")]
    InvalidMessageData { locale: Locale, reason: String },

    /// The key has no entry in the locale's message tree.
    #[error("missing translation for '{key}' in locale '{locale}'")]
    MissingTranslationKey { locale: Locale, key: String },

    /// A locale code that is not part of the supported set.
    #[error("unknown locale code: '{0}'")]
    UnknownLocale(String),

    /// The configured default is not among the registered locales.
    #[error("default locale '{0}' is not registered")]
    DefaultLocaleNotRegistered(String),

    /// The registry was configured with an empty locale list.
    #[error("at least one locale must be registered")]
    NoLocales,

    /// A translation key that is not a well-formed dotted path.
    #[error("invalid translation key: '{0}'")]
    InvalidKey(String),
}

impl I18nError {
    /// Whether the error should stop the process at startup.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            I18nError::MissingTranslationKey { .. } | I18nError::InvalidKey(_)
        )
    }
}
