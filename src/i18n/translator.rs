//! Translation accessor: resolves dotted keys against the loaded message trees.
//!
//! `resolve` is strict: a missing key is an error, never an empty string.
//! Callers that want to degrade gracefully choose a [`FallbackPolicy`]
//! explicitly through `resolve_with`.

use crate::i18n::{I18nError, I18nMetrics, Locale, LocaleRegistry, MessageStore, TranslationKey};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use tracing::warn;

/// What to do when a key is missing from the requested locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Propagate `MissingTranslationKey`.
    Strict,
    /// Retry in the default locale; propagate if it is missing there too.
    DefaultLocale,
    /// Render `[[locale:key]]` in place of the text.
    Placeholder,
}

impl FallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::Strict => "strict",
            FallbackPolicy::DefaultLocale => "default-locale",
            FallbackPolicy::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(FallbackPolicy::Strict),
            "default-locale" | "default" => Ok(FallbackPolicy::DefaultLocale),
            "placeholder" => Ok(FallbackPolicy::Placeholder),
            other => Err(format!(
                "unknown fallback policy '{}', expected strict, default-locale or placeholder",
                other
            )),
        }
    }
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

/// Names of the `{placeholders}` in a message, in order of appearance.
pub fn placeholders(text: &str) -> Vec<&str> {
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}

/// Substitute `{name}` placeholders. Unknown names are left as written.
pub fn interpolate(text: &str, args: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Resolves translation keys for any registered locale.
///
/// Cheap to clone; the registry, store and metrics are shared.
#[derive(Debug, Clone)]
pub struct Translator {
    registry: Arc<LocaleRegistry>,
    store: Arc<MessageStore>,
    metrics: Arc<I18nMetrics>,
}

impl Translator {
    pub fn new(
        registry: Arc<LocaleRegistry>,
        store: Arc<MessageStore>,
        metrics: Arc<I18nMetrics>,
    ) -> Self {
        Self {
            registry,
            store,
            metrics,
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn metrics(&self) -> &I18nMetrics {
        &self.metrics
    }

    /// Return the exact stored string for `key` in `locale`.
    ///
    /// # Errors
    /// `MissingTranslationKey` when the locale's tree has no such key (or the
    /// locale is not registered).
    pub fn resolve(&self, locale: Locale, key: &str) -> Result<&str, I18nError> {
        self.metrics.record_lookup();
        match self.store.tree(locale).and_then(|tree| tree.get(key)) {
            Some(text) => Ok(text),
            None => {
                self.metrics.record_miss();
                Err(I18nError::MissingTranslationKey {
                    locale,
                    key: key.to_string(),
                })
            }
        }
    }

    /// Resolve `key`, applying `policy` if it is missing.
    pub fn resolve_with(
        &self,
        locale: Locale,
        key: &str,
        policy: FallbackPolicy,
    ) -> Result<Cow<'_, str>, I18nError> {
        let err = match self.resolve(locale, key) {
            Ok(text) => return Ok(Cow::Borrowed(text)),
            Err(err) => err,
        };

        match policy {
            FallbackPolicy::Strict => Err(err),
            FallbackPolicy::DefaultLocale => {
                let default = self.registry.default_locale();
                if default == locale {
                    return Err(err);
                }
                // Counted as a fallback, not as a second lookup
                let Some(text) = self.store.tree(default).and_then(|tree| tree.get(key)) else {
                    return Err(err);
                };
                warn!("Missing '{}' in {}, using {} text", key, locale, default);
                self.metrics.record_fallback();
                Ok(Cow::Borrowed(text))
            }
            FallbackPolicy::Placeholder => {
                warn!("Missing '{}' in {}, rendering placeholder", key, locale);
                self.metrics.record_fallback();
                Ok(Cow::Owned(format!("[[{}:{}]]", locale, key)))
            }
        }
    }

    /// Resolve and interpolate `{name}` placeholders.
    pub fn format(
        &self,
        locale: Locale,
        key: &str,
        args: &[(&str, &str)],
    ) -> Result<String, I18nError> {
        self.format_with(locale, key, args, FallbackPolicy::Strict)
    }

    pub fn format_with(
        &self,
        locale: Locale,
        key: &str,
        args: &[(&str, &str)],
        policy: FallbackPolicy,
    ) -> Result<String, I18nError> {
        let text = self.resolve_with(locale, key, policy)?;
        Ok(interpolate(&text, args))
    }

    /// A handle that resolves keys relative to `namespace`.
    pub fn scope<'a>(
        &'a self,
        locale: Locale,
        namespace: &str,
        policy: FallbackPolicy,
    ) -> Scope<'a> {
        Scope {
            translator: self,
            locale,
            namespace: namespace.to_string(),
            policy,
        }
    }
}

/// Namespaced view of a [`Translator`] for one locale.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    translator: &'a Translator,
    locale: Locale,
    namespace: String,
    policy: FallbackPolicy,
}

impl<'a> Scope<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolve `namespace.key`.
    pub fn t(&self, key: &str) -> Result<Cow<'a, str>, I18nError> {
        let full = TranslationKey::join(&self.namespace, key)?;
        self.translator
            .resolve_with(self.locale, full.as_str(), self.policy)
    }

    /// Resolve `namespace.key` and interpolate placeholders.
    pub fn fmt(&self, key: &str, args: &[(&str, &str)]) -> Result<String, I18nError> {
        let full = TranslationKey::join(&self.namespace, key)?;
        self.translator
            .format_with(self.locale, full.as_str(), args, self.policy)
    }

    /// A nested scope (`services` + `land` = `services.land`).
    pub fn nested(&self, namespace: &str) -> Scope<'a> {
        let namespace = if self.namespace.is_empty() {
            namespace.to_string()
        } else {
            format!("{}.{}", self.namespace, namespace)
        };
        Scope {
            translator: self.translator,
            locale: self.locale,
            namespace,
            policy: self.policy,
        }
    }
}
