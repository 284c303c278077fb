//! Message trees and the store that holds one per registered locale.
//!
//! Message data is authored as nested JSON objects (one file per locale) and
//! flattened into dotted keys at load time:
//!
//! ```json
//! { "hero": { "title": "Building Dreams in Paradise" } }
//! ```
//!
//! becomes `hero.title -> "Building Dreams in Paradise"`.

use crate::i18n::{I18nError, Locale, LocaleRegistry};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==================== Keys ====================

/// A validated dotted translation key (e.g., `hero.title`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TranslationKey(String);

impl TranslationKey {
    /// Validate a dotted key.
    ///
    /// Every segment must be non-empty and made of ASCII alphanumerics,
    /// `_` or `-`.
    pub fn parse(key: &str) -> Result<Self, I18nError> {
        if is_valid_key(key) {
            Ok(Self(key.to_string()))
        } else {
            Err(I18nError::InvalidKey(key.to_string()))
        }
    }

    /// Join a namespace and a relative key (`"hero"` + `"title"`).
    pub fn join(namespace: &str, key: &str) -> Result<Self, I18nError> {
        if namespace.is_empty() {
            return Self::parse(key);
        }
        Self::parse(&format!("{}.{}", namespace, key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first segment of the key (`hero` for `hero.title`).
    pub fn namespace(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

// ==================== Message Tree ====================

/// All translated strings for one locale, keyed by dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTree {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl MessageTree {
    /// Flatten a nested JSON object into a message tree.
    ///
    /// # Errors
    /// `InvalidMessageData` if the root is not an object, if a leaf is not a
    /// string, or if an object key is not a valid key segment.
    pub fn from_json(locale: Locale, value: &Value) -> Result<Self, I18nError> {
        let Value::Object(root) = value else {
            return Err(I18nError::InvalidMessageData {
                locale,
                reason: "top-level value must be an object".to_string(),
            });
        };

        let mut entries = HashMap::new();
        let mut stack: Vec<(String, &Value)> = root
            .iter()
            .map(|(key, value)| (key.clone(), value))
            .collect();

        while let Some((path, value)) = stack.pop() {
            if !is_valid_key(&path) {
                return Err(I18nError::InvalidMessageData {
                    locale,
                    reason: format!("invalid key '{}'", path),
                });
            }
            match value {
                Value::String(text) => {
                    entries.insert(path, text.clone());
                }
                Value::Object(children) => {
                    for (key, child) in children {
                        stack.push((format!("{}.{}", path, key), child));
                    }
                }
                other => {
                    return Err(I18nError::InvalidMessageData {
                        locale,
                        reason: format!("'{}' must be a string or object, found {}", path, kind(other)),
                    });
                }
            }
        }

        Ok(Self { locale, entries })
    }

    /// Parse JSON text and flatten it.
    pub fn from_json_str(locale: Locale, text: &str) -> Result<Self, I18nError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| I18nError::InvalidMessageData {
                locale,
                reason: e.to_string(),
            })?;
        Self::from_json(locale, &value)
    }

    /// Build a tree directly from flat `(key, text)` pairs.
    pub fn from_pairs<I, K, V>(locale: Locale, pairs: I) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (key, text) in pairs {
            let key = key.into();
            if !is_valid_key(&key) {
                return Err(I18nError::InvalidMessageData {
                    locale,
                    reason: format!("invalid key '{}'", key),
                });
            }
            entries.insert(key, text.into());
        }
        Ok(Self { locale, entries })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Exact stored string for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<BTreeMap<_, _>>()
            .into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ==================== Sources ====================

/// Backing data for message trees.
pub trait MessageSource {
    /// Load the message tree for `locale`.
    ///
    /// Implementations return `LocaleDataUnavailable` when no data exists
    /// for the locale.
    fn load(&self, locale: Locale) -> Result<MessageTree, I18nError>;
}

/// Reads `{dir}/{code}.json` for each locale.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.code()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MessageSource for DirectorySource {
    fn load(&self, locale: Locale) -> Result<MessageTree, I18nError> {
        let path = self.path_for(locale);
        debug!("Reading messages for {} from {}", locale, path.display());

        let text =
            std::fs::read_to_string(&path).map_err(|e| I18nError::LocaleDataUnavailable {
                locale,
                reason: format!("{}: {}", path.display(), e),
            })?;

        MessageTree::from_json_str(locale, &text)
    }
}

/// In-memory JSON documents keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<Locale, Value>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: Locale, document: Value) -> Self {
        self.documents.insert(locale, document);
        self
    }
}

impl MessageSource for StaticSource {
    fn load(&self, locale: Locale) -> Result<MessageTree, I18nError> {
        let document = self
            .documents
            .get(&locale)
            .ok_or_else(|| I18nError::LocaleDataUnavailable {
                locale,
                reason: "no document registered".to_string(),
            })?;
        MessageTree::from_json(locale, document)
    }
}

// ==================== Store ====================

/// One loaded message tree per registered locale.
///
/// A store only exists in the loaded state: construction loads every
/// registered locale or fails.
#[derive(Debug, Clone)]
pub struct MessageStore {
    trees: HashMap<Locale, MessageTree>,
}

impl MessageStore {
    /// Load the tree of every locale in `registry` from `source`.
    ///
    /// # Errors
    /// The first `LocaleDataUnavailable` or `InvalidMessageData` encountered.
    /// Either one is a configuration error; the caller should not start.
    pub fn load(registry: &LocaleRegistry, source: &dyn MessageSource) -> Result<Self, I18nError> {
        let mut trees = HashMap::with_capacity(registry.locales().len());
        for &locale in registry.locales() {
            let tree = source.load(locale)?;
            info!("Loaded {} messages for locale {}", tree.len(), locale);
            trees.insert(locale, tree);
        }
        Ok(Self { trees })
    }

    /// Tree for `locale`; `None` when the locale was not registered.
    pub fn tree(&self, locale: Locale) -> Option<&MessageTree> {
        self.trees.get(&locale)
    }

    /// Message counts per locale, sorted by locale.
    pub fn counts(&self) -> BTreeMap<Locale, usize> {
        self.trees
            .iter()
            .map(|(locale, tree)| (*locale, tree.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Key Tests ====================

    #[test]
    fn test_key_parse_valid() {
        let key = TranslationKey::parse("services.villa-management.title").unwrap();
        assert_eq!(key.as_str(), "services.villa-management.title");
        assert_eq!(key.namespace(), "services");
    }

    #[test]
    fn test_key_parse_invalid() {
        for bad in ["", ".", "hero.", ".hero", "hero..title", "hero title", "héro"] {
            assert_eq!(
                TranslationKey::parse(bad),
                Err(I18nError::InvalidKey(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_key_join() {
        assert_eq!(TranslationKey::join("hero", "title").unwrap().as_str(), "hero.title");
        assert_eq!(TranslationKey::join("", "title").unwrap().as_str(), "title");
        assert!(TranslationKey::join("hero", "").is_err());
    }

    // ==================== Tree Tests ====================

    #[test]
    fn test_from_json_flattens_nested_objects() {
        let tree = MessageTree::from_json(
            Locale::English,
            &json!({
                "hero": { "title": "Building Dreams", "cta": "Start" },
                "about": { "stats": { "years": "Years" } },
                "top": "Top"
            }),
        )
        .unwrap();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get("hero.title"), Some("Building Dreams"));
        assert_eq!(tree.get("about.stats.years"), Some("Years"));
        assert_eq!(tree.get("top"), Some("Top"));
        assert_eq!(tree.get("hero"), None);
        assert_eq!(tree.locale(), Locale::English);
    }

    #[test]
    fn test_from_json_keeps_text_verbatim() {
        let text = "  Membangun Impian di Surga  {year} <b>&</b> ";
        let tree = MessageTree::from_json(Locale::Indonesian, &json!({ "hero": { "title": text } }))
            .unwrap();
        assert_eq!(tree.get("hero.title"), Some(text));
    }

    #[test]
    fn test_from_json_rejects_non_string_leaf() {
        let err = MessageTree::from_json(Locale::English, &json!({ "stats": { "years": 15 } }))
            .unwrap_err();
        match err {
            I18nError::InvalidMessageData { locale, reason } => {
                assert_eq!(locale, Locale::English);
                assert!(reason.contains("stats.years"));
                assert!(reason.contains("number"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_array_root() {
        let err = MessageTree::from_json(Locale::English, &json!(["a"])).unwrap_err();
        assert!(matches!(err, I18nError::InvalidMessageData { .. }));
    }

    #[test]
    fn test_from_json_rejects_dotted_object_key() {
        let err = MessageTree::from_json(Locale::English, &json!({ "hero..x": "a" })).unwrap_err();
        assert!(matches!(err, I18nError::InvalidMessageData { .. }));
    }

    #[test]
    fn test_from_json_str_reports_syntax_errors() {
        let err = MessageTree::from_json_str(Locale::Indonesian, "{ not json").unwrap_err();
        assert!(matches!(
            err,
            I18nError::InvalidMessageData { locale: Locale::Indonesian, .. }
        ));
    }

    #[test]
    fn test_keys_sorted() {
        let tree =
            MessageTree::from_pairs(Locale::English, [("b.x", "1"), ("a.y", "2"), ("a.x", "3")])
                .unwrap();
        assert_eq!(tree.keys(), vec!["a.x", "a.y", "b.x"]);
        let collected: Vec<_> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(collected, vec!["a.x", "a.y", "b.x"]);
    }

    // ==================== Source Tests ====================

    #[test]
    fn test_directory_source_reads_locale_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("id.json"), r#"{"hero":{"title":"Halo"}}"#).unwrap();

        let source = DirectorySource::new(dir.path());
        let tree = source.load(Locale::Indonesian).unwrap();
        assert_eq!(tree.get("hero.title"), Some("Halo"));
    }

    #[test]
    fn test_directory_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source.load(Locale::English).unwrap_err();
        match err {
            I18nError::LocaleDataUnavailable { locale, reason } => {
                assert_eq!(locale, Locale::English);
                assert!(reason.contains("en.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_static_source_missing_locale() {
        let source = StaticSource::new().with(Locale::English, json!({}));
        assert!(source.load(Locale::English).unwrap().is_empty());
        assert!(matches!(
            source.load(Locale::Indonesian),
            Err(I18nError::LocaleDataUnavailable { .. })
        ));
    }

    // ==================== Store Tests ====================

    #[test]
    fn test_store_loads_every_registered_locale() {
        let source = StaticSource::new()
            .with(Locale::English, json!({ "a": "A" }))
            .with(Locale::Indonesian, json!({ "a": "A-id", "b": "B-id" }));
        let store = MessageStore::load(&LocaleRegistry::default(), &source).unwrap();

        assert_eq!(store.tree(Locale::English).unwrap().get("a"), Some("A"));
        assert_eq!(store.tree(Locale::Indonesian).unwrap().len(), 2);
        assert_eq!(store.counts().get(&Locale::Indonesian), Some(&2));
    }

    #[test]
    fn test_store_fails_when_registered_locale_has_no_data() {
        let source = StaticSource::new().with(Locale::English, json!({ "a": "A" }));
        let err = MessageStore::load(&LocaleRegistry::default(), &source).unwrap_err();
        assert!(matches!(
            err,
            I18nError::LocaleDataUnavailable { locale: Locale::Indonesian, .. }
        ));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_store_ignores_unregistered_locales() {
        let registry = LocaleRegistry::new(&["en"], "en").unwrap();
        let source = StaticSource::new().with(Locale::English, json!({ "a": "A" }));
        let store = MessageStore::load(&registry, &source).unwrap();
        assert!(store.tree(Locale::Indonesian).is_none());
    }
}
