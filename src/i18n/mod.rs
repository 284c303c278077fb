//! Internationalization (i18n): locales, message catalogues and lookup.
//!
//! Everything here is built once at startup and read-only afterwards.
//!
//! # Architecture
//!
//! - `locale`: the closed set of locales and their static metadata
//! - `registry`: which locales this process serves, and the default one
//! - `messages`: message trees, their sources, and the loaded store
//! - `translator`: key resolution with explicit fallback policies
//! - `validator`: catalogue consistency checks between locales
//! - `metrics`: lookup and redirect counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{DirectorySource, LocaleRegistry, MessageStore, Translator};
//!
//! let registry = Arc::new(LocaleRegistry::default());
//! let store = Arc::new(MessageStore::load(&registry, &DirectorySource::new("locales"))?);
//! let translator = Translator::new(registry, store, Arc::new(I18nMetrics::new()));
//!
//! let title = translator.resolve(Locale::Indonesian, "hero.title")?;
//! ```

mod error;
mod locale;
mod messages;
mod metrics;
mod registry;
mod translator;
mod validator;

pub use error::I18nError;
pub use locale::{Locale, LocaleConfig};
pub use messages::{
    DirectorySource, MessageSource, MessageStore, MessageTree, StaticSource, TranslationKey,
};
pub use metrics::{I18nMetrics, MetricsReport};
pub use registry::LocaleRegistry;
pub use translator::{interpolate, placeholders, FallbackPolicy, Scope, Translator};
pub use validator::{CatalogueValidator, ValidationReport};
