//! Message catalogue validation.
//!
//! Compares a locale's message tree against the default locale's tree. The
//! default tree is the reference: every key the site renders must exist
//! there, and every other locale should mirror it.

use crate::i18n::translator::placeholders;
use crate::i18n::MessageTree;

/// Validation report containing errors and warnings about a message tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that will surface as missing translations at render time
    pub errors: Vec<String>,

    /// Non-critical issues (extra keys, empty text, placeholder drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for message catalogues.
pub struct CatalogueValidator;

impl CatalogueValidator {
    /// Validate `candidate` against the `reference` (default-locale) tree.
    ///
    /// This function checks that:
    /// - every reference key exists in the candidate (error)
    /// - the candidate has no keys the reference lacks (warning)
    /// - no candidate text is blank (warning)
    /// - `{placeholders}` match between both versions of a message (warning)
    pub fn validate(reference: &MessageTree, candidate: &MessageTree) -> ValidationReport {
        let mut report = ValidationReport::new();
        let locale = candidate.locale();

        for (key, reference_text) in reference.iter() {
            let Some(text) = candidate.get(key) else {
                report
                    .errors
                    .push(format!("Missing key '{}' in locale {}", key, locale));
                continue;
            };

            let mut expected = placeholders(reference_text);
            let mut found = placeholders(text);
            expected.sort_unstable();
            found.sort_unstable();
            if expected != found {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}': {} has {:?}, {} has {:?}",
                    key,
                    reference.locale(),
                    expected,
                    locale,
                    found
                ));
            }
        }

        for (key, text) in candidate.iter() {
            if !reference.contains(key) {
                report.warnings.push(format!(
                    "Extra key '{}' in locale {} is not in {}",
                    key,
                    locale,
                    reference.locale()
                ));
            }
            if text.trim().is_empty() {
                report
                    .warnings
                    .push(format!("Empty text for '{}' in locale {}", key, locale));
            }
        }

        report
    }

    /// Keys from `required` that `tree` does not contain.
    pub fn missing_keys<'a, I>(tree: &MessageTree, required: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        required.into_iter().filter(|key| !tree.contains(key)).collect()
    }
}
