//! Placeholder substitution engine.
//!
//! One shared engine applies the resolved placeholder set to path strings
//! and file content; artifact-specific rules are injected as a strategy so
//! each variant only supplies what actually differs.

use crate::error::Result;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Sentinel tokens (`PH_<NAME>`, stored verbatim) mapped to their resolved
/// values. Built fresh per resource, read-only afterwards.
pub type PlaceholderSet = IndexMap<String, String>;

/// Artifact-specific substitution rules injected into the shared engine.
///
/// Both hooks receive text that already went through the generic
/// substitutions, together with the shared placeholder set.
pub trait CustomSubstitutionRules {
    /// Rules specific to structured (XML) content.
    fn replace_markup(&self, text: &str, placeholders: &PlaceholderSet) -> Result<String>;

    /// Rules specific to free-form text. Path strings are routed through
    /// this hook as well, so variant-resolved tokens apply to path segments
    /// too.
    fn replace_text(&self, text: &str, placeholders: &PlaceholderSet) -> Result<String>;
}

/// Identity rules for artifact types without format-specific substitutions.
pub struct GenericRules;

impl CustomSubstitutionRules for GenericRules {
    fn replace_markup(&self, text: &str, _placeholders: &PlaceholderSet) -> Result<String> {
        Ok(text.to_string())
    }

    fn replace_text(&self, text: &str, _placeholders: &PlaceholderSet) -> Result<String> {
        Ok(text.to_string())
    }
}

/// The shared substitution engine, bound to one resource's placeholder set
/// and one variant's custom rules.
pub struct Replacer {
    placeholders: PlaceholderSet,
    rules: Box<dyn CustomSubstitutionRules>,
}

impl Replacer {
    pub fn new(placeholders: PlaceholderSet, rules: Box<dyn CustomSubstitutionRules>) -> Self {
        Self { placeholders, rules }
    }

    pub fn placeholders(&self) -> &PlaceholderSet {
        &self.placeholders
    }

    /// Substitutes every known path placeholder token present in `path`.
    ///
    /// A path without any known token passes through unchanged, and
    /// re-applying to an already substituted path is a no-op because the
    /// tokens no longer appear.
    pub fn replace_path_placeholders(&self, path: &str) -> Result<String> {
        let substituted = apply(path, &self.placeholders);
        self.rules.replace_text(&substituted, &self.placeholders)
    }

    /// Substitutes placeholders in file content: the shared set first, then
    /// the per-call extras, then the variant's markup and free-form text
    /// rules.
    pub fn replace_text_placeholders(&self, text: &str, extra: &PlaceholderSet) -> Result<String> {
        let mut result = apply(text, &self.placeholders);
        result = apply(&result, extra);
        result = self.rules.replace_markup(&result, &self.placeholders)?;
        self.rules.replace_text(&result, &self.placeholders)
    }

    /// Lists the distinct sentinel tokens still present in `text`, in order
    /// of first appearance. Diagnostic only; the input is not modified.
    pub fn find_text_placeholders(&self, text: &str) -> Vec<String> {
        find_placeholders(text)
    }
}

fn apply(text: &str, placeholders: &PlaceholderSet) -> String {
    let mut result = text.to_string();
    for (token, value) in placeholders {
        result = result.replace(token.as_str(), value);
    }
    result
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"PH_[A-Z][A-Z0-9_]*").unwrap())
}

/// Scans `text` for sentinel tokens, keeping first-appearance order and
/// dropping duplicates.
pub fn find_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    for m in token_regex().find_iter(text) {
        let token = m.as_str().to_string();
        if !found.contains(&token) {
            found.push(token);
        }
    }
    found
}
