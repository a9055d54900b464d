//! Predicate classifier: free-text predicate → weight class.
//!
//! Case-insensitive substring matching against four keyword tables, tested in
//! priority order Negative > High > Medium > Low. No match is `Unknown`.

use repute_core::config::ExtraKeywords;
use repute_core::models::PredicateWeightClass;

use crate::keywords;

/// Classify with the built-in tables.
pub fn classify(predicate: &str) -> PredicateWeightClass {
    let text = predicate.to_lowercase();
    PredicateWeightClass::PRIORITY
        .into_iter()
        .find(|class| contains_any(&text, builtin_table(*class)))
        .unwrap_or(PredicateWeightClass::Unknown)
}

/// Whether the predicate belongs to the vouch family.
pub fn is_vouch_predicate(predicate: &str) -> bool {
    contains_any(&predicate.to_lowercase(), keywords::VOUCH_FAMILY)
}

/// Whether the predicate indicates verified-builder status.
pub fn is_builder_predicate(predicate: &str) -> bool {
    contains_any(&predicate.to_lowercase(), keywords::BUILDER_FAMILY)
}

fn builtin_table(class: PredicateWeightClass) -> &'static [&'static str] {
    match class {
        PredicateWeightClass::Negative => keywords::NEGATIVE,
        PredicateWeightClass::High => keywords::HIGH,
        PredicateWeightClass::Medium => keywords::MEDIUM,
        PredicateWeightClass::Low => keywords::LOW,
        PredicateWeightClass::Unknown => &[],
    }
}

fn contains_any<S: AsRef<str>>(text: &str, table: &[S]) -> bool {
    table.iter().any(|k| matches_keyword(text, k.as_ref()))
}

/// Substring match, or whole-word match for keywords shorter than
/// [`keywords::MIN_SUBSTRING_LEN`].
fn matches_keyword(text: &str, keyword: &str) -> bool {
    if keyword.chars().count() >= keywords::MIN_SUBSTRING_LEN {
        return text.contains(keyword);
    }
    text.match_indices(keyword).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + keyword.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Classifier with the built-in tables plus configured extras.
#[derive(Debug, Clone)]
pub struct Classifier {
    negative: Vec<String>,
    high: Vec<String>,
    medium: Vec<String>,
    low: Vec<String>,
}

impl Classifier {
    /// Classifier using only the built-in tables.
    pub fn new() -> Self {
        Self {
            negative: owned(keywords::NEGATIVE),
            high: owned(keywords::HIGH),
            medium: owned(keywords::MEDIUM),
            low: owned(keywords::LOW),
        }
    }

    /// Built-in tables extended with `extra`. Blank keywords are ignored, since
    /// an empty substring would match every predicate.
    pub fn with_extra_keywords(extra: &ExtraKeywords) -> Self {
        let mut classifier = Self::new();
        extend(&mut classifier.negative, &extra.negative);
        extend(&mut classifier.high, &extra.high);
        extend(&mut classifier.medium, &extra.medium);
        extend(&mut classifier.low, &extra.low);
        classifier
    }

    pub fn classify(&self, predicate: &str) -> PredicateWeightClass {
        let text = predicate.to_lowercase();
        PredicateWeightClass::PRIORITY
            .into_iter()
            .find(|class| contains_any(&text, self.keywords(*class)))
            .unwrap_or(PredicateWeightClass::Unknown)
    }

    /// Keywords currently mapped to `class`.
    pub fn keywords(&self, class: PredicateWeightClass) -> &[String] {
        match class {
            PredicateWeightClass::Negative => &self.negative,
            PredicateWeightClass::High => &self.high,
            PredicateWeightClass::Medium => &self.medium,
            PredicateWeightClass::Low => &self.low,
            PredicateWeightClass::Unknown => &[],
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|k| k.to_string()).collect()
}

fn extend(table: &mut Vec<String>, extra: &[String]) {
    for keyword in extra {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !table.contains(&keyword) {
            table.push(keyword);
        }
    }
}
