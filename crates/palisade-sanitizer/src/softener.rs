//! Imperative softening - rewrites absolutist advice into hedged claims

use regex::Regex;

/// A single phrase-level rewrite rule
struct SoftenRule {
    pattern: Regex,
    replacement: &'static str,
}

/// Rewrites absolutist advice phrasing into hedged claim phrasing
///
/// Rules are applied in table order, each as a global case-insensitive
/// replace over the current string state. A later rule can re-match text an
/// earlier rule produced when its pattern textually reappears; that is the
/// documented sequential-replace semantics, not a defect.
pub struct ImperativeSoftener {
    rules: Vec<SoftenRule>,
}

impl ImperativeSoftener {
    /// Create a softener with the built-in rewrite table
    pub fn new() -> Self {
        let table: [(&str, &'static str); 6] = [
            (r"(?i)\byou should (always|never)\b", "some suggest to $1"),
            (r"(?i)\byou must (always|never)\b", "it is claimed you should $1"),
            (r"(?i)\balways book\b", "consider booking"),
            (r"(?i)\bnever book\b", "some advise against booking"),
            (r"(?i)\bthe best way is\b", "one approach is"),
            (r"(?i)\byou have to\b", "you might want to"),
        ];

        let rules = table
            .into_iter()
            .map(|(pattern, replacement)| SoftenRule {
                pattern: Regex::new(pattern).expect("built-in rewrite rule must compile"),
                replacement,
            })
            .collect();

        Self { rules }
    }

    /// Apply every rewrite rule in table order
    pub fn soften(&self, content: &str) -> String {
        let mut result = content.to_string();
        for rule in &self.rules {
            result = rule
                .pattern
                .replace_all(&result, rule.replacement)
                .into_owned();
        }
        result
    }
}

impl Default for ImperativeSoftener {
    fn default() -> Self {
        Self::new()
    }
}
