//! Advisory security audit of outgoing model responses

use regex::Regex;

/// Result of auditing one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityAudit {
    /// True when no weak signal matched
    pub safe: bool,

    /// One entry per matched signal
    pub issues: Vec<String>,
}

/// Jailbreak acknowledgment phrases a compromised response tends to echo
const JAILBREAK_ACKNOWLEDGMENTS: [&str; 5] = [
    "dan mode activated",
    "developer mode enabled",
    "entering developer mode",
    "jailbreak successful",
    "restrictions have been disabled",
];

/// Scans outgoing model text for weak security signals
///
/// Three checks: preamble leakage (co-occurrence of preamble fragments),
/// role confusion, and jailbreak acknowledgment. The audit is advisory and
/// never blocks: callers decide whether to discard or regenerate. This
/// mirrors the sanitizer's detect/act split on the output side.
pub struct ResponseAuditor {
    role_confusion: Regex,
}

impl ResponseAuditor {
    /// Create an auditor
    pub fn new() -> Self {
        Self {
            role_confusion: Regex::new(r"(?i)\bi am not actually an? ")
                .expect("role confusion pattern must compile"),
        }
    }

    /// Audit a response; returns every matched signal as an issue string
    pub fn audit(&self, response: &str) -> SecurityAudit {
        let mut issues = Vec::new();
        let lowered = response.to_lowercase();

        if lowered.contains("security rules") && lowered.contains("highest priority") {
            issues.push("Possible system preamble leakage in response".to_string());
        }

        if self.role_confusion.is_match(response) {
            issues.push("Role confusion statement in response".to_string());
        }

        for phrase in JAILBREAK_ACKNOWLEDGMENTS {
            if lowered.contains(phrase) {
                issues.push(format!("Jailbreak acknowledgment phrase: '{}'", phrase));
            }
        }

        if !issues.is_empty() {
            tracing::warn!(issue_count = issues.len(), "response failed security audit");
        }

        SecurityAudit {
            safe: issues.is_empty(),
            issues,
        }
    }
}

impl Default for ResponseAuditor {
    fn default() -> Self {
        Self::new()
    }
}
