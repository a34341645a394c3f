//! Claim wrapping - frames low-trust content as a third-party assertion

use palisade_domain::TrustTier;

/// Maximum content length (in chars) allowed inside a claim envelope
pub const MAX_CLAIM_CHARS: usize = 500;

const ELLIPSIS: &str = "...";

/// Truncates content and wraps it in an explicit third-party-claim envelope
///
/// The envelope is the mechanism by which downstream prompt assembly can
/// distinguish claims from facts without re-running classification: the
/// attribution label is baked into the text itself.
pub struct ClaimWrapper {
    max_chars: usize,
}

impl ClaimWrapper {
    /// Create a wrapper with the standard length limit
    pub fn new() -> Self {
        Self {
            max_chars: MAX_CLAIM_CHARS,
        }
    }

    /// Create a wrapper with a custom length limit
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Wrap content as an attributed claim
    ///
    /// Content of at most the limit passes untouched into the envelope;
    /// longer content is cut at a char boundary to leave room for the
    /// ellipsis marker.
    pub fn wrap(&self, content: &str, tier: &TrustTier) -> String {
        let truncated = self.truncate(content);
        format!(
            "[{} claims:] \"{}\" [End of user-submitted content]",
            Self::attribution(tier),
            truncated
        )
    }

    /// Attribution label for a trust tier
    ///
    /// Tier 1 content is labeled as official, tier 2 by the registry's
    /// human-readable name, tier 3 as a named-community user, and tier 4 as
    /// unverified.
    fn attribution(tier: &TrustTier) -> String {
        match tier.tier {
            1 => "Official source".to_string(),
            2 => tier.name.clone(),
            3 => format!("{} user", tier.name),
            _ => "Unverified user".to_string(),
        }
    }

    fn truncate(&self, content: &str) -> String {
        if content.chars().count() <= self.max_chars {
            return content.to_string();
        }

        let keep = self.max_chars.saturating_sub(ELLIPSIS.len());
        let mut truncated: String = content.chars().take(keep).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    }
}

impl Default for ClaimWrapper {
    fn default() -> Self {
        Self::new()
    }
}
