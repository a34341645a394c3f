//! Sanitization pipeline - classify, detect, then act proportionally

use crate::detector::InjectionDetector;
use crate::error::SanitizerError;
use crate::softener::ImperativeSoftener;
use crate::wrapper::{ClaimWrapper, MAX_CLAIM_CHARS};
use palisade_domain::{SanitizationStrategy, SourceRegistry, TrustTier};

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct SanitizerConfig {
    /// Token substituted for matched injection spans
    pub redaction_token: String,

    /// Maximum content length (chars) inside a claim envelope
    pub max_claim_chars: usize,

    /// Additional `(name, pattern)` signatures appended to the built-in table
    pub custom_patterns: Vec<(String, String)>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            redaction_token: "[REDACTED]".to_string(),
            max_claim_chars: MAX_CLAIM_CHARS,
            custom_patterns: Vec::new(),
        }
    }
}

/// Outcome of sanitizing one piece of content
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeResult {
    /// The content after tier-proportional sanitization
    pub sanitized: String,

    /// The content as received
    pub original: String,

    /// True iff `sanitized` differs from `original`
    pub was_modified: bool,

    /// True if any injection signature matched, regardless of tier
    pub injection_detected: bool,

    /// Names of the signatures that matched
    pub detected_patterns: Vec<String>,

    /// The trust tier the source resolved to
    pub trust_tier: TrustTier,
}

/// Orchestrates detection, redaction, softening, and claim wrapping
///
/// Detection always runs; the source's tier decides the response. This
/// detect-always/act-proportionally split means a tier-1 result still
/// reports `injection_detected` even though its content is never mutated.
///
/// Redaction is applied signature-by-signature as a global replace over the
/// mutating string; when signatures overlap, later ones operate on already
/// redacted text (order-dependent by design of the reference behavior).
pub struct SanitizationPipeline {
    registry: SourceRegistry,
    detector: InjectionDetector,
    softener: ImperativeSoftener,
    wrapper: ClaimWrapper,
}

impl SanitizationPipeline {
    /// Create a pipeline with default configuration over a source registry
    pub fn new(registry: SourceRegistry) -> Self {
        Self {
            registry,
            detector: InjectionDetector::new(),
            softener: ImperativeSoftener::new(),
            wrapper: ClaimWrapper::new(),
        }
    }

    /// Create a pipeline with custom configuration
    ///
    /// Fails only if a custom signature does not compile.
    pub fn with_config(
        registry: SourceRegistry,
        config: SanitizerConfig,
    ) -> Result<Self, SanitizerError> {
        let detector = InjectionDetector::new()
            .with_redaction_token(config.redaction_token)
            .with_custom_patterns(config.custom_patterns)?;

        Ok(Self {
            registry,
            detector,
            softener: ImperativeSoftener::new(),
            wrapper: ClaimWrapper::with_max_chars(config.max_claim_chars),
        })
    }

    /// Sanitize content from the given source
    ///
    /// Never fails: an unrecognized source resolves to tier 4 and gets the
    /// most aggressive treatment. Empty input flows through the same
    /// branches (aggressive wrapping of empty content still produces a
    /// non-empty envelope, so `was_modified` is true).
    pub fn sanitize(&self, content: &str, source_label: &str) -> SanitizeResult {
        let tier = self.registry.classify(source_label).clone();
        let detection = self.detector.detect(content);

        if detection.detected {
            tracing::warn!(
                source = source_label,
                tier = tier.tier,
                patterns = ?detection.matched_patterns,
                "injection signatures detected"
            );
        }

        let sanitized = match tier.strategy {
            SanitizationStrategy::None => content.to_string(),
            SanitizationStrategy::Minimal => {
                if detection.detected {
                    self.detector.redact(content)
                } else {
                    content.to_string()
                }
            }
            SanitizationStrategy::Moderate => {
                self.softener.soften(&self.detector.redact(content))
            }
            SanitizationStrategy::Aggressive => {
                let softened = self.softener.soften(&self.detector.redact(content));
                self.wrapper.wrap(&softened, &tier)
            }
        };

        SanitizeResult {
            was_modified: sanitized != content,
            original: content.to_string(),
            sanitized,
            injection_detected: detection.detected,
            detected_patterns: detection.matched_patterns,
            trust_tier: tier,
        }
    }

    /// Boolean-only safety gate sharing the pipeline's signature table
    pub fn is_safe(&self, content: &str) -> bool {
        self.detector.is_safe(content)
    }

    /// The detector, for telemetry call sites
    pub fn detector(&self) -> &InjectionDetector {
        &self.detector
    }

    /// The source registry backing classification
    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }
}
