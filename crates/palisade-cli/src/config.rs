//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use palisade_domain::{SourceRegistry, TrustTier};
use palisade_provenance::FreshnessConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// Carries output settings plus the two override tables this pipeline
/// accepts from its storage collaborator: custom trust-tier registry
/// entries and per-source freshness thresholds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Trust registry overrides
    #[serde(default)]
    pub registry: RegistryOverrides,

    /// Freshness threshold overrides
    #[serde(default)]
    pub freshness: FreshnessOverrides,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Custom trust-tier entries merged over the built-in registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryOverrides {
    /// One entry per source
    #[serde(default)]
    pub sources: Vec<SourceOverride>,
}

/// A single registry override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceOverride {
    /// Registry key (normalized on insertion)
    pub key: String,

    /// Numeric trust tier (1-4)
    pub tier: u8,

    /// Human-readable name used in claim-wrap labels
    pub name: String,

    /// Why this tier applies
    #[serde(default)]
    pub description: String,
}

/// Per-source freshness threshold overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreshnessOverrides {
    /// Days after which content counts as stale
    #[serde(default)]
    pub stale_days: BTreeMap<String, u32>,

    /// Days after which content counts as expired
    #[serde(default)]
    pub expired_days: BTreeMap<String, u32>,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl From<crate::cli::CliFormat> for OutputFormat {
    fn from(format: crate::cli::CliFormat) -> Self {
        match format {
            crate::cli::CliFormat::Table => OutputFormat::Table,
            crate::cli::CliFormat::Json => OutputFormat::Json,
            crate::cli::CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".palisade").join("config.toml"))
    }

    /// Load configuration from the default path or fall back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Build the source registry: built-in table plus overrides.
    pub fn build_registry(&self) -> SourceRegistry {
        SourceRegistry::default().with_overrides(self.registry.sources.iter().map(|o| {
            (
                o.key.clone(),
                TrustTier::new(o.tier, o.name.clone(), o.description.clone()),
            )
        }))
    }

    /// Build the freshness configuration: built-in thresholds plus overrides.
    ///
    /// Validation happens when the evaluator is constructed from this.
    pub fn build_freshness(&self) -> FreshnessConfig {
        FreshnessConfig::default().with_overrides(FreshnessConfig {
            stale_days: self.freshness.stale_days.clone(),
            expired_days: self.freshness.expired_days.clone(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
