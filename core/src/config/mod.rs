//! TOML Configuration File Support
//!
//! Configuration for the portfolio lives in `~/.config/folio/folio.toml`.
//! Every section is optional; anything left out keeps the built-in content.
//!
//! # Configuration Priority
//!
//! Values are loaded with the following priority (highest first):
//! 1. CLI arguments (via [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [hero]
//! name = "Ada"
//! greeting = "I'm a"
//! phrases = ["Systems Programmer", "Compiler Nerd"]
//!
//! [typing]
//! typing_ms = 50
//! erasing_ms = 75
//! hold_ms = 1000
//! jitter_ms = 120
//!
//! [skills]
//! technical = [{ name = "Rust", level = 90 }]
//! soft = [{ name = "Mentoring", level = 80 }]
//!
//! [[projects]]
//! title = "Analytics Dashboard"
//! description = "A data visualization tool"
//! technologies = ["Rust", "PostgreSQL"]
//! full_description = "Built a dashboard for business data."
//! link = "https://example.com/dashboard"
//!
//! [ui]
//! scroll_top_threshold = 12
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{Portfolio, Project, SkillSet, SocialLink, TimelineEntry};
use crate::engine::{PhraseList, TypingCadence};
use crate::page::DEFAULT_SCROLL_TOP_THRESHOLD;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Hero section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroToml {
    /// Display name
    pub name: Option<String>,

    /// Text before the typed phrase
    pub greeting: Option<String>,

    /// Bio paragraph
    pub bio: Option<String>,

    /// Phrases for the typed-text effect
    pub phrases: Option<Vec<String>>,
}

/// Typing cadence section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingToml {
    /// Delay between typed characters in milliseconds
    pub typing_ms: Option<u64>,

    /// Delay between erased characters in milliseconds
    pub erasing_ms: Option<u64>,

    /// Hold on a fully typed phrase in milliseconds
    pub hold_ms: Option<u64>,

    /// Maximum random jitter added to each delay in milliseconds
    pub jitter_ms: Option<u64>,
}

/// UI section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiToml {
    /// Lines scrolled before the scroll-to-top badge appears
    pub scroll_top_threshold: Option<usize>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioToml {
    /// Hero section
    pub hero: HeroToml,

    /// Typing cadence section
    pub typing: TypingToml,

    /// Replacement skill lists
    pub skills: Option<SkillSet>,

    /// Replacement project list
    pub projects: Option<Vec<Project>>,

    /// Replacement experience timeline
    pub experience: Option<Vec<TimelineEntry>>,

    /// Replacement social links
    pub links: Option<Vec<SocialLink>>,

    /// UI tuning section
    pub ui: UiToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Effective configuration after all sources are merged
#[derive(Clone, Debug)]
pub struct FolioConfig {
    /// Page content
    pub portfolio: Portfolio,

    /// Typed-text delays
    pub cadence: TypingCadence,

    /// Lines scrolled before the scroll-to-top badge appears
    pub scroll_top_threshold: usize,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            portfolio: Portfolio::default(),
            cadence: TypingCadence::default(),
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl FolioConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Hero phrases as a validated list
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty list or an
    /// empty phrase.
    pub fn phrase_list(&self) -> Result<PhraseList, ConfigError> {
        PhraseList::new(self.portfolio.hero.phrases.iter().cloned())
            .map_err(|e| ConfigError::ValidationError(format!("hero.phrases: {e}")))
    }

    /// Check the merged values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.phrase_list()?;

        if let Some(skill) = self.portfolio.skills.iter().find(|s| s.level > 100) {
            return Err(ConfigError::ValidationError(format!(
                "skill '{}' has level {} (maximum is 100)",
                skill.name, skill.level
            )));
        }

        if self.cadence.hold.is_zero() {
            return Err(ConfigError::ValidationError(
                "typing.hold_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/folio/folio.toml` or
/// `~/.config/folio/folio.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("folio").join("folio.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the merged configuration is invalid. A missing config file is not an
/// error (defaults are used).
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the merged configuration is invalid.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<FolioConfig, ConfigError> {
    // Start with defaults
    let mut config = FolioConfig::default();

    // Try to load from file
    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: FolioToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    // Apply environment variables (overrides file values)
    apply_env_config(&mut config, |key| std::env::var(key).ok());

    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut FolioConfig, toml: FolioToml) {
    // Hero
    let hero = &mut config.portfolio.hero;
    if let Some(name) = toml.hero.name {
        hero.name = name;
    }
    if let Some(greeting) = toml.hero.greeting {
        hero.greeting = greeting;
    }
    if let Some(bio) = toml.hero.bio {
        hero.bio = bio;
    }
    if let Some(phrases) = toml.hero.phrases {
        hero.phrases = phrases;
    }

    // Typing cadence
    if let Some(ms) = toml.typing.typing_ms {
        config.cadence.typing = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.typing.erasing_ms {
        config.cadence.erasing = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.typing.hold_ms {
        config.cadence.hold = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.typing.jitter_ms {
        config.cadence.jitter_max = Duration::from_millis(ms);
    }

    // Content lists replace the defaults wholesale
    if let Some(skills) = toml.skills {
        config.portfolio.skills = skills;
    }
    if let Some(projects) = toml.projects {
        config.portfolio.projects = projects;
    }
    if let Some(experience) = toml.experience {
        config.portfolio.experience = experience;
    }
    if let Some(links) = toml.links {
        config.portfolio.links = links;
    }

    // UI
    if let Some(threshold) = toml.ui.scroll_top_threshold {
        config.scroll_top_threshold = threshold;
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config<F>(config: &mut FolioConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(phrases) = lookup("FOLIO_PHRASES") {
        config.portfolio.hero.phrases = split_phrases(&phrases);
        config.source = ConfigSource::Env;
    }

    let durations: [(&str, fn(&mut TypingCadence) -> &mut Duration); 4] = [
        ("FOLIO_TYPING_MS", |c| &mut c.typing),
        ("FOLIO_ERASING_MS", |c| &mut c.erasing),
        ("FOLIO_HOLD_MS", |c| &mut c.hold),
        ("FOLIO_JITTER_MS", |c| &mut c.jitter_max),
    ];
    for (key, field) in durations {
        if let Some(value) = lookup(key) {
            if let Ok(ms) = value.trim().parse::<u64>() {
                *field(&mut config.cadence) = Duration::from_millis(ms);
                config.source = ConfigSource::Env;
            } else {
                tracing::warn!(key, value = %value, "Ignoring non-numeric environment override");
            }
        }
    }
}

/// Split a comma-separated phrase list, dropping blank entries
#[must_use]
pub fn split_phrases(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides,
/// then call [`FolioConfig::validate`] again.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Phrase list override
    pub phrases: Option<Vec<String>>,

    /// Typing delay override (milliseconds)
    pub typing_ms: Option<u64>,

    /// Jitter override (milliseconds)
    pub jitter_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set phrase list override
    #[must_use]
    pub fn with_phrases(mut self, phrases: Vec<String>) -> Self {
        self.phrases = Some(phrases);
        self
    }

    /// Set typing delay override
    #[must_use]
    pub fn with_typing_ms(mut self, ms: u64) -> Self {
        self.typing_ms = Some(ms);
        self
    }

    /// Set jitter override
    #[must_use]
    pub fn with_jitter_ms(mut self, ms: u64) -> Self {
        self.jitter_ms = Some(ms);
        self
    }

    /// Whether any override is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_none() && self.typing_ms.is_none() && self.jitter_ms.is_none()
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut FolioConfig) {
        if !self.is_empty() {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref phrases) = self.phrases {
            config.portfolio.hero.phrases.clone_from(phrases);
        }

        if let Some(ms) = self.typing_ms {
            config.cadence.typing = Duration::from_millis(ms);
        }

        if let Some(ms) = self.jitter_ms {
            config.cadence.jitter_max = Duration::from_millis(ms);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();

        assert_eq!(config.portfolio, Portfolio::default());
        assert_eq!(config.cadence, TypingCadence::default());
        assert_eq!(config.scroll_top_threshold, DEFAULT_SCROLL_TOP_THRESHOLD);
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("folio/folio.toml"));
        }
    }

    // =========================================================================
    // File Loading Tests
    // =========================================================================

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            load_config_from_path(Some(PathBuf::from("/nonexistent/folio/folio.toml"))).unwrap();
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[hero]
name = "Ada"
phrases = ["Systems Programmer", "Compiler Nerd"]

[typing]
hold_ms = 1500
jitter_ms = 0

[[projects]]
title = "Parser"
description = "A parser"
technologies = ["Rust"]
full_description = "A very fast parser."
link = "https://example.com/parser"

[ui]
scroll_top_threshold = 4
"#
        )
        .unwrap();

        let mut config = FolioConfig::default();
        let content = std::fs::read_to_string(file.path()).unwrap();
        apply_toml_config(&mut config, toml::from_str(&content).unwrap());

        assert_eq!(config.portfolio.hero.name, "Ada");
        assert_eq!(config.portfolio.hero.greeting, "I'm a");
        assert_eq!(config.portfolio.hero.phrases, vec!["Systems Programmer", "Compiler Nerd"]);
        assert_eq!(config.cadence.hold, Duration::from_millis(1500));
        assert_eq!(config.cadence.jitter_max, Duration::ZERO);
        assert_eq!(config.cadence.typing, TypingCadence::default().typing);
        assert_eq!(config.portfolio.projects.len(), 1);
        assert_eq!(config.portfolio.experience.len(), 3);
        assert_eq!(config.scroll_top_threshold, 4);
    }

    #[test]
    fn test_load_config_from_path_marks_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[hero]\nname = \"Ada\"").unwrap();

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.portfolio.hero.name, "Ada");
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[hero\nname = ").unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_empty_phrases_in_file_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[hero]\nphrases = []").unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_validation_rejects_empty_phrase() {
        let mut config = FolioConfig::default();
        config.portfolio.hero.phrases = vec!["ok".to_string(), String::new()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_validation_rejects_skill_over_100() {
        let mut config = FolioConfig::default();
        config.portfolio.skills.technical[0].level = 101;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_zero_hold() {
        let mut config = FolioConfig::default();
        config.cadence.hold = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // Environment Override Tests
    // =========================================================================

    #[test]
    fn test_env_overrides() {
        let mut config = FolioConfig::default();
        apply_env_config(
            &mut config,
            env(&[
                ("FOLIO_PHRASES", "Rustacean, Tinkerer ,,"),
                ("FOLIO_TYPING_MS", "30"),
                ("FOLIO_JITTER_MS", "0"),
            ]),
        );

        assert_eq!(config.portfolio.hero.phrases, vec!["Rustacean", "Tinkerer"]);
        assert_eq!(config.cadence.typing, Duration::from_millis(30));
        assert_eq!(config.cadence.jitter_max, Duration::ZERO);
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_env_non_numeric_ignored() {
        let mut config = FolioConfig::default();
        apply_env_config(&mut config, env(&[("FOLIO_HOLD_MS", "soon")]));
        assert_eq!(config.cadence.hold, TypingCadence::default().hold);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_no_env_leaves_defaults() {
        let mut config = FolioConfig::default();
        apply_env_config(&mut config, env(&[]));
        assert_eq!(config.source(), ConfigSource::Default);
    }

    // =========================================================================
    // CLI Override Tests
    // =========================================================================

    #[test]
    fn test_cli_overrides() {
        let mut config = FolioConfig::default();
        let overrides = ConfigOverrides::new()
            .with_phrases(vec!["One".to_string()])
            .with_typing_ms(20)
            .with_jitter_ms(5);

        overrides.apply(&mut config);

        assert_eq!(config.portfolio.hero.phrases, vec!["One"]);
        assert_eq!(config.cadence.typing, Duration::from_millis(20));
        assert_eq!(config.cadence.jitter_max, Duration::from_millis(5));
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_empty_overrides_keep_source() {
        let mut config = FolioConfig::default();
        ConfigOverrides::new().apply(&mut config);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_split_phrases() {
        assert_eq!(split_phrases("a, b ,c"), vec!["a", "b", "c"]);
        assert!(split_phrases(" , ").is_empty());
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::File.to_string(), "config file");
    }
}
