//! TOML configuration parsing and management.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Greeting the chat panel opens with.
pub const DEFAULT_GREETING: &str =
    "Hello! I'm your AI career assistant. How can I help you today?";

/// Instruction prepended to every remote completion prompt.
pub const DEFAULT_PREAMBLE: &str =
    "You are a career advisor assistant. Provide helpful career advice for the following query: ";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// `[assistant]` section
    pub assistant: AssistantConfig,
    /// `[logging]` section
    pub logging: LoggingConfig,
    /// `[provider]` section
    #[serde(default)]
    pub provider: ProviderConfig,
    /// `[session]` section
    #[serde(default)]
    pub session: SessionConfig,
}

/// Assistant identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Name shown in front of bot replies
    pub name: String,
    /// Opening bot message of every panel
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Transcript path; empty for a timestamped file in the temp dir
    pub log_file: String,
    /// Transcript level, `DEBUG` includes full remote replies
    pub log_level: String,
}

/// Which completion backend the chat panel talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google generative-language `generateContent` API
    Gemini,
    /// Plain `{prompt}` -> `{response}` JSON endpoint
    Http,
    /// No remote calls; canned answers only
    None,
}

impl ProviderKind {
    /// Lowercase tag used in config files and `COMPASS_PROVIDER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Http => "http",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "http" => Ok(Self::Http),
            "none" | "off" | "disabled" => Ok(Self::None),
            _ => Err(anyhow::anyhow!("Invalid provider kind: {}", s)),
        }
    }
}

/// Remote completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Backend selection
    #[serde(default = "default_kind")]
    pub kind: ProviderKind,
    /// Gemini API root
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Endpoint for `kind = "http"`
    #[serde(default)]
    pub endpoint: String,
    /// Gemini model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Sampling temperature, 0.0 to 2.0
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Top-k cutoff
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Nucleus sampling cutoff, 0.0 to 1.0
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Upper bound on answer length
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Text put in front of every prompt
    #[serde(default = "default_preamble")]
    pub preamble: String,
}

fn default_kind() -> ProviderKind {
    ProviderKind::Gemini
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_k() -> u32 {
    40
}

fn default_top_p() -> f32 {
    0.95
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_preamble() -> String {
    DEFAULT_PREAMBLE.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            base_url: default_base_url(),
            endpoint: String::new(),
            model: default_model(),
            timeout_seconds: default_timeout(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
            preamble: default_preamble(),
        }
    }
}

impl ProviderConfig {
    /// Validate sampling parameters.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            anyhow::bail!("Temperature must be between 0.0 and 2.0");
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            anyhow::bail!("top_p must be between 0.0 and 1.0");
        }
        if self.max_output_tokens == 0 {
            anyhow::bail!("Max output tokens must be greater than 0");
        }
        if self.kind == ProviderKind::Http && self.endpoint.trim().is_empty() {
            anyhow::bail!("Provider kind 'http' requires an endpoint");
        }
        Ok(())
    }
}

/// Session flag store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file backing the session flags
    pub store_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        Self {
            store_path: base
                .join("career-compass")
                .join("session.json")
                .to_string_lossy()
                .to_string(),
        }
    }
}

/// Loads and manages TOML configuration.
#[derive(Debug)]
pub struct ConfigurationLoader {
    /// File the configuration was read from
    pub config_path: PathBuf,
    /// Parsed configuration
    pub config: Configuration,
}

impl ConfigurationLoader {
    /// Initialize configuration loader.
    ///
    /// # Arguments
    /// * `config_path` - Path to TOML config file. If None, uses `config/compass.toml`
    ///   when present and the built-in defaults otherwise.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config_path = config_path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("config/compass.toml"));

        let config = if config_path.exists() {
            Self::load_config(&config_path)?
        } else {
            Self::get_default_config()
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Create a configuration loader from a pre-parsed Configuration.
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config_path: PathBuf::from("config/compass.toml"),
            config,
        }
    }

    /// Load configuration from TOML file.
    fn load_config(path: &Path) -> Result<Configuration> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Configuration = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?;

        config
            .provider
            .validate()
            .with_context(|| format!("Invalid [provider] section in {}", path.display()))?;

        Ok(config)
    }

    /// Get default configuration.
    pub fn get_default_config() -> Configuration {
        Configuration {
            assistant: AssistantConfig {
                name: "Career Compass".to_string(),
                greeting: default_greeting(),
            },
            logging: LoggingConfig {
                log_file: std::env::temp_dir()
                    .join("career-compass")
                    .join(format!(
                        "compass_{}_{}.md",
                        Utc::now().timestamp_millis(),
                        std::process::id()
                    ))
                    .to_string_lossy()
                    .to_string(),
                log_level: "INFO".to_string(),
            },
            provider: ProviderConfig::default(),
            session: SessionConfig::default(),
        }
    }

    /// Path of the session flag store.
    pub fn session_store_path(&self) -> PathBuf {
        PathBuf::from(&self.config.session.store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigurationLoader::get_default_config();
        assert_eq!(config.assistant.name, "Career Compass");
        assert_eq!(config.assistant.greeting, DEFAULT_GREETING);
        assert_eq!(config.logging.log_level, "INFO");
        assert_eq!(config.provider.kind, ProviderKind::Gemini);
        assert_eq!(config.provider.model, "gemini-1.5-flash");
        assert_eq!(config.provider.top_k, 40);
        assert_eq!(config.provider.max_output_tokens, 1024);
        assert!(config.provider.validate().is_ok());
        assert!(config.session.store_path.ends_with("session.json"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loader = ConfigurationLoader::new(Some(Path::new("does/not/exist.toml"))).unwrap();
        assert_eq!(loader.config_path, PathBuf::from("does/not/exist.toml"));
        assert_eq!(loader.config.assistant.name, "Career Compass");
        assert_eq!(loader.config.provider.kind, ProviderKind::Gemini);
        assert_eq!(loader.config.provider.timeout_seconds, 30);
    }

    #[test]
    fn test_provider_config_from_toml() {
        use tempfile::NamedTempFile;

        let toml_content = r#"
[assistant]
name = "test"

[logging]
log_file = "/tmp/test.md"
log_level = "DEBUG"

[provider]
kind = "http"
endpoint = "http://127.0.0.1:9000/complete"
timeout_seconds = 5

[session]
store_path = "/tmp/compass-session.json"
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), toml_content).unwrap();

        let loader = ConfigurationLoader::new(Some(temp_file.path())).unwrap();
        assert_eq!(loader.config.provider.kind, ProviderKind::Http);
        assert_eq!(loader.config.provider.endpoint, "http://127.0.0.1:9000/complete");
        assert_eq!(loader.config.provider.timeout_seconds, 5);
        // untouched keys keep their defaults
        assert_eq!(loader.config.provider.model, "gemini-1.5-flash");
        assert_eq!(loader.config.assistant.greeting, DEFAULT_GREETING);
        assert_eq!(
            loader.session_store_path(),
            PathBuf::from("/tmp/compass-session.json")
        );
    }

    #[test]
    fn test_missing_provider_section_uses_defaults() {
        use tempfile::NamedTempFile;

        let toml_content = r#"
[assistant]
name = "test"
greeting = "Hi"

[logging]
log_file = "/tmp/test.md"
log_level = "INFO"
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), toml_content).unwrap();

        let loader = ConfigurationLoader::new(Some(temp_file.path())).unwrap();
        assert_eq!(loader.config.provider.kind, ProviderKind::Gemini);
        assert_eq!(loader.config.assistant.greeting, "Hi");
    }

    #[test]
    fn test_invalid_provider_section_is_rejected() {
        use tempfile::NamedTempFile;

        let toml_content = r#"
[assistant]
name = "test"

[logging]
log_file = "/tmp/test.md"
log_level = "INFO"

[provider]
kind = "http"
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), toml_content).unwrap();

        let err = ConfigurationLoader::new(Some(temp_file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("requires an endpoint"));
    }

    #[test]
    fn test_shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/compass.toml");
        let loader = ConfigurationLoader::new(Some(&path)).unwrap();

        assert_eq!(loader.config.provider.kind, ProviderKind::Gemini);
        assert_eq!(loader.config.provider.preamble, DEFAULT_PREAMBLE);
        assert_eq!(loader.config.assistant.greeting, DEFAULT_GREETING);
        assert_eq!(loader.session_store_path(), PathBuf::from("data/session.json"));
    }

    #[test]
    fn test_provider_validation() {
        let mut config = ProviderConfig::default();
        config.temperature = 2.5;
        assert!(config.validate().is_err());

        let mut config = ProviderConfig::default();
        config.top_p = 1.5;
        assert!(config.validate().is_err());

        let mut config = ProviderConfig::default();
        config.max_output_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("Gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert_eq!("off".parse::<ProviderKind>().unwrap(), ProviderKind::None);
        assert!("openai".parse::<ProviderKind>().is_err());
    }
}
