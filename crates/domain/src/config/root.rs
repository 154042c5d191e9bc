use serde::{Deserialize, Serialize};

use super::audit::AuditConfig;
use super::database::DatabaseConfig;
use super::ensemble::EnsembleConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::models::ModelsConfig;
use super::resources::ResourcesConfig;
use super::scraper::ScraperConfig;
use super::sweep::SweepConfig;

const LOCAL_CONFIG_PATH: &str = "judol-filter.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/judol-filter/config.toml";

/// Main configuration structure for Judol Filter
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolver record store
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Normalization dictionaries and word lists
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Pretrained model artifacts
    #[serde(default)]
    pub models: ModelsConfig,

    /// Fusion thresholds
    #[serde(default)]
    pub ensemble: EnsembleConfig,

    /// Page rendering service
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Audit trail file
    #[serde(default)]
    pub audit: AuditConfig,

    /// Sweep scheduling
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. judol-filter.toml in current directory
    /// 3. /etc/judol-filter/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(interval) = overrides.interval_secs {
            self.sweep.interval_secs = interval;
        }
        if let Some(audit) = overrides.audit_log_path {
            self.audit.path = audit;
        }
        if let Some(dir) = overrides.models_dir {
            self.models.dir = dir;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("ensemble.lexical_threshold", self.ensemble.lexical_threshold),
            ("ensemble.sequence_threshold", self.ensemble.sequence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.ensemble.sequence_length == 0 {
            return Err(ConfigError::Validation(
                "ensemble.sequence_length cannot be 0".to_string(),
            ));
        }

        for (name, value) in [
            ("database.path", &self.database.path),
            ("audit.path", &self.audit.path),
            ("resources.dictionary_path", &self.resources.dictionary_path),
            ("resources.stopwords_path", &self.resources.stopwords_path),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
            }
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub interval_secs: Option<u64>,
    pub audit_log_path: Option<String>,
    pub models_dir: Option<String>,
}
