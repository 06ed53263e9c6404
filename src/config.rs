use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub substreams: SubstreamsConfig,
    pub analysis: AnalysisOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Latest contract dump lands here
    pub output_dir: PathBuf,
    /// Timestamped result copies land here
    pub results_dir: PathBuf,
}

/// Substreams CLI invocation settings
///
/// The API token is an explicit value on this struct; nothing inside the
/// runner reads the environment. `AppConfig::load` is the single place
/// that consults `SUBSTREAMS_API_TOKEN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstreamsConfig {
    pub endpoint: String,
    pub manifest: String,
    pub module: String,
    #[serde(default)]
    pub api_token: String,
    pub start_block: u64,
    /// Hard cap on blocks per run
    pub max_blocks: u64,
    pub timeout_seconds: u64,
}

impl Default for SubstreamsConfig {
    fn default() -> Self {
        Self {
            endpoint: "mainnet.eth.streamingfast.io:443".to_string(),
            manifest: "substreams.yaml".to_string(),
            module: "map_contract_usage".to_string(),
            api_token: String::new(),
            start_block: 22_000_000,
            max_blocks: 1000,
            timeout_seconds: 300,
        }
    }
}

/// Feature flags that used to be separate script revisions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Emit per-day aggregates in the report
    pub include_daily_stats: bool,
    /// Honour the isNewContract input field (off forces false)
    pub allow_new_contract_field: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_daily_stats: true,
            allow_new_contract_field: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = SubstreamsConfig::default();
        let config = Config::builder()
            .set_default("paths.output_dir", "./output")?
            .set_default("paths.results_dir", "./results")?
            .set_default("substreams.endpoint", defaults.endpoint)?
            .set_default("substreams.manifest", defaults.manifest)?
            .set_default("substreams.module", defaults.module)?
            .set_default("substreams.api_token", defaults.api_token)?
            .set_default("substreams.start_block", defaults.start_block)?
            .set_default("substreams.max_blocks", defaults.max_blocks)?
            .set_default("substreams.timeout_seconds", defaults.timeout_seconds)?
            .set_default("analysis.include_daily_stats", true)?
            .set_default("analysis.allow_new_contract_field", true)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // SUBSTREAMS_* env variables map to top-level keys only;
            // the nested substreams.* settings come from config.toml,
            // except the API token which is picked up explicitly below
            .add_source(config::Environment::with_prefix("SUBSTREAMS"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // The canonical token variable keeps its upstream-documented name
        if let Ok(token) = env::var("SUBSTREAMS_API_TOKEN") {
            app_config.substreams.api_token = token;
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        Self {
            paths: PathsConfig {
                output_dir: PathBuf::from("./output"),
                results_dir: PathBuf::from("./results"),
            },
            substreams: SubstreamsConfig::default(),
            analysis: AnalysisOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_api_token_picked_up_from_env() {
        env::set_var("SUBSTREAMS_API_TOKEN", "test-jwt");

        if let Ok(config) = AppConfig::load() {
            assert_eq!(config.substreams.api_token, "test-jwt");
        }

        env::remove_var("SUBSTREAMS_API_TOKEN");
    }

    #[test]
    #[serial]
    fn test_get_defaults() {
        let config = AppConfig::get_defaults();
        assert!(config.analysis.include_daily_stats);
        assert!(config.analysis.allow_new_contract_field);
        assert_eq!(config.substreams.max_blocks, 1000);
        assert!(config.substreams.api_token.is_empty());
    }
}
