use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Controls the demo schedule loaded at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Length of the daily IST→DXB series.
    #[serde(default = "default_dated_days")]
    pub dated_days: u32,
}

fn default_enabled() -> bool { true }
fn default_dated_days() -> u32 { 8 }

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            dated_days: default_dated_days(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    /// Layers `{dir}/default`, `{dir}/{run_mode}` and `{dir}/local`, then
    /// `JETWAY__SECTION__KEY` environment overrides.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("server.port", 8080)?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(config::Environment::with_prefix("JETWAY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let config = Config::load_from("does-not-exist", "test").unwrap();
        assert!(config.seed.enabled);
        assert_eq!(config.seed.dated_days, 8);
    }

    #[test]
    fn test_layered_files() {
        let dir = std::env::temp_dir().join(format!("jetway-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("default.toml"), "[server]\nport = 3000\n\n[seed]\nenabled = true\n").unwrap();
        std::fs::write(dir.join("staging.toml"), "[seed]\nenabled = false\ndated_days = 3\n").unwrap();

        let config = Config::load_from(dir.to_str().unwrap(), "staging").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(!config.seed.enabled);
        assert_eq!(config.seed.dated_days, 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
