use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub cors: CorsConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    /// Browser origins allowed to call the API (credentials are allowed)
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    pub open_elevation_url: Url,
    pub open_meteo_url: Url,
    /// Nominatim server root
    pub nominatim_url: Url,
    pub user_agent: String,
    pub lookup_timeout_secs: u64,
    pub batch_timeout_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            open_elevation_url: static_url("https://api.open-elevation.com/api/v1/lookup"),
            open_meteo_url: static_url("https://api.open-meteo.com/v1/elevation"),
            nominatim_url: static_url("https://nominatim.openstreetmap.org"),
            user_agent: "ClimateRiskApp/1.0 (contact@example.com)".to_string(),
            lookup_timeout_secs: 10,
            batch_timeout_secs: 30,
        }
    }
}

impl UpstreamConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    pub fn batch_timeout(&self) -> Duration {
        Duration::from_secs(self.batch_timeout_secs)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        if config.upstream.lookup_timeout_secs == 0 || config.upstream.batch_timeout_secs == 0 {
            anyhow::bail!("Upstream timeouts must be at least one second");
        }
        Ok(config)
    }
}

fn static_url(raw: &'static str) -> Url {
    Url::parse(raw).expect("Built-in upstream URL is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert_eq!(config.upstream.lookup_timeout(), Duration::from_secs(10));
        assert_eq!(config.upstream.batch_timeout(), Duration::from_secs(30));
        assert_eq!(
            config.upstream.open_meteo_url.as_str(),
            "https://api.open-meteo.com/v1/elevation"
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.upstream.user_agent, "ClimateRiskApp/1.0 (contact@example.com)");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            [cors]
            allowed_origins = ["https://floodmap.example.nz"]

            [upstream]
            open_meteo_url = "http://localhost:8080/v1/elevation"
            batch_timeout_secs = 45
            "#,
        )
        .unwrap();

        assert_eq!(config.cors.allowed_origins, vec!["https://floodmap.example.nz"]);
        assert_eq!(config.upstream.open_meteo_url.port(), Some(8080));
        assert_eq!(config.upstream.batch_timeout_secs, 45);
        assert_eq!(config.upstream.lookup_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = Config::from_toml(
            r#"
            [upstream]
            nominatim_url = "not a url"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::from_toml("[upstream]\nlookup_timeout_secs = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[upstream]\nuser_agent = \"tideline-test\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.upstream.user_agent, "tideline-test");
    }

    #[test]
    fn test_example_config_parses() {
        let config = Config::from_toml(include_str!("../tideline.example.toml")).unwrap();
        assert_eq!(config.upstream.lookup_timeout_secs, 10);
        assert_eq!(config.cors.allowed_origins, Config::default().cors.allowed_origins);
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from_file("/nonexistent/tideline.toml").is_err());
    }
}
