use log::info;
use serde::Deserialize;
use thiserror::Error;

/// Where the deletion endpoints live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    gatehouse_api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `GATEHOUSE_API_BASE_URL`, falling back to the build's default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;

        Ok(match raw.gatehouse_api_base_url {
            Some(url) => {
                info!("Using provided GATEHOUSE_API_BASE_URL: {url}");
                Self::new(url)
            }
            None => Self::default(),
        })
    }

    /// Absolute URL of `path` under the base URL.
    ///
    /// An empty base keeps `path` relative to the current page.
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        format!("{base}{path}")
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "http://127.0.0.1:8080".to_owned()
            } else if cfg!(feature = "env_local") {
                "http://localhost:8000".to_owned()
            } else {
                "http://127.0.0.1:8000".to_owned()
            },
        }
    }
}
