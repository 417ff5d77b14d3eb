// file: src/config.rs
// description: runtime settings layered from defaults, an optional toml file and env vars
// reference: https://docs.rs/config

use crate::error::{Result, SynthError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "ORG_REPO_CONFIG";
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api_base_url: String,
    pub repo_type: String,
    pub per_page: u32,
    pub user_agent: String,
    pub db_path: String,
    pub max_concurrent_indexers: u32,
    pub branch: String,
}

impl Settings {
    /// Defaults, then the optional settings file, then `ORG_REPO_CONFIG__*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_settings();
        let mut builder = config::Config::builder()
            .set_default("api_base_url", defaults.api_base_url)
            .and_then(|b| b.set_default("repo_type", defaults.repo_type))
            .and_then(|b| b.set_default("per_page", i64::from(defaults.per_page)))
            .and_then(|b| b.set_default("user_agent", defaults.user_agent))
            .and_then(|b| b.set_default("db_path", defaults.db_path))
            .and_then(|b| {
                b.set_default(
                    "max_concurrent_indexers",
                    i64::from(defaults.max_concurrent_indexers),
                )
            })
            .and_then(|b| b.set_default("branch", defaults.branch))
            .map_err(|e| SynthError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder
            .build()
            .map_err(|e| SynthError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SynthError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn default_settings() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            repo_type: "private".to_string(),
            per_page: MAX_PER_PAGE,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
            db_path: "data".to_string(),
            max_concurrent_indexers: 2,
            branch: "master".to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(SynthError::Config(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }

        if self.max_concurrent_indexers == 0 {
            return Err(SynthError::Config(
                "max_concurrent_indexers must be greater than 0".to_string(),
            ));
        }

        if self.branch.trim().is_empty() {
            return Err(SynthError::Config("branch must not be empty".to_string()));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(SynthError::Config(format!(
                "api_base_url must be an http(s) URL: {}",
                self.api_base_url
            )));
        }

        Ok(())
    }
}
