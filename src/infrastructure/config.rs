//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::domain::entities::ProficiencyMode;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog proxy base URL (wizard side)
    pub catalog_base_url: String,
    /// Upstream dnd5eapi base URL (proxy side)
    pub upstream_api_url: String,
    /// Catalog proxy bind port
    pub server_port: u16,
    /// How proficiency picks accumulate across choice groups. `union` merges
    /// every group; `last` keeps only the final group's picks.
    pub proficiency_mode: ProficiencyMode,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            upstream_api_url: env::var("UPSTREAM_API_URL")
                .unwrap_or_else(|_| "https://www.dnd5eapi.co/api".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            proficiency_mode: env::var("PROFICIENCY_MODE")
                .unwrap_or_else(|_| "union".to_string())
                .parse()
                .map_err(anyhow::Error::msg)
                .context("PROFICIENCY_MODE must be 'union' or 'last'")?,
        })
    }
}
