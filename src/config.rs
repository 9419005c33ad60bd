use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    /// Apply pending migrations when connecting.
    pub auto_migrate: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            auto_migrate: env::var("AUTO_MIGRATE")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("AUTO_MIGRATE must be true or false")?,
        })
    }
}
