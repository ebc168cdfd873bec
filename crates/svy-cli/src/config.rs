//! Application configuration

use std::env;

use serde::{Deserialize, Serialize};

use svy_core::{Error, Result};

/// Output format for the results view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name as given on the command line or in `SVY_FORMAT`
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Configuration(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Runtime configuration for the CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub format: OutputFormat,
}

impl AppConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let format = match env::var("SVY_FORMAT") {
            Ok(value) => OutputFormat::parse(&value)?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self { format })
    }
}
