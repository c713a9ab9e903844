//! Runtime configuration.
//!
//! The dashboard talks to a single API base address. It is resolved from,
//! lowest to highest precedence: built-in default, an optional TOML config
//! file, `DOMWATCH_*` environment variables, and the CLI flag.

use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};

/// Default address of the domain-health API.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base address of the domain-health API, without a trailing slash.
    pub api_base: String,
}

impl Settings {
    /// Resolve settings from the optional config file and CLI override.
    pub fn load(config_path: Option<&Path>, cli_api_base: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder().set_default("api_base", DEFAULT_API_BASE)?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix("DOMWATCH"));

        if let Some(base) = cli_api_base {
            builder = builder.set_override("api_base", base)?;
        }

        let config = builder.build()?;
        let api_base = config.get_string("api_base")?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}
