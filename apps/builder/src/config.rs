use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::editor::IdScheme;
use crate::export::command::DEFAULT_PDF_COMMAND;
use crate::export::DEFAULT_MARGIN_IN;
use crate::notify::DEFAULT_TOAST_CAPACITY;

/// Builder configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub export_dir: PathBuf,
    pub pdf_command: String,
    pub export_margin_in: f32,
    pub id_scheme: IdScheme,
    pub toast_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let id_scheme_raw = var("RESUME_ID_SCHEME", "sequential");
        let id_scheme = IdScheme::parse(&id_scheme_raw).ok_or_else(|| {
            anyhow!("RESUME_ID_SCHEME must be 'sequential' or 'uuid', got '{id_scheme_raw}'")
        })?;

        let export_margin_in = var("RESUME_EXPORT_MARGIN_IN", &DEFAULT_MARGIN_IN.to_string())
            .parse::<f32>()
            .context("RESUME_EXPORT_MARGIN_IN must be a number of inches")?;
        if !(0.0..=2.0).contains(&export_margin_in) {
            return Err(anyhow!(
                "RESUME_EXPORT_MARGIN_IN must be between 0 and 2 inches, got {export_margin_in}"
            ));
        }

        Ok(Config {
            host: var("HOST", "127.0.0.1"),
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            export_dir: PathBuf::from(var("RESUME_EXPORT_DIR", "exports")),
            pdf_command: var("RESUME_PDF_COMMAND", DEFAULT_PDF_COMMAND),
            export_margin_in,
            id_scheme,
            toast_capacity: var("RESUME_TOAST_CAPACITY", &DEFAULT_TOAST_CAPACITY.to_string())
                .parse::<usize>()
                .context("RESUME_TOAST_CAPACITY must be a positive integer")?,
        })
    }
}
