//! Runtime configuration for upload limits.

use std::env;

use dotenv::dotenv;
use log::debug;

/// Default cap on uploaded file size, in bytes.
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 40_960_000;

/// Environment variable read by [`Settings::from_env`].
pub const MAX_UPLOAD_SIZE_VAR: &str = "MAX_UPLOAD_SIZE";

/// External configuration consumed by the upload validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Largest accepted upload, in bytes.
    pub max_upload_size: u64,
}

impl Settings {
    /// Reads settings from the environment, loading `.env` first.
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv().ok();
        let raw = env::var(MAX_UPLOAD_SIZE_VAR).ok();
        Self {
            max_upload_size: max_upload_size_from(raw.as_deref()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }
}

fn max_upload_size_from(raw: Option<&str>) -> u64 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            debug!(
                "ignoring unparseable {}={:?}, using the default",
                MAX_UPLOAD_SIZE_VAR, value
            );
            DEFAULT_MAX_UPLOAD_SIZE
        }),
        None => DEFAULT_MAX_UPLOAD_SIZE,
    }
}
