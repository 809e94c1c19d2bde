// ABOUTME: Environment-based configuration for the admin client
// ABOUTME: Parses API base URL, HTTP timeout, session location and logging settings

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one line per event
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Invalid {}: {other} (expected text or json)",
                env_vars::LOG_FORMAT
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Where the session is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLocation {
    /// JSON document at this path
    File(PathBuf),
    /// Kept in memory only; lost when the process exits
    Ephemeral,
}

/// Complete admin client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// REST API base URL, without trailing slash
    pub api_base_url: Url,
    /// Timeout applied to every outbound request
    pub http_timeout: Duration,
    /// Session persistence
    pub session: SessionLocation,
    /// Logging
    pub logging: LoggingConfig,
}

impl AdminConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unparseable value or
    /// when no config directory can be determined for the session file.
    pub fn from_env() -> AppResult<Self> {
        let api_base_url = parse_base_url(
            &env::var(env_vars::API_BASE_URL).unwrap_or_else(|_| defaults::API_BASE_URL.to_owned()),
        )?;

        let http_timeout = match env::var(env_vars::HTTP_TIMEOUT_SECS) {
            Ok(raw) => Duration::from_secs(raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("Invalid {}: {e}", env_vars::HTTP_TIMEOUT_SECS))
            })?),
            Err(_) => Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
        };

        let session = match env::var(env_vars::SESSION_PATH) {
            Ok(path) if !path.trim().is_empty() => SessionLocation::File(PathBuf::from(path)),
            _ => SessionLocation::File(default_session_path()?),
        };

        let logging = LoggingConfig {
            level: env::var(env_vars::LOG_LEVEL).unwrap_or_else(|_| defaults::LOG_LEVEL.to_owned()),
            format: env::var(env_vars::LOG_FORMAT)
                .ok()
                .map(|raw| raw.parse::<LogFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        let config = Self {
            api_base_url,
            http_timeout,
            session,
            logging,
        };
        debug!(
            api_base_url = %config.api_base_url,
            timeout_secs = config.http_timeout.as_secs(),
            "Loaded admin client configuration"
        );
        Ok(config)
    }

    /// Configuration pointing at `base_url` with defaults for everything else
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not an absolute http(s) URL.
    pub fn for_base_url(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            api_base_url: parse_base_url(base_url)?,
            http_timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            session: SessionLocation::Ephemeral,
            logging: LoggingConfig::default(),
        })
    }

    /// Replace the API base URL, e.g. from a command line flag
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.api_base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Keep the session in memory only
    #[must_use]
    pub fn ephemeral(mut self) -> Self {
        self.session = SessionLocation::Ephemeral;
        self
    }
}

/// `<config dir>/fitglow-admin/session.json`
///
/// # Errors
///
/// Returns `ConfigError` on platforms without a config directory.
pub fn default_session_path() -> AppResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        AppError::config(format!(
            "Cannot determine config directory; set {}",
            env_vars::SESSION_PATH
        ))
    })?;
    Ok(base
        .join(defaults::APP_DIR_NAME)
        .join(defaults::SESSION_FILE_NAME))
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| AppError::config(format!("Invalid {}: {e}", env_vars::API_BASE_URL)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "Invalid {}: scheme must be http or https",
            env_vars::API_BASE_URL
        )));
    }
    Ok(url)
}
