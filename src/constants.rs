// ABOUTME: Application constants for the FitGlow admin client
// ABOUTME: Storage keys, environment variable names, defaults and UI sizing values

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

/// Keys of the three persisted session entries
pub mod storage_keys {
    /// Bearer access token
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Refresh token
    pub const REFRESH_TOKEN: &str = "refresh_token";
    /// Serialized user profile
    pub const USER: &str = "user";
}

/// Environment variable names read by `AdminConfig::from_env`
pub mod env_vars {
    /// REST API base URL
    pub const API_BASE_URL: &str = "FITGLOW_API_BASE_URL";
    /// Per-request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FITGLOW_HTTP_TIMEOUT_SECS";
    /// Session file location override
    pub const SESSION_PATH: &str = "FITGLOW_SESSION_PATH";
    /// Default log filter when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "FITGLOW_LOG_LEVEL";
    /// `text` or `json`
    pub const LOG_FORMAT: &str = "FITGLOW_LOG_FORMAT";
}

/// Configuration defaults
pub mod defaults {
    /// Local development API
    pub const API_BASE_URL: &str = "http://localhost:4000";
    /// Request timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Log filter
    pub const LOG_LEVEL: &str = "info";
    /// Directory created under the platform config dir
    pub const APP_DIR_NAME: &str = "fitglow-admin";
    /// Session file name inside the app directory
    pub const SESSION_FILE_NAME: &str = "session.json";
}

/// List screens show this many rows per page
pub const ITEMS_PER_PAGE: usize = 10;

/// Service name used in external service errors
pub const API_SERVICE_NAME: &str = "FitGlow API";

/// Service name used for storage provider errors
pub const STORAGE_SERVICE_NAME: &str = "Media storage";

/// Message shown when a non-admin account logs in successfully
pub const ADMIN_ONLY_MESSAGE: &str = "Access denied. Admin only.";
