// ABOUTME: Configuration module for the FitGlow admin client
// ABOUTME: Environment-only configuration, no config files are read

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

/// Environment variable parsing
pub mod environment;

pub use environment::{AdminConfig, LogFormat, LoggingConfig, SessionLocation};
