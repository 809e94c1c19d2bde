// ABOUTME: Core crate for the FitGlow admin client with models and error types
// ABOUTME: Pure data definitions with no I/O, shared by the client library and CLI

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

#![deny(unsafe_code)]

//! # FitGlow Core
//!
//! Data model and error taxonomy for the FitGlow admin client.

/// Unified error type and error codes
pub mod errors;

/// Wire data model
pub mod models;
