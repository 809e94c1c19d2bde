// ABOUTME: Terminal helpers for fitglow-admin
// ABOUTME: Table rendering and interactive prompts

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

pub mod display;
pub mod prompt;
