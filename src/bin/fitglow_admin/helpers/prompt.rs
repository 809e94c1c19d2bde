// ABOUTME: Interactive stdin prompts for confirmations and secrets
// ABOUTME: Reads one line per prompt; EOF counts as an empty answer

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

async fn ask(question: &str) -> Result<String> {
    let mut stderr = io::stderr();
    stderr.write_all(question.as_bytes()).await?;
    stderr.flush().await?;

    let mut line = String::new();
    BufReader::new(io::stdin()).read_line(&mut line).await?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Ask a yes/no question; anything but `y`/`yes` is no
pub async fn confirm(question: &str) -> Result<bool> {
    let answer = ask(&format!("{question} [y/N] ")).await?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Ask for the account password
pub async fn password() -> Result<String> {
    ask("Password: ").await
}
