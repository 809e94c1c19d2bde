// ABOUTME: Standalone media upload command
// ABOUTME: Uploads local files through signed storage parameters and prints the URLs

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::path::{Path, PathBuf};

use anyhow::Result;

use fitglow_admin::client::UploadFile;
use fitglow_admin::features::media::read_upload_file;
use fitglow_admin::routing::Route;

use super::Context;

/// Read every path into memory
pub fn read_all(paths: &[PathBuf]) -> Result<Vec<UploadFile>> {
    Ok(paths
        .iter()
        .map(|path| read_upload_file(path))
        .collect::<Result<Vec<_>, _>>()?)
}

/// Upload `path` if given, returning its URL
pub async fn upload_optional(ctx: &Context, path: Option<&Path>) -> Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let file = read_upload_file(path)?;
    Ok(Some(ctx.media()?.upload(file).await?))
}

pub async fn upload(ctx: &mut Context, paths: &[PathBuf]) -> Result<()> {
    ctx.enter(Route::Dashboard)?;
    let files = read_all(paths)?;
    let urls = ctx.media()?.upload_many(files).await?;
    for (path, url) in paths.iter().zip(urls) {
        println!("{}\t{url}", path.display());
    }
    Ok(())
}
