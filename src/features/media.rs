// ABOUTME: Two-step media upload: request signed parameters from the API, then post to storage
// ABOUTME: Multiple files upload concurrently and fail as a group

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fs;
use std::path::Path;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{info, warn};

use crate::client::{AdminApi, StorageUploader, UploadFile};
use crate::errors::{AppError, AppResult};
use crate::models::PresignedUploadRequest;
use crate::notifications::Notifier;

/// Uploads operator-selected files and returns their public URLs
#[derive(Clone)]
pub struct MediaUploader {
    api: Arc<dyn AdminApi>,
    storage: Arc<dyn StorageUploader>,
    notifier: Notifier,
}

impl MediaUploader {
    /// Uploader signing through `api` and posting through `storage`
    pub fn new(
        api: Arc<dyn AdminApi>,
        storage: Arc<dyn StorageUploader>,
        notifier: Notifier,
    ) -> Self {
        Self {
            api,
            storage,
            notifier,
        }
    }

    async fn upload_one(&self, file: UploadFile) -> AppResult<String> {
        let signed = self
            .api
            .presign_upload(&PresignedUploadRequest {
                file_name: file.file_name.clone(),
                file_type: file.content_type.clone(),
            })
            .await?;
        let url = self.storage.upload(&signed, file).await?;
        info!(public_id = %signed.public_id, "File uploaded");
        Ok(url)
    }

    /// Upload one file
    ///
    /// # Errors
    ///
    /// Returns the signing or storage failure; an error notification is sent.
    pub async fn upload(&self, file: UploadFile) -> AppResult<String> {
        self.upload_one(file).await.inspect_err(|e| {
            warn!(error = %e, "Upload failed");
            self.notifier.error("Failed to upload file");
        })
    }

    /// Upload several files concurrently, preserving order
    ///
    /// # Errors
    ///
    /// Fails as soon as any upload fails; no URLs are returned in that case.
    pub async fn upload_many(&self, files: Vec<UploadFile>) -> AppResult<Vec<String>> {
        try_join_all(files.into_iter().map(|file| self.upload_one(file)))
            .await
            .inspect_err(|e| {
                warn!(error = %e, "Batch upload failed");
                self.notifier.error("Failed to upload files");
            })
    }
}

/// Guess a MIME type from a file extension
#[must_use]
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

/// Read a local file into an [`UploadFile`]
///
/// # Errors
///
/// Returns `InvalidInput` if the path has no file name or cannot be read.
pub fn read_upload_file(path: &Path) -> AppResult<UploadFile> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::invalid_input(format!("Not a file: {}", path.display())))?
        .to_owned();
    let bytes = fs::read(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
    })?;
    Ok(UploadFile {
        file_name,
        content_type: content_type_for(path).to_owned(),
        bytes,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn content_types() {
        assert_eq!(content_type_for(Path::new("a/b/Photo.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thumb.png");
        fs::write(&path, [1_u8, 2, 3]).unwrap();

        let file = read_upload_file(&path).unwrap();
        assert_eq!(file.file_name, "thumb.png");
        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.bytes, vec![1, 2, 3]);
    }
}
