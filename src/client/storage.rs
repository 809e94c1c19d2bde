// ABOUTME: Direct file uploads to the media storage provider using signed parameters
// ABOUTME: Sends a multipart form to the provider URL; never carries the API bearer token

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::constants::STORAGE_SERVICE_NAME;
use crate::errors::{AppError, AppResult};
use crate::models::{PresignedUpload, UploadResult};

/// File selected for upload
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name
    pub file_name: String,
    /// MIME type
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Performs the provider half of a signed upload
#[async_trait]
pub trait StorageUploader: Send + Sync {
    /// Upload `file` using `signed`, returning the provider's public URL
    async fn upload(&self, signed: &PresignedUpload, file: UploadFile) -> AppResult<String>;
}

/// reqwest implementation of [`StorageUploader`]
#[derive(Debug, Clone)]
pub struct HttpStorageUploader {
    http_client: Client,
}

impl HttpStorageUploader {
    /// Uploader whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http_client })
    }
}

fn upload_form(signed: &PresignedUpload, file: UploadFile) -> AppResult<Form> {
    let part = Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&file.content_type)
        .map_err(|e| AppError::invalid_input(format!("Invalid content type: {e}")))?;

    Ok(Form::new()
        .part("file", part)
        .text("api_key", signed.api_key.clone())
        .text("timestamp", signed.timestamp.to_string())
        .text("signature", signed.signature.clone())
        .text("public_id", signed.public_id.clone())
        .text("folder", signed.folder.clone()))
}

#[async_trait]
impl StorageUploader for HttpStorageUploader {
    async fn upload(&self, signed: &PresignedUpload, file: UploadFile) -> AppResult<String> {
        debug!(
            file_name = %file.file_name,
            public_id = %signed.public_id,
            "Uploading file to storage provider"
        );
        let form = upload_form(signed, file)?;

        let response = self
            .http_client
            .post(&signed.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::external_service(STORAGE_SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, public_id = %signed.public_id, "Storage provider rejected upload");
            return Err(AppError::external_service(
                STORAGE_SERVICE_NAME,
                format!("Upload failed with HTTP {status}"),
            ));
        }

        let result: UploadResult = response.json().await.map_err(|e| {
            AppError::external_service(STORAGE_SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;
        Ok(result.secure_url)
    }
}
