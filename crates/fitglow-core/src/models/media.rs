// ABOUTME: Signed media upload descriptors issued by the FitGlow API
// ABOUTME: The descriptor authorizes one direct upload to the storage provider

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use serde::{Deserialize, Serialize};

/// `POST /media/presigned-url` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUploadRequest {
    /// Original file name
    pub file_name: String,
    /// MIME type
    pub file_type: String,
}

/// Signed upload parameters for the storage provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    /// Provider endpoint to POST the file to
    pub upload_url: String,
    /// Final URL, when the server can predict it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Provider API key
    pub api_key: String,
    /// Signature timestamp (unix seconds)
    pub timestamp: i64,
    /// Request signature
    pub signature: String,
    /// Provider-side object id
    pub public_id: String,
    /// Provider-side folder
    pub folder: String,
}

/// Storage provider's answer to a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Public HTTPS URL of the stored file
    pub secure_url: String,
}
