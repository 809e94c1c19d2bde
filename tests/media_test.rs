// ABOUTME: Integration tests for signed media uploads
// ABOUTME: Uses a recording storage provider to check signing, ordering and group failure

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::{Call, FakeAdminApi};
use fitglow_admin::client::{StorageUploader, UploadFile};
use fitglow_admin::errors::{AppError, AppResult, ErrorCode};
use fitglow_admin::features::media::{read_upload_file, MediaUploader};
use fitglow_admin::models::PresignedUpload;
use fitglow_admin::notifications::{Notification, Notifier};
use tempfile::TempDir;

/// Storage provider that records what it receives
#[derive(Default)]
struct RecordingStorage {
    received: Mutex<Vec<(String, String)>>,
    reject: Option<&'static str>,
}

#[async_trait]
impl StorageUploader for RecordingStorage {
    async fn upload(&self, signed: &PresignedUpload, file: UploadFile) -> AppResult<String> {
        if self.reject == Some(file.file_name.as_str()) {
            return Err(AppError::external_service("Media storage", "HTTP 400"));
        }
        self.received
            .lock()
            .unwrap()
            .push((signed.public_id.clone(), file.content_type.clone()));
        Ok(format!("https://cdn.example.com/{}", signed.public_id))
    }
}

fn file(name: &str, content_type: &str) -> UploadFile {
    UploadFile {
        file_name: name.to_owned(),
        content_type: content_type.to_owned(),
        bytes: vec![1, 2, 3],
    }
}

#[tokio::test]
async fn single_upload_signs_then_posts() {
    let api = FakeAdminApi::new();
    let storage = Arc::new(RecordingStorage::default());
    let uploader = MediaUploader::new(api.clone(), storage.clone(), Notifier::silent());

    let url = uploader.upload(file("cover.png", "image/png")).await.unwrap();

    assert_eq!(url, "https://cdn.example.com/media/cover.png");
    assert_eq!(api.calls(), vec![Call::Presign("cover.png".to_owned())]);
    assert_eq!(
        *storage.received.lock().unwrap(),
        vec![("media/cover.png".to_owned(), "image/png".to_owned())]
    );
}

#[tokio::test]
async fn batch_upload_keeps_input_order() {
    let storage = Arc::new(RecordingStorage::default());
    let uploader = MediaUploader::new(FakeAdminApi::new(), storage, Notifier::silent());

    let urls = uploader
        .upload_many(vec![
            file("a.jpg", "image/jpeg"),
            file("b.jpg", "image/jpeg"),
            file("c.jpg", "image/jpeg"),
        ])
        .await
        .unwrap();

    assert_eq!(
        urls,
        vec![
            "https://cdn.example.com/media/a.jpg",
            "https://cdn.example.com/media/b.jpg",
            "https://cdn.example.com/media/c.jpg",
        ]
    );
}

#[tokio::test]
async fn one_rejected_file_fails_the_batch() {
    let storage = Arc::new(RecordingStorage {
        reject: Some("b.jpg"),
        ..Default::default()
    });
    let (notifier, mut rx) = Notifier::channel();
    let uploader = MediaUploader::new(FakeAdminApi::new(), storage, notifier);

    let error = uploader
        .upload_many(vec![file("a.jpg", "image/jpeg"), file("b.jpg", "image/jpeg")])
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(rx.try_recv().unwrap(), Notification::error("Failed to upload files"));
}

#[tokio::test]
async fn signing_failure_never_reaches_storage() {
    let api = FakeAdminApi::new();
    api.fail_mutations.store(true, Ordering::SeqCst);
    let storage = Arc::new(RecordingStorage::default());
    let (notifier, mut rx) = Notifier::channel();
    let uploader = MediaUploader::new(api, storage.clone(), notifier);

    assert!(uploader.upload(file("x.mp4", "video/mp4")).await.is_err());
    assert!(storage.received.lock().unwrap().is_empty());
    assert_eq!(rx.try_recv().unwrap(), Notification::error("Failed to upload file"));
}

#[test]
fn local_files_get_a_content_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Clip.MP4");
    fs::write(&path, b"video").unwrap();

    let upload = read_upload_file(&path).unwrap();

    assert_eq!(upload.file_name, "Clip.MP4");
    assert_eq!(upload.content_type, "video/mp4");
    assert_eq!(upload.bytes, b"video");

    let missing = read_upload_file(&dir.path().join("nope.png")).unwrap_err();
    assert_eq!(missing.code, ErrorCode::InvalidInput);
}
