// ABOUTME: Durable storage for the admin session's three string entries
// ABOUTME: File-backed store with atomic replace, plus an in-memory store for tests

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! # Persisted Session Store
//!
//! The session is persisted as three string-keyed entries: access token,
//! refresh token and serialized user profile. They are written and cleared
//! as one group and [`SessionStore::load`] yields either all three or
//! nothing. A stored group that is missing entries or cannot be decoded is
//! reported as [`ErrorCode::CorruptSession`](crate::errors::ErrorCode) so the
//! session manager can discard it.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};

/// Raw persisted session, user profile still serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    /// Bearer access token
    pub access_token: String,
    /// Refresh token
    pub refresh_token: String,
    /// Serialized user profile (JSON)
    pub user: String,
}

impl PersistedSession {
    fn into_entries(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (storage_keys::ACCESS_TOKEN.to_owned(), self.access_token),
            (storage_keys::REFRESH_TOKEN.to_owned(), self.refresh_token),
            (storage_keys::USER.to_owned(), self.user),
        ])
    }

    /// Rebuild the group from stored entries.
    ///
    /// No entries means no session. Some but not all entries is corruption.
    fn from_entries(mut entries: BTreeMap<String, String>) -> AppResult<Option<Self>> {
        let access_token = entries.remove(storage_keys::ACCESS_TOKEN);
        let refresh_token = entries.remove(storage_keys::REFRESH_TOKEN);
        let user = entries.remove(storage_keys::USER);

        match (access_token, refresh_token, user) {
            (None, None, None) => Ok(None),
            (Some(access_token), Some(refresh_token), Some(user)) => Ok(Some(Self {
                access_token,
                refresh_token,
                user,
            })),
            _ => Err(AppError::corrupt_session(
                "Persisted session is missing entries",
            )),
        }
    }
}

/// Durable key/value storage for the session group
///
/// Only the session manager writes to a store.
pub trait SessionStore: Send + Sync {
    /// Write all three entries as one unit
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write cannot be completed.
    fn save(&self, session: &PersistedSession) -> AppResult<()>;

    /// Read the stored group
    ///
    /// # Errors
    ///
    /// Returns `CorruptSession` for a partial or undecodable group and
    /// `StorageError` for I/O failures.
    fn load(&self) -> AppResult<Option<PersistedSession>>;

    /// Remove all three entries; clearing an empty store succeeds
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be removed.
    fn clear(&self) -> AppResult<()>;
}

/// Session store backed by a single JSON document on disk
///
/// Saves write a sibling temp file and rename it over the document, so a
/// reader sees either the previous group or the new one.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at `path`; parent directories are created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn create_private(path: &Path) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        options.open(path)
    }

    fn remove_if_present(path: &Path) -> AppResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &PersistedSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let document = serde_json::to_vec_pretty(&session.clone().into_entries())?;
        let temp = self.temp_path();
        let write_result = Self::create_private(&temp).and_then(|mut file| {
            file.write_all(&document)?;
            file.sync_all()
        });
        if let Err(e) = write_result {
            let _ = fs::remove_file(&temp);
            return Err(AppError::storage(format!(
                "Failed to write {}: {e}",
                temp.display()
            )));
        }

        fs::rename(&temp, &self.path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "Session persisted");
        Ok(())
    }

    fn load(&self) -> AppResult<Option<PersistedSession>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let entries: BTreeMap<String, String> = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::corrupt_session(format!("Session document is not readable: {e}"))
        })?;
        PersistedSession::from_entries(entries)
    }

    fn clear(&self) -> AppResult<()> {
        Self::remove_if_present(&self.temp_path())?;
        Self::remove_if_present(&self.path)?;
        debug!(path = %self.path.display(), "Session cleared");
        Ok(())
    }
}

/// Process-local session store
///
/// Used for ephemeral sessions and in tests, where [`Self::put_raw`] allows
/// simulating corrupted or partial storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored entry
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store lock is poisoned.
    pub fn raw_entries(&self) -> AppResult<BTreeMap<String, String>> {
        Ok(self.lock()?.clone())
    }

    /// Overwrite a single entry, bypassing the group invariant
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store lock is poisoned.
    pub fn put_raw(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::storage("Session store lock poisoned"))
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &PersistedSession) -> AppResult<()> {
        *self.lock()? = session.clone().into_entries();
        Ok(())
    }

    fn load(&self) -> AppResult<Option<PersistedSession>> {
        PersistedSession::from_entries(self.lock()?.clone())
    }

    fn clear(&self) -> AppResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}
