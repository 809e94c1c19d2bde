// ABOUTME: Cross-screen UI state shared by the layout and feature controllers
// ABOUTME: Holds the pending coach badge count and the sidebar collapse flag in watch channels

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use tokio::sync::watch;
use tracing::debug;

/// State that outlives any single screen
#[derive(Debug)]
pub struct UiState {
    pending_coach_count: watch::Sender<usize>,
    sidebar_collapsed: watch::Sender<bool>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Expanded sidebar, no pending coaches known
    #[must_use]
    pub fn new() -> Self {
        let (pending_coach_count, _) = watch::channel(0);
        let (sidebar_collapsed, _) = watch::channel(false);
        Self {
            pending_coach_count,
            sidebar_collapsed,
        }
    }

    /// Number of coaches awaiting verification, as of the last coach list fetch
    #[must_use]
    pub fn pending_coach_count(&self) -> usize {
        *self.pending_coach_count.borrow()
    }

    /// Publish a freshly computed pending coach count
    pub fn set_pending_coach_count(&self, count: usize) {
        debug!(count, "Pending coach count updated");
        self.pending_coach_count.send_replace(count);
    }

    /// Receiver for badge updates
    #[must_use]
    pub fn subscribe_pending_coach_count(&self) -> watch::Receiver<usize> {
        self.pending_coach_count.subscribe()
    }

    /// Whether the sidebar is collapsed
    #[must_use]
    pub fn sidebar_collapsed(&self) -> bool {
        *self.sidebar_collapsed.borrow()
    }

    /// Flip the sidebar between collapsed and expanded, returning the new value
    pub fn toggle_sidebar(&self) -> bool {
        let mut collapsed = false;
        self.sidebar_collapsed.send_modify(|value| {
            *value = !*value;
            collapsed = *value;
        });
        collapsed
    }
}
