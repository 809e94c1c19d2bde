// ABOUTME: Generic list-mutate-refresh controller shared by every CRUD screen
// ABOUTME: Tracks loading/mutating phases, parks destructive actions for confirmation, refetches after success

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! # Resource List Controller
//!
//! Every CRUD screen follows the same cycle: fetch the whole collection,
//! render it locally paged and filtered, run a mutation, then refetch the
//! whole collection. [`ResourceListController`] implements that cycle once;
//! features plug in a [`ResourceService`] describing how to list and mutate
//! their resource.
//!
//! ## Ordering
//!
//! Each fetch and each mutation takes a new generation number. A fetch whose
//! generation is no longer current when its response arrives is discarded
//! without touching the list or the loading phase, so an older response can
//! never overwrite a newer one. After [`ResourceListController::unmount`] all
//! late responses are discarded.
//!
//! The state mutex is never held across an `.await`.

/// Local filtering and pagination
pub mod list_view;

use std::fmt::{self, Debug};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::{debug, info, warn};

pub use list_view::{total_pages, ListFilter, ListView, NoFilter, PageSlice};

use crate::errors::{AppError, AppResult};
use crate::notifications::Notifier;

/// A mutation a list screen can request
pub trait MutationAction: Clone + Debug + Send + Sync + 'static {
    /// Whether the operator must confirm before the request is sent
    fn requires_confirmation(&self) -> bool;

    /// Notification text after the server accepted the mutation
    fn success_message(&self) -> String;

    /// Notification text after the mutation failed
    fn failure_message(&self) -> String;

    /// Client-side input checks, run before anything is parked or sent
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first offending field.
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

/// How a feature lists and mutates its resource
#[async_trait]
pub trait ResourceService: Send + Sync + 'static {
    /// Row type
    type Item: Clone + Debug + Send + Sync + 'static;

    /// Mutations offered by the screen
    type Action: MutationAction;

    /// Plural noun used in load failure messages ("products")
    fn resource_name(&self) -> &'static str;

    /// Fetch the entire collection
    async fn fetch_all(&self) -> AppResult<Vec<Self::Item>>;

    /// Send `action` to the server
    async fn execute(&self, action: &Self::Action) -> AppResult<()>;

    /// Called with each freshly applied list
    fn on_loaded(&self, _items: &[Self::Item]) {}
}

/// Lifecycle phase of a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fetch in flight
    Loading,
    /// List shown, idle
    Loaded,
    /// Mutation in flight
    Mutating,
}

/// Result of a fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Response replaced the list; holds the new length
    Applied(usize),
    /// Request failed; previous list kept
    Failed(AppError),
    /// Response arrived after a newer request or after unmount
    Discarded,
}

/// Result of requesting or confirming an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Parked until the operator confirms
    AwaitingConfirmation,
    /// Server accepted the mutation and the list was refetched
    Applied,
    /// `confirm` with nothing parked
    NothingPending,
}

#[derive(Debug)]
struct ListState<I, A> {
    items: Vec<I>,
    phase: Phase,
    pending: Option<A>,
    generation: u64,
    mounted: bool,
}

/// Screen-scoped controller for one resource list
///
/// Cloning yields another handle to the same screen state.
pub struct ResourceListController<S: ResourceService> {
    service: Arc<S>,
    notifier: Notifier,
    state: Arc<Mutex<ListState<S::Item, S::Action>>>,
}

impl<S: ResourceService> Clone for ResourceListController<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            notifier: self.notifier.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: ResourceService> Debug for ResourceListController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ResourceListController")
            .field("resource", &self.service.resource_name())
            .field("phase", &state.phase)
            .field("items", &state.items.len())
            .field("pending", &state.pending)
            .field("mounted", &state.mounted)
            .finish()
    }
}

impl<S: ResourceService> ResourceListController<S> {
    /// Mount a controller: empty list, `Loading`, nothing parked
    pub fn mount(service: Arc<S>, notifier: Notifier) -> Self {
        debug!(resource = service.resource_name(), "List controller mounted");
        Self {
            service,
            notifier,
            state: Arc::new(Mutex::new(ListState {
                items: Vec::new(),
                phase: Phase::Loading,
                pending: None,
                generation: 0,
                mounted: true,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListState<S::Item, S::Action>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Service backing this screen
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetch the full collection and replace the list with it
    ///
    /// On failure an error notification is sent and the previous list is kept.
    pub async fn fetch_all(&self) -> FetchOutcome {
        let generation = {
            let mut state = self.lock();
            if !state.mounted {
                return FetchOutcome::Discarded;
            }
            state.generation += 1;
            state.phase = Phase::Loading;
            state.generation
        };

        let result = self.service.fetch_all().await;

        let mut state = self.lock();
        if !state.mounted || state.generation != generation {
            debug!(
                resource = self.service.resource_name(),
                generation,
                current = state.generation,
                "Discarding superseded list response"
            );
            return FetchOutcome::Discarded;
        }

        state.phase = Phase::Loaded;
        match result {
            Ok(items) => {
                self.service.on_loaded(&items);
                let count = items.len();
                state.items = items;
                drop(state);
                debug!(resource = self.service.resource_name(), count, "List loaded");
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                drop(state);
                let resource = self.service.resource_name();
                warn!(resource, error = %e, "Failed to load list");
                self.notifier.error(format!("Failed to load {resource}"));
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Request `action`
    ///
    /// Actions needing confirmation are parked (replacing any parked one) and
    /// nothing is sent. Others execute immediately.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the action fails validation, or the server
    /// error if an immediate execution fails.
    pub async fn request(&self, action: S::Action) -> AppResult<ActionOutcome> {
        action.validate()?;
        if action.requires_confirmation() {
            debug!(?action, "Action awaiting confirmation");
            self.lock().pending = Some(action);
            return Ok(ActionOutcome::AwaitingConfirmation);
        }
        self.execute(action).await
    }

    /// Execute the parked action
    ///
    /// # Errors
    ///
    /// Returns the server error if the mutation fails.
    pub async fn confirm(&self) -> AppResult<ActionOutcome> {
        let parked = self.lock().pending.take();
        let Some(action) = parked else {
            return Ok(ActionOutcome::NothingPending);
        };
        self.execute(action).await
    }

    /// Discard the parked action
    pub fn cancel(&self) {
        if let Some(action) = self.lock().pending.take() {
            debug!(?action, "Action cancelled");
        }
    }

    async fn execute(&self, action: S::Action) -> AppResult<ActionOutcome> {
        {
            let mut state = self.lock();
            if !state.mounted {
                return Err(AppError::internal("List screen is no longer mounted"));
            }
            state.generation += 1;
            state.phase = Phase::Mutating;
        }

        match self.service.execute(&action).await {
            Ok(()) => {
                info!(?action, "Mutation applied");
                self.notifier.success(action.success_message());
                self.fetch_all().await;
                Ok(ActionOutcome::Applied)
            }
            Err(e) => {
                warn!(?action, error = %e, "Mutation failed");
                self.notifier.error(action.failure_message());
                let mut state = self.lock();
                if state.mounted && state.phase == Phase::Mutating {
                    state.phase = Phase::Loaded;
                }
                Err(e)
            }
        }
    }

    /// Stop applying responses; later fetches are no-ops
    pub fn unmount(&self) {
        let mut state = self.lock();
        state.mounted = false;
        state.pending = None;
        debug!(resource = self.service.resource_name(), "List controller unmounted");
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    /// Whether the controller still applies responses
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    /// Parked action, if any
    #[must_use]
    pub fn pending_confirmation(&self) -> Option<S::Action> {
        self.lock().pending.clone()
    }

    /// Snapshot of the full list
    #[must_use]
    pub fn items(&self) -> Vec<S::Item> {
        self.lock().items.clone()
    }

    /// Apply `view` to the current list
    #[must_use]
    pub fn page<F>(&self, view: &ListView<F>) -> ListPage<S::Item>
    where
        F: ListFilter<S::Item>,
    {
        let state = self.lock();
        let slice = view.apply(&state.items);
        ListPage {
            rows: slice.items.into_iter().cloned().collect(),
            page: slice.page,
            total_pages: slice.total_pages,
            total_items: slice.total_items,
        }
    }
}

/// Owned copy of one rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    /// Rows on this page
    pub rows: Vec<T>,
    /// 1-based page number shown
    pub page: usize,
    /// Page count for the filtered list
    pub total_pages: usize,
    /// Items passing the filter
    pub total_items: usize,
}
