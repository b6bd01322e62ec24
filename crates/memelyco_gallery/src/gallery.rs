//! The gallery component.

use crate::{apply_sort, resolve_items};
use chrono::Utc;
use memelyco_core::{AppEvent, MediaItem, SortMode};
use memelyco_error::MemelycoResult;
use memelyco_interface::{ListOptions, StorageClient};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

/// Message shown when the listing fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading memes. Please refresh the page.";

/// What the gallery currently shows.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GalleryState {
    /// A listing is in flight
    #[display("loading")]
    Loading,
    /// Items in display order
    #[display("ready ({} items)", _0.len())]
    Ready(Vec<MediaItem>),
    /// The last listing failed; the gallery is empty
    #[display("failed: {}", _0)]
    Failed(String),
}

impl GalleryState {
    /// Items on display; empty unless ready.
    pub fn items(&self) -> &[MediaItem] {
        match self {
            GalleryState::Ready(items) => items,
            _ => &[],
        }
    }
}

/// Gallery backed by a storage bucket.
///
/// State changes are published on a watch channel; see [`Gallery::watch`].
pub struct Gallery {
    storage: Arc<dyn StorageClient>,
    list_options: ListOptions,
    sort_mode: SortMode,
    /// Items of the last successful load, in listing order
    listed: Vec<MediaItem>,
    rng: StdRng,
    state: watch::Sender<GalleryState>,
}

impl Gallery {
    /// Create a gallery in the `Loading` state; nothing is fetched until [`Gallery::load`].
    pub fn new(storage: Arc<dyn StorageClient>) -> Self {
        Self::with_rng(storage, StdRng::from_entropy())
    }

    /// Create a gallery whose random ordering is driven by `rng`.
    pub fn with_rng(storage: Arc<dyn StorageClient>, rng: StdRng) -> Self {
        let (state, _) = watch::channel(GalleryState::Loading);
        Self {
            storage,
            list_options: ListOptions::default(),
            sort_mode: SortMode::default(),
            listed: Vec::new(),
            rng,
            state,
        }
    }

    /// Use these listing options on every load.
    pub fn with_list_options(mut self, options: ListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// Start with another ordering.
    pub fn with_sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    /// Fetch the listing and rebuild every item from scratch.
    ///
    /// On failure the gallery switches to [`GalleryState::Failed`] with an
    /// empty list and the error is returned; nothing is retried.
    #[instrument(skip(self), fields(backend = self.storage.backend_name(), mode = %self.sort_mode))]
    pub async fn load(&mut self) -> MemelycoResult<usize> {
        self.state.send_replace(GalleryState::Loading);

        let raw = match self.storage.list(&self.list_options).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Failed to load gallery");
                self.listed.clear();
                self.state
                    .send_replace(GalleryState::Failed(LOAD_ERROR_MESSAGE.to_string()));
                return Err(e);
            }
        };

        self.listed = resolve_items(raw, self.storage.as_ref(), Utc::now());
        let count = self.listed.len();
        self.publish_ordered();

        info!(count, "Gallery loaded");
        Ok(count)
    }

    /// Change the ordering of the loaded items without refetching.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        debug!(from = %self.sort_mode, to = %mode, "Changing sort mode");
        self.sort_mode = mode;
        let ready = matches!(*self.state.borrow(), GalleryState::Ready(_));
        if ready {
            self.publish_ordered();
        }
    }

    /// Draw a fresh permutation when in random mode.
    pub fn reshuffle(&mut self) {
        if self.sort_mode == SortMode::Random {
            self.set_sort_mode(SortMode::Random);
        }
    }

    /// React to a notification; reloads after a completed upload batch.
    ///
    /// Returns whether the event triggered a reload.
    pub async fn handle_event(&mut self, event: &AppEvent) -> MemelycoResult<bool> {
        match event {
            AppEvent::MemeUploaded { paths } => {
                debug!(uploaded = paths.len(), "Upload completed, reloading gallery");
                self.load().await?;
                Ok(true)
            }
            AppEvent::ShowUploadDialog => Ok(false),
        }
    }

    /// Current ordering.
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GalleryState {
        self.state.borrow().clone()
    }

    /// Items currently on display.
    pub fn items(&self) -> Vec<MediaItem> {
        self.state.borrow().items().to_vec()
    }

    /// Observe state changes.
    pub fn watch(&self) -> watch::Receiver<GalleryState> {
        self.state.subscribe()
    }

    fn publish_ordered(&mut self) {
        let mut items = self.listed.clone();
        apply_sort(&mut items, self.sort_mode, &mut self.rng);
        self.state.send_replace(GalleryState::Ready(items));
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("backend", &self.storage.backend_name())
            .field("sort_mode", &self.sort_mode)
            .field("state", &*self.state.borrow())
            .finish()
    }
}
