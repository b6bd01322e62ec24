//! Application shell wiring the navigation bar, gallery and uploader together.

use crate::MemelycoConfig;
use memelyco_core::AppEvent;
use memelyco_error::MemelycoResult;
use memelyco_gallery::Gallery;
use memelyco_interface::{EventBus, EventSubscription, ListOptions, StorageClient};
use memelyco_storage::{InMemoryStorage, StorageConfig, SupabaseStorage};
use memelyco_uploader::Uploader;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Endpoint prefix selecting the in-memory backend.
pub const MEMORY_ENDPOINT: &str = "memory://";

/// Build the storage client an endpoint asks for.
///
/// `memory://` selects [`InMemoryStorage`]; anything else is a Supabase project.
pub fn connect_storage(config: &StorageConfig) -> MemelycoResult<Arc<dyn StorageClient>> {
    if config.url.starts_with(MEMORY_ENDPOINT) {
        debug!(bucket = %config.bucket, "Using in-memory storage");
        return Ok(Arc::new(InMemoryStorage::new(config.bucket.clone())));
    }
    Ok(Arc::new(SupabaseStorage::new(config.clone())?))
}

/// Navigation bar; its only action opens the upload surface.
#[derive(Debug, Clone)]
pub struct NavBar {
    events: EventBus,
}

impl NavBar {
    /// Create a navigation bar publishing on `events`.
    pub fn new(events: EventBus) -> Self {
        Self { events }
    }

    /// Ask for the upload surface to open.
    pub fn request_upload(&self) {
        self.events.publish(AppEvent::ShowUploadDialog);
    }
}

/// The whole application: navigation, gallery, uploader and the upload dialog.
pub struct App {
    storage: Arc<dyn StorageClient>,
    nav: NavBar,
    gallery: Gallery,
    uploader: Uploader,
    subscription: EventSubscription,
    upload_dialog_open: bool,
}

impl App {
    /// Assemble the components around one storage client and one event bus.
    pub fn new(storage: Arc<dyn StorageClient>, config: &MemelycoConfig) -> Self {
        let events = EventBus::default();
        let subscription = events.subscribe();

        let gallery = Gallery::new(storage.clone())
            .with_list_options(config.list_options())
            .with_sort_mode(config.gallery.default_sort);
        let uploader = Uploader::new(storage.clone(), events.clone())
            .with_upload_options(config.upload_options());

        Self {
            storage,
            nav: NavBar::new(events),
            gallery,
            uploader,
            subscription,
            upload_dialog_open: false,
        }
    }

    /// Check the bucket, then load the gallery.
    ///
    /// A failed check is only logged; a failed load leaves the gallery in its
    /// error state and is returned.
    pub async fn start(&mut self) -> MemelycoResult<usize> {
        if let Err(e) = self.check_storage().await {
            warn!(error = %e, "Continuing despite storage check failure");
        }
        self.gallery.load().await
    }

    /// List the bucket once and log setup guidance on failure.
    ///
    /// Returns the number of objects the check listed.
    #[instrument(skip(self), fields(backend = self.storage.backend_name()))]
    pub async fn check_storage(&self) -> MemelycoResult<usize> {
        match self.storage.list(&ListOptions::default()).await {
            Ok(objects) => {
                info!(count = objects.len(), "Storage bucket is reachable");
                Ok(objects.len())
            }
            Err(e) => {
                error!(error = %e, "Storage bucket check failed");
                for hint in SETUP_HINTS {
                    warn!("{}", hint);
                }
                Err(e)
            }
        }
    }

    /// Handle every queued notification; returns how many were handled.
    ///
    /// `show-upload-dialog` opens the dialog. `meme-uploaded` closes it and
    /// reloads the gallery; a failed reload is left in the gallery state.
    pub async fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.subscription.try_recv() {
            debug!(event = %event, "Handling event");
            match &event {
                AppEvent::ShowUploadDialog => self.upload_dialog_open = true,
                AppEvent::MemeUploaded { .. } => self.upload_dialog_open = false,
            }
            if let Err(e) = self.gallery.handle_event(&event).await {
                warn!(error = %e, "Gallery reload failed");
            }
            handled += 1;
        }
        handled
    }

    /// Close the dialog without touching staged files.
    pub fn close_upload_dialog(&mut self) {
        self.upload_dialog_open = false;
    }

    /// Whether the upload dialog is showing.
    pub fn is_upload_dialog_open(&self) -> bool {
        self.upload_dialog_open
    }

    /// Navigation bar.
    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    /// Gallery component.
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Gallery component, mutably.
    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    /// Uploader component.
    pub fn uploader(&self) -> &Uploader {
        &self.uploader
    }

    /// Uploader component, mutably.
    pub fn uploader_mut(&mut self) -> &mut Uploader {
        &mut self.uploader
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("backend", &self.storage.backend_name())
            .field("gallery", &self.gallery)
            .field("uploader", &self.uploader)
            .field("upload_dialog_open", &self.upload_dialog_open)
            .finish()
    }
}

const SETUP_HINTS: [&str; 3] = [
    "Create a public storage bucket named after storage.bucket (default \"memes\")",
    "Allow public SELECT on storage.objects for that bucket",
    "Allow INSERT on storage.objects for that bucket to the key in use",
];
