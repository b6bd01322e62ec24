//! The batch uploader component.

use crate::{generate_object_name, load_bytes, render_preview, validate_file};
use futures_util::stream::{self, Stream, StreamExt};
use memelyco_core::{AppEvent, LocalFile, MediaKind, PendingUpload, UploadProgress};
use memelyco_error::{MemelycoResult, ValidationError};
use memelyco_interface::{EventBus, StorageClient, UploadOptions, UploadReceipt};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Shown when a selected file is neither an image nor a video.
pub const INVALID_SELECTION_MESSAGE: &str = "Please select a valid image or video";

/// Shown once every staged file is stored.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Memes uploaded successfully!";

/// Shown when a batch stops at a failed upload.
pub const UPLOAD_ERROR_MESSAGE: &str = "Error uploading memes. Please try again.";

/// What the uploader currently reports to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_more::Display)]
pub enum UploaderStatus {
    /// Nothing in flight and nothing to report
    #[default]
    #[display("idle")]
    Idle,
    /// A batch is running
    #[display("uploading {}", _0)]
    Uploading(UploadProgress),
    /// The last batch or selection succeeded
    #[display("{}", _0)]
    Succeeded(String),
    /// The last batch or selection failed
    #[display("{}", _0)]
    Failed(String),
}

/// Result of one step of a batch.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum UploadOutcome {
    /// The file is stored
    #[display("{} stored as {} ({})", original, receipt.path, progress)]
    Uploaded {
        /// Name of the local file
        original: String,
        /// Where the backend stored it
        receipt: UploadReceipt,
        /// Progress after this file
        progress: UploadProgress,
    },
    /// The file could not be stored; the batch ends here
    #[display("{} failed: {} ({})", original, error, progress)]
    Failed {
        /// Name of the local file
        original: String,
        /// Error detail
        error: String,
        /// Progress before this file
        progress: UploadProgress,
    },
}

/// Outcome of staging several files at once.
#[derive(Debug, Default)]
pub struct StagingReport {
    /// Files added to the pending list
    pub staged: usize,
    /// Files left out, one error each
    pub rejected: Vec<ValidationError>,
}

/// Summary of a whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    /// Receipts of stored files, in upload order
    pub receipts: Vec<UploadReceipt>,
    /// Error detail of the failing file, if the batch stopped early
    pub failure: Option<String>,
    /// Final progress
    pub progress: UploadProgress,
}

impl UploadReport {
    /// Whether every file of the batch is stored.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Stages files and uploads them to a storage bucket.
pub struct Uploader {
    storage: Arc<dyn StorageClient>,
    events: EventBus,
    pending: Vec<PendingUpload>,
    upload_options: UploadOptions,
    status: UploaderStatus,
}

impl Uploader {
    /// Create an uploader that announces completed batches on `events`.
    pub fn new(storage: Arc<dyn StorageClient>, events: EventBus) -> Self {
        Self {
            storage,
            events,
            pending: Vec::new(),
            upload_options: UploadOptions::default(),
            status: UploaderStatus::Idle,
        }
    }

    /// Send these options with every upload; the content type is set per file.
    pub fn with_upload_options(mut self, options: UploadOptions) -> Self {
        self.upload_options = options;
        self
    }

    /// Validate a file and append it to the pending list.
    ///
    /// Clears the previous status message. A rejected file leaves the pending
    /// list untouched and sets the invalid selection message.
    pub fn stage_file(&mut self, file: LocalFile) -> Result<MediaKind, ValidationError> {
        self.status = UploaderStatus::Idle;
        match validate_file(&file) {
            Ok(kind) => {
                debug!(file = %file.name, kind = %kind, "Staged file");
                self.pending.push(PendingUpload::new(file, kind));
                Ok(kind)
            }
            Err(e) => {
                warn!(error = %e, "Rejected selected file");
                self.status = UploaderStatus::Failed(INVALID_SELECTION_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Stage every file of a selection or drop, each validated on its own.
    pub fn stage_files(&mut self, files: impl IntoIterator<Item = LocalFile>) -> StagingReport {
        let mut report = StagingReport::default();
        for file in files {
            match self.stage_file(file) {
                Ok(_) => report.staged += 1,
                Err(e) => report.rejected.push(e),
            }
        }
        // A later valid file must not hide an earlier rejection.
        if !report.rejected.is_empty() {
            self.status = UploaderStatus::Failed(INVALID_SELECTION_MESSAGE.to_string());
        }
        report
    }

    /// Remove one staged file; `None` if the index is out of range.
    pub fn remove_staged(&mut self, index: usize) -> Option<PendingUpload> {
        (index < self.pending.len()).then(|| self.pending.remove(index))
    }

    /// Drop every staged file.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Staged files in selection order.
    pub fn pending(&self) -> &[PendingUpload] {
        &self.pending
    }

    /// Render previews for staged files that have none yet.
    ///
    /// A file that cannot be read keeps a pending preview. Returns how many
    /// previews were rendered.
    pub async fn render_previews(&mut self) -> usize {
        let mut rendered = 0;
        for upload in self.pending.iter_mut().filter(|u| u.preview_pending()) {
            match render_preview(upload.file()).await {
                Ok(preview) => {
                    upload.set_preview(preview);
                    rendered += 1;
                }
                Err(e) => warn!(file = %upload.file().name, error = %e, "Preview unavailable"),
            }
        }
        rendered
    }

    /// Current status.
    pub fn status(&self) -> &UploaderStatus {
        &self.status
    }

    /// Upload the pending files one at a time, in staging order.
    ///
    /// Each stored file is removed from the pending list and yields
    /// [`UploadOutcome::Uploaded`]. The first failure yields
    /// [`UploadOutcome::Failed`] and ends the stream; files stored before it
    /// stay stored and the rest stay pending. When the last file is stored a
    /// [`AppEvent::MemeUploaded`] is published. With nothing pending the
    /// stream is empty and nothing changes.
    ///
    /// The status reads [`UploaderStatus::Uploading`] only while the stream is
    /// being polled. Dropping the stream before it ends returns the status to
    /// [`UploaderStatus::Idle`].
    pub fn upload_all(&mut self) -> impl Stream<Item = UploadOutcome> + '_ {
        let total = self.pending.len();
        if total == 0 {
            debug!("Nothing staged, skipping upload");
        } else {
            info!(total, backend = self.storage.backend_name(), "Starting upload batch");
        }

        let run = BatchRun {
            uploader: self,
            total,
            paths: Vec::new(),
            finished: total == 0,
        };

        stream::unfold(run, |mut run| async move {
            if run.finished {
                return None;
            }
            let outcome = run.step().await;
            Some((outcome, run))
        })
    }

    /// Run [`Uploader::upload_all`] to the end and summarize it.
    pub async fn upload_all_report(&mut self) -> UploadReport {
        let total = self.pending.len();
        let outcomes: Vec<UploadOutcome> = self.upload_all().collect().await;

        let mut report = UploadReport {
            receipts: Vec::new(),
            failure: None,
            progress: UploadProgress::new(0, total),
        };
        for outcome in outcomes {
            match outcome {
                UploadOutcome::Uploaded {
                    receipt, progress, ..
                } => {
                    report.receipts.push(receipt);
                    report.progress = progress;
                }
                UploadOutcome::Failed { error, .. } => report.failure = Some(error),
            }
        }
        report
    }

    #[instrument(skip(self, file), fields(file = %file.name))]
    async fn upload_one(&self, file: &LocalFile) -> MemelycoResult<UploadReceipt> {
        let bytes = load_bytes(&file.source).await?;
        let name = generate_object_name(&file.name);
        let options = self
            .upload_options
            .clone()
            .with_content_type(file.content_type.clone());

        debug!(object = %name, size = bytes.len(), "Uploading staged file");
        self.storage.upload(&name, bytes, &options).await
    }
}

impl std::fmt::Debug for Uploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Uploader")
            .field("backend", &self.storage.backend_name())
            .field("pending", &self.pending.len())
            .field("status", &self.status)
            .finish()
    }
}

/// State carried between the steps of one batch.
struct BatchRun<'a> {
    uploader: &'a mut Uploader,
    total: usize,
    paths: Vec<String>,
    finished: bool,
}

impl BatchRun<'_> {
    async fn step(&mut self) -> UploadOutcome {
        let uploaded = self.paths.len();
        self.uploader.status = UploaderStatus::Uploading(UploadProgress::new(uploaded, self.total));
        let file = match self.uploader.pending.first() {
            Some(upload) => upload.file().clone(),
            None => {
                // Unreachable: the batch holds the uploader exclusively.
                self.finished = true;
                return UploadOutcome::Failed {
                    original: String::new(),
                    error: "pending list emptied during upload".to_string(),
                    progress: UploadProgress::new(uploaded, self.total),
                };
            }
        };

        match self.uploader.upload_one(&file).await {
            Ok(receipt) => {
                self.uploader.pending.remove(0);
                self.paths.push(receipt.path.clone());
                let progress = UploadProgress::new(self.paths.len(), self.total);
                debug!(progress = %progress, "Stored file");
                self.uploader.status = UploaderStatus::Uploading(progress);

                if progress.is_complete() {
                    self.finish();
                }

                UploadOutcome::Uploaded {
                    original: file.name,
                    receipt,
                    progress,
                }
            }
            Err(e) => {
                error!(
                    file = %file.name,
                    error = %e,
                    uploaded,
                    total = self.total,
                    "Upload failed, aborting batch"
                );
                self.finished = true;
                self.uploader.status = UploaderStatus::Failed(UPLOAD_ERROR_MESSAGE.to_string());
                UploadOutcome::Failed {
                    original: file.name,
                    error: e.to_string(),
                    progress: UploadProgress::new(uploaded, self.total),
                }
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.uploader.pending.clear();
        self.uploader.status = UploaderStatus::Succeeded(UPLOAD_SUCCESS_MESSAGE.to_string());
        let listeners = self.uploader.events.publish(AppEvent::MemeUploaded {
            paths: self.paths.clone(),
        });
        info!(uploaded = self.paths.len(), listeners, "Upload batch complete");
    }
}

impl Drop for BatchRun<'_> {
    fn drop(&mut self) {
        if !self.finished && matches!(self.uploader.status, UploaderStatus::Uploading(_)) {
            warn!(
                uploaded = self.paths.len(),
                total = self.total,
                "Upload batch dropped before completion"
            );
            self.uploader.status = UploaderStatus::Idle;
        }
    }
}
