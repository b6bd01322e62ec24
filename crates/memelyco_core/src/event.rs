//! In-process notifications exchanged between components.

use serde::{Deserialize, Serialize};

/// Notification published on the application event bus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum AppEvent {
    /// Raised by the navigation bar; opens the upload surface.
    #[display("show-upload-dialog")]
    ShowUploadDialog,
    /// Raised by the uploader once a whole batch is stored.
    #[display("meme-uploaded")]
    MemeUploaded {
        /// Object names stored by the batch, in upload order
        paths: Vec<String>,
    },
}
