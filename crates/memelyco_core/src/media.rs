//! Media classification from file metadata.
//!
//! Kinds are derived from names and declared content types only; file contents
//! are never inspected.

use serde::{Deserialize, Serialize};

/// Extensions (lowercase, without the dot) that classify a listed object as video.
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "ogg", "mov"];

/// Kind of media shown in the gallery.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still or animated image (PNG, JPEG, GIF, WebP, ...)
    #[display("image")]
    Image,
    /// Video clip (MP4, WebM, Ogg, QuickTime)
    #[display("video")]
    Video,
}

impl MediaKind {
    /// Classify a stored object by the extension of its name.
    ///
    /// Anything that is not a known video extension is an image, including
    /// names without any extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use memelyco_core::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_file_name("dance.MP4"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_file_name("cat.png"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_file_name("README"), MediaKind::Image);
    /// ```
    pub fn from_file_name(name: &str) -> Self {
        match file_extension(name) {
            Some(ext)
                if VIDEO_EXTENSIONS
                    .iter()
                    .any(|video| ext.eq_ignore_ascii_case(video)) =>
            {
                MediaKind::Video
            }
            _ => MediaKind::Image,
        }
    }

    /// Classify a local file by its declared content type.
    ///
    /// Returns `None` for anything that is neither `image/*` nor `video/*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use memelyco_core::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_content_type("video/webm"), Some(MediaKind::Video));
    /// assert_eq!(MediaKind::from_content_type("application/pdf"), None);
    /// ```
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        if content_type.starts_with("image/") {
            Some(MediaKind::Image)
        } else if content_type.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(format!("Unknown media kind: {}", s)),
        }
    }
}

/// Text after the last `.` of a file name.
///
/// Returns `None` when the name has no dot or ends with one.
///
/// # Examples
///
/// ```
/// use memelyco_core::file_extension;
///
/// assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
/// assert_eq!(file_extension("noextension"), None);
/// assert_eq!(file_extension("trailing."), None);
/// ```
pub fn file_extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Content type declared for a file picked from disk, inferred from its extension.
///
/// Only covers the formats the gallery can show plus a few common
/// non-media types, so that those are rejected with a meaningful type.
pub fn guess_content_type(name: &str) -> Option<&'static str> {
    let extension = file_extension(name)?.to_lowercase();

    Some(match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogg" => "video/ogg",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "json" => "application/json",
        _ => return None,
    })
}
