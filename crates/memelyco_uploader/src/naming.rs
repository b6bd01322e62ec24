//! Object names for uploads.

use memelyco_core::file_extension;
use uuid::Uuid;

/// Fresh object name: a random token plus the original extension, lowercased.
///
/// Names without an extension get the bare token.
///
/// # Examples
///
/// ```
/// use memelyco_uploader::generate_object_name;
///
/// let name = generate_object_name("Funny Cat.PNG");
/// assert!(name.ends_with(".png"));
/// assert_ne!(name, generate_object_name("Funny Cat.PNG"));
/// ```
pub fn generate_object_name(original: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    match file_extension(original) {
        Some(extension) => format!("{}.{}", token, extension.to_ascii_lowercase()),
        None => token,
    }
}
