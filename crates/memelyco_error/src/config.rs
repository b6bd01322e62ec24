//! Errors raised while assembling Memelyco settings.
//!
//! Settings come from the bundled `memelyco.toml`, values baked in at build
//! time, `~/.config/memelyco/memelyco.toml`, `./memelyco.toml` and the
//! `SUPABASE_URL`/`SUPABASE_KEY`/`SUPABASE_BUCKET` environment overrides.

/// A settings file that could not be read or parsed, or merged settings that
/// no storage client can work with.
///
/// Validation failures name the offending key in `setting`, e.g.
/// `storage.timeout_secs` for a zero request timeout.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Dotted key of the rejected setting, when one is to blame
    pub setting: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Error about a settings source as a whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use memelyco_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to parse configuration: invalid TOML");
    /// assert!(err.setting.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            setting: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error about one setting that fails a requirement.
    ///
    /// # Examples
    ///
    /// ```
    /// use memelyco_error::ConfigError;
    ///
    /// let err = ConfigError::invalid_setting("gallery.list_limit", "must be greater than zero");
    /// assert_eq!(err.message, "gallery.list_limit must be greater than zero");
    /// assert_eq!(err.setting.as_deref(), Some("gallery.list_limit"));
    /// ```
    #[track_caller]
    pub fn invalid_setting(setting: impl Into<String>, requirement: &str) -> Self {
        let location = std::panic::Location::caller();
        let setting = setting.into();
        Self {
            message: format!("{} {}", setting, requirement),
            setting: Some(setting),
            line: location.line(),
            file: location.file(),
        }
    }
}
