//! Application configuration.
//!
//! Settings are merged from, in increasing precedence:
//! - Bundled defaults (include_str! from memelyco.toml)
//! - `SUPABASE_URL` / `SUPABASE_KEY` present when the binary was built
//! - `~/.config/memelyco/memelyco.toml`
//! - `./memelyco.toml`
//! - `SUPABASE_URL` / `SUPABASE_KEY` / `SUPABASE_BUCKET` in the environment

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use memelyco_core::SortMode;
use memelyco_error::{ConfigError, MemelycoError, MemelycoResult};
use memelyco_interface::{ListOptions, UploadOptions};
use memelyco_storage::StorageConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Environment variable holding the project endpoint.
pub const URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the access key.
pub const KEY_ENV: &str = "SUPABASE_KEY";
/// Environment variable holding the bucket name.
pub const BUCKET_ENV: &str = "SUPABASE_BUCKET";

/// Gallery settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GalleryConfig {
    /// Ordering used when the gallery starts
    #[serde(default)]
    pub default_sort: SortMode,
    /// Maximum number of objects listed per load
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
}

fn default_list_limit() -> u32 {
    100
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::default(),
            list_limit: default_list_limit(),
        }
    }
}

/// Uploader settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploaderConfig {
    /// `cache-control: max-age` sent with every upload
    #[serde(default = "default_cache_control_secs")]
    pub cache_control_secs: u32,
    /// Replace objects that already exist
    #[serde(default)]
    pub overwrite: bool,
}

fn default_cache_control_secs() -> u32 {
    3600
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            cache_control_secs: default_cache_control_secs(),
            overwrite: false,
        }
    }
}

/// Top-level Memelyco configuration.
///
/// # Example
///
/// ```no_run
/// use memelyco::MemelycoConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MemelycoConfig::load()?;
/// println!("Bucket: {}", config.storage.bucket);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemelycoConfig {
    /// Storage project connection
    pub storage: StorageConfig,
    /// Gallery behaviour
    #[serde(default)]
    pub gallery: GalleryConfig,
    /// Uploader behaviour
    #[serde(default)]
    pub uploader: UploaderConfig,
}

impl MemelycoConfig {
    /// Load configuration from a single file.
    ///
    /// Environment overrides still apply on top of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the result
    /// fails [`MemelycoConfig::validate`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MemelycoResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder().add_source(File::from(path.as_ref()));
        let config = Self::finish(builder)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: environment > current dir > home dir
    /// > build-time environment > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed or the merged
    /// settings fail [`MemelycoConfig::validate`].
    #[instrument]
    pub fn load() -> MemelycoResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../memelyco.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(build_time) = build_time_storage()? {
            builder = builder.add_source(File::from_str(&build_time, FileFormat::Toml));
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/memelyco/memelyco.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("memelyco").required(false));

        let config = Self::finish(builder)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no storage client can work with.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending setting.
    pub fn validate(&self) -> MemelycoResult<()> {
        if self.storage.url.trim().is_empty() {
            return Err(ConfigError::invalid_setting("storage.url", "must not be empty").into());
        }
        if self.storage.bucket.trim().is_empty() {
            return Err(ConfigError::invalid_setting("storage.bucket", "must not be empty").into());
        }
        if self.storage.timeout_secs == 0 {
            return Err(
                ConfigError::invalid_setting("storage.timeout_secs", "must be greater than zero")
                    .into(),
            );
        }
        if self.gallery.list_limit == 0 {
            return Err(
                ConfigError::invalid_setting("gallery.list_limit", "must be greater than zero")
                    .into(),
            );
        }
        Ok(())
    }

    /// Listing options for gallery loads.
    pub fn list_options(&self) -> ListOptions {
        ListOptions::default().with_limit(self.gallery.list_limit)
    }

    /// Options sent with every upload.
    pub fn upload_options(&self) -> UploadOptions {
        UploadOptions::default()
            .with_cache_control_secs(self.uploader.cache_control_secs)
            .with_overwrite(self.uploader.overwrite)
    }

    /// Apply environment overrides, build and deserialize.
    fn finish(builder: ConfigBuilder<DefaultState>) -> MemelycoResult<Self> {
        builder
            .set_override_option("storage.url", std::env::var(URL_ENV).ok())
            .and_then(|b| b.set_override_option("storage.key", std::env::var(KEY_ENV).ok()))
            .and_then(|b| b.set_override_option("storage.bucket", std::env::var(BUCKET_ENV).ok()))
            .and_then(|b| b.build())
            .map_err(|e| {
                MemelycoError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MemelycoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

/// Storage settings baked in at build time, as a TOML fragment.
fn build_time_storage() -> MemelycoResult<Option<String>> {
    let mut storage = toml::Table::new();
    if let Some(url) = option_env!("SUPABASE_URL") {
        storage.insert("url".to_string(), url.into());
    }
    if let Some(key) = option_env!("SUPABASE_KEY") {
        storage.insert("key".to_string(), key.into());
    }
    if storage.is_empty() {
        return Ok(None);
    }

    let mut root = toml::Table::new();
    root.insert("storage".to_string(), toml::Value::Table(storage));
    toml::to_string(&root).map(Some).map_err(|e| {
        ConfigError::new(format!("Failed to encode build-time settings: {}", e)).into()
    })
}
