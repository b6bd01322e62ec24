//! Gallery ordering modes.

use serde::{Deserialize, Serialize};

/// How the gallery orders its items.
///
/// Process-local; resets to [`SortMode::Chronological`] on every start.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest first, by creation timestamp
    #[default]
    #[display("chronological")]
    Chronological,
    /// Uniform random permutation
    #[display("random")]
    Random,
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chronological" | "newest" => Ok(SortMode::Chronological),
            "random" | "shuffle" => Ok(SortMode::Random),
            _ => Err(format!("Unknown sort mode: {}", s)),
        }
    }
}
