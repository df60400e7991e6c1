#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Game lookup: candidate search and cover resolution against the external
//! game database.

pub mod backloggd;
mod cover;
pub mod error;
pub mod sequence;
pub mod session;

pub use backloggd::{BackloggdClient, LookupConfig};
pub use error::{LookupError, Result};
pub use sequence::{RequestSequencer, Ticket};
pub use session::{Latest, LookupSession};

use async_trait::async_trait;
use bingors_core::LookupResult;

/// Resolves free text into candidates and candidates into cover images.
///
/// Callers only see this trait; how a cover is found behind `fetch_image`
/// can change without affecting them.
#[async_trait]
pub trait GameLookup: Send + Sync {
    /// Autocomplete suggestions for `query`, unmodified.
    async fn search(&self, query: &str) -> Result<Vec<LookupResult>>;

    /// Cover image URL for the game page identified by `slug`.
    async fn fetch_image(&self, slug: &str) -> Result<String>;
}
