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

//! Bingo card model, shareable template codec and the session card store.

pub mod card;
pub mod codec;
pub mod editor;
pub mod error;
pub mod storage;
pub mod store;
pub mod validate;

pub use card::{Card, DEFAULT_TITLE, GRID_SIZE, GameRef, LookupResult, SLOT_COUNT, Slot, SlotUpdate};
pub use codec::{TEMPLATE_PARAM, decode_template, encode_template, share_url};
pub use editor::SlotEditor;
pub use error::{DecodeError, ValidationError};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{CardStore, STORAGE_KEY};
pub use validate::{IMAGE_HOST, validate_image_url};
