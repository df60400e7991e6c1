use thiserror::Error;

/// Why a shared template could not be turned back into a card.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("template is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("template payload has a malformed percent escape at byte {0}")]
    PercentEncoding(usize),

    #[error("template payload is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("template payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template has {0} titles, expected 25")]
    SlotCount(usize),
}

/// A user edit that was rejected at the editing boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Image URL is not a valid URL")]
    InvalidUrl,

    #[error("Image URL must be from {0}")]
    DisallowedHost(&'static str),

    #[error("No slot with id {0}")]
    UnknownSlot(usize),
}
