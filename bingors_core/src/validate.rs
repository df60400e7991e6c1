//! Acceptance policy for image URLs typed in by hand.
//!
//! URLs resolved through the lookup client are trusted and never pass through
//! here.

use url::Url;

use crate::error::ValidationError;

/// Domain that hosts cover art for the game database.
pub const IMAGE_HOST: &str = "igdb.com";

/// Accept an empty string (no image) or a URL on [`IMAGE_HOST`] or one of its
/// subdomains.
pub fn validate_image_url(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Ok(());
    }

    let url = Url::parse(raw).map_err(|_| ValidationError::InvalidUrl)?;
    let host = url.host_str().ok_or(ValidationError::InvalidUrl)?;

    if host_matches(host, IMAGE_HOST) {
        Ok(())
    } else {
        Err(ValidationError::DisallowedHost(IMAGE_HOST))
    }
}

/// Suffix match on a label boundary, so `evil-igdb.com` does not pass.
fn host_matches(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
