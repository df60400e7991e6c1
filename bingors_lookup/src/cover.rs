//! Cover image extraction from a game page.
//!
//! This scrapes third-party markup and breaks whenever the page layout
//! changes. Keep it private to the lookup crate so it can be swapped for a
//! proper API without touching callers.

use std::sync::OnceLock;

static COVER_PATTERN: OnceLock<regex::Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn cover_pattern() -> &'static regex::Regex {
    COVER_PATTERN.get_or_init(|| {
        regex::Regex::new(r#"<img class="lazy card-img height" src="([^"]*)" alt"#)
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// First cover URL on the page, with `&amp;` entities decoded.
pub(crate) fn extract_cover_url(html: &str) -> Option<String> {
    let url = cover_pattern().captures(html)?.get(1)?.as_str();
    if url.is_empty() {
        return None;
    }
    Some(url.replace("&amp;", "&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_cover() {
        let html = r#"
            <div class="row">
              <img class="lazy card-img height" src="https://images.igdb.com/igdb/image/upload/t_cover_big/co1.jpg" alt="Hollow Knight">
              <img class="lazy card-img height" src="https://images.igdb.com/second.jpg" alt="Other">
            </div>"#;
        assert_eq!(
            extract_cover_url(html).as_deref(),
            Some("https://images.igdb.com/igdb/image/upload/t_cover_big/co1.jpg")
        );
    }

    #[test]
    fn test_decodes_ampersands() {
        let html = r#"<img class="lazy card-img height" src="https://images.igdb.com/c.jpg?a=1&amp;b=2" alt="x">"#;
        assert_eq!(
            extract_cover_url(html).as_deref(),
            Some("https://images.igdb.com/c.jpg?a=1&b=2")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_cover_url("<html><img src=\"x.png\"></html>"), None);
        assert_eq!(
            extract_cover_url(r#"<img class="lazy card-img height" src="" alt="x">"#),
            None
        );
    }
}
