//! Shareable template codec.
//!
//! A template carries only the card title and the slot titles. The reduced
//! record is serialized to JSON, percent-encoded with the
//! `encodeURIComponent` character set and then base64 encoded, so links
//! produced by the browser build of the card builder decode here and the
//! other way round. Image URLs and lookup metadata are never shared.

use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::{Engine as _, alphabet};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::{Url, form_urlencoded};

use crate::card::{Card, DEFAULT_TITLE, SLOT_COUNT};
use crate::error::DecodeError;

/// Query parameter that carries a template in a share link.
pub const TEMPLATE_PARAM: &str = "template";

/// Standard alphabet that, like `atob`, accepts input with or without the
/// trailing `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Serialize)]
struct TemplateOut<'a> {
    title: &'a str,
    titles: Vec<&'a str>,
}

#[derive(Deserialize)]
struct TemplateIn {
    #[serde(default = "default_title")]
    title: String,
    titles: Vec<String>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Encode the titles of `card` into a URL-safe template value.
#[must_use]
pub fn encode_template(card: &Card) -> String {
    let record = TemplateOut {
        title: &card.title,
        titles: card.slots().iter().map(|slot| slot.title.as_str()).collect(),
    };
    // Serializing borrowed strings into JSON cannot fail.
    let json = serde_json::to_string(&record).unwrap_or_default();
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    STANDARD.encode(escaped)
}

/// Decode a template value into a fresh card.
///
/// Fails closed: anything other than a well-formed record with exactly
/// [`SLOT_COUNT`] titles is an error, never a partially filled card. Decoded
/// slots have empty image URLs and no selected game.
pub fn decode_template(encoded: &str) -> Result<Card, DecodeError> {
    // Lax query parsers turn '+' into ' '.
    let normalized = encoded.trim().replace(' ', "+");
    let bytes = LENIENT.decode(normalized)?;
    let escaped = std::str::from_utf8(&bytes)?;
    check_escapes(escaped)?;
    let json = percent_decode_str(escaped).decode_utf8()?;
    let record: TemplateIn = serde_json::from_str(&json)?;

    let count = record.titles.len();
    let titles: [String; SLOT_COUNT] = record
        .titles
        .try_into()
        .map_err(|_| DecodeError::SlotCount(count))?;

    debug!("Decoded template \"{}\"", record.title);
    Ok(Card::from_titles(record.title, titles))
}

/// Reject a `%` that does not start a two-digit hex escape, as
/// `decodeURIComponent` does.
fn check_escapes(escaped: &str) -> Result<(), DecodeError> {
    let bytes = escaped.as_bytes();
    for (at, _) in escaped.match_indices('%') {
        let well_formed = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(DecodeError::PercentEncoding(at));
        }
    }
    Ok(())
}

/// Build the share link for `card` on top of the page URL `base`.
///
/// Any query string or fragment already on `base` is dropped.
#[must_use]
pub fn share_url(card: &Card, base: &Url) -> Url {
    let mut url = base.clone();
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair(TEMPLATE_PARAM, &encode_template(card));
    url
}

/// Read the raw `template` value from a page URL, if present.
#[must_use]
pub fn template_param(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == TEMPLATE_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// The page URL with the `template` parameter removed. Every other
/// parameter is kept in order and byte for byte.
#[must_use]
pub fn strip_template_param(location: &Url) -> Url {
    let mut url = location.clone();
    let Some(query) = location.query() else {
        return url;
    };

    let remaining: Vec<&str> = query
        .split('&')
        .filter(|pair| {
            form_urlencoded::parse(pair.as_bytes())
                .next()
                .is_none_or(|(key, _)| key != TEMPLATE_PARAM)
        })
        .collect();

    if remaining.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&remaining.join("&")));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::SlotUpdate;

    fn sample_card() -> Card {
        let mut card = Card::empty();
        card.title = "Ünïcode & friends".to_string();
        for (id, title) in [(0, "Boss Fight"), (12, "Free space"), (24, "Escort / mission?")] {
            if let Some(slot) = card.slot_mut(id) {
                slot.apply(
                    SlotUpdate::title(title).with_image_url("https://images.igdb.com/x.png"),
                );
            }
        }
        card
    }

    #[test]
    fn test_round_trip_keeps_titles_only() {
        let card = sample_card();
        let decoded = match decode_template(&encode_template(&card)) {
            Ok(decoded) => decoded,
            Err(e) => panic!("template should decode: {e}"),
        };
        assert_eq!(decoded.title, card.title);
        for (source, restored) in card.slots().iter().zip(decoded.slots()) {
            assert_eq!(restored.id, source.id);
            assert_eq!(restored.title, source.title);
            assert_eq!(restored.image_url, "");
            assert!(restored.game.is_none());
        }
    }

    #[test]
    fn test_matches_browser_encoding() {
        // btoa(encodeURIComponent('{"title":"A","titles":[]}'))
        let encoded = STANDARD.encode("%7B%22title%22%3A%22A%22%2C%22titles%22%3A%5B%5D%7D");
        assert!(matches!(
            decode_template(&encoded),
            Err(DecodeError::SlotCount(0))
        ));
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(matches!(
            decode_template("not base64 at all!!"),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_accepts_unpadded_base64() {
        // The default card encodes to a value ending in "==".
        let encoded = encode_template(&Card::empty());
        let unpadded = encoded.trim_end_matches('=');
        assert_eq!(encoded.len() - unpadded.len(), 2);
        let Ok(decoded) = decode_template(unpadded) else {
            panic!("template without padding should decode");
        };
        assert_eq!(decoded, Card::empty());
    }

    #[test]
    fn test_rejects_malformed_percent_escapes() {
        let titles = vec![""; 25];
        for title in ["100%", "50%off", "%ZZ", "%4"] {
            let json = serde_json::json!({ "title": title, "titles": titles }).to_string();
            let encoded = STANDARD.encode(&json);
            assert!(
                matches!(decode_template(&encoded), Err(DecodeError::PercentEncoding(_))),
                "{title:?} should not decode"
            );
        }
    }

    #[test]
    fn test_percent_sign_in_title_round_trips() {
        let mut card = Card::empty();
        card.title = "100% completion".to_string();
        let Ok(decoded) = decode_template(&encode_template(&card)) else {
            panic!("escaped percent sign should decode");
        };
        assert_eq!(decoded.title, "100% completion");
    }

    #[test]
    fn test_rejects_missing_titles() {
        let encoded = STANDARD.encode(utf8_percent_encode(r#"{"title":"x"}"#, URI_COMPONENT).to_string());
        assert!(matches!(decode_template(&encoded), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_rejects_wrong_title_count() {
        let titles = vec![String::new(); 24];
        let json = serde_json::json!({ "title": "x", "titles": titles }).to_string();
        let encoded = STANDARD.encode(utf8_percent_encode(&json, URI_COMPONENT).to_string());
        assert!(matches!(
            decode_template(&encoded),
            Err(DecodeError::SlotCount(24))
        ));
    }

    #[test]
    fn test_rejects_non_string_titles() {
        let json = serde_json::json!({ "title": "x", "titles": vec![1; 25] }).to_string();
        let encoded = STANDARD.encode(utf8_percent_encode(&json, URI_COMPONENT).to_string());
        assert!(decode_template(&encoded).is_err());
    }

    #[test]
    fn test_missing_title_falls_back_to_default() {
        let json = serde_json::json!({ "titles": vec![""; 25] }).to_string();
        let encoded = STANDARD.encode(utf8_percent_encode(&json, URI_COMPONENT).to_string());
        let Ok(card) = decode_template(&encoded) else {
            panic!("template without a title should decode");
        };
        assert_eq!(card.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_tolerates_plus_turned_into_space() {
        let card = sample_card();
        let encoded = encode_template(&card);
        let mangled = encoded.replace('+', " ");
        let Ok(decoded) = decode_template(&mangled) else {
            panic!("mangled template should decode");
        };
        assert_eq!(decoded.title, card.title);
    }

    #[test]
    fn test_share_url_round_trip() {
        let Ok(base) = Url::parse("https://bingo.example/app/?old=1#top") else {
            panic!("valid base url");
        };
        let card = sample_card();
        let url = share_url(&card, &base);
        assert_eq!(url.path(), "/app/");
        assert!(url.fragment().is_none());
        assert_eq!(url.query_pairs().count(), 1);

        let Some(value) = template_param(&url) else {
            panic!("share url should carry a template");
        };
        let Ok(decoded) = decode_template(&value) else {
            panic!("template should decode");
        };
        assert_eq!(decoded.title, card.title);
    }

    #[test]
    fn test_strip_template_param() {
        let Ok(url) = Url::parse("https://bingo.example/?a=1&template=abc&b=2") else {
            panic!("valid url");
        };
        let stripped = strip_template_param(&url);
        assert_eq!(stripped.as_str(), "https://bingo.example/?a=1&b=2");

        let Ok(only) = Url::parse("https://bingo.example/app?template=abc") else {
            panic!("valid url");
        };
        assert_eq!(strip_template_param(&only).as_str(), "https://bingo.example/app");
    }

    #[test]
    fn test_strip_keeps_other_params_verbatim() {
        let Ok(url) = Url::parse("https://bingo.example/?a=%20b&template=abc&c=x+y&d") else {
            panic!("valid url");
        };
        assert_eq!(
            strip_template_param(&url).as_str(),
            "https://bingo.example/?a=%20b&c=x+y&d"
        );

        let Ok(plain) = Url::parse("https://bingo.example/app#top") else {
            panic!("valid url");
        };
        assert_eq!(strip_template_param(&plain), plain);
    }
}
