//! Integration tests for sharing a card through a template link.
//!
//! These tests verify that:
//! - A shared link rebuilds the card titles and nothing else
//! - Opening a link replaces the stored card once and strips the parameter
//! - The stored card survives a restart on disk

use bingors_core::{
    Card, CardStore, FileStore, SLOT_COUNT, SlotUpdate, decode_template, encode_template,
    share_url,
};
use url::Url;

fn page() -> Url {
    Url::parse("https://bingo.example/").unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn test_shared_card_end_to_end() {
    let mut card = Card::empty();
    card.title = "My Bingo".to_string();
    if let Some(slot) = card.slot_mut(0) {
        slot.apply(SlotUpdate::title("Boss Fight").with_image_url("https://images.igdb.com/b.png"));
    }

    let decoded = match decode_template(&encode_template(&card)) {
        Ok(card) => card,
        Err(e) => panic!("template should decode: {e}"),
    };

    assert_eq!(decoded.title, "My Bingo");
    assert_eq!(decoded.slots()[0].title, "Boss Fight");
    assert!(decoded.slots()[1..].iter().all(|slot| slot.title.is_empty()));
    assert!(decoded.slots().iter().all(|slot| slot.image_url.is_empty()));
    assert_eq!(decoded.slots().len(), SLOT_COUNT);
}

#[test]
fn test_open_link_replaces_persisted_card() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;

    let mut shared = Card::empty();
    shared.title = "Speedrun Night".to_string();
    for id in 0..SLOT_COUNT {
        if let Some(slot) = shared.slot_mut(id) {
            slot.title = format!("Goal {}", id + 1);
        }
    }
    let link = share_url(&shared, &page());

    let mut store = CardStore::open(FileStore::new(tmp.path()));
    store.update_title("Local card");

    let Some(visible) = store.apply_template(&link) else {
        panic!("link should apply");
    };
    assert_eq!(visible.as_str(), "https://bingo.example/");
    assert!(store.template_loaded());
    assert_eq!(store.card().title, "Speedrun Night");

    // Showing the stripped URL again does not re-apply anything.
    store.update_slot(0, SlotUpdate::title("Changed"));
    assert!(store.apply_template(&visible).is_none());
    assert_eq!(store.card().slots()[0].title, "Changed");

    let reopened = CardStore::open(FileStore::new(tmp.path()));
    assert_eq!(reopened.card().title, "Speedrun Night");
    assert_eq!(reopened.card().slots()[0].title, "Changed");
    assert_eq!(reopened.card().slots()[24].title, "Goal 25");
    assert!(!reopened.template_loaded());
    Ok(())
}

#[test]
fn test_clear_is_persisted() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let mut store = CardStore::open(FileStore::new(tmp.path()));
    store.update_slot(12, SlotUpdate::title("Free space"));
    assert!(store.card().has_content());

    store.clear();

    let reopened = CardStore::open(FileStore::new(tmp.path()));
    assert_eq!(reopened.card(), &Card::empty());
    Ok(())
}
