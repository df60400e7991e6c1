//! Owner of the live card for a session.
//!
//! The store holds the only mutable card. Every mutation is written through
//! to the injected [`KeyValueStore`] under [`STORAGE_KEY`]; a write failure is
//! logged and the in-memory change is kept.

use tracing::{debug, info, warn};
use url::Url;

use crate::card::{Card, SlotUpdate};
use crate::codec::{decode_template, strip_template_param, template_param};
use crate::editor::SlotEditor;
use crate::error::ValidationError;
use crate::storage::KeyValueStore;

/// Key the card is persisted under.
pub const STORAGE_KEY: &str = "bingo-card";

pub struct CardStore<S: KeyValueStore> {
    storage: S,
    card: Card,
    template_loaded: bool,
}

impl<S: KeyValueStore> CardStore<S> {
    /// Load the persisted card, or start from an empty one when nothing
    /// usable is stored.
    pub fn open(storage: S) -> Self {
        let card = load_card(&storage).unwrap_or_default();
        Self {
            storage,
            card,
            template_loaded: false,
        }
    }

    #[must_use]
    pub const fn card(&self) -> &Card {
        &self.card
    }

    #[must_use]
    pub const fn template_loaded(&self) -> bool {
        self.template_loaded
    }

    /// Open an editor on the slot with `id`.
    pub fn editor(&self, id: usize) -> Result<SlotEditor, ValidationError> {
        self.card
            .slot(id)
            .map(SlotEditor::open)
            .ok_or(ValidationError::UnknownSlot(id))
    }

    /// Merge `update` into the slot with `id`. Unknown ids are ignored.
    ///
    /// Returns whether a slot was updated.
    pub fn update_slot(&mut self, id: usize, update: SlotUpdate) -> bool {
        let Some(slot) = self.card.slot_mut(id) else {
            debug!("Ignoring update for unknown slot {id}");
            return false;
        };
        slot.apply(update);
        debug!("Updated slot {id}");
        self.persist();
        true
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.card.title = title.into();
        debug!("Renamed card to \"{}\"", self.card.title);
        self.persist();
    }

    /// Replace the card with an empty one and forget any loaded template.
    pub fn clear(&mut self) {
        self.card = Card::empty();
        self.template_loaded = false;
        info!("Card cleared");
        self.persist();
    }

    /// Startup step: apply a shared template from the page URL.
    ///
    /// When `location` carries a decodable `template` parameter the held card
    /// is replaced, [`CardStore::template_loaded`] becomes true and the URL
    /// with the parameter stripped is returned for the caller to show.
    /// Otherwise the card is left alone and `None` is returned.
    pub fn apply_template(&mut self, location: &Url) -> Option<Url> {
        let encoded = template_param(location)?;
        match decode_template(&encoded) {
            Ok(card) => {
                info!("Loaded shared template \"{}\"", card.title);
                self.card = card;
                self.template_loaded = true;
                self.persist();
                Some(strip_template_param(location))
            }
            Err(e) => {
                debug!("Ignoring malformed template: {e}");
                None
            }
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.card) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize card: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(STORAGE_KEY, &json) {
            warn!("Failed to persist card: {e:#}");
        }
    }
}

fn load_card<S: KeyValueStore>(storage: &S) -> Option<Card> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Failed to read stored card: {e:#}");
            return None;
        }
    };

    match serde_json::from_str::<Card>(&raw) {
        Ok(card) if card.ids_in_position() => Some(card),
        Ok(_) => {
            warn!("Stored card has misplaced slot ids, starting fresh");
            None
        }
        Err(e) => {
            warn!("Stored card is unreadable, starting fresh: {e}");
            None
        }
    }
}
