//! Draft state for editing one slot.
//!
//! The editor is the boundary where user input turns into a [`SlotUpdate`].
//! Images that arrive from the lookup client are taken as-is; images typed by
//! the user must pass [`validate_image_url`].

use crate::card::{LookupResult, Slot, SlotUpdate};
use crate::error::ValidationError;
use crate::validate::validate_image_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageSource {
    Existing,
    Lookup,
    Manual,
}

#[derive(Debug, Clone)]
pub struct SlotEditor {
    slot_id: usize,
    title: String,
    image_url: String,
    game: Option<LookupResult>,
    image_source: ImageSource,
}

impl SlotEditor {
    /// Open an editor seeded from the current contents of `slot`.
    #[must_use]
    pub fn open(slot: &Slot) -> Self {
        Self {
            slot_id: slot.id,
            title: slot.title.clone(),
            image_url: slot.image_url.clone(),
            game: slot.game.clone(),
            image_source: ImageSource::Existing,
        }
    }

    #[must_use]
    pub const fn slot_id(&self) -> usize {
        self.slot_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub const fn selected_game(&self) -> Option<&LookupResult> {
        self.game.as_ref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Pick a lookup candidate: its title becomes the slot title. The image
    /// is cleared until the candidate's cover is resolved.
    pub fn select_candidate(&mut self, candidate: LookupResult) {
        self.title = candidate.title().to_string();
        self.image_url.clear();
        self.image_source = ImageSource::Lookup;
        self.game = Some(candidate);
    }

    /// Cover resolved by the lookup client for the selected game.
    pub fn set_resolved_image(&mut self, image_url: impl Into<String>) {
        self.image_url = image_url.into();
        self.image_source = ImageSource::Lookup;
    }

    /// Image URL typed by the user. Checked on [`SlotEditor::save`].
    pub fn set_manual_image(&mut self, image_url: impl Into<String>) {
        self.image_url = image_url.into();
        self.image_source = ImageSource::Manual;
    }

    /// Turn the draft into an update, rejecting a disallowed manual image.
    pub fn save(&self) -> Result<SlotUpdate, ValidationError> {
        if self.image_source == ImageSource::Manual {
            validate_image_url(&self.image_url)?;
        }
        Ok(SlotUpdate::title(self.title.clone())
            .with_image_url(self.image_url.clone())
            .with_game(self.game.clone()))
    }

    /// Update that empties the slot.
    #[must_use]
    pub fn clear(&self) -> SlotUpdate {
        SlotUpdate::clear()
    }
}
