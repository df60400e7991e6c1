//! Card and slot data model.
//!
//! A card always holds exactly [`SLOT_COUNT`] slots laid out row-major on a
//! [`GRID_SIZE`] x [`GRID_SIZE`] grid, and `slots[i].id == i` for every slot.

use serde::{Deserialize, Deserializer, Serialize};

/// Width and height of the bingo grid.
pub const GRID_SIZE: usize = 5;

/// Number of slots on every card.
pub const SLOT_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Title given to a freshly created card.
pub const DEFAULT_TITLE: &str = "Title";

/// Game reference carried by a lookup candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRef {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub year: String,
}

/// A single autocomplete suggestion from the external game database.
///
/// The shape mirrors the `{ value, data }` suggestion objects returned by the
/// autocomplete endpoint so it can be stored on a slot unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Display value shown in candidate lists.
    pub value: String,
    pub data: GameRef,
}

impl LookupResult {
    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.data.title
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: usize,
    pub title: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<LookupResult>,
}

impl Slot {
    #[must_use]
    pub const fn empty(id: usize) -> Self {
        Self {
            id,
            title: String::new(),
            image_url: String::new(),
            game: None,
        }
    }

    /// A slot is empty when it has neither a title nor an image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.image_url.is_empty()
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.id / GRID_SIZE
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.id % GRID_SIZE
    }

    /// 1-based label used in editors ("Slot 1" .. "Slot 25").
    #[must_use]
    pub fn label(&self) -> String {
        format!("Slot {}", self.id + 1)
    }

    /// Merge a partial update into this slot. The id is never touched.
    pub fn apply(&mut self, update: SlotUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(game) = update.game {
            self.game = game;
        }
    }
}

/// Partial slot update. `None` fields are left as they are.
///
/// `game` is doubly optional so an update can explicitly remove the selected
/// game (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotUpdate {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub game: Option<Option<LookupResult>>,
}

impl SlotUpdate {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn with_game(mut self, game: Option<LookupResult>) -> Self {
        self.game = Some(game);
        self
    }

    /// Update that empties a slot completely.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            title: Some(String::new()),
            image_url: Some(String::new()),
            game: Some(None),
        }
    }
}

/// A 5x5 bingo card.
///
/// Slots are stored in a fixed-size array so the slot count cannot change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    slots: [Slot; SLOT_COUNT],
}

impl Default for Card {
    fn default() -> Self {
        Self::empty()
    }
}

impl Card {
    /// Fresh card with the default title and 25 empty slots.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            slots: std::array::from_fn(Slot::empty),
        }
    }

    /// Build a card from one title per slot. Images are left empty.
    #[must_use]
    pub fn from_titles(title: impl Into<String>, titles: [String; SLOT_COUNT]) -> Self {
        let mut titles = titles.into_iter();
        Self {
            title: title.into(),
            slots: std::array::from_fn(|id| Slot {
                title: titles.next().unwrap_or_default(),
                ..Slot::empty(id)
            }),
        }
    }

    #[must_use]
    pub const fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, id: usize) -> Option<&Slot> {
        self.slots.get(id)
    }

    pub fn slot_mut(&mut self, id: usize) -> Option<&mut Slot> {
        self.slots.get_mut(id)
    }

    /// True when at least one slot has a title or an image.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.slots.iter().any(|slot| !slot.is_empty())
    }

    /// Checks `slots[i].id == i`. Only data loaded from outside can break it.
    #[must_use]
    pub fn ids_in_position(&self) -> bool {
        self.slots.iter().enumerate().all(|(i, slot)| slot.id == i)
    }

    /// File name used when the rendered card is exported.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        format!("{}.svg", self.title.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_card_shape() {
        let card = Card::empty();
        assert_eq!(card.title, DEFAULT_TITLE);
        assert_eq!(card.slots().len(), SLOT_COUNT);
        for (i, slot) in card.slots().iter().enumerate() {
            assert_eq!(slot.id, i);
            assert!(slot.is_empty());
            assert!(slot.game.is_none());
        }
        assert!(card.ids_in_position());
        assert!(!card.has_content());
    }

    #[test]
    fn test_empty_cards_are_equal_but_distinct() {
        let mut a = Card::empty();
        let b = Card::empty();
        assert_eq!(a, b);
        a.title = "Changed".to_string();
        assert_eq!(b.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_slot_position() {
        let card = Card::empty();
        let slot = card.slot(7).map(|s| (s.row(), s.col(), s.label()));
        assert_eq!(slot, Some((1, 2, "Slot 8".to_string())));
        assert!(card.slot(SLOT_COUNT).is_none());
        assert_eq!(card.slots().iter().filter(|s| s.col() == 0).count(), GRID_SIZE);
    }

    #[test]
    fn test_slot_emptiness() {
        let mut slot = Slot::empty(0);
        slot.image_url = "https://images.igdb.com/a.png".to_string();
        assert!(!slot.is_empty());
        slot.image_url.clear();
        slot.title = "Boss Fight".to_string();
        assert!(!slot.is_empty());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut slot = Slot::empty(3);
        slot.image_url = "https://images.igdb.com/a.png".to_string();
        slot.apply(SlotUpdate::title("Water Level"));
        assert_eq!(slot.title, "Water Level");
        assert_eq!(slot.image_url, "https://images.igdb.com/a.png");
        assert_eq!(slot.id, 3);

        slot.apply(SlotUpdate::clear());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_export_file_name() {
        let mut card = Card::empty();
        card.title = "My Bingo".to_string();
        assert_eq!(card.export_file_name(), "my bingo.svg");
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let mut card = Card::empty();
        if let Some(slot) = card.slot_mut(0) {
            slot.image_url = "https://images.igdb.com/a.png".to_string();
        }
        let Ok(json) = serde_json::to_value(&card) else {
            panic!("card should serialize");
        };
        assert_eq!(json["slots"][0]["imageUrl"], "https://images.igdb.com/a.png");
        assert!(json["slots"][0].get("game").is_none());
        assert_eq!(json["slots"].as_array().map(Vec::len), Some(SLOT_COUNT));
    }

    #[test]
    fn test_lookup_result_tolerates_null_year() {
        let raw = r#"{"value":"Celeste (2018)","data":{"id":1,"slug":"celeste","title":"Celeste","year":null}}"#;
        let Ok(result) = serde_json::from_str::<LookupResult>(raw) else {
            panic!("suggestion should parse");
        };
        assert_eq!(result.slug(), "celeste");
        assert_eq!(result.data.year, "");
    }
}
