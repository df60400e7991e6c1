use tracing::info;

use super::{Session, print_card, slot_id};

/// Strategy for renaming the card.
#[derive(Debug, Clone, Copy)]
pub struct TitleStrategy;

impl super::CommandStrategy for TitleStrategy {
    type Input = (Session, String);

    async fn execute(&self, (session, title): Self::Input) -> anyhow::Result<()> {
        let (_config, mut store) = session.open()?;
        store.update_title(title);
        println!("Card renamed to \"{}\"", store.card().title);
        Ok(())
    }
}

/// Input parameters for a manual slot edit.
#[derive(Debug, Clone)]
pub struct SetSlotInput {
    pub session: Session,
    /// 1-based slot number
    pub slot: u8,
    /// New title
    pub title: Option<String>,
    /// Image URL typed by the user
    pub image_url: Option<String>,
}

/// Strategy for editing a slot by hand.
///
/// Typed image URLs go through the acceptance policy; a rejected edit leaves
/// the card unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SetSlotStrategy;

impl super::CommandStrategy for SetSlotStrategy {
    type Input = SetSlotInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let id = slot_id(input.slot)?;
        let (_config, mut store) = input.session.open()?;

        let mut editor = store.editor(id)?;
        if let Some(title) = input.title {
            editor.set_title(title);
        }
        if let Some(image_url) = input.image_url {
            editor.set_manual_image(image_url);
        }

        let update = editor.save()?;
        store.update_slot(id, update);
        info!("Saved slot {}", input.slot);
        print_card(store.card());
        Ok(())
    }
}

/// Strategy for emptying one slot.
#[derive(Debug, Clone, Copy)]
pub struct ClearSlotStrategy;

impl super::CommandStrategy for ClearSlotStrategy {
    type Input = (Session, u8);

    async fn execute(&self, (session, slot): Self::Input) -> anyhow::Result<()> {
        let id = slot_id(slot)?;
        let (_config, mut store) = session.open()?;
        let update = store.editor(id)?.clear();
        store.update_slot(id, update);
        println!("Slot {slot} cleared");
        Ok(())
    }
}
