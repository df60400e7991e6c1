use super::Session;

/// Input parameters for clearing the card.
#[derive(Debug, Clone, Copy)]
pub struct ClearInput {
    pub session: Session,
    /// Skip the confirmation
    pub yes: bool,
}

/// Strategy for resetting the card.
///
/// A card with content is only cleared when confirmed with `--yes`.
#[derive(Debug, Clone, Copy)]
pub struct ClearStrategy;

impl super::CommandStrategy for ClearStrategy {
    type Input = ClearInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (_config, mut store) = input.session.open()?;

        if !store.card().has_content() {
            println!("Card is already empty");
            return Ok(());
        }
        if !input.yes {
            println!("This cannot be undone. Run again with --yes to clear the card.");
            return Ok(());
        }

        store.clear();
        println!("Card cleared");
        Ok(())
    }
}
