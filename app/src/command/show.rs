use super::{Session, print_card};

/// Strategy for printing the current card.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = Session;

    async fn execute(&self, session: Self::Input) -> anyhow::Result<()> {
        let (_config, store) = session.open()?;
        print_card(store.card());
        Ok(())
    }
}
