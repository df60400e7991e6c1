use anyhow::Context;
use bingors_config::Config;
use bingors_core::LookupResult;
use bingors_lookup::{BackloggdClient, Latest, LookupSession};
use tracing::info;

use super::{Session, print_card, slot_id};

fn lookup_session(config: &Config) -> anyhow::Result<LookupSession<BackloggdClient>> {
    let client =
        BackloggdClient::new(config.lookup.clone()).context("Failed to create lookup client")?;
    Ok(LookupSession::new(client, config.lookup.debounce()))
}

async fn candidates(
    session: &LookupSession<BackloggdClient>,
    query: &str,
) -> Vec<LookupResult> {
    match session.search(query).await {
        Latest::Current(results) => results,
        Latest::Superseded => Vec::new(),
    }
}

/// Strategy for listing lookup candidates for a query.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy;

impl super::CommandStrategy for SearchStrategy {
    type Input = String;

    async fn execute(&self, query: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let session = lookup_session(&config)?;

        let results = candidates(&session, &query).await;
        if results.is_empty() {
            println!("No results for \"{query}\"");
            return Ok(());
        }
        for (index, result) in results.iter().enumerate() {
            println!("{:>2}. {} [{}]", index + 1, result.display_value(), result.slug());
        }
        Ok(())
    }
}

/// Input parameters for filling a slot from a search.
#[derive(Debug, Clone)]
pub struct PickInput {
    pub session: Session,
    /// 1-based slot number
    pub slot: u8,
    pub query: String,
    /// 1-based candidate index
    pub index: usize,
}

/// Strategy for filling a slot from the game database.
///
/// Searches, selects the chosen candidate, resolves its cover and saves the
/// slot. A missing cover still saves the title.
#[derive(Debug, Clone, Copy)]
pub struct PickStrategy;

impl super::CommandStrategy for PickStrategy {
    type Input = PickInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let id = slot_id(input.slot)?;
        let (config, mut store) = input.session.open()?;
        let lookup = lookup_session(&config)?;

        let results = candidates(&lookup, &input.query).await;
        let Some(candidate) = input
            .index
            .checked_sub(1)
            .and_then(|i| results.into_iter().nth(i))
        else {
            anyhow::bail!(
                "No candidate #{} for \"{}\"",
                input.index,
                input.query
            );
        };
        info!("Selected {}", candidate.display_value());

        let mut editor = store.editor(id)?;
        editor.select_candidate(candidate.clone());

        match lookup.resolve_cover(&candidate).await {
            Latest::Current(Some(cover)) => editor.set_resolved_image(cover),
            Latest::Current(None) => println!("No image available for {}", candidate.title()),
            Latest::Superseded => {}
        }

        let update = editor.save()?;
        store.update_slot(id, update);
        print_card(store.card());
        Ok(())
    }
}
