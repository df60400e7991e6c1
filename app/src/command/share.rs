use anyhow::Context;
use bingors_core::share_url;
use url::Url;

use super::{Session, print_card};

/// Strategy for printing the share link of the current card.
///
/// Only the card title and slot titles are shared.
#[derive(Debug, Clone, Copy)]
pub struct ShareStrategy;

impl super::CommandStrategy for ShareStrategy {
    type Input = Session;

    async fn execute(&self, session: Self::Input) -> anyhow::Result<()> {
        let (config, store) = session.open()?;
        let base = Url::parse(&config.share.base_url)
            .with_context(|| format!("Invalid share base URL: {}", config.share.base_url))?;
        println!("{}", share_url(store.card(), &base));
        Ok(())
    }
}

/// Strategy for opening the page at a URL, applying any shared template it
/// carries.
#[derive(Debug, Clone, Copy)]
pub struct OpenStrategy;

impl super::CommandStrategy for OpenStrategy {
    type Input = (Session, String);

    async fn execute(&self, (session, location): Self::Input) -> anyhow::Result<()> {
        let location =
            Url::parse(&location).with_context(|| format!("Invalid URL: {location}"))?;
        let (_config, mut store) = session.open()?;

        let visible = match store.apply_template(&location) {
            Some(stripped) => {
                println!("Template loaded. Images must be picked again.");
                stripped
            }
            None => location,
        };
        println!("{visible}\n");
        print_card(store.card());
        Ok(())
    }
}
