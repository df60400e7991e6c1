#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    ClearInput, ClearSlotStrategy, ClearStrategy, CommandStrategy, InfoStrategy, InitStrategy,
    OpenStrategy, PickInput, PickStrategy, SearchStrategy, Session, SetSlotInput,
    SetSlotStrategy, ShareStrategy, ShowStrategy, TitleStrategy, VersionStrategy,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "bingors")]
#[command(about = "Build, share and fill 5x5 game bingo cards", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Keep the card in memory instead of on disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
    /// Print the current card
    Show,
    /// Rename the card
    Title {
        /// New card title
        title: String,
    },
    /// Edit a slot by hand
    Set {
        /// Slot number (1-25)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        slot: u8,

        /// Slot title
        #[arg(short, long)]
        title: Option<String>,

        /// Image URL (must be hosted on igdb.com)
        #[arg(short, long)]
        image_url: Option<String>,
    },
    /// Empty a slot
    ClearSlot {
        /// Slot number (1-25)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        slot: u8,
    },
    /// Search the game database
    Search {
        /// Search text
        query: String,
    },
    /// Fill a slot from a game database search
    Pick {
        /// Slot number (1-25)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        slot: u8,

        /// Search text
        query: String,

        /// Which candidate to take (1-based)
        #[arg(short = 'n', long, default_value_t = 1)]
        index: usize,
    },
    /// Print a share link with the card's titles
    Share,
    /// Open a page URL, loading the shared template it carries
    Open {
        /// Page URL, e.g. a share link
        url: String,
    },
    /// Reset the card
    Clear {
        /// Confirm clearing a card with content
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let session = Session {
        ephemeral: cli.ephemeral,
    };

    match cli.command {
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
        Commands::Show => ShowStrategy.execute(session).await,
        Commands::Title { title } => TitleStrategy.execute((session, title)).await,
        Commands::Set {
            slot,
            title,
            image_url,
        } => {
            SetSlotStrategy
                .execute(SetSlotInput {
                    session,
                    slot,
                    title,
                    image_url,
                })
                .await
        }
        Commands::ClearSlot { slot } => ClearSlotStrategy.execute((session, slot)).await,
        Commands::Search { query } => SearchStrategy.execute(query).await,
        Commands::Pick { slot, query, index } => {
            PickStrategy
                .execute(PickInput {
                    session,
                    slot,
                    query,
                    index,
                })
                .await
        }
        Commands::Share => ShareStrategy.execute(session).await,
        Commands::Open { url } => OpenStrategy.execute((session, url)).await,
        Commands::Clear { yes } => ClearStrategy.execute(ClearInput { session, yes }).await,
    }
}
