//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use bingors_config::Config;
use bingors_core::{Card, CardStore, FileStore, KeyValueStore, MemoryStore, SLOT_COUNT};
use tracing::info;

mod clear;
mod edit;
mod info;
mod init;
mod lookup;
mod share;
mod show;
mod version;

pub use clear::{ClearInput, ClearStrategy};
pub use edit::{ClearSlotStrategy, SetSlotInput, SetSlotStrategy, TitleStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use lookup::{PickInput, PickStrategy, SearchStrategy};
pub use share::{OpenStrategy, ShareStrategy};
pub use show::ShowStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Options shared by every command that touches the card.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    /// Keep the card in memory only
    pub ephemeral: bool,
}

pub type Store = CardStore<Box<dyn KeyValueStore>>;

impl Session {
    /// Load config and open the card store it points at.
    pub fn open(self) -> anyhow::Result<(Config, Store)> {
        let config = Config::load()?;
        let storage: Box<dyn KeyValueStore> = if self.ephemeral {
            info!("Using in-memory card storage");
            Box::new(MemoryStore::new())
        } else {
            let dir = config.storage_dir()?;
            info!("Card storage: {}", dir.display());
            Box::new(FileStore::new(dir))
        };
        Ok((config, CardStore::open(storage)))
    }
}

/// Convert a 1-based slot number from the command line to a slot id.
pub fn slot_id(number: u8) -> anyhow::Result<usize> {
    let number = usize::from(number);
    if (1..=SLOT_COUNT).contains(&number) {
        Ok(number - 1)
    } else {
        anyhow::bail!("Slot must be between 1 and {SLOT_COUNT}, got {number}")
    }
}

/// Print the card as a grid listing.
pub fn print_card(card: &Card) {
    println!("=== {} ===", card.title);
    for slot in card.slots() {
        if slot.col() == 0 {
            println!("\nRow {}:", slot.row() + 1);
        }
        let title = if slot.title.is_empty() {
            "(empty)"
        } else {
            slot.title.as_str()
        };
        let image = if slot.image_url.is_empty() {
            ""
        } else {
            " [image]"
        };
        let label = format!("{}:", slot.label());
        println!("  {label:<8} {title}{image}");
    }
}
