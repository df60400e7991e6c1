use bingors_config::{Config, config_path};

/// Strategy for displaying configuration information.
///
/// This strategy outputs the lookup endpoint settings, the share link base and
/// where the card is stored.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== bingors Configuration ===\n");

        println!("Config File: {}", config_path()?.display());
        println!();

        println!("Lookup:");
        println!("  Base URL: {}", config.lookup.base_url);
        println!("  Timeout: {}s", config.lookup.timeout);
        println!("  User Agent: {}", config.lookup.user_agent);
        println!("  Max Size: {} bytes", config.lookup.max_size);
        println!("  Debounce: {}ms", config.lookup.debounce_ms);
        println!();

        println!("Share:");
        println!("  Base URL: {}", config.share.base_url);
        println!();

        println!("Storage:");
        println!("  Directory: {}", config.storage_dir()?.display());

        Ok(())
    }
}
