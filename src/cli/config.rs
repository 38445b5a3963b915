use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize gitdigest.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Set `username` in {} or pass --user",
        config_path.display()
    );
    println!(
        "2. Export {} for private repositories and higher rate limits",
        config.api.token_env
    );
    println!("3. Run 'gitdigest gen --repo <name> --days 7' to generate your first export");

    Ok(())
}
