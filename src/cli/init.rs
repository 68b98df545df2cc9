use crate::config::{self, Config};
use crate::error::Result;
use crate::store::Store;
use std::path::{Path, PathBuf};

/// Create the todos table in the database file
pub fn run(store: &Store, database: &Path) -> Result<()> {
    store.initialize()?;

    println!("Database initialized: {}", database.display());
    println!("Run 'tasklist todo new' to create your first todo.");

    Ok(())
}

/// Initialize tasklist.toml configuration file
pub fn config_init(path: Option<PathBuf>) -> Result<()> {
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
    println!(
        "Edit {} to change where the database file lives.",
        config_path.display()
    );

    Ok(())
}
