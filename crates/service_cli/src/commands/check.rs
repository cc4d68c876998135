//! Check command implementation

use std::path::Path;

use crate::config::{CliConfig, DEFAULT_CONFIG_FILE};
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, path: Option<&Path>) -> Result<()> {
    let source = match path {
        Some(p) => p.display().to_string(),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE.to_string(),
        None => "built-in defaults".to_string(),
    };

    println!("greekcalc {}", env!("CARGO_PKG_VERSION"));
    println!("configuration: {}", source);
    println!("available threads: {}", available_threads());
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}

fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
