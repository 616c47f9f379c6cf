//! Configuration management commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use gps_core::Config;

/// Starter configuration written by `config init`
pub const DEFAULT_CONFIG: &str = include_str!("../../../../gps.toml.example");

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
    /// Initialize configuration file
    Init {
        /// Where to write the file
        #[arg(short, long, default_value = "gps.toml")]
        path: PathBuf,
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run(
    cmd: ConfigCommands,
    loaded: gps_core::Result<Config>,
    explicit: Option<&Path>,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(loaded?, explicit),
        ConfigCommands::Init { path, force } => init(&path, force),
    }
}

/// File the configuration was loaded from; `--config` wins over discovery
fn config_source(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(Config::find_config_file)
}

fn show(config: Config, explicit: Option<&Path>) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    match config_source(explicit) {
        Some(path) => println!("# Config file: {}\n", path.display()),
        None => println!("# Config file: none (environment only)\n"),
    }

    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("{rendered}");

    Ok(())
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Configuration file already exists: {}", path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Configuration file created: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = Config::from_toml_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.cost.costs.len(), 1);
        assert_eq!(config.action_cost().unwrap().wu, vec![0.001, 0.001]);
    }

    #[test]
    fn test_init_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gps.toml");

        init(&path, false).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.cost.resolved_weights().unwrap(), vec![1.0]);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gps.toml");
        std::fs::write(&path, "# custom\n").unwrap();

        init(&path, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# custom\n");

        init(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_show_requires_config() {
        let loaded = Config::from_toml_str("[logging]\nlevel = \"info\"\n");
        assert!(run(ConfigCommands::Show, loaded, None).is_err());
    }

    #[test]
    fn test_config_source_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("costs.conf");

        assert_eq!(config_source(Some(explicit.as_path())), Some(explicit.clone()));

        let config = Config::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert!(run(ConfigCommands::Show, Ok(config), Some(explicit.as_path())).is_ok());
    }
}
