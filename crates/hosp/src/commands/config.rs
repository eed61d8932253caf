//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/hosp/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};
use crate::cli::{Cli, ConfigCommands};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# hosp - Hospital Console CLI Configuration

# Config schema version (do not modify)
version = 1

# Server base URL (can also use HOSP_SERVER env var)
# server = "http://127.0.0.1:5000"

# Output preferences
[output]
# color = true   # Enable colors (respects NO_COLOR env)
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Server base URL (optional, can use env var instead).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/hosp/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("HOSP_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/hosp
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("hosp"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("hosp"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("HOSP_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    Ok(get_config_dir()?.join("config.toml"))
}

/// Loads the configuration file, or defaults when none exists.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| CommandError::Config(format!("invalid config file {}: {e}", path.display())))
}

/// Resolves the server base URL: flag/env first, then config file, then default.
pub fn resolve_server(cli: &Cli) -> Result<String> {
    if let Some(ref server) = cli.server {
        return Ok(server.clone());
    }
    let config = load_config()?;
    Ok(config
        .server
        .unwrap_or_else(|| "http://127.0.0.1:5000".to_string()))
}

/// Executes the config command.
pub fn execute(ctx: &CommandContext, command: Option<&ConfigCommands>) -> Result<()> {
    match command.unwrap_or(&ConfigCommands::Show) {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Init => init(ctx),
        ConfigCommands::Path => {
            println!("{}", get_config_path()?.display());
            Ok(())
        }
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    if ctx.json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "version": config.version,
                "server": config.server,
                "output": { "color": config.output.color },
                "path": get_config_path()?.display().to_string(),
            }))?
        );
    } else {
        println!("config file: {}", get_config_path()?.display());
        println!("server: {}", config.server.as_deref().unwrap_or("(default)"));
        if let Some(color) = config.output.color {
            println!("color: {color}");
        }
    }
    Ok(())
}

fn init(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    if path.exists() {
        return Err(CommandError::Config(format!(
            "config file already exists at {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, DEFAULT_CONFIG)?;
    if !ctx.quiet {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn load_defaults_when_no_file_exists() {
        let dir = tempdir().unwrap();
        env::set_var("HOSP_CONFIG", dir.path().join("missing.toml"));
        let config = load_config().unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.server, None);
        env::remove_var("HOSP_CONFIG");
    }

    #[test]
    #[serial]
    fn load_reads_server_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "version = 1\nserver = \"http://ward:5000\"\n").unwrap();
        env::set_var("HOSP_CONFIG", &path);
        let config = load_config().unwrap();
        assert_eq!(config.server.as_deref(), Some("http://ward:5000"));
        env::remove_var("HOSP_CONFIG");
    }

    #[test]
    #[serial]
    fn invalid_toml_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server = [not toml").unwrap();
        env::set_var("HOSP_CONFIG", &path);
        let err = load_config().unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
        env::remove_var("HOSP_CONFIG");
    }

    #[test]
    #[serial]
    fn server_flag_beats_env_and_config_file() {
        use clap::Parser;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "version = 1\nserver = \"http://file:5000\"\n").unwrap();
        env::set_var("HOSP_CONFIG", &path);
        env::remove_var("HOSP_SERVER");

        let cli = Cli::parse_from(["hosp", "--server", "http://flag:5000", "departments", "ls"]);
        assert_eq!(resolve_server(&cli).unwrap(), "http://flag:5000");

        env::set_var("HOSP_SERVER", "http://env:5000");
        let cli = Cli::parse_from(["hosp", "departments", "ls"]);
        assert_eq!(resolve_server(&cli).unwrap(), "http://env:5000");

        env::remove_var("HOSP_SERVER");
        let cli = Cli::parse_from(["hosp", "departments", "ls"]);
        assert_eq!(resolve_server(&cli).unwrap(), "http://file:5000");

        env::remove_var("HOSP_CONFIG");
    }

    #[test]
    #[serial]
    fn server_defaults_without_flag_env_or_file() {
        use clap::Parser;

        let dir = tempdir().unwrap();
        env::set_var("HOSP_CONFIG", dir.path().join("missing.toml"));
        env::remove_var("HOSP_SERVER");

        let cli = Cli::parse_from(["hosp", "departments", "ls"]);
        assert_eq!(resolve_server(&cli).unwrap(), "http://127.0.0.1:5000");

        env::remove_var("HOSP_CONFIG");
    }

    #[test]
    #[serial]
    fn default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
    }
}
