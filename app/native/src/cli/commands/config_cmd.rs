//! Config CLI commands.
//!
//! Create, locate, validate and print the Tessera configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use colored::Colorize;

use crate::cli::output;
use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{self, ConfigError, config_paths, load_config_from_path};
use crate::error::TesseraError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Write a configuration file with every option documented.
    ///
    /// All options are commented out and show their default values.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  tessera config init              # Create config at default location
  tessera config init --force      # Overwrite existing config
  tessera config init --path ~/tiles.jsonc
  tessera config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses the first search path.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show where Tessera looks for configuration files.
    Path,

    /// Validate a configuration file and print the resulting tile settings.
    ///
    /// Without a path, validates the active configuration file.
    Check {
        /// Configuration file to validate.
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON.
    Show,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), TesseraError> {
    match cmd {
        ConfigCommands::Init { stdout: true, .. } => {
            println!("{}", generate_config_template());
            Ok(())
        }
        ConfigCommands::Init { force, path, .. } => init_config(*force, path.as_deref()),
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
        ConfigCommands::Check { path } => check_config(path.as_deref()),
        ConfigCommands::Show => {
            let value = serde_json::to_value(config::get_config())?;
            match config::get_config_path() {
                Some(path) => eprintln!("{} {}", "Source:".dimmed(), path.display()),
                None => eprintln!("{}", "Source: built-in defaults".dimmed()),
            }
            output::print_highlighted_json(&value);
            Ok(())
        }
    }
}

/// Resolves where `config init` writes.
fn init_target(custom_path: Option<&Path>) -> PathBuf {
    custom_path.map_or_else(
        || config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc")),
        Path::to_path_buf,
    )
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<&Path>) -> Result<(), TesseraError> {
    let config_path = init_target(custom_path);

    if config_path.exists() && !force {
        return Err(TesseraError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        TesseraError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    tracing::info!(path = %config_path.display(), "configuration file created");
    println!("Configuration file created at: {}", config_path.display());
    println!("\nAll options are commented out by default.");
    Ok(())
}

/// Prints the search paths, marking the first existing one as active.
fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let mut active: Option<&PathBuf> = None;
    let paths = config_paths();
    for (i, path) in paths.iter().enumerate() {
        let marker = match (path.exists(), active) {
            (true, None) => {
                active = Some(path);
                " (active)".green().to_string()
            }
            (true, Some(_)) => " (exists)".dimmed().to_string(),
            (false, _) => String::new(),
        };
        println!("  {}. {}{marker}", i + 1, path.display());
    }

    if active.is_none() {
        println!("\nNo configuration file found.");
        println!("Run 'tessera config init' to create one.");
    }
}

/// Loads a configuration file and reports the tile settings it yields.
fn check_config(path: Option<&Path>) -> Result<(), TesseraError> {
    let result = match path {
        Some(path) => load_config_from_path(path),
        None => config::load_config_default(),
    };

    match result {
        Ok((config, path)) => {
            let tiling = &config.tiling;
            println!("{} {}", "Valid:".green().bold(), path.display());
            println!("  layoutAxis              {}", tiling.layout_axis);
            println!("  masterAreaAxis          {}", tiling.master_area_axis);
            println!("  stackAreaAxis           {}", tiling.stack_area_axis);
            println!("  masterAreaFactor        {}", tiling.master_area_factor);
            println!("  masterAreaWindowsCount  {}", tiling.master_area_windows_count);
            println!("  restoreDelayMs          {}", tiling.restore_delay_ms);
            if !(0.0..=1.0).contains(&tiling.master_area_factor) {
                println!(
                    "  {} masterAreaFactor is clamped into [0.0, 1.0]",
                    "note:".yellow()
                );
            }
            Ok(())
        }
        Err(ConfigError::NotFound) => Err(TesseraError::ConfigError(
            "No configuration file found. Run 'tessera config init' to create one.".to_string(),
        )),
        Err(err) => Err(err.into()),
    }
}
