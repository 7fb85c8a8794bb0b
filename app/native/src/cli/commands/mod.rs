//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `layout` - Frame computation and layout symbol
//! - `simulate` - Window event script replay
//! - `types` - Arguments shared across commands

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::TesseraError;
use crate::{config, schema};

pub mod config_cmd;
pub mod layout;
pub mod simulate;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use simulate::SimulateArgs;
pub use types::LayoutArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tessera CLI - master/stack tile layout engine.
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log debug output to stderr. Overrides `TESSERA_LOG`.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Compute window frames for a tile layout.
    ///
    /// Parameters default to the configuration file and can be overridden
    /// per invocation.
    #[command(after_long_help = r#"Examples:
  tessera layout                                   # 3 windows on 1920x1080
  tessera layout -n 5 --master-count 2             # Two master windows
  tessera layout --axis top-to-bottom --factor 0.7
  tessera layout --area 0,25,2560,1415 --json"#)]
    Layout {
        #[command(flatten)]
        args: LayoutArgs,

        /// Output in JSON format instead of table format.
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Print the layout symbol, e.g. `[]=`.
    #[command(after_long_help = r#"Examples:
  tessera symbol                       # []=
  tessera symbol --axis monocle -n 4   # [4]
  tessera symbol -m 2 --master-axis top-to-bottom"#)]
    Symbol {
        #[command(flatten)]
        args: LayoutArgs,

        /// Visible window count. Defaults to the counted windows.
        #[arg(long, value_name = "COUNT")]
        visible: Option<usize>,
    },

    /// Replay a window event script against a simulated screen.
    ///
    /// The script is a JSONC array of events such as
    /// `{ "event": "created", "window": { "id": 1 } }`.
    Simulate(SimulateArgs),

    /// Configuration file management commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Tessera configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(tessera completions --shell zsh)"
    ///   tessera completions --shell fish > ~/.config/fish/completions/tessera.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), TesseraError> {
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(TesseraError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
            config::init();
        }

        match &self.command {
            Commands::Layout { args, json } => layout::execute_layout(args, *json),
            Commands::Symbol { args, visible } => layout::execute_symbol(args, *visible),
            Commands::Simulate(args) => simulate::execute(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "tessera", &mut io::stdout());
    }
}
