//! Vitrine CLI
//!
//! Content catalog, navigation menu, and editor tooling for the glass.no site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use vitrine::cmd::theme::ThemeAction;
use vitrine_core::ContentKind;
use vitrine_ui::Theme;

/// Command-line interface for Vitrine.
#[derive(Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Content catalog and navigation tooling for the glass.no site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vitrine.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// List every content item in catalog order
    Catalog {
        /// Only list one collection (page, post, glasstype)
        #[arg(short, long)]
        kind: Option<ContentKind>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the navigation menu with resolved labels
    Menu {
        /// Emit JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration, content, and navigation
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Show the editor storage backend for the current environment
    Storage,
    /// Show or change the persisted theme
    Theme {
        /// Flip between light and dark
        #[arg(long, conflicts_with = "set")]
        toggle: bool,
        /// Switch to a specific theme (light, dark)
        #[arg(long)]
        set: Option<Theme>,
        /// Report a dark color-scheme preference
        #[arg(long)]
        prefers_dark: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    vitrine::init_tracing(cli.verbose);

    match cli.command {
        Commands::Catalog { kind, json } => {
            vitrine::cmd::catalog::run(&cli.config, kind, json)?;
        }
        Commands::Menu { json } => {
            vitrine::cmd::menu::run(&cli.config, json)?;
        }
        Commands::Check { strict } => {
            vitrine::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Storage => {
            vitrine::cmd::storage::run(&cli.config)?;
        }
        Commands::Theme {
            toggle,
            set,
            prefers_dark,
        } => {
            let action = match (toggle, set) {
                (true, _) => ThemeAction::Toggle,
                (false, Some(theme)) => ThemeAction::Set(theme),
                (false, None) => ThemeAction::Show,
            };
            vitrine::cmd::theme::run(&cli.config, action, prefers_dark)?;
        }
    }

    Ok(())
}
