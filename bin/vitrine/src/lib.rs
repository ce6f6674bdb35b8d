//! Vitrine CLI Library
//!
//! Command implementations for the `vitrine` binary, exposed as a library so
//! they can be driven from tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (catalog, menu, check, storage, theme)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use vitrine::cmd;
//!
//! // Print the resolved navigation menu
//! cmd::menu::run(Path::new("vitrine.toml"), false).unwrap();
//! ```

pub mod cmd;

pub use vitrine_core::Config;
pub use vitrine_nav::{ContentCatalog, NavigationDocument};

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
