//! # Drupal Settings Library
//!
//! Layered configuration resolution and idempotent generation of a local
//! Drupal settings file, intended to be driven from build-lifecycle hooks.
//!
//! Values are merged from three layers with strict precedence: environment
//! variables override raw `--key=value` hook arguments, which override
//! built-in defaults. The generated file is never overwritten (presence on
//! disk is the sole idempotency guard), and removal is an explicit,
//! separate operation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), drupal_settings_lib::SettingsError> {
//!     let defaults = drupal_settings_lib::create_defaults(Path::new("."));
//!     let config = drupal_settings_lib::resolve(
//!         drupal_settings_lib::process_environment,
//!         &[],
//!         &defaults,
//!     );
//!
//!     let outcome = drupal_settings_lib::create(&config)?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Layered resolution**: environment > CLI overrides > defaults
//! - **Idempotent generation**: existing files are never clobbered
//! - **Pure rendering**: template output is testable without a filesystem
//! - **Explicit inputs**: the environment is a lookup you pass in

// Re-export main public API types and functions
// This makes them available as drupal_settings_lib::TypeName
pub use error::SettingsError;
pub use generator::{create, delete};
pub use resolve::{
    extract_cli_options, extract_environment_options, parse_cli_override, process_environment,
    resolve,
};
pub use template::render_settings;
pub use types::{
    create_defaults, delete_defaults, drupal_root, CreateOutcome, DeleteOutcome, ResolvedConfig,
    SETTINGS_PATH_KEY,
};

// Internal modules - these are not part of the public API
mod error;
mod generator;
mod resolve;
mod template;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SettingsError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
