//! Drupal Settings CLI Application
//!
//! The hook entry point the build lifecycle invokes around dependency
//! installation. Raw `--key=value` tokens passed by the lifecycle runner are
//! forwarded verbatim to the resolver; status lines go to stdout and both
//! `Created`/`Deleted` and `Skipped` outcomes exit 0.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use console::style;
use drupal_settings_lib::{
    create, create_defaults, delete, delete_defaults, process_environment, resolve, CreateOutcome,
    DeleteOutcome, SettingsError,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for drupal-settings
#[derive(Parser, Debug)]
#[command(name = "drupal-settings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate or remove a local Drupal settings file")]
#[command(
    long_about = "Generate or remove web/sites/default/settings.local.php.\n\nValues are resolved with strict precedence: environment variables (DB_NAME, DB_HOST, ...) override --key=value tokens, which override built-in defaults. An existing file is never overwritten."
)]
#[command(styles = STYLES)]
struct Cli {
    /// Project root containing the Drupal docroot (<root>/web)
    #[arg(long = "root", value_name = "DIR", default_value = ".", global = true)]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the settings file unless it already exists
    Create {
        /// Raw hook overrides of the form --key=value
        #[arg(value_name = "OVERRIDES", trailing_var_arg = true, allow_hyphen_values = true)]
        overrides: Vec<String>,
    },
    /// Remove the generated settings file if present
    Delete {
        /// Raw hook overrides of the form --key=value
        #[arg(value_name = "OVERRIDES", trailing_var_arg = true, allow_hyphen_values = true)]
        overrides: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        process::exit(1);
    }
}

/// Set up log output on stderr so stdout carries only status lines.
///
/// RUST_LOG takes precedence over the -v flags when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), SettingsError> {
    match &cli.command {
        Command::Create { overrides } => {
            let defaults = create_defaults(&cli.root);
            let config = resolve(process_environment, overrides, &defaults);

            match create(&config)? {
                CreateOutcome::Created(path) => {
                    println!("{} Created file {}", style("✔").green(), path.display());
                }
                CreateOutcome::Skipped(_) => {
                    println!(
                        "{} Skipping creation of Drupal settings file - file already exists",
                        style("‣").yellow()
                    );
                }
            }
        }
        Command::Delete { overrides } => {
            let defaults = delete_defaults(&cli.root);
            let config = resolve(process_environment, overrides, &defaults);

            match delete(&config)? {
                DeleteOutcome::Deleted(path) => {
                    println!("{} Deleted file {}", style("✔").green(), path.display());
                }
                DeleteOutcome::Skipped(_) => {
                    println!(
                        "{} Skipping deletion of Drupal settings file - file does not exist",
                        style("‣").yellow()
                    );
                }
            }
        }
    }

    Ok(())
}
