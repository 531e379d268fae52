//! Layered configuration resolution.
//!
//! This module merges three configuration sources with strict precedence:
//! environment variables win over CLI overrides, which win over built-in
//! defaults. The environment is an explicit lookup passed by the caller, so
//! tests can substitute a fake without mutating process-wide state.

use crate::error::SettingsError;
use crate::types::ResolvedConfig;
use std::collections::BTreeMap;
use tracing::warn;

/// Parse a single raw hook argument into an override pair.
///
/// Tokens that do not start with `--` are not overrides and yield
/// `Ok(None)`. A `--name=value` token yields the pair with the value split
/// on the first `=`; the value may be empty (`--db_pass=`). A token that
/// starts with `--` but carries no `=` at all is a typed
/// [`SettingsError::MalformedArgument`], never a runtime fault.
pub fn parse_cli_override(token: &str) -> Result<Option<(String, String)>, SettingsError> {
    let Some(body) = token.strip_prefix("--") else {
        return Ok(None);
    };

    match body.split_once('=') {
        Some((name, value)) => Ok(Some((name.to_string(), value.to_string()))),
        None => Err(SettingsError::malformed_argument(token)),
    }
}

/// Extract override pairs from the raw hook arguments.
///
/// Every well-formed `--name=value` token is captured, including names that
/// are not recognized configuration keys; unrecognized names simply never
/// survive the merge. Later tokens overwrite earlier ones for the same name.
/// Malformed tokens are skipped with a warning.
pub fn extract_cli_options(arguments: &[String]) -> BTreeMap<String, String> {
    let mut options = BTreeMap::new();

    for argument in arguments {
        match parse_cli_override(argument) {
            Ok(Some((name, value))) => {
                options.insert(name, value);
            }
            Ok(None) => {}
            Err(err) => {
                warn!("skipping malformed hook argument: {}", err);
            }
        }
    }

    options
}

/// Extract override values from an environment lookup.
///
/// Each allowed key is checked under its upper-cased name (`db_host` is read
/// from `DB_HOST`). Only keys present in the lookup are captured; values are
/// taken as-is, empty strings included.
pub fn extract_environment_options<'a, F, I>(lookup: F, allowed: I) -> BTreeMap<String, String>
where
    F: Fn(&str) -> Option<String>,
    I: IntoIterator<Item = &'a str>,
{
    let mut options = BTreeMap::new();

    for name in allowed {
        if let Some(value) = lookup(&name.to_uppercase()) {
            options.insert(name.to_string(), value);
        }
    }

    options
}

/// Resolve a total configuration from the three precedence layers.
///
/// The allowed key set is the key set of `defaults`. For each allowed key
/// the environment layer is consulted first, then the CLI overrides, then
/// the default value, so the result always covers every default key.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use std::path::Path;
///
/// let defaults = drupal_settings_lib::create_defaults(Path::new("/project"));
/// let args = vec!["--db_user=admin".to_string()];
/// let config = drupal_settings_lib::resolve(|_| None, &args, &defaults);
///
/// assert_eq!(config.get("db_user"), Some("admin"));
/// assert_eq!(config.get("db_host"), Some("db"));
/// ```
pub fn resolve<F>(
    environment: F,
    arguments: &[String],
    defaults: &BTreeMap<String, String>,
) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let env_options =
        extract_environment_options(environment, defaults.keys().map(String::as_str));
    let cli_options = extract_cli_options(arguments);

    let mut values = BTreeMap::new();
    for (key, default_value) in defaults {
        let value = env_options
            .get(key)
            .or_else(|| cli_options.get(key))
            .unwrap_or(default_value);
        values.insert(key.clone(), value.clone());
    }

    ResolvedConfig::new(values)
}

/// Environment lookup backed by the real process environment.
///
/// Pass this to [`resolve`] from binaries; tests should pass a closure over
/// a fixed map instead.
pub fn process_environment(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
