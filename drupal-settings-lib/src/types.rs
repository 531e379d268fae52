//! Core data types for settings resolution and generation.
//!
//! This module defines the resolved configuration mapping, the built-in
//! default value sets, and the outcome types returned by the file
//! generation operations.

use crate::error::SettingsError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key naming the target location of the generated settings file.
pub const SETTINGS_PATH_KEY: &str = "settings_path";

/// A fully resolved configuration mapping.
///
/// Produced by [`crate::resolve`] from the three precedence layers
/// (environment > CLI overrides > defaults). The key set always equals the
/// key set of the defaults it was resolved against, so every recognized key
/// has a defined value. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    values: BTreeMap<String, String>,
}

impl ResolvedConfig {
    pub(crate) fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Look up a resolved value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate over the resolved keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The target path for the generated settings file.
    ///
    /// Fails with a [`SettingsError::ConfigError`] when the configuration was
    /// resolved against a defaults set that did not define `settings_path`,
    /// so callers fail fast instead of writing to an undefined location.
    pub fn settings_path(&self) -> Result<PathBuf, SettingsError> {
        self.values
            .get(SETTINGS_PATH_KEY)
            .map(PathBuf::from)
            .ok_or_else(|| {
                SettingsError::config("required key 'settings_path' is not resolved")
            })
    }
}

/// Outcome of a [`crate::create`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The settings file was rendered and written to the given path.
    Created(PathBuf),
    /// A file already exists at the given path; nothing was written.
    Skipped(PathBuf),
}

/// Outcome of a [`crate::delete`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The settings file at the given path was removed.
    Deleted(PathBuf),
    /// No file exists at the given path; nothing was removed.
    Skipped(PathBuf),
}

/// The Drupal docroot for a project root (conventionally `<root>/web`).
pub fn drupal_root(project_root: &Path) -> PathBuf {
    project_root.join("web")
}

/// Built-in defaults for the `create` operation.
///
/// The key set of this map is the complete set of recognized configuration
/// keys; resolution never produces a key outside it.
pub fn create_defaults(project_root: &Path) -> BTreeMap<String, String> {
    let root = drupal_root(project_root);
    let mut defaults = BTreeMap::new();
    defaults.insert("db_name".to_string(), "default".to_string());
    defaults.insert("db_user".to_string(), "root".to_string());
    defaults.insert("db_pass".to_string(), "root".to_string());
    defaults.insert("db_host".to_string(), "db".to_string());
    defaults.insert("driver".to_string(), "mysql".to_string());
    defaults.insert("db_port".to_string(), String::new());
    defaults.insert("db_prefix".to_string(), String::new());
    defaults.insert(
        SETTINGS_PATH_KEY.to_string(),
        default_settings_path(&root).to_string_lossy().into_owned(),
    );
    defaults
}

/// Built-in defaults for the `delete` operation.
///
/// Deletion only needs to locate the file, so the overridable key set is
/// just `settings_path`.
pub fn delete_defaults(project_root: &Path) -> BTreeMap<String, String> {
    let root = drupal_root(project_root);
    let mut defaults = BTreeMap::new();
    defaults.insert(
        SETTINGS_PATH_KEY.to_string(),
        default_settings_path(&root).to_string_lossy().into_owned(),
    );
    defaults
}

fn default_settings_path(docroot: &Path) -> PathBuf {
    docroot
        .join("sites")
        .join("default")
        .join("settings.local.php")
}
