//! Idempotent creation and removal of the generated settings file.
//!
//! Presence of a file at the target path is the sole idempotency guard:
//! `create` never overwrites an existing file, and `delete` treats a missing
//! file as a no-op. Both report what happened through their outcome type so
//! the caller owns the user-facing status lines.

use crate::error::SettingsError;
use crate::template::render_settings;
use crate::types::{CreateOutcome, DeleteOutcome, ResolvedConfig};
use std::fs;
use tracing::{debug, info};

/// Materialize the settings file for a resolved configuration.
///
/// If a file already exists at the resolved `settings_path`, nothing is
/// written and the first file's content is preserved unchanged. Otherwise
/// the template is rendered and written atomically (temp file plus rename in
/// the target directory), creating intermediate directories as needed.
///
/// Filesystem failures surface as [`SettingsError::FileError`]; no partial
/// state is rolled back.
pub fn create(config: &ResolvedConfig) -> Result<CreateOutcome, SettingsError> {
    let path = config.settings_path()?;

    if path.exists() {
        info!("settings file already exists at {}", path.display());
        return Ok(CreateOutcome::Skipped(path));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SettingsError::file_error(
                parent.to_string_lossy(),
                format!("Failed to create directory: {}", e),
            )
        })?;
    }

    let content = render_settings(config);

    // Staged next to the target so the rename stays on one filesystem.
    let staging = path.with_extension("php.tmp");
    fs::write(&staging, &content).map_err(|e| {
        SettingsError::file_error(
            staging.to_string_lossy(),
            format!("Failed to write settings file: {}", e),
        )
    })?;
    fs::rename(&staging, &path).map_err(|e| {
        SettingsError::file_error(
            path.to_string_lossy(),
            format!("Failed to move settings file into place: {}", e),
        )
    })?;

    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(CreateOutcome::Created(path))
}

/// Remove the settings file for a resolved configuration.
///
/// A missing file is an informational outcome, not an error. No prompt and
/// no backup: this exists to reset a local environment.
pub fn delete(config: &ResolvedConfig) -> Result<DeleteOutcome, SettingsError> {
    let path = config.settings_path()?;

    if !path.exists() {
        info!("no settings file to delete at {}", path.display());
        return Ok(DeleteOutcome::Skipped(path));
    }

    fs::remove_file(&path).map_err(|e| {
        SettingsError::file_error(
            path.to_string_lossy(),
            format!("Failed to delete settings file: {}", e),
        )
    })?;

    Ok(DeleteOutcome::Deleted(path))
}
