// drupal-settings-lib/tests/integration.rs

//! Integration tests for the create/delete lifecycle against a real
//! temporary filesystem.

use drupal_settings_lib::{
    create, create_defaults, delete, delete_defaults, resolve, CreateOutcome, DeleteOutcome,
    SettingsError,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn resolved_for(root: &Path) -> drupal_settings_lib::ResolvedConfig {
    resolve(|_| None, &[], &create_defaults(root))
}

#[test]
fn test_create_writes_file_under_sites_default() {
    let project = TempDir::new().unwrap();
    let config = resolved_for(project.path());

    let outcome = create(&config).unwrap();
    let expected = project
        .path()
        .join("web/sites/default/settings.local.php");
    assert_eq!(outcome, CreateOutcome::Created(expected.clone()));

    let content = fs::read_to_string(&expected).unwrap();
    assert!(content.contains("'database' => 'default'"));
    assert!(content.contains("'host' => 'db'"));
}

#[test]
fn test_create_is_idempotent_and_preserves_first_write() {
    let project = TempDir::new().unwrap();
    let config = resolved_for(project.path());

    let first = create(&config).unwrap();
    let path = match first {
        CreateOutcome::Created(path) => path,
        other => panic!("expected Created, got {:?}", other),
    };

    // Hand-edit the file, then create again with different overrides.
    fs::write(&path, "<?php // hand-edited\n").unwrap();
    let overrides = vec!["--db_name=other".to_string()];
    let changed = resolve(|_| None, &overrides, &create_defaults(project.path()));

    let second = create(&changed).unwrap();
    assert_eq!(second, CreateOutcome::Skipped(path.clone()));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<?php // hand-edited\n"
    );
}

#[test]
fn test_create_delete_create_round_trips_byte_identical() {
    let project = TempDir::new().unwrap();
    let config = resolved_for(project.path());
    let path = config.settings_path().unwrap();

    create(&config).unwrap();
    let first = fs::read(&path).unwrap();

    assert_eq!(delete(&config).unwrap(), DeleteOutcome::Deleted(path.clone()));
    create(&config).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_delete_without_file_is_skipped() {
    let project = TempDir::new().unwrap();
    let config = resolve(|_| None, &[], &delete_defaults(project.path()));

    let path = config.settings_path().unwrap();
    assert_eq!(delete(&config).unwrap(), DeleteOutcome::Skipped(path));
}

#[test]
fn test_settings_path_override_redirects_output() {
    let project = TempDir::new().unwrap();
    let target = project.path().join("custom/settings.php");
    let overrides = vec![format!("--settings_path={}", target.display())];
    let config = resolve(|_| None, &overrides, &create_defaults(project.path()));

    let outcome = create(&config).unwrap();
    assert_eq!(outcome, CreateOutcome::Created(target.clone()));
    assert!(target.exists());
}

#[test]
fn test_missing_settings_path_fails_fast() {
    // Defaults without settings_path must never reach the filesystem.
    let mut defaults = BTreeMap::new();
    defaults.insert("db_name".to_string(), "default".to_string());
    let config = resolve(|_| None, &[], &defaults);

    assert!(matches!(
        create(&config),
        Err(SettingsError::ConfigError { .. })
    ));
    assert!(matches!(
        delete(&config),
        Err(SettingsError::ConfigError { .. })
    ));
}

#[test]
fn test_no_staging_file_left_behind() {
    let project = TempDir::new().unwrap();
    let config = resolved_for(project.path());

    create(&config).unwrap();
    let staging = project
        .path()
        .join("web/sites/default/settings.local.php.tmp");
    assert!(!staging.exists());
}
