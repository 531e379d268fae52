//! Settings file template rendering.
//!
//! Rendering is a pure function from a [`ResolvedConfig`] to the text of a
//! `settings.local.php` file, kept separate from file I/O so it can be unit
//! tested without touching a filesystem.
//!
//! Resolved values are interpolated as literal strings into generated PHP.
//! No escaping is performed: a value containing a quote character will break
//! the generated file's syntax. This is a documented limitation of the tool,
//! which targets local development values only.

use crate::types::ResolvedConfig;

/// Render the local settings file content for a resolved configuration.
///
/// The output is deterministic: the same configuration always produces
/// byte-identical text. The hash salt is a fixed fingerprint of a literal
/// string rather than a random value, keeping local environments
/// reproducible.
pub fn render_settings(config: &ResolvedConfig) -> String {
    // Constant salt for local development.
    let hash_salt = format!("{:x}", md5::compute("settings"));

    format!(
        r#"<?php

/**
 * @file
 * Generated Docksal settings.
 *
 * Do not modify this file if you need to override default settings.
 */

// Local DB settings.
$databases = [
  'default' =>
    [
      'default' =>
        [
          'database' => '{db_name}',
          'username' => '{db_user}',
          'password' => '{db_pass}',
          'host' => '{db_host}',
          'port' => '{db_port}',
          'driver' => '{driver}',
          'prefix' => '{db_prefix}',
        ],
    ],
];

$settings['hash_salt'] = '{hash_salt}';

$settings['trusted_host_patterns'][] = '^.+$';

$settings['file_private_path'] = 'sites/default/files/private';
$settings['file_public_path'] = 'sites/default/files';

// No caches.

$settings['container_yamls'][] = DRUPAL_ROOT . '/sites/development.services.yml';

$config['system.logging']['error_level'] = 'verbose';

$config['system.performance']['css']['preprocess'] = FALSE;
$config['system.performance']['js']['preprocess'] = FALSE;

$config['advagg.settings']['enabled'] = FALSE;

$settings['cache']['bins']['render'] = 'cache.backend.null';
$settings['cache']['bins']['page'] = 'cache.backend.null';
$settings['cache']['bins']['dynamic_page_cache'] = 'cache.backend.null';

$settings['rebuild_access'] = TRUE;

$settings['skip_permissions_hardening'] = TRUE;
"#,
        db_name = config.get("db_name").unwrap_or_default(),
        db_user = config.get("db_user").unwrap_or_default(),
        db_pass = config.get("db_pass").unwrap_or_default(),
        db_host = config.get("db_host").unwrap_or_default(),
        db_port = config.get("db_port").unwrap_or_default(),
        driver = config.get("driver").unwrap_or_default(),
        db_prefix = config.get("db_prefix").unwrap_or_default(),
        hash_salt = hash_salt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_defaults, resolve};
    use std::path::Path;

    fn default_config() -> ResolvedConfig {
        resolve(|_| None, &[], &create_defaults(Path::new("/project")))
    }

    #[test]
    fn test_render_embeds_default_database_values() {
        let content = render_settings(&default_config());
        assert!(content.contains("'database' => 'default'"));
        assert!(content.contains("'host' => 'db'"));
        assert!(content.contains("'username' => 'root'"));
        assert!(content.contains("'driver' => 'mysql'"));
    }

    #[test]
    fn test_render_embeds_overridden_values() {
        let defaults = create_defaults(Path::new("/project"));
        let args = vec!["--db_name=drupal".to_string(), "--db_port=3307".to_string()];
        let content = render_settings(&resolve(|_| None, &args, &defaults));

        assert!(content.contains("'database' => 'drupal'"));
        assert!(content.contains("'port' => '3307'"));
    }

    #[test]
    fn test_render_uses_constant_salt() {
        let content = render_settings(&default_config());
        assert!(content
            .contains("$settings['hash_salt'] = '2e5d8aa3dfa8ef34ca5131d20f9dad51';"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = default_config();
        assert_eq!(render_settings(&config), render_settings(&config));
    }

    #[test]
    fn test_render_disables_caches_and_hardening() {
        let content = render_settings(&default_config());
        assert!(content.contains("$settings['cache']['bins']['render'] = 'cache.backend.null';"));
        assert!(content.contains("$settings['cache']['bins']['page'] = 'cache.backend.null';"));
        assert!(content
            .contains("$settings['cache']['bins']['dynamic_page_cache'] = 'cache.backend.null';"));
        assert!(content.contains("$settings['rebuild_access'] = TRUE;"));
        assert!(content.contains("$settings['skip_permissions_hardening'] = TRUE;"));
        assert!(content.contains("$settings['trusted_host_patterns'][] = '^.+$';"));
    }
}
