//! Settings loader for `config.toml`

use super::types::Settings;
use campaigner_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "mautic-campaigner";

const DEFAULT_CONFIG: &str = r#"# Mautic Campaigner Configuration

[webhook]
# n8n webhook that creates the Mautic campaign and segment
url = "https://omnibox-flow.creditoreal.com.br/webhook/testemautic"
# Seconds to wait for the webhook; 0 waits forever
timeout_secs = 30
# Shown in previews only, never requested
preview_url = "https://your-n8n-instance.com/webhook/mautic-integration"

[ui]
# Ticks (50ms) a "copied" notice stays on screen
copy_notice_ticks = 40
"#;

/// `<config_dir>/mautic-campaigner/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `path`, or from [`default_config_path`] when `None`.
///
/// A missing or unparsable file yields defaults; the problem is logged, not
/// returned, so a broken config never keeps the form from opening.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `path` unless one exists.
///
/// Returns the path written (or left alone).
pub fn init_config_file(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        info!("Config already present at {:?}", path);
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;
    info!("Wrote default config to {:?}", path);
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
            [webhook]
            url = "http://localhost:5678/webhook/test"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.webhook.url, "http://localhost:5678/webhook/test");
        assert_eq!(settings.webhook.timeout_secs, 5);
        assert_eq!(settings.ui.copy_notice_ticks, 40);
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[webhook\nurl = ").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_init_writes_parseable_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let written = init_config_file(&path).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ncopy_notice_ticks = 3\n").unwrap();

        init_config_file(&path).unwrap();
        assert_eq!(load_settings(Some(&path)).ui.copy_notice_ticks, 3);
    }
}
