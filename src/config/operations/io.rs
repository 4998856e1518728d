use crate::config::types::AppConfig;
use crate::paths::PATH_CONFIG;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_cfg() -> AppConfig {
    let path = PATH_CONFIG.join(SETTINGS_FILE);

    if !path.exists() {
        // Write the defaults out once so there is a file to edit
        let config = AppConfig::default();
        if let Err(e) = save_cfg_to(&path, &config) {
            log::warn!("config: could not write defaults to {}: {}", path.display(), e);
        }
        return config;
    }

    load_cfg_from(&path).unwrap_or_else(|e| {
        log::warn!("config: {} ignored, using defaults: {}", path.display(), e);
        AppConfig::default()
    })
}

pub fn load_cfg_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let file = File::open(path)?;
    let mut config: AppConfig = serde_json::from_reader(BufReader::new(file))?;
    config.migrate();
    Ok(config)
}

pub fn save_cfg_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::LayoutKind;

    fn scratch_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("sports127-cfg-{}-{}", name, std::process::id()))
            .join(SETTINGS_FILE)
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_file("save");
        let config = AppConfig {
            grid_cols: 3,
            layout: LayoutKind::SingleRow,
            initial_focus: Some("sky-404".into()),
            ..AppConfig::default()
        };
        save_cfg_to(&path, &config).unwrap();
        assert_eq!(load_cfg_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_invalid_json() {
        let path = scratch_file("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_cfg_from(&path), Err(ConfigError::Json(_))));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let path = scratch_file("missing");
        assert!(matches!(load_cfg_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_runs_migration() {
        let path = scratch_file("migrate");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"grid_cols": 0}"#).unwrap();
        assert_eq!(load_cfg_from(&path).unwrap().grid_cols, 4);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
