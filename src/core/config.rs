/*
 * Manages persisted application settings that are not part of the exported
 * configuration itself, namely the destinations of the last successful
 * export. They are stored as a small JSON document in the per-user local
 * configuration directory.
 *
 * Callers depend on the `ConfigManagerOperations` trait so tests can swap in
 * an in-memory implementation. `CoreConfigManager` is the file-backed one.
 */
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

const LAST_OUTPUT_PATHS_FILENAME: &str = "last_output_paths.json";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoProjectDirectory,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "Configuration format error: {e}"),
            ConfigError::NoProjectDirectory => {
                write!(f, "Could not determine directory for configuration")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            ConfigError::NoProjectDirectory => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Destinations of the most recent successful export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub header_path: Option<PathBuf>,
    pub codefile_path: Option<PathBuf>,
}

pub trait ConfigManagerOperations: Send + Sync {
    fn load_last_output_paths(&self, app_name: &str) -> Result<Option<OutputPaths>>;
    fn save_last_output_paths(&self, app_name: &str, paths: &OutputPaths) -> Result<()>;
}

pub struct CoreConfigManager {}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {}
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    /*
     * Loads the last used output paths for `app_name`. A missing file is not an
     * error and yields `Ok(None)`.
     */
    fn load_last_output_paths(&self, app_name: &str) -> Result<Option<OutputPaths>> {
        log::trace!("CoreConfigManager: Loading last output paths for app '{app_name}'");
        let config_dir = path_utils::get_base_app_config_local_dir(app_name)
            .ok_or(ConfigError::NoProjectDirectory)?;
        let file_path = config_dir.join(LAST_OUTPUT_PATHS_FILENAME);

        if !file_path.exists() {
            log::debug!("CoreConfigManager: Output paths file {file_path:?} does not exist.");
            return Ok(None);
        }

        let reader = BufReader::new(File::open(&file_path)?);
        let paths: OutputPaths = serde_json::from_reader(reader)?;
        log::debug!("CoreConfigManager: Loaded last output paths {paths:?} from {file_path:?}.");
        Ok(Some(paths))
    }

    fn save_last_output_paths(&self, app_name: &str, paths: &OutputPaths) -> Result<()> {
        log::trace!("CoreConfigManager: Saving last output paths {paths:?} for app '{app_name}'");
        let config_dir = path_utils::get_base_app_config_local_dir(app_name)
            .ok_or(ConfigError::NoProjectDirectory)?;
        let file_path = config_dir.join(LAST_OUTPUT_PATHS_FILENAME);

        let mut writer = BufWriter::new(File::create(&file_path)?);
        serde_json::to_writer_pretty(&mut writer, paths)?;
        writer.flush()?;
        log::debug!("CoreConfigManager: Saved last output paths to {file_path:?}.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_core_config_manager_save_and_load_output_paths() {
        // Arrange
        let unique_app_name = format!("TestApp_CoreConfig_{}", rand::random::<u64>());
        let manager = CoreConfigManager::new();
        let paths = OutputPaths {
            header_path: Some(PathBuf::from("/tmp/out/redconf.h")),
            codefile_path: Some(PathBuf::from("/tmp/out/redconf.c")),
        };

        // Act
        manager
            .save_last_output_paths(&unique_app_name, &paths)
            .expect("Saving last output paths should succeed.");
        let loaded = manager.load_last_output_paths(&unique_app_name);

        // Assert
        match loaded {
            Ok(Some(loaded_paths)) => assert_eq!(loaded_paths, paths),
            Ok(None) => panic!("Expected stored output paths, but got None."),
            Err(e) => panic!("Failed to load output paths: {e:?}"),
        }

        // Cleanup
        if let Some(dir) = path_utils::get_base_app_config_local_dir(&unique_app_name) {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_core_config_manager_load_without_file_returns_none() {
        let unique_app_name = format!("TestApp_CoreConfigEmpty_{}", rand::random::<u64>());
        let manager = CoreConfigManager::new();

        let loaded = manager.load_last_output_paths(&unique_app_name);

        assert!(matches!(loaded, Ok(None)), "Got {loaded:?}");
        if let Some(dir) = path_utils::get_base_app_config_local_dir(&unique_app_name) {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_core_config_manager_load_reports_corrupt_file() {
        let unique_app_name = format!("TestApp_CoreConfigCorrupt_{}", rand::random::<u64>());
        let dir = path_utils::get_base_app_config_local_dir(&unique_app_name)
            .expect("Config dir should be available");
        fs::write(dir.join(LAST_OUTPUT_PATHS_FILENAME), "not json").unwrap();

        let loaded = CoreConfigManager::new().load_last_output_paths(&unique_app_name);

        assert!(matches!(loaded, Err(ConfigError::Serde(_))), "Got {loaded:?}");
        let _ = fs::remove_dir_all(dir);
    }
}
