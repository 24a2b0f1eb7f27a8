/*
 * This module consolidates the core, platform-agnostic logic of the application.
 * It re-exports the settings model and its validation/formatting provider
 * (`SettingsProviderOperations`), the generated-file writer
 * (`OutputFileOperations`), and the persisted application configuration
 * (`ConfigManagerOperations`), so the application logic depends only on traits.
 */
pub mod config;
pub mod output_files;
pub mod path_utils;
pub mod settings;

// Re-export settings related items
pub use settings::{
    CoreSettingsProvider, Settings, SettingsProviderOperations, load_settings, save_settings,
};

// Re-export output related items
pub use output_files::{CoreOutputFiles, OutputFileOperations, OutputSink, write_generated_file};

// Re-export config related items
pub use config::{ConfigManagerOperations, CoreConfigManager, OutputPaths};
