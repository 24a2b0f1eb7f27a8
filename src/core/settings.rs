/*
 * This module holds the file system configuration settings that the utility
 * exports, together with the rules that validate them and the formatters that
 * turn them into the generated header and code file. Settings are persisted as
 * JSON documents.
 *
 * The save controller never touches `Settings` directly; it goes through the
 * `SettingsProviderOperations` trait so that tests can substitute canned
 * validation results and file bodies. `CoreSettingsProvider` is the concrete
 * implementation backed by a `Settings` value.
 */
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

pub const MIN_BLOCK_SIZE: u32 = 128;
pub const MAX_BLOCK_SIZE: u32 = 65536;
pub const MIN_BUFFER_COUNT: u32 = 2;
pub const MAX_BUFFER_COUNT: u32 = 255;
const RECOMMENDED_MIN_BUFFER_COUNT: u32 = 12;
pub const MAX_VOLUME_COUNT: usize = 255;
const MIN_VOLUME_BLOCKS: u64 = 32;
const RECOMMENDED_MAX_IO_RETRIES: u32 = 10;

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Serde(err)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {e}"),
            SettingsError::Serde(e) => write!(f, "Settings format error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Serde(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionMode {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSettings {
    pub name: String,
    pub sector_size: u32,
    pub sector_count: u64,
    pub inode_count: u32,
    pub atomic_sector_write: bool,
    pub block_io_retries: u32,
}

impl VolumeSettings {
    pub fn new(name: &str) -> Self {
        VolumeSettings {
            name: name.to_string(),
            sector_size: 512,
            sector_count: 65536,
            inode_count: 1024,
            atomic_sector_write: false,
            block_io_retries: 0,
        }
    }
}

// The full set of user-editable settings that end up in the generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub block_size: u32,
    pub buffer_count: u32,
    pub enable_posix_api: bool,
    pub enable_fse_api: bool,
    pub transaction_mode: TransactionMode,
    pub volumes: Vec<VolumeSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            block_size: 512,
            buffer_count: 12,
            enable_posix_api: true,
            enable_fse_api: false,
            transaction_mode: TransactionMode::Automatic,
            volumes: vec![VolumeSettings::new("VOL0:")],
        }
    }
}

/*
 * The result of validating a `Settings` value. Errors block saving; warnings
 * are advisory and only require confirmation. Both lists keep the order in
 * which the rules were evaluated.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/*
 * Abstraction over the settings engine as seen by the save controller:
 * validation plus the two formatters producing the full bodies of the
 * generated files (without the generated-file notice).
 */
pub trait SettingsProviderOperations: Send + Sync {
    fn get_errors(&self) -> ValidationResult;
    fn format_header_output(&self) -> String;
    fn format_codefile_output(&self) -> String;
}

pub struct CoreSettingsProvider {
    settings: Settings,
}

impl CoreSettingsProvider {
    pub fn new(settings: Settings) -> Self {
        CoreSettingsProvider { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl SettingsProviderOperations for CoreSettingsProvider {
    fn get_errors(&self) -> ValidationResult {
        validate_settings(&self.settings)
    }

    fn format_header_output(&self) -> String {
        format_header(&self.settings)
    }

    fn format_codefile_output(&self) -> String {
        format_codefile(&self.settings)
    }
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    log::debug!("Settings: Loading settings from {path:?}");
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let settings: Settings = serde_json::from_reader(reader)?;
    log::debug!(
        "Settings: Loaded settings with {} volume(s) from {path:?}",
        settings.volumes.len()
    );
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, settings)?;
    writer.flush()?;
    log::debug!("Settings: Saved settings to {path:?}");
    Ok(())
}

fn is_power_of_two_in_range(value: u32, min: u32, max: u32) -> bool {
    value.is_power_of_two() && (min..=max).contains(&value)
}

/*
 * Evaluates every rule against `settings` and collects the messages.
 * Rules that depend on an invalid value (e.g. the block count of a volume
 * when the block size itself is invalid) are skipped to avoid cascades of
 * follow-up errors.
 */
pub fn validate_settings(settings: &Settings) -> ValidationResult {
    let mut result = ValidationResult::default();
    let block_size_valid =
        is_power_of_two_in_range(settings.block_size, MIN_BLOCK_SIZE, MAX_BLOCK_SIZE);

    if !block_size_valid {
        result.errors.push(format!(
            "Invalid block size: {} (must be a power of two between {MIN_BLOCK_SIZE} and {MAX_BLOCK_SIZE})",
            settings.block_size
        ));
    }

    if !(MIN_BUFFER_COUNT..=MAX_BUFFER_COUNT).contains(&settings.buffer_count) {
        result.errors.push("Invalid buffer size".to_string());
    } else if settings.buffer_count < RECOMMENDED_MIN_BUFFER_COUNT {
        result.warnings.push(format!(
            "Buffer count of {} is below {RECOMMENDED_MIN_BUFFER_COUNT} and may reduce performance",
            settings.buffer_count
        ));
    }

    if settings.enable_posix_api == settings.enable_fse_api {
        result
            .errors
            .push("Exactly one of the POSIX-like API and the FSE API must be enabled".to_string());
    }

    if settings.volumes.is_empty() {
        result
            .errors
            .push("At least one volume must be defined".to_string());
    } else if settings.volumes.len() > MAX_VOLUME_COUNT {
        result.errors.push(format!(
            "Too many volumes: {} (at most {MAX_VOLUME_COUNT})",
            settings.volumes.len()
        ));
    }

    let mut seen_names = HashSet::new();
    for (index, volume) in settings.volumes.iter().enumerate() {
        let has_control_chars = volume.name.chars().any(char::is_control);
        let label = if volume.name.is_empty() || has_control_chars {
            format!("Volume {index}")
        } else {
            format!("Volume {}", volume.name)
        };

        if volume.name.trim().is_empty() {
            result.errors.push(format!("{label}: name must not be empty"));
        } else if has_control_chars {
            result
                .errors
                .push(format!("{label}: name must not contain control characters"));
        } else if !seen_names.insert(volume.name.as_str()) {
            result
                .errors
                .push(format!("{label}: name is used by more than one volume"));
        }

        let sector_size_valid = block_size_valid
            && is_power_of_two_in_range(volume.sector_size, MIN_BLOCK_SIZE, settings.block_size);
        if block_size_valid && !sector_size_valid {
            result.errors.push(format!(
                "{label}: invalid sector size {} (must be a power of two between {MIN_BLOCK_SIZE} and the block size)",
                volume.sector_size
            ));
        }

        if sector_size_valid {
            let volume_bytes = volume.sector_count.saturating_mul(u64::from(volume.sector_size));
            let block_count = volume_bytes / u64::from(settings.block_size);
            if block_count < MIN_VOLUME_BLOCKS {
                result.errors.push(format!(
                    "{label}: volume is too small ({block_count} blocks, at least {MIN_VOLUME_BLOCKS} required)"
                ));
            } else if u64::from(volume.inode_count) > block_count {
                result.errors.push(format!(
                    "{label}: inode count {} exceeds the number of blocks ({block_count})",
                    volume.inode_count
                ));
            }
        }

        if volume.inode_count == 0 {
            result
                .errors
                .push(format!("{label}: at least one inode is required"));
        }

        if volume.block_io_retries > RECOMMENDED_MAX_IO_RETRIES {
            result.warnings.push(format!(
                "{label}: {} block I/O retries may hide failing media",
                volume.block_io_retries
            ));
        }
    }

    result
}

// Escapes `text` for use inside a C string literal. Control characters use
// octal escapes, which never absorb the following character.
fn escape_c_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    let _ = write!(escaped, "\\{byte:03o}");
                }
            }
            c => escaped.push(c),
        }
    }
    escaped
}

fn c_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/*
 * Formats the declarations file. Values are emitted as preprocessor
 * definitions so the file can be included from any translation unit.
 */
pub fn format_header(settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#ifndef REDCONF_H");
    let _ = writeln!(out, "#define REDCONF_H");
    let _ = writeln!(out);
    let _ = writeln!(out, "#define REDCONF_API_POSIX {}", c_bool(settings.enable_posix_api));
    let _ = writeln!(out, "#define REDCONF_API_FSE {}", c_bool(settings.enable_fse_api));
    let _ = writeln!(
        out,
        "#define REDCONF_TRANSACT_DEFAULT {}",
        match settings.transaction_mode {
            TransactionMode::Automatic => "RED_TRANSACT_AUTOMATIC",
            TransactionMode::Manual => "RED_TRANSACT_MANUAL",
        }
    );
    let _ = writeln!(out, "#define REDCONF_BLOCK_SIZE {}U", settings.block_size);
    let _ = writeln!(out, "#define REDCONF_BUFFER_COUNT {}U", settings.buffer_count);
    let _ = writeln!(out, "#define REDCONF_VOLUME_COUNT {}U", settings.volumes.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "#endif");
    out
}

/*
 * Formats the definitions file: the volume configuration table, one
 * initializer per volume in declaration order.
 */
pub fn format_codefile(settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#include <redconf.h>");
    let _ = writeln!(out, "#include <redtypes.h>");
    let _ = writeln!(out, "#include <redvolume.h>");
    let _ = writeln!(out);
    let _ = writeln!(out, "const VOLCONF gaRedVolConf[REDCONF_VOLUME_COUNT] =");
    let _ = writeln!(out, "{{");
    for volume in &settings.volumes {
        let _ = writeln!(
            out,
            "    {{ {}U, {}U, {}, {}U, {}U, \"{}\" }},",
            volume.sector_size,
            volume.sector_count,
            if volume.atomic_sector_write { "true" } else { "false" },
            volume.inode_count,
            volume.block_io_retries,
            escape_c_string(&volume.name)
        );
    }
    let _ = writeln!(out, "}};");
    out
}
