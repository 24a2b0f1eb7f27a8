mod app_logic;
mod core;
mod platform_layer;
mod ui_description_layer;

use crate::app_logic::handler::APP_NAME_FOR_CONFIG;
use crate::app_logic::{OutcomeCode, SaveController};
use crate::core::{
    CoreConfigManager, CoreOutputFiles, CoreSettingsProvider, OutputPaths, Settings,
    SettingsProviderOperations, load_settings, path_utils, save_settings,
};
use crate::platform_layer::{PlatformCommand, PlatformInterface};

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

const LOG_FILENAME: &str = "config_exporter.log";
const USAGE: &str =
    "Usage: config_exporter [SETTINGS.json] [--header PATH] [--codefile PATH] [--check]";

#[derive(Debug, Default, PartialEq, Eq)]
struct CommandLine {
    settings_path: Option<PathBuf>,
    header_path: Option<PathBuf>,
    codefile_path: Option<PathBuf>,
    check_only: bool,
}

fn parse_command_line<I>(args: I) -> Result<CommandLine, String>
where
    I: IntoIterator<Item = String>,
{
    let mut command_line = CommandLine::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--header" | "--codefile" => {
                let value = args
                    .next()
                    .filter(|v| !v.starts_with("--"))
                    .ok_or_else(|| format!("Missing path after {arg}"))?;
                if arg == "--header" {
                    command_line.header_path = Some(PathBuf::from(value));
                } else {
                    command_line.codefile_path = Some(PathBuf::from(value));
                }
            }
            "--check" => command_line.check_only = true,
            other if other.starts_with("--") => return Err(format!("Unknown option {other}")),
            other => {
                if command_line.settings_path.is_some() {
                    return Err(format!("Unexpected argument {other}"));
                }
                command_line.settings_path = Some(PathBuf::from(other));
            }
        }
    }
    Ok(command_line)
}

/*
 * Initializes logging: Info and above go to the terminal (stderr, so the
 * console UI on stdout stays readable), and everything from Debug up is
 * written to the log file in the application's config directory, if one is
 * available.
 */
fn initialize_logging() {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let log_file_result = path_utils::get_base_app_config_local_dir(APP_NAME_FOR_CONFIG)
        .map(|dir| dir.join(LOG_FILENAME))
        .map(|path| File::create(&path).map(|file| (path, file)));
    let log_path = match log_file_result {
        Some(Ok((path, file))) => {
            loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
            Some(path)
        }
        Some(Err(e)) => {
            eprintln!("Failed to create log file: {e}");
            None
        }
        None => None,
    };

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("Failed to initialize logger: {e}");
        return;
    }
    match log_path {
        Some(path) => log::debug!("Main: Logging to {path:?}."),
        None => log::warn!("Main: No config directory, logging to the terminal only."),
    }
}

fn run_application(command_line: CommandLine) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let (settings, settings_source) = match &command_line.settings_path {
        Some(path) if !path.exists() => {
            log::info!("Main: Settings file {path:?} not found, creating it with defaults.");
            let settings = Settings::default();
            save_settings(path, &settings)?;
            (settings, path.display().to_string())
        }
        Some(path) => {
            log::info!("Main: Loading settings from {path:?}.");
            (load_settings(path)?, path.display().to_string())
        }
        None => {
            log::info!("Main: No settings file given, using defaults.");
            (Settings::default(), "defaults".to_string())
        }
    };

    let settings_provider = Arc::new(CoreSettingsProvider::new(settings));
    log::debug!(
        "Main: {} volume(s) configured.",
        settings_provider.settings().volumes.len()
    );
    let settings_have_errors = settings_provider.get_errors().has_errors();

    let mut controller = SaveController::new(
        settings_provider,
        Arc::new(CoreOutputFiles::new()),
        Arc::new(CoreConfigManager::new()),
    );
    controller.set_default_output_paths(OutputPaths {
        header_path: command_line.header_path,
        codefile_path: command_line.codefile_path,
    });

    let mut platform = PlatformInterface::new(BufReader::new(io::stdin()), io::stdout());
    let main_window_id = platform.create_window("Configuration Exporter");
    let mut initial_commands =
        ui_description_layer::build_main_window_static_layout(main_window_id, &settings_source);

    if command_line.check_only {
        // The report dialog is queued on the controller; show the window before it.
        initial_commands.push(PlatformCommand::ShowWindow {
            window_id: main_window_id,
        });
        controller.set_main_window_id(main_window_id);
        controller.set_close_after_outcome(true);
        controller.show_errors(true);
    }

    let controller = Arc::new(Mutex::new(controller));
    platform.run(controller.clone(), initial_commands)?;

    let mut any_file_error = false;
    let mut controller = controller
        .lock()
        .map_err(|_| "Controller lock poisoned after the event loop")?;
    while let Some(outcome) = controller.try_dequeue_outcome() {
        log::info!("Main: Outcome {:?}.", outcome.code);
        any_file_error |= outcome.code == OutcomeCode::FileError;
    }

    if any_file_error || (command_line.check_only && settings_have_errors) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    initialize_logging();
    log::info!("Main: Application starting.");

    let command_line = match parse_command_line(std::env::args().skip(1)) {
        Ok(command_line) => command_line,
        Err(message) => {
            log::error!("Main: {message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let exit_code = match run_application(command_line) {
        Ok(code) => code,
        Err(e) => {
            log::error!("Main: {e}");
            ExitCode::FAILURE
        }
    };
    log::info!("Main: Application exiting.");
    exit_code
}
