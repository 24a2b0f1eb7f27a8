/*
 * This module is responsible for executing specific `PlatformCommand`s on the
 * console. Each executor takes the shared `ConsoleApiInternalState` plus the
 * command's parameters. Modal dialogs are rendered and answered right away;
 * their answer is returned as the `AppEvent` the application logic expects,
 * which the run loop then dispatches.
 */

use super::app::ConsoleApiInternalState;
use super::error::{PlatformError, Result as PlatformResult};
use super::types::{
    AppEvent, ControlId, ErrorDialogMode, ErrorDialogResult, MenuAction, MenuItemConfig,
    MessageSeverity, OutputFileKind, PlatformCommand, WindowId,
};

use std::io::{BufRead, Write};
use std::path::PathBuf;

// Typed at a save-file prompt to dismiss it.
pub(crate) const CANCEL_INPUT: &str = "-";

pub(crate) fn execute_command<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    command: PlatformCommand,
) -> PlatformResult<Option<AppEvent>> {
    log::trace!("CommandExecutor: Executing {command:?}");
    match command {
        PlatformCommand::ShowWindow { window_id } => {
            execute_show_window(internal_state, window_id).map(|_| None)
        }
        PlatformCommand::CloseWindow { window_id } => {
            execute_close_window(internal_state, window_id).map(Some)
        }
        PlatformCommand::CreateMainMenu {
            window_id,
            menu_items,
        } => execute_create_main_menu(internal_state, window_id, menu_items).map(|_| None),
        PlatformCommand::CreateLabel {
            window_id,
            control_id,
            initial_text,
        } => execute_create_label(internal_state, window_id, control_id, initial_text)
            .map(|_| None),
        PlatformCommand::SignalMainWindowUISetupComplete { window_id } => {
            internal_state.window_mut(window_id)?;
            Ok(Some(AppEvent::MainWindowUISetupComplete { window_id }))
        }
        PlatformCommand::UpdateLabelText {
            window_id,
            control_id,
            text,
            severity,
        } => execute_update_label_text(internal_state, window_id, control_id, text, severity)
            .map(|_| None),
        PlatformCommand::SetMenuActionEnabled {
            window_id,
            action,
            enabled,
        } => {
            let window_data = internal_state.window_mut(window_id)?;
            if enabled {
                window_data.disabled_actions.remove(&action);
            } else {
                window_data.disabled_actions.insert(action);
            }
            Ok(None)
        }
        PlatformCommand::ShowErrorDialog {
            window_id,
            mode,
            message,
            errors,
            warnings,
        } => execute_show_error_dialog(internal_state, window_id, mode, &message, &errors, &warnings)
            .map(Some),
        PlatformCommand::CloseErrorDialog { window_id } => {
            let window_data = internal_state.window_mut(window_id)?;
            if window_data.error_dialog_open {
                window_data.error_dialog_open = false;
                log::debug!("CommandExecutor: Error dialog of {window_id:?} closed.");
            }
            Ok(None)
        }
        PlatformCommand::ShowSaveFileDialog {
            window_id,
            kind,
            title,
            default_filename,
            filter_spec,
            initial_dir,
        } => execute_show_save_file_dialog(
            internal_state,
            window_id,
            kind,
            &title,
            &default_filename,
            &filter_spec,
            initial_dir,
        )
        .map(Some),
        PlatformCommand::QuitApplication => {
            log::debug!("CommandExecutor: execute_quit_application.");
            internal_state.is_quitting = true;
            Ok(None)
        }
    }
}

fn execute_show_window<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    window_id: WindowId,
) -> PlatformResult<()> {
    let window_data = internal_state.window_mut(window_id)?;
    if window_data.visible {
        return Ok(());
    }
    window_data.visible = true;
    let title = window_data.title.clone();
    writeln!(internal_state.output, "=== {title} ===")?;
    Ok(())
}

/*
 * Destroys the window and reports `WindowDestroyed`. Once the last window is
 * gone the platform starts quitting.
 */
fn execute_close_window<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    window_id: WindowId,
) -> PlatformResult<AppEvent> {
    if internal_state.windows.remove(&window_id).is_none() {
        return Err(PlatformError::InvalidHandle(format!(
            "WindowId {window_id:?} not found for CloseWindow"
        )));
    }
    if internal_state.windows.is_empty() {
        log::debug!("CommandExecutor: Last window closed, quitting.");
        internal_state.is_quitting = true;
    }
    Ok(AppEvent::WindowDestroyed { window_id })
}

fn execute_create_main_menu<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    window_id: WindowId,
    menu_items: Vec<MenuItemConfig>,
) -> PlatformResult<()> {
    log::debug!(
        "CommandExecutor: execute_create_main_menu for WinID {window_id:?}, {} top-level items.",
        menu_items.len()
    );
    internal_state.window_mut(window_id)?.menu_items = menu_items;
    Ok(())
}

fn execute_create_label<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    window_id: WindowId,
    control_id: ControlId,
    initial_text: String,
) -> PlatformResult<()> {
    let window_data = internal_state.window_mut(window_id)?;
    if window_data.labels.iter().any(|(id, _, _)| *id == control_id) {
        return Err(PlatformError::OperationFailed(format!(
            "Label with ID {control_id:?} already exists for window {window_id:?}"
        )));
    }
    window_data.labels.push((control_id, initial_text, None));
    Ok(())
}

/*
 * Updates a label's text and echoes it to the console. The message is also
 * logged with a level matching its severity.
 */
fn execute_update_label_text<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    window_id: WindowId,
    control_id: ControlId,
    text: String,
    severity: MessageSeverity,
) -> PlatformResult<()> {
    match severity {
        MessageSeverity::Error => log::error!("Platform Status (WinID {window_id:?} ERROR): {text}"),
        MessageSeverity::Warning => log::warn!("Platform Status (WinID {window_id:?} WARN): {text}"),
        MessageSeverity::Information => {
            log::info!("Platform Status (WinID {window_id:?} INFO): {text}")
        }
    }

    let window_data = internal_state.window_mut(window_id)?;
    let label = window_data
        .labels
        .iter_mut()
        .find(|(id, _, _)| *id == control_id)
        .ok_or_else(|| {
            PlatformError::InvalidHandle(format!(
                "Label {control_id:?} not found in window {window_id:?}"
            ))
        })?;
    label.1 = text.clone();
    label.2 = Some(severity);

    let tag = match severity {
        MessageSeverity::Information => "INFO",
        MessageSeverity::Warning => "WARN",
        MessageSeverity::Error => "ERROR",
    };
    writeln!(internal_state.output, "[{tag}] {text}")?;
    Ok(())
}

/*
 * Renders the modal error dialog and waits for the user's choice.
 * In `Info` mode the choices are OK (default) and Cancel; in `Action` mode
 * they are Continue and Cancel (default). If the input ends the dialog is
 * treated as cancelled.
 */
fn execute_show_error_dialog<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    window_id: WindowId,
    mode: ErrorDialogMode,
    message: &str,
    errors: &[String],
    warnings: &[String],
) -> PlatformResult<AppEvent> {
    internal_state.window_mut(window_id)?.error_dialog_open = true;

    let out = &mut internal_state.output;
    writeln!(out, "--- {message}")?;
    if !errors.is_empty() {
        writeln!(out, "Errors:")?;
        for error in errors {
            writeln!(out, "  - {error}")?;
        }
    }
    if !warnings.is_empty() {
        writeln!(out, "Warnings:")?;
        for warning in warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    let result = loop {
        let prompt = match mode {
            ErrorDialogMode::Info => "[O]K / [C]ancel: ",
            ErrorDialogMode::Action => "[Y] Continue / [N] Cancel: ",
        };
        write!(internal_state.output, "{prompt}")?;
        let answer = match internal_state.read_line() {
            Ok(line) => line.trim().to_lowercase(),
            Err(PlatformError::InputClosed) => {
                log::debug!("CommandExecutor: Input closed while error dialog was open.");
                break ErrorDialogResult::Cancel;
            }
            Err(e) => return Err(e),
        };
        let parsed = match (mode, answer.as_str()) {
            (ErrorDialogMode::Info, "" | "o" | "ok") => Some(ErrorDialogResult::Acknowledge),
            (ErrorDialogMode::Info, "c" | "cancel") => Some(ErrorDialogResult::Cancel),
            (ErrorDialogMode::Action, "y" | "yes" | "continue") => {
                Some(ErrorDialogResult::Continue)
            }
            (ErrorDialogMode::Action, "" | "n" | "no" | "cancel") => {
                Some(ErrorDialogResult::Cancel)
            }
            _ => None,
        };
        match parsed {
            Some(result) => break result,
            None => writeln!(internal_state.output, "Unrecognized choice '{answer}'.")?,
        }
    };

    if let Ok(window_data) = internal_state.window_mut(window_id) {
        window_data.error_dialog_open = false;
    }
    log::debug!("CommandExecutor: Error dialog of {window_id:?} resolved with {result:?}.");
    Ok(AppEvent::ErrorDialogCompleted { window_id, result })
}

/*
 * Asks for a destination path. An empty answer accepts the suggested path
 * (initial directory joined with the default file name) when there is one;
 * `CANCEL_INPUT` or the end of input dismisses the dialog.
 */
fn execute_show_save_file_dialog<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
    window_id: WindowId,
    kind: OutputFileKind,
    title: &str,
    default_filename: &str,
    filter_spec: &str,
    initial_dir: Option<PathBuf>,
) -> PlatformResult<AppEvent> {
    internal_state.window_mut(window_id)?;

    let suggestion = if default_filename.is_empty() {
        None
    } else {
        Some(match &initial_dir {
            Some(dir) => dir.join(default_filename),
            None => PathBuf::from(default_filename),
        })
    };

    writeln!(internal_state.output, "--- {title} ({filter_spec})")?;
    match &suggestion {
        Some(path) => write!(
            internal_state.output,
            "Path [{}] ('{CANCEL_INPUT}' to cancel): ",
            path.display()
        )?,
        None => write!(internal_state.output, "Path ('{CANCEL_INPUT}' to cancel): ")?,
    }

    let result = match internal_state.read_line() {
        Ok(line) => {
            let answer = line.trim();
            if answer == CANCEL_INPUT {
                None
            } else if answer.is_empty() {
                suggestion
            } else {
                Some(PathBuf::from(answer))
            }
        }
        Err(PlatformError::InputClosed) => None,
        Err(e) => return Err(e),
    };

    match &result {
        Some(path) => log::debug!("CommandExecutor: Save dialog for {kind:?} returned {path:?}."),
        None => log::debug!("CommandExecutor: Save dialog for {kind:?} cancelled by user."),
    }
    Ok(AppEvent::FileSaveDialogCompleted {
        window_id,
        kind,
        result,
    })
}

/*
 * Shows the status labels and enabled actions of the first visible window and
 * reads the user's choice. Returns `Ok(None)` for an unrecognized choice.
 */
pub(crate) fn prompt_main_menu<R: BufRead, W: Write>(
    internal_state: &mut ConsoleApiInternalState<R, W>,
) -> PlatformResult<Option<AppEvent>> {
    let mut visible_ids: Vec<WindowId> = internal_state
        .windows
        .iter()
        .filter(|(_, data)| data.visible)
        .map(|(id, _)| *id)
        .collect();
    visible_ids.sort_by_key(|id| id.0);
    let Some(window_id) = visible_ids.first().copied() else {
        return Err(PlatformError::OperationFailed(
            "No visible window to show a menu for".into(),
        ));
    };

    let window_data = internal_state.window_mut(window_id)?;
    let entries = window_data.enabled_menu_entries();
    let status_lines: Vec<String> = window_data
        .labels
        .iter()
        .filter(|(_, text, _)| !text.is_empty())
        .map(|(_, text, _)| text.clone())
        .collect();

    let out = &mut internal_state.output;
    for line in status_lines {
        writeln!(out, "  {line}")?;
    }
    for (index, (_, text)) in entries.iter().enumerate() {
        writeln!(out, "  {}) {text}", index + 1)?;
    }
    write!(out, "> ")?;

    let answer = internal_state.read_line()?;
    let chosen: Option<MenuAction> = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| entries.get(index))
        .map(|(action, _)| *action);

    match chosen {
        Some(action) => Ok(Some(AppEvent::MenuActionClicked { action })),
        None => {
            writeln!(internal_state.output, "Unrecognized choice '{}'.", answer.trim())?;
            Ok(None)
        }
    }
}
