use crate::app_logic::ui_constants;
use crate::core::{
    ConfigManagerOperations, OutputFileOperations, OutputPaths, OutputSink,
    SettingsProviderOperations, write_generated_file,
};
use crate::platform_layer::{
    AppEvent, ErrorDialogMode, ErrorDialogResult, MenuAction, MessageSeverity, OutputFileKind,
    PlatformCommand, PlatformEventHandler, WindowId,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) const APP_NAME_FOR_CONFIG: &str = "ConfigExporter";

pub(crate) const MSG_SAVE_BLOCKED: &str =
    "Please correct the following invalid values before continuing:";
pub(crate) const MSG_SAVE_WARNINGS: &str = "Continue despite the following warnings?";
pub(crate) const MSG_REPORT_ISSUES: &str = "The following errors and warnings were found:";
pub(crate) const MSG_REPORT_CLEAN: &str = "No errors or warnings found.";

const DEFAULT_HEADER_FILENAME: &str = "redconf.h";
const DEFAULT_CODEFILE_FILENAME: &str = "redconf.c";

// Actions that start a save or a validation display; disabled while saving.
const SAVE_TRIGGER_ACTIONS: [MenuAction; 3] = [
    MenuAction::Save,
    MenuAction::SaveAs,
    MenuAction::CheckSettings,
];

/*
 * The terminal result of a save attempt or of a validation display, as
 * reported to the caller.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeCode {
    Success,
    UserCancelled,
    FileError,
    Invalid,
    ErrorBusy,
    InfoDismissed,
}

/*
 * The result signal emitted on every terminal path. The paths are only
 * present for `OutcomeCode::Success`.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub code: OutcomeCode,
    pub header_path: Option<PathBuf>,
    pub codefile_path: Option<PathBuf>,
}

impl SaveOutcome {
    fn without_paths(code: OutcomeCode) -> Self {
        SaveOutcome {
            code,
            header_path: None,
            codefile_path: None,
        }
    }

    fn success(header_path: PathBuf, codefile_path: PathBuf) -> Self {
        SaveOutcome {
            code: OutcomeCode::Success,
            header_path: Some(header_path),
            codefile_path: Some(codefile_path),
        }
    }
}

// Requested destinations of a save. Absent paths are asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRequest {
    pub header_path: Option<PathBuf>,
    pub codefile_path: Option<PathBuf>,
}

// Why the error dialog is currently open; decides how its result is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogPurpose {
    // Validation errors stopped a save. The save is already over.
    SaveBlocked,
    // Only warnings were found; the pending save waits for the user.
    SaveWarnings,
    // Read-only display requested through `show_errors`.
    Report,
}

// Where an in-progress save is waiting.
pub(crate) enum SaveStage {
    AwaitingWarningConfirmation,
    AwaitingHeaderPath,
    // The header destination is already open; it is dropped if the save ends here.
    AwaitingCodefilePath { header_sink: OutputSink },
}

impl SaveStage {
    fn describe(&self) -> String {
        match self {
            SaveStage::AwaitingWarningConfirmation => "awaiting warning confirmation".to_string(),
            SaveStage::AwaitingHeaderPath => "awaiting header path".to_string(),
            SaveStage::AwaitingCodefilePath { header_sink } => {
                format!("awaiting code file path (header {:?})", header_sink.path())
            }
        }
    }
}

/*
 * The continuation of a save that is waiting for a dialog. Its presence is
 * the busy state: at most one exists at any time.
 */
pub(crate) struct PendingSave {
    pub(crate) request: SaveRequest,
    pub(crate) stage: SaveStage,
}

/*
 * Sequences validation, error display and writing of the generated header and
 * code file. It is the Presenter for the main window: it processes UI events
 * received from the platform layer, enqueues commands for it, and records the
 * outcome of every save or validation display.
 *
 * Dialogs never block. Showing one enqueues a command and stores what to do
 * next (`pending_save` / `open_dialog`); the matching `...Completed` event
 * resumes the operation.
 */
pub struct SaveController {
    pub(crate) main_window_id: Option<WindowId>,
    pub(crate) pending_save: Option<PendingSave>,
    pub(crate) open_dialog: Option<DialogPurpose>,
    pub(crate) last_output_paths: OutputPaths,
    pub(crate) settings_provider: Arc<dyn SettingsProviderOperations>,
    pub(crate) output_files: Arc<dyn OutputFileOperations>,
    pub(crate) config_manager: Arc<dyn ConfigManagerOperations>,
    // Closes the main window once the first outcome has been reported.
    close_after_outcome: bool,
    synchronous_commands: VecDeque<PlatformCommand>,
    outcomes: VecDeque<SaveOutcome>,
}

impl SaveController {
    /*
     * Creates the controller. The last successful output paths are loaded
     * through `config_manager`; failures are logged and leave no defaults.
     */
    pub fn new(
        settings_provider: Arc<dyn SettingsProviderOperations>,
        output_files: Arc<dyn OutputFileOperations>,
        config_manager: Arc<dyn ConfigManagerOperations>,
    ) -> Self {
        let last_output_paths = match config_manager.load_last_output_paths(APP_NAME_FOR_CONFIG) {
            Ok(Some(paths)) => {
                log::debug!("SaveController: Loaded last output paths {paths:?}.");
                paths
            }
            Ok(None) => {
                log::debug!("SaveController: No last output paths stored.");
                OutputPaths::default()
            }
            Err(e) => {
                log::warn!("SaveController: Failed to load last output paths: {e}");
                OutputPaths::default()
            }
        };

        SaveController {
            main_window_id: None,
            pending_save: None,
            open_dialog: None,
            last_output_paths,
            settings_provider,
            output_files,
            config_manager,
            close_after_outcome: false,
            synchronous_commands: VecDeque::new(),
            outcomes: VecDeque::new(),
        }
    }

    /*
     * Overrides the destinations used by a plain "Save", e.g. from the
     * command line. Individual `None`s keep the stored value.
     */
    pub fn set_default_output_paths(&mut self, paths: OutputPaths) {
        if paths.header_path.is_some() {
            self.last_output_paths.header_path = paths.header_path;
        }
        if paths.codefile_path.is_some() {
            self.last_output_paths.codefile_path = paths.codefile_path;
        }
    }

    pub fn set_main_window_id(&mut self, window_id: WindowId) {
        self.main_window_id = Some(window_id);
    }

    pub fn set_close_after_outcome(&mut self, close: bool) {
        self.close_after_outcome = close;
    }

    pub fn is_saving(&self) -> bool {
        self.pending_save.is_some()
    }

    pub fn try_dequeue_outcome(&mut self) -> Option<SaveOutcome> {
        self.outcomes.pop_front()
    }

    fn enqueue_command(&mut self, command: PlatformCommand) {
        self.synchronous_commands.push_back(command);
    }

    /*
     * Records a terminal outcome and mirrors it on the status label. Paths are
     * remembered after a success so the next plain "Save" reuses them.
     */
    fn report_outcome(&mut self, outcome: SaveOutcome) {
        log::debug!("SaveController: Outcome {outcome:?}");
        let (text, severity) = match outcome.code {
            OutcomeCode::Success => (
                format!(
                    "Saved {} and {}.",
                    display_opt(&outcome.header_path),
                    display_opt(&outcome.codefile_path)
                ),
                MessageSeverity::Information,
            ),
            OutcomeCode::UserCancelled => ("Cancelled by user.".to_string(), MessageSeverity::Warning),
            OutcomeCode::FileError => (
                "Could not write the output files.".to_string(),
                MessageSeverity::Error,
            ),
            OutcomeCode::Invalid => (
                "Save aborted: the settings contain errors.".to_string(),
                MessageSeverity::Warning,
            ),
            OutcomeCode::ErrorBusy => (
                "A save is already in progress.".to_string(),
                MessageSeverity::Error,
            ),
            OutcomeCode::InfoDismissed => (String::new(), MessageSeverity::Information),
        };

        if outcome.code == OutcomeCode::Success {
            self.last_output_paths = OutputPaths {
                header_path: outcome.header_path.clone(),
                codefile_path: outcome.codefile_path.clone(),
            };
            if let Err(e) = self
                .config_manager
                .save_last_output_paths(APP_NAME_FOR_CONFIG, &self.last_output_paths)
            {
                log::warn!("SaveController: Failed to remember output paths: {e}");
            }
        }

        if let Some(window_id) = self.main_window_id {
            if !text.is_empty() {
                self.enqueue_command(PlatformCommand::UpdateLabelText {
                    window_id,
                    control_id: ui_constants::STATUS_LABEL_GENERAL_ID,
                    text,
                    severity,
                });
            }
            if self.close_after_outcome {
                log::debug!("SaveController: Outcome reported, closing main window.");
                self.enqueue_command(PlatformCommand::CloseWindow { window_id });
            }
        }
        self.outcomes.push_back(outcome);
    }

    fn set_save_triggers_enabled(&mut self, enabled: bool) {
        if let Some(window_id) = self.main_window_id {
            for action in SAVE_TRIGGER_ACTIONS {
                self.enqueue_command(PlatformCommand::SetMenuActionEnabled {
                    window_id,
                    action,
                    enabled,
                });
            }
        }
    }

    fn begin_save(&mut self, request: SaveRequest, stage: SaveStage) {
        self.pending_save = Some(PendingSave { request, stage });
        self.set_save_triggers_enabled(false);
    }

    // Clears the busy state and reports the terminal outcome of the save.
    fn finish_save(&mut self, outcome: SaveOutcome) {
        if let Some(pending) = self.pending_save.take() {
            log::debug!(
                "SaveController: Save finished while {}.",
                pending.stage.describe()
            );
        }
        self.set_save_triggers_enabled(true);
        self.report_outcome(outcome);
    }

    fn show_error_dialog(
        &mut self,
        purpose: DialogPurpose,
        mode: ErrorDialogMode,
        message: &str,
        errors: Vec<String>,
        warnings: Vec<String>,
    ) {
        self.open_dialog = Some(purpose);
        match self.main_window_id {
            Some(window_id) => self.enqueue_command(PlatformCommand::ShowErrorDialog {
                window_id,
                mode,
                message: message.to_string(),
                errors,
                warnings,
            }),
            None => log::warn!(
                "SaveController: No main window to show the error dialog ({purpose:?}) on."
            ),
        }
    }

    /*
     * Closes an error dialog left open from an earlier operation. The dialog is
     * resolved as if acknowledged, so a blocked save still reports `Invalid`
     * and a report reports `InfoDismissed`.
     */
    fn close_open_dialog(&mut self) {
        if let Some(purpose) = self.open_dialog {
            log::debug!("SaveController: Closing open error dialog ({purpose:?}).");
            if let Some(window_id) = self.main_window_id {
                self.enqueue_command(PlatformCommand::CloseErrorDialog { window_id });
            }
            self.on_error_dialog_result(ErrorDialogResult::Acknowledge);
        }
    }

    /*
     * Starts a save of the generated files to the given destinations.
     *
     * A save that is already in progress makes this report `ErrorBusy` and do
     * nothing else. Otherwise the settings are validated: errors end the save
     * right away (the dialog only informs), warnings ask the user whether to
     * continue, and clean settings go straight to output.
     */
    pub fn try_save(&mut self, header_path: Option<PathBuf>, codefile_path: Option<PathBuf>) {
        if self.is_saving() {
            log::error!("SaveController: try_save called while a save is already in progress.");
            self.report_outcome(SaveOutcome::without_paths(OutcomeCode::ErrorBusy));
            return;
        }

        self.close_open_dialog();

        let request = SaveRequest {
            header_path,
            codefile_path,
        };
        log::info!("SaveController: Starting save with {request:?}.");

        let validation = self.settings_provider.get_errors();
        if validation.has_errors() {
            log::info!(
                "SaveController: Save blocked by {} error(s) and {} warning(s).",
                validation.errors.len(),
                validation.warnings.len()
            );
            self.show_error_dialog(
                DialogPurpose::SaveBlocked,
                ErrorDialogMode::Info,
                MSG_SAVE_BLOCKED,
                validation.errors,
                validation.warnings,
            );
        } else if validation.has_warnings() {
            log::info!(
                "SaveController: {} warning(s) found, asking for confirmation.",
                validation.warnings.len()
            );
            self.begin_save(request, SaveStage::AwaitingWarningConfirmation);
            self.show_error_dialog(
                DialogPurpose::SaveWarnings,
                ErrorDialogMode::Action,
                MSG_SAVE_WARNINGS,
                validation.errors,
                validation.warnings,
            );
        } else {
            self.begin_save(request, SaveStage::AwaitingHeaderPath);
            self.do_output();
        }
    }

    /*
     * Shows the current validation errors and warnings without saving.
     * With no issues the dialog is only shown if `show_if_no_errors` is set.
     */
    pub fn show_errors(&mut self, show_if_no_errors: bool) {
        if self.is_saving() {
            log::error!("SaveController: show_errors called while a save is in progress.");
            self.report_outcome(SaveOutcome::without_paths(OutcomeCode::ErrorBusy));
            return;
        }

        let validation = self.settings_provider.get_errors();
        if !validation.is_clean() {
            self.close_open_dialog();
            self.show_error_dialog(
                DialogPurpose::Report,
                ErrorDialogMode::Info,
                MSG_REPORT_ISSUES,
                validation.errors,
                validation.warnings,
            );
        } else if show_if_no_errors {
            self.close_open_dialog();
            self.show_error_dialog(
                DialogPurpose::Report,
                ErrorDialogMode::Info,
                MSG_REPORT_CLEAN,
                Vec::new(),
                Vec::new(),
            );
        } else {
            log::debug!("SaveController: No errors or warnings, nothing to show.");
        }
    }

    /*
     * Resolves the destinations of the pending save and writes both files.
     * Requested paths are used when both can be opened; otherwise the user is
     * asked for the header path and then the code file path.
     */
    fn do_output(&mut self) {
        let Some(pending) = self.pending_save.as_ref() else {
            log::error!("SaveController: do_output called without a pending save.");
            return;
        };

        if let (Some(header_path), Some(codefile_path)) = (
            pending.request.header_path.clone(),
            pending.request.codefile_path.clone(),
        ) {
            match self.open_both(&header_path, &codefile_path) {
                Some((header_sink, codefile_sink)) => {
                    self.write_outputs(header_sink, codefile_sink);
                    return;
                }
                None => log::info!(
                    "SaveController: Requested paths not writable, asking for destinations."
                ),
            }
        }

        self.request_output_path(OutputFileKind::Header);
    }

    fn open_both(&self, header_path: &Path, codefile_path: &Path) -> Option<(OutputSink, OutputSink)> {
        let header_sink = match self.output_files.open_for_write(header_path) {
            Ok(sink) => sink,
            Err(e) => {
                log::error!("SaveController: Error opening file {header_path:?}: {e}");
                return None;
            }
        };
        match self.output_files.open_for_write(codefile_path) {
            Ok(codefile_sink) => Some((header_sink, codefile_sink)),
            Err(e) => {
                log::error!("SaveController: Error opening file {codefile_path:?}: {e}");
                None
            }
        }
    }

    fn request_output_path(&mut self, kind: OutputFileKind) {
        let Some(pending) = self.pending_save.as_mut() else {
            return;
        };
        let (requested, remembered, default_name, title, filter_spec) = match kind {
            OutputFileKind::Header => (
                pending.request.header_path.clone(),
                self.last_output_paths.header_path.clone(),
                DEFAULT_HEADER_FILENAME,
                "Save Header File As",
                "Header Files (*.h)",
            ),
            OutputFileKind::Codefile => (
                pending.request.codefile_path.clone(),
                self.last_output_paths.codefile_path.clone(),
                DEFAULT_CODEFILE_FILENAME,
                "Save Code File As",
                "C Source Files (*.c)",
            ),
        };
        if kind == OutputFileKind::Header {
            pending.stage = SaveStage::AwaitingHeaderPath;
        }

        let seed = requested.or(remembered);
        let default_filename = seed
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| default_name.to_string());
        let initial_dir = seed
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(PathBuf::from);

        match self.main_window_id {
            Some(window_id) => self.enqueue_command(PlatformCommand::ShowSaveFileDialog {
                window_id,
                kind,
                title: title.to_string(),
                default_filename,
                filter_spec: filter_spec.to_string(),
                initial_dir,
            }),
            None => {
                log::error!("SaveController: No main window to ask for the {kind:?} path.");
                self.finish_save(SaveOutcome::without_paths(OutcomeCode::UserCancelled));
            }
        }
    }

    /*
     * Writes notice + formatted body to both sinks, header first. A failure
     * on the header skips the code file; nothing already written is rolled back.
     */
    fn write_outputs(&mut self, header_sink: OutputSink, codefile_sink: OutputSink) {
        let header_body = self.settings_provider.format_header_output();
        let header_path = match write_generated_file(header_sink, &header_body) {
            Ok(path) => path,
            Err(e) => {
                log::error!("SaveController: Failed to write header: {e}");
                drop(codefile_sink);
                self.finish_save(SaveOutcome::without_paths(OutcomeCode::FileError));
                return;
            }
        };

        let codefile_body = self.settings_provider.format_codefile_output();
        match write_generated_file(codefile_sink, &codefile_body) {
            Ok(codefile_path) => {
                log::info!("SaveController: Wrote {header_path:?} and {codefile_path:?}.");
                self.finish_save(SaveOutcome::success(header_path, codefile_path));
            }
            Err(e) => {
                log::error!("SaveController: Failed to write code file: {e}");
                self.finish_save(SaveOutcome::without_paths(OutcomeCode::FileError));
            }
        }
    }

    /*
     * Maps the error dialog's result to the next step:
     * Cancel ends a save (or report) as `UserCancelled`; Acknowledge of a
     * blocked save yields `Invalid`, of a report `InfoDismissed`; Continue
     * resumes the pending save with output.
     */
    pub(crate) fn on_error_dialog_result(&mut self, result: ErrorDialogResult) {
        let Some(purpose) = self.open_dialog.take() else {
            log::warn!("SaveController: Error dialog result {result:?} without an open dialog.");
            return;
        };
        log::debug!("SaveController: Error dialog ({purpose:?}) resolved with {result:?}.");

        match (result, purpose) {
            (ErrorDialogResult::Cancel, _) => {
                if self.is_saving() {
                    self.finish_save(SaveOutcome::without_paths(OutcomeCode::UserCancelled));
                } else {
                    self.report_outcome(SaveOutcome::without_paths(OutcomeCode::UserCancelled));
                }
            }
            (ErrorDialogResult::Acknowledge, DialogPurpose::SaveBlocked) => {
                self.report_outcome(SaveOutcome::without_paths(OutcomeCode::Invalid));
            }
            (ErrorDialogResult::Acknowledge, DialogPurpose::SaveWarnings) => {
                self.finish_save(SaveOutcome::without_paths(OutcomeCode::Invalid));
            }
            (ErrorDialogResult::Acknowledge, DialogPurpose::Report) => {
                self.report_outcome(SaveOutcome::without_paths(OutcomeCode::InfoDismissed));
            }
            (ErrorDialogResult::Continue, DialogPurpose::SaveWarnings) => {
                match self.pending_save.as_mut() {
                    Some(pending) => {
                        pending.stage = SaveStage::AwaitingHeaderPath;
                        self.do_output();
                    }
                    None => log::error!("SaveController: Continue chosen without a pending save."),
                }
            }
            (ErrorDialogResult::Continue, DialogPurpose::SaveBlocked) => {
                log::warn!("SaveController: Continue is not offered for blocked saves.");
                self.report_outcome(SaveOutcome::without_paths(OutcomeCode::Invalid));
            }
            (ErrorDialogResult::Continue, DialogPurpose::Report) => {
                log::warn!("SaveController: Continue is not offered for reports.");
                self.report_outcome(SaveOutcome::without_paths(OutcomeCode::InfoDismissed));
            }
        }
    }

    /*
     * Continues a save once the user picked (or dismissed) a destination.
     * A dismissed or empty path cancels the whole save. A header that cannot
     * be opened fails the save without asking for the code file.
     */
    pub(crate) fn on_file_save_dialog_completed(
        &mut self,
        kind: OutputFileKind,
        result: Option<PathBuf>,
    ) {
        let Some(pending) = self.pending_save.take() else {
            log::warn!("SaveController: Save dialog for {kind:?} completed without a pending save.");
            return;
        };

        let path = match result {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                log::info!("SaveController: Save dialog for {kind:?} dismissed, cancelling save.");
                drop(pending);
                self.finish_save(SaveOutcome::without_paths(OutcomeCode::UserCancelled));
                return;
            }
        };

        match (kind, pending.stage) {
            (OutputFileKind::Header, SaveStage::AwaitingHeaderPath) => {
                match self.output_files.open_for_write(&path) {
                    Ok(header_sink) => {
                        self.pending_save = Some(PendingSave {
                            request: pending.request,
                            stage: SaveStage::AwaitingCodefilePath { header_sink },
                        });
                        self.request_output_path(OutputFileKind::Codefile);
                    }
                    Err(e) => {
                        log::error!("SaveController: Error opening file {path:?}: {e}");
                        self.finish_save(SaveOutcome::without_paths(OutcomeCode::FileError));
                    }
                }
            }
            (OutputFileKind::Codefile, SaveStage::AwaitingCodefilePath { header_sink }) => {
                match self.output_files.open_for_write(&path) {
                    Ok(codefile_sink) => self.write_outputs(header_sink, codefile_sink),
                    Err(e) => {
                        log::error!("SaveController: Error opening file {path:?}: {e}");
                        drop(header_sink);
                        self.finish_save(SaveOutcome::without_paths(OutcomeCode::FileError));
                    }
                }
            }
            (kind, stage) => {
                log::warn!(
                    "SaveController: Unexpected {kind:?} path while {}; ignoring.",
                    stage.describe()
                );
                self.pending_save = Some(PendingSave {
                    request: pending.request,
                    stage,
                });
            }
        }
    }
}

fn display_opt(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

impl PlatformEventHandler for SaveController {
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::MainWindowUISetupComplete { window_id } => {
                log::debug!("SaveController: Main window {window_id:?} set up, showing it.");
                self.main_window_id = Some(window_id);
                self.enqueue_command(PlatformCommand::ShowWindow { window_id });
            }
            AppEvent::MenuActionClicked { action } => match action {
                MenuAction::Save => {
                    let paths = self.last_output_paths.clone();
                    self.try_save(paths.header_path, paths.codefile_path);
                }
                MenuAction::SaveAs => self.try_save(None, None),
                MenuAction::CheckSettings => self.show_errors(true),
                MenuAction::Quit => {
                    if let Some(window_id) = self.main_window_id {
                        self.enqueue_command(PlatformCommand::CloseWindow { window_id });
                    } else {
                        self.enqueue_command(PlatformCommand::QuitApplication);
                    }
                }
            },
            AppEvent::ErrorDialogCompleted { window_id, result } => {
                if self.main_window_id == Some(window_id) {
                    self.on_error_dialog_result(result);
                }
            }
            AppEvent::FileSaveDialogCompleted {
                window_id,
                kind,
                result,
            } => {
                if self.main_window_id == Some(window_id) {
                    self.on_file_save_dialog_completed(kind, result);
                }
            }
            AppEvent::WindowCloseRequestedByUser { window_id } => {
                if self.main_window_id == Some(window_id) {
                    log::debug!("SaveController: Main window close requested.");
                    self.enqueue_command(PlatformCommand::CloseWindow { window_id });
                }
            }
            AppEvent::WindowDestroyed { window_id } => {
                if self.main_window_id == Some(window_id) {
                    log::debug!("SaveController: Main window destroyed.");
                    self.main_window_id = None;
                    self.open_dialog = None;
                    if self.pending_save.is_some() {
                        self.finish_save(SaveOutcome::without_paths(OutcomeCode::UserCancelled));
                    }
                    self.enqueue_command(PlatformCommand::QuitApplication);
                }
            }
        }
    }

    fn on_quit(&mut self) {
        log::debug!("SaveController: on_quit called by platform. Application is exiting.");
    }

    fn try_dequeue_command(&mut self) -> Option<PlatformCommand> {
        self.synchronous_commands.pop_front()
    }
}
