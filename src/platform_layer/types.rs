/*
 * This module defines core data types used for communication between the
 * application logic and the platform layer. It includes identifiers for windows
 * and controls, platform-agnostic event types (`AppEvent`), commands for the
 * platform layer (`PlatformCommand`), severity levels for messages
 * (`MessageSeverity`), the modal error dialog's modes and results, and semantic
 * identifiers for menu actions (`MenuAction`). It also defines the
 * `PlatformEventHandler` trait that the application logic must implement.
 */

use std::path::PathBuf;

// An opaque identifier for a native window, managed by the platform layer.
//
// The application logic layer uses this ID to refer to specific windows
// when sending commands or receiving events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub(crate) usize);

impl WindowId {
    pub const fn new(raw: usize) -> Self {
        WindowId(raw)
    }
}

// A logical identifier for a control inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u32);

impl ControlId {
    pub const fn new(raw: u32) -> Self {
        ControlId(raw)
    }
}

/*
 * Represents logical menu actions in a platform-agnostic way.
 * The platform layer maps these to whatever the user actually selects
 * (menu entries, keys) and reports them via `AppEvent::MenuActionClicked`.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Save,
    SaveAs,
    CheckSettings,
    Quit,
}

/*
 * Configuration for a single menu item, used by `PlatformCommand::CreateMainMenu`.
 * Items that only group a submenu have `action: None`.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemConfig {
    pub action: Option<MenuAction>,
    pub text: String,
    pub children: Vec<MenuItemConfig>,
}

// Which of the two generated files a save-file dialog is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFileKind {
    Header,
    Codefile,
}

/*
 * How the modal error dialog presents itself. `Info` only lets the user
 * acknowledge the list; `Action` asks whether to continue despite warnings.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDialogMode {
    Info,
    Action,
}

// The three ways the modal error dialog can be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDialogResult {
    Cancel,
    Acknowledge,
    Continue,
}

// --- Events from Platform to App Logic ---

/*
 * Represents platform-agnostic UI events.
 *
 * The platform layer translates user input into these types and sends them to
 * the application logic layer for handling. Dialog results arrive as
 * `...Completed` events; the application logic never blocks waiting for them.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // Signals that the initial static UI setup for the main window is complete.
    MainWindowUISetupComplete {
        window_id: WindowId,
    },
    WindowCloseRequestedByUser {
        window_id: WindowId,
    },
    // The `WindowId` should be considered invalid after this event.
    WindowDestroyed {
        window_id: WindowId,
    },
    MenuActionClicked {
        action: MenuAction,
    },
    ErrorDialogCompleted {
        window_id: WindowId,
        result: ErrorDialogResult,
    },
    // `result` is `None` when the user dismissed the dialog.
    FileSaveDialogCompleted {
        window_id: WindowId,
        kind: OutputFileKind,
        result: Option<PathBuf>,
    },
}

// Defines the severity of a message to be displayed, e.g., in the status bar.
// Ordered from least to most severe for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MessageSeverity {
    Information,
    Warning,
    Error,
}

// Represents platform-agnostic commands sent from the application logic to the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCommand {
    ShowWindow {
        window_id: WindowId,
    },
    CloseWindow {
        window_id: WindowId,
    },
    CreateMainMenu {
        window_id: WindowId,
        menu_items: Vec<MenuItemConfig>,
    },
    CreateLabel {
        window_id: WindowId,
        control_id: ControlId,
        initial_text: String,
    },
    // Signals to the platform layer that all initial UI description commands
    // for the main window have been enqueued.
    SignalMainWindowUISetupComplete {
        window_id: WindowId,
    },
    UpdateLabelText {
        window_id: WindowId,
        control_id: ControlId,
        text: String,
        severity: MessageSeverity,
    },
    SetMenuActionEnabled {
        window_id: WindowId,
        action: MenuAction,
        enabled: bool,
    },
    // Opens the modal error dialog; answered by `AppEvent::ErrorDialogCompleted`.
    ShowErrorDialog {
        window_id: WindowId,
        mode: ErrorDialogMode,
        message: String,
        errors: Vec<String>,
        warnings: Vec<String>,
    },
    // Closes the error dialog without producing a completion event.
    CloseErrorDialog {
        window_id: WindowId,
    },
    // Answered by `AppEvent::FileSaveDialogCompleted` carrying the same `kind`.
    ShowSaveFileDialog {
        window_id: WindowId,
        kind: OutputFileKind,
        title: String,
        default_filename: String,
        filter_spec: String,
        initial_dir: Option<PathBuf>,
    },
    QuitApplication,
}

// --- Trait for App Logic to Handle Events ---

// A trait to be implemented by the application logic layer to handle UI events.
//
// The platform layer calls methods on this trait to notify the application
// logic about user interactions, then drains the commands it enqueued.
pub trait PlatformEventHandler: Send + Sync + 'static {
    // Called by the platform layer when a UI event has been produced.
    // The implementor should handle the event and enqueue `PlatformCommand`s
    // for the platform layer to execute.
    fn handle_event(&mut self, event: AppEvent);

    // Called by the platform layer when the application is about to exit its main loop.
    fn on_quit(&mut self) {}

    // Attempts to dequeue a single `PlatformCommand` from the internal queue.
    fn try_dequeue_command(&mut self) -> Option<PlatformCommand>;
}
