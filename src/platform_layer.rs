pub mod app;
pub(crate) mod command_executor;
pub mod error;
pub mod types;


pub use app::PlatformInterface;
pub use types::{
    AppEvent, ControlId, ErrorDialogMode, ErrorDialogResult, MenuAction, MenuItemConfig,
    MessageSeverity, OutputFileKind, PlatformCommand, PlatformEventHandler, WindowId,
};
