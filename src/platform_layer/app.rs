/*
 * The console implementation of the platform layer. `PlatformInterface` owns
 * the terminal streams and a small model of the "windows" the application
 * logic has described (menu, labels, dialog state). Its `run` loop alternates
 * between draining `PlatformCommand`s from the event handler, executing them
 * via `command_executor`, and feeding resulting `AppEvent`s back. When nothing
 * is pending it shows the main menu and waits for the user.
 *
 * The streams are generic so the whole loop can be driven by scripted input
 * in tests.
 */
use super::command_executor;
use super::error::{PlatformError, Result as PlatformResult};
use super::types::{
    AppEvent, ControlId, MenuAction, MenuItemConfig, MessageSeverity, PlatformCommand,
    PlatformEventHandler, WindowId,
};

use std::collections::{HashMap, HashSet, VecDeque};
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

// Per-window data tracked by the console platform.
#[derive(Debug, Default)]
pub(crate) struct ConsoleWindowData {
    pub(crate) title: String,
    pub(crate) visible: bool,
    pub(crate) menu_items: Vec<MenuItemConfig>,
    pub(crate) disabled_actions: HashSet<MenuAction>,
    // Labels in creation order, with the severity of their current text.
    pub(crate) labels: Vec<(ControlId, String, Option<MessageSeverity>)>,
    pub(crate) error_dialog_open: bool,
}

impl ConsoleWindowData {
    /*
     * Flattens the menu tree into the list of actions the user can currently
     * pick, in display order. Disabled actions are skipped.
     */
    pub(crate) fn enabled_menu_entries(&self) -> Vec<(MenuAction, String)> {
        fn collect(
            items: &[MenuItemConfig],
            disabled: &HashSet<MenuAction>,
            out: &mut Vec<(MenuAction, String)>,
        ) {
            for item in items {
                if let Some(action) = item.action {
                    if !disabled.contains(&action) {
                        out.push((action, item.text.replace('&', "")));
                    }
                }
                collect(&item.children, disabled, out);
            }
        }
        let mut entries = Vec::new();
        collect(&self.menu_items, &self.disabled_actions, &mut entries);
        entries
    }
}

/*
 * Internal state for the console platform layer, shared by the run loop and
 * the command executors.
 */
pub(crate) struct ConsoleApiInternalState<R: BufRead, W: Write> {
    pub(crate) input: R,
    pub(crate) output: W,
    pub(crate) windows: HashMap<WindowId, ConsoleWindowData>,
    next_window_id_counter: usize,
    pub(crate) is_quitting: bool,
}

impl<R: BufRead, W: Write> ConsoleApiInternalState<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        ConsoleApiInternalState {
            input,
            output,
            windows: HashMap::new(),
            next_window_id_counter: 1,
            is_quitting: false,
        }
    }

    pub(crate) fn generate_window_id(&mut self) -> WindowId {
        let id = WindowId::new(self.next_window_id_counter);
        self.next_window_id_counter += 1;
        id
    }

    pub(crate) fn window_mut(&mut self, window_id: WindowId) -> PlatformResult<&mut ConsoleWindowData> {
        self.windows.get_mut(&window_id).ok_or_else(|| {
            PlatformError::InvalidHandle(format!("WindowId {window_id:?} not found"))
        })
    }

    // Reads one line of user input without the trailing newline.
    pub(crate) fn read_line(&mut self) -> PlatformResult<String> {
        self.output.flush()?;
        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(PlatformError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// The primary interface to the platform abstraction layer.
pub struct PlatformInterface<R: BufRead, W: Write> {
    internal_state: ConsoleApiInternalState<R, W>,
}

impl<R: BufRead, W: Write> PlatformInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        log::debug!("Platform: Creating console platform interface.");
        PlatformInterface {
            internal_state: ConsoleApiInternalState::new(input, output),
        }
    }

    pub fn create_window(&mut self, title: &str) -> WindowId {
        let window_id = self.internal_state.generate_window_id();
        self.internal_state.windows.insert(
            window_id,
            ConsoleWindowData {
                title: title.to_string(),
                ..ConsoleWindowData::default()
            },
        );
        log::debug!("Platform: Created console window {window_id:?} titled '{title}'.");
        window_id
    }

    /*
     * Runs the event loop until the application quits or the input ends.
     * `initial_commands` typically hold the static UI description of the main
     * window; they are executed before anything else.
     */
    pub fn run(
        &mut self,
        event_handler: Arc<Mutex<dyn PlatformEventHandler>>,
        initial_commands: Vec<PlatformCommand>,
    ) -> PlatformResult<()> {
        let mut pending_events: VecDeque<AppEvent> = VecDeque::new();

        for command in initial_commands {
            self.execute_and_collect(command, &mut pending_events);
        }

        loop {
            // Drain every command the handler has queued so far.
            loop {
                let next_command = {
                    let mut handler = event_handler.lock().map_err(|_| {
                        PlatformError::OperationFailed("Event handler lock poisoned".into())
                    })?;
                    handler.try_dequeue_command()
                };
                match next_command {
                    Some(command) => self.execute_and_collect(command, &mut pending_events),
                    None => break,
                }
            }

            if let Some(event) = pending_events.pop_front() {
                log::trace!("Platform: Dispatching {event:?}");
                let mut handler = event_handler.lock().map_err(|_| {
                    PlatformError::OperationFailed("Event handler lock poisoned".into())
                })?;
                handler.handle_event(event);
                continue;
            }

            if self.internal_state.is_quitting {
                log::debug!("Platform: Quit requested, leaving event loop.");
                break;
            }

            match command_executor::prompt_main_menu(&mut self.internal_state) {
                Ok(Some(event)) => pending_events.push_back(event),
                Ok(None) => {}
                Err(PlatformError::InputClosed) => {
                    log::info!("Platform: Input closed, leaving event loop.");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        if let Ok(mut handler) = event_handler.lock() {
            handler.on_quit();
        }
        log::debug!("Platform: Event loop exited cleanly.");
        Ok(())
    }

    fn execute_and_collect(
        &mut self,
        command: PlatformCommand,
        pending_events: &mut VecDeque<AppEvent>,
    ) {
        match command_executor::execute_command(&mut self.internal_state, command) {
            Ok(Some(event)) => pending_events.push_back(event),
            Ok(None) => {}
            Err(e) => log::error!("Platform: Error executing command: {e}"),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.internal_state.output
    }
}
