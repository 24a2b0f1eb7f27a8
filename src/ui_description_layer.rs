/*
 * This module is responsible for defining the static structure of the UI.
 * It generates a series of `PlatformCommand`s that describe the menu and the
 * status labels of the main window. This decouples the UI definition from the
 * platform-specific implementation.
 */
use crate::app_logic::ui_constants;

use crate::platform_layer::{MenuAction, MenuItemConfig, PlatformCommand, WindowId};

fn menu_item(action: MenuAction, text: &str) -> MenuItemConfig {
    MenuItemConfig {
        action: Some(action),
        text: text.to_string(),
        children: Vec::new(),
    }
}

/*
 * Generates the `PlatformCommand`s that describe the initial static UI of the
 * main window: the main menu, the general status label and the label naming
 * where the settings came from. The last command signals that the static
 * setup is complete, which makes the application logic show the window.
 *
 * This function is intended to be called only once per window.
 */
pub fn build_main_window_static_layout(
    window_id: WindowId,
    settings_source: &str,
) -> Vec<PlatformCommand> {
    log::debug!("ui_description_layer: build_main_window_static_layout called.");

    let mut commands = Vec::new();

    // 1. Main menu. "&File" is a popup, no direct action.
    let file_menu_items = vec![
        menu_item(MenuAction::Save, "&Save"),
        menu_item(MenuAction::SaveAs, "Save &As..."),
        menu_item(MenuAction::CheckSettings, "&Check Settings"),
    ];
    commands.push(PlatformCommand::CreateMainMenu {
        window_id,
        menu_items: vec![
            MenuItemConfig {
                action: None,
                text: "&File".to_string(),
                children: file_menu_items,
            },
            menu_item(MenuAction::Quit, "&Quit"),
        ],
    });

    // 2. Status labels
    commands.push(PlatformCommand::CreateLabel {
        window_id,
        control_id: ui_constants::STATUS_LABEL_SETTINGS_ID,
        initial_text: format!("Settings: {settings_source}"),
    });
    commands.push(PlatformCommand::CreateLabel {
        window_id,
        control_id: ui_constants::STATUS_LABEL_GENERAL_ID,
        initial_text: "Status: Ready".to_string(),
    });

    commands.push(PlatformCommand::SignalMainWindowUISetupComplete { window_id });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_ends_with_setup_complete_signal() {
        let window_id = WindowId::new(1);

        let commands = build_main_window_static_layout(window_id, "defaults");

        assert_eq!(
            commands.last(),
            Some(&PlatformCommand::SignalMainWindowUISetupComplete { window_id })
        );
        assert!(commands.contains(&PlatformCommand::CreateLabel {
            window_id,
            control_id: ui_constants::STATUS_LABEL_SETTINGS_ID,
            initial_text: "Settings: defaults".to_string(),
        }));
    }

    #[test]
    fn test_menu_offers_every_action_once() {
        let commands = build_main_window_static_layout(WindowId::new(1), "x.json");

        let Some(PlatformCommand::CreateMainMenu { menu_items, .. }) = commands.first() else {
            panic!("Expected the main menu first, got {:?}", commands.first());
        };
        fn collect(items: &[MenuItemConfig], out: &mut Vec<MenuAction>) {
            for item in items {
                out.extend(item.action);
                collect(&item.children, out);
            }
        }
        let mut actions = Vec::new();
        collect(menu_items, &mut actions);
        assert_eq!(
            actions,
            vec![
                MenuAction::Save,
                MenuAction::SaveAs,
                MenuAction::CheckSettings,
                MenuAction::Quit
            ]
        );
    }
}
