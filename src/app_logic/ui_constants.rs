/*
 * Defines shared constants for logical UI control identifiers.
 * These IDs are used by the `ui_description_layer` to define the initial UI
 * structure and by the `app_logic` (Presenter) to target specific controls
 * for dynamic updates.
 */

use crate::platform_layer::ControlId;

// Logical ID for the label displaying general status messages, such as the
// outcome of the last save.
pub const STATUS_LABEL_GENERAL_ID: ControlId = ControlId::new(1011);

// Logical ID for the label naming the settings file being exported.
pub const STATUS_LABEL_SETTINGS_ID: ControlId = ControlId::new(1012);
