use serde::{Deserialize, Serialize};

use crate::model::position::{AnchoredLeft, AnchoredRight};
use crate::model::settings::{PageSettings, Settings};
use crate::model::task::Task;

/// The full application state tree.
///
/// Everything below the `serde(skip)` line is transient UI state: it is
/// never persisted, and the load-time merge forces it back to the closed /
/// neutral position (a stale "menu open" flag must not survive a reload).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub todo_items: Vec<Task>,
    pub settings: Settings,
    pub page_settings: PageSettings,
    pub is_active_search_box: bool,
    pub is_active_sidebar: bool,
    pub is_active_setting_panel: bool,

    /// Set by bootstrap once load + seed have resolved
    #[serde(skip)]
    pub is_app_ready: bool,
    /// Task shown in the detail panel; `None` = panel closed
    #[serde(skip)]
    pub focused_task_id: Option<String>,
    #[serde(skip)]
    pub list_option_position: Option<AnchoredLeft>,
    #[serde(skip)]
    pub theme_palette_position: Option<AnchoredLeft>,
    #[serde(skip)]
    pub ordering_criterion_position: Option<AnchoredLeft>,
    #[serde(skip)]
    pub deadline_picker_position: Option<AnchoredRight>,
    /// Child of the deadline picker; closing the picker closes this too
    #[serde(skip)]
    pub deadline_calendar_position: Option<AnchoredRight>,
}

impl AppState {
    /// Force every transient field back to its closed state. This is the
    /// "overrides" layer of the load-time merge.
    pub fn reset_transient(&mut self) {
        self.is_app_ready = false;
        self.focused_task_id = None;
        self.list_option_position = None;
        self.theme_palette_position = None;
        self.ordering_criterion_position = None;
        self.deadline_picker_position = None;
        self.deadline_calendar_position = None;
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.todo_items.iter().find(|t| t.id == id)
    }
}
