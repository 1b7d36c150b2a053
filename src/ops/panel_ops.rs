use crate::model::position::{AnchoredLeft, AnchoredRight};
use crate::model::state::AppState;
use crate::ops::ActionError;

// Panels and floating menus. The open-menu actions are the commit half of
// the two-phase open: the caller measures the anchor and runs the geometry
// calculator, the store only records the resulting position.

pub fn open_search_box(state: &mut AppState) {
    state.is_active_search_box = true;
}

pub fn close_search_box(state: &mut AppState) {
    state.is_active_search_box = false;
}

pub fn open_sidebar(state: &mut AppState) {
    state.is_active_sidebar = true;
}

pub fn close_sidebar(state: &mut AppState) {
    state.is_active_sidebar = false;
}

pub fn open_setting_panel(state: &mut AppState) {
    state.is_active_setting_panel = true;
}

pub fn close_setting_panel(state: &mut AppState) {
    state.is_active_setting_panel = false;
}

/// Focus the detail panel on a task. The task must exist.
pub fn open_detail_panel(state: &mut AppState, task_id: &str) -> Result<(), ActionError> {
    if state.task(task_id).is_none() {
        return Err(ActionError::TaskNotFound(task_id.to_string()));
    }
    state.focused_task_id = Some(task_id.to_string());
    Ok(())
}

pub fn close_detail_panel(state: &mut AppState) {
    state.focused_task_id = None;
}

pub fn open_list_option(state: &mut AppState, position: AnchoredLeft) {
    state.list_option_position = Some(position);
}

pub fn close_list_option(state: &mut AppState) {
    state.list_option_position = None;
}

pub fn open_theme_palette(state: &mut AppState, position: AnchoredLeft) {
    state.theme_palette_position = Some(position);
}

pub fn close_theme_palette(state: &mut AppState) {
    state.theme_palette_position = None;
}

pub fn open_ordering_criterion(state: &mut AppState, position: AnchoredLeft) {
    state.ordering_criterion_position = Some(position);
}

pub fn close_ordering_criterion(state: &mut AppState) {
    state.ordering_criterion_position = None;
}

pub fn open_deadline_picker(state: &mut AppState, position: AnchoredRight) {
    state.deadline_picker_position = Some(position);
}

/// The calendar is a child of the picker: closing the picker closes both.
pub fn close_deadline_picker(state: &mut AppState) {
    state.deadline_picker_position = None;
    state.deadline_calendar_position = None;
}

pub fn open_deadline_calendar(state: &mut AppState, position: AnchoredRight) {
    state.deadline_calendar_position = Some(position);
}

pub fn close_deadline_calendar(state: &mut AppState) {
    state.deadline_calendar_position = None;
}
