pub mod action;
pub mod panel_ops;
pub mod settings_ops;
pub mod task_ops;

pub use action::Action;

use crate::model::settings::PageKey;
use crate::model::state::AppState;

/// Error type for state-transition operations. One uniform policy: every
/// fallible action returns a typed error, nothing panics, nothing is
/// silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error("sub-step not found: {step_id} on task {task_id}")]
    SubStepNotFound { task_id: String, step_id: String },
    #[error("page {page} does not support {feature}")]
    PageUnsupported {
        page: PageKey,
        feature: &'static str,
    },
    #[error("no ordering criterion set for page {0}")]
    OrderingNotSet(PageKey),
}

/// The reducer: apply one action to the state. Pure — `now` is supplied by
/// the caller (the store's clock), and the state is mutated in place only
/// on the paths that succeed wholesale.
pub fn apply(state: &mut AppState, action: Action, now: i64) -> Result<(), ActionError> {
    let items = &mut state.todo_items;
    match action {
        Action::CreateTodoItem(draft) => {
            task_ops::create_todo_item(items, draft, now);
        }
        Action::RemoveTodoItem { id } => task_ops::remove_todo_item(items, &id)?,
        Action::UpdateTodoItem { id, patch } => task_ops::update_todo_item(items, &id, patch)?,

        Action::MarkAsComplete { id } | Action::MarkAsCompleteWithOrderingFlag { id } => {
            task_ops::mark_as_complete(items, &id, now)?
        }
        Action::MarkAsIncomplete { id } => task_ops::mark_as_incomplete(items, &id)?,

        Action::MarkAsImportant { id } => task_ops::mark_as_important(items, &id)?,
        Action::MarkAsImportantWithOrderingFlag { id } => {
            task_ops::mark_as_important_with_ordering_flag(items, &id, now)?
        }
        Action::MarkAsUnimportant { id } => task_ops::mark_as_unimportant(items, &id)?,

        Action::MarkAsTodayTaskWithOrderingFlag { id } => {
            task_ops::mark_as_today_task_with_ordering_flag(items, &id, now)?
        }
        Action::MarkAsNonTodayTask { id } => task_ops::mark_as_non_today_task(items, &id)?,

        Action::CreateSubStep { task_id, title } => {
            task_ops::create_sub_step(items, &task_id, title, now)?;
        }
        Action::UpdateSubStep {
            task_id,
            step_id,
            patch,
        } => task_ops::update_sub_step(items, &task_id, &step_id, patch)?,
        Action::RemoveSubStep { task_id, step_id } => {
            task_ops::remove_sub_step(items, &task_id, &step_id)?
        }

        Action::SetDeadline { id, deadline } => task_ops::set_deadline(items, &id, deadline)?,
        Action::UnsetDeadline { id } => task_ops::unset_deadline(items, &id)?,

        Action::TurnOnGeneral(key) => settings_ops::set_general(&mut state.settings, key, true),
        Action::TurnOffGeneral(key) => settings_ops::set_general(&mut state.settings, key, false),
        Action::TurnOnSmartList(key) => {
            settings_ops::set_smart_list(&mut state.settings, key, true)
        }
        Action::TurnOffSmartList(key) => {
            settings_ops::set_smart_list(&mut state.settings, key, false)
        }

        Action::ShowCompletedItems(page) => {
            settings_ops::show_completed_items(&mut state.page_settings, page)?
        }
        Action::HideCompletedItems(page) => {
            settings_ops::hide_completed_items(&mut state.page_settings, page)?
        }
        Action::SetThemeColor { page, color } => {
            settings_ops::set_theme_color(&mut state.page_settings, page, color)?
        }
        Action::SetOrderingCriterion {
            page,
            criterion,
            direction,
        } => settings_ops::set_ordering_criterion(&mut state.page_settings, page, criterion, direction)?,
        Action::ReverseOrderingCriterion(page) => {
            settings_ops::reverse_ordering_criterion(&mut state.page_settings, page)?
        }
        Action::UnsetOrderingCriterion(page) => {
            settings_ops::unset_ordering_criterion(&mut state.page_settings, page)?
        }

        Action::OpenSearchBox => panel_ops::open_search_box(state),
        Action::CloseSearchBox => panel_ops::close_search_box(state),
        Action::OpenSidebar => panel_ops::open_sidebar(state),
        Action::CloseSidebar => panel_ops::close_sidebar(state),
        Action::OpenSettingPanel => panel_ops::open_setting_panel(state),
        Action::CloseSettingPanel => panel_ops::close_setting_panel(state),
        Action::OpenDetailPanel { id } => panel_ops::open_detail_panel(state, &id)?,
        Action::CloseDetailPanel => panel_ops::close_detail_panel(state),

        Action::OpenListOption(position) => panel_ops::open_list_option(state, position),
        Action::CloseListOption => panel_ops::close_list_option(state),
        Action::OpenThemePalette(position) => panel_ops::open_theme_palette(state, position),
        Action::CloseThemePalette => panel_ops::close_theme_palette(state),
        Action::OpenOrderingCriterion(position) => {
            panel_ops::open_ordering_criterion(state, position)
        }
        Action::CloseOrderingCriterion => panel_ops::close_ordering_criterion(state),
        Action::OpenDeadlinePicker(position) => panel_ops::open_deadline_picker(state, position),
        Action::CloseDeadlinePicker => panel_ops::close_deadline_picker(state),
        Action::OpenDeadlineCalendar(position) => {
            panel_ops::open_deadline_calendar(state, position)
        }
        Action::CloseDeadlineCalendar => panel_ops::close_deadline_calendar(state),
    }
    Ok(())
}
