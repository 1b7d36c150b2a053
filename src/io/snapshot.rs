//! Save / load / merge of the persisted state.
//!
//! Loading is deliberately lenient: a missing entry, non-JSON text, JSON
//! that is not an object, or an object whose shape does not deserialize
//! are all "no stored state" — corrupt storage must never crash bootstrap.
//! Saving is the opposite: a write failure is returned, never swallowed.
//!
//! The merge is an explicit fold over the known schema, three layers in
//! priority order: hard-coded defaults, then whatever the stored snapshot
//! carries (leaf by leaf for nested settings; the task array replaces
//! wholesale), then the transient-field reset so no stale open-menu state
//! survives a reload.

use serde::Deserialize;

use crate::io::storage::{Storage, StorageError};
use crate::model::settings::{Ordering, PageSettings, Settings, ThemeColor};
use crate::model::state::AppState;
use crate::model::task::Task;

/// Serialize the state and write it under the fixed key. Transient fields
/// are skipped by the model's serde layout.
pub fn save(storage: &mut dyn Storage, state: &AppState) -> Result<(), StorageError> {
    let json = serde_json::to_string(state).expect("app state serializes");
    storage.write(&json)
}

/// The persisted snapshot as found in storage: every field optional, every
/// nested object mirrored, unknown keys ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    pub todo_items: Option<Vec<Task>>,
    pub settings: Option<StoredSettings>,
    pub page_settings: Option<StoredPageSettings>,
    pub is_active_search_box: Option<bool>,
    pub is_active_sidebar: Option<bool>,
    pub is_active_setting_panel: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    pub general: Option<StoredGeneralSettings>,
    pub smart_list: Option<StoredSmartListSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredGeneralSettings {
    pub confirm_before_removing: Option<bool>,
    pub move_important_task: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSmartListSettings {
    pub important: Option<bool>,
    pub planned: Option<bool>,
    pub all: Option<bool>,
    pub completed: Option<bool>,
    pub auto_hide_empty_lists: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPageSettings {
    pub myday: Option<StoredOrderedPage>,
    pub important: Option<StoredListPage>,
    pub planned: Option<StoredListPage>,
    pub all: Option<StoredThemedPage>,
    pub completed: Option<StoredThemedPage>,
    pub inbox: Option<StoredInboxPage>,
    pub search: Option<StoredListPage>,
    #[serde(rename = "search/[keyword]")]
    pub search_result: Option<StoredListPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOrderedPage {
    pub ordering: Option<Ordering>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredListPage {
    pub is_hide_completed_items: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredThemedPage {
    pub theme_color: Option<ThemeColor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredInboxPage {
    pub theme_color: Option<ThemeColor>,
    pub ordering: Option<Ordering>,
}

/// Read the stored snapshot. Anything unusable degrades to an empty
/// snapshot with a warning; only the storage medium itself erroring is
/// also just a warning here (bootstrap still has nothing to load).
pub fn load(storage: &dyn Storage) -> StoredState {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return StoredState::default(),
        Err(e) => {
            log::warn!("could not read stored state, starting empty: {e}");
            return StoredState::default();
        }
    };
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value @ serde_json::Value::Object(_)) => match serde_json::from_value(value) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("stored state has an unusable shape, starting empty: {e}");
                StoredState::default()
            }
        },
        Ok(_) => {
            log::warn!("stored state is not a JSON object, starting empty");
            StoredState::default()
        }
        Err(e) => {
            log::warn!("stored state is not valid JSON, starting empty: {e}");
            StoredState::default()
        }
    }
}

fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn merge_settings(settings: &mut Settings, stored: StoredSettings) {
    if let Some(general) = stored.general {
        assign(
            &mut settings.general.confirm_before_removing,
            general.confirm_before_removing,
        );
        assign(
            &mut settings.general.move_important_task,
            general.move_important_task,
        );
    }
    if let Some(smart) = stored.smart_list {
        assign(&mut settings.smart_list.important, smart.important);
        assign(&mut settings.smart_list.planned, smart.planned);
        assign(&mut settings.smart_list.all, smart.all);
        assign(&mut settings.smart_list.completed, smart.completed);
        assign(
            &mut settings.smart_list.auto_hide_empty_lists,
            smart.auto_hide_empty_lists,
        );
    }
}

fn merge_page_settings(pages: &mut PageSettings, stored: StoredPageSettings) {
    if let Some(page) = stored.myday {
        assign(&mut pages.myday.ordering, page.ordering.map(Some));
    }
    if let Some(page) = stored.important {
        assign(
            &mut pages.important.is_hide_completed_items,
            page.is_hide_completed_items,
        );
    }
    if let Some(page) = stored.planned {
        assign(
            &mut pages.planned.is_hide_completed_items,
            page.is_hide_completed_items,
        );
    }
    if let Some(page) = stored.all {
        assign(&mut pages.all.theme_color, page.theme_color);
    }
    if let Some(page) = stored.completed {
        assign(&mut pages.completed.theme_color, page.theme_color);
    }
    if let Some(page) = stored.inbox {
        assign(&mut pages.inbox.theme_color, page.theme_color);
        assign(&mut pages.inbox.ordering, page.ordering.map(Some));
    }
    if let Some(page) = stored.search {
        assign(
            &mut pages.search.is_hide_completed_items,
            page.is_hide_completed_items,
        );
    }
    if let Some(page) = stored.search_result {
        assign(
            &mut pages.search_result.is_hide_completed_items,
            page.is_hide_completed_items,
        );
    }
}

/// Fold the stored snapshot over the defaults, then reset every transient
/// field (the overrides layer).
pub fn merge(defaults: AppState, stored: StoredState) -> AppState {
    let mut state = defaults;
    // a stored task array replaces the default wholesale, never element-wise
    assign(&mut state.todo_items, stored.todo_items);
    if let Some(settings) = stored.settings {
        merge_settings(&mut state.settings, settings);
    }
    if let Some(pages) = stored.page_settings {
        merge_page_settings(&mut state.page_settings, pages);
    }
    assign(&mut state.is_active_search_box, stored.is_active_search_box);
    assign(&mut state.is_active_sidebar, stored.is_active_sidebar);
    assign(
        &mut state.is_active_setting_panel,
        stored.is_active_setting_panel,
    );
    state.reset_transient();
    state
}
