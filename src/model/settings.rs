use std::fmt;

use serde::{Deserialize, Serialize};

/// Global settings, persisted as part of the app state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub smart_list: SmartListSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    /// Gates the UI's confirmation prompt before remove actions
    #[serde(default = "default_true")]
    pub confirm_before_removing: bool,
    /// When set, marking a task important uses the ordering-flag variant
    #[serde(default = "default_true")]
    pub move_important_task: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        GeneralSettings {
            confirm_before_removing: true,
            move_important_task: true,
        }
    }
}

/// Sidebar visibility of the smart lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartListSettings {
    #[serde(default = "default_true")]
    pub important: bool,
    #[serde(default = "default_true")]
    pub planned: bool,
    #[serde(default = "default_true")]
    pub all: bool,
    #[serde(default = "default_true")]
    pub completed: bool,
    #[serde(default)]
    pub auto_hide_empty_lists: bool,
}

impl Default for SmartListSettings {
    fn default() -> Self {
        SmartListSettings {
            important: true,
            planned: true,
            all: true,
            completed: true,
            auto_hide_empty_lists: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Keys into `Settings::general`. An out-of-set key is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralKey {
    ConfirmBeforeRemoving,
    MoveImportantTask,
}

/// Keys into `Settings::smart_list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartListKey {
    Important,
    Planned,
    All,
    Completed,
    AutoHideEmptyLists,
}

/// The fixed set of list pages. Each page owns a fixed subset of the
/// per-page settings (see `PageSettings`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageKey {
    #[serde(rename = "myday")]
    MyDay,
    #[serde(rename = "important")]
    Important,
    #[serde(rename = "planned")]
    Planned,
    #[serde(rename = "all")]
    All,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "inbox")]
    Inbox,
    #[serde(rename = "search")]
    Search,
    /// The keyword-result page (a single route template, not one key per keyword)
    #[serde(rename = "search/[keyword]")]
    SearchResult,
}

impl PageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            PageKey::MyDay => "myday",
            PageKey::Important => "important",
            PageKey::Planned => "planned",
            PageKey::All => "all",
            PageKey::Completed => "completed",
            PageKey::Inbox => "inbox",
            PageKey::Search => "search",
            PageKey::SearchResult => "search/[keyword]",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme palette for the pages that support one (all, completed, inbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Blue,
    Red,
    Violet,
    Lime,
    Amber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderingCriterion {
    Importance,
    Deadline,
    MyDay,
    Alphabetically,
    CreationDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderingDirection {
    Ascending,
    Descending,
}

impl OrderingDirection {
    pub fn reversed(self) -> Self {
        match self {
            OrderingDirection::Ascending => OrderingDirection::Descending,
            OrderingDirection::Descending => OrderingDirection::Ascending,
        }
    }
}

/// User-selected sort for the pages that allow one (myday, inbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ordering {
    pub criterion: OrderingCriterion,
    pub direction: OrderingDirection,
}

/// Per-page settings. One field per page, each with exactly the shape that
/// page supports — a theme color on `planned` or an ordering on `search` is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    #[serde(default)]
    pub myday: OrderedPageSettings,
    #[serde(default)]
    pub important: ListPageSettings,
    #[serde(default)]
    pub planned: ListPageSettings,
    #[serde(default)]
    pub all: ThemedPageSettings,
    #[serde(default)]
    pub completed: ThemedPageSettings,
    #[serde(default)]
    pub inbox: InboxPageSettings,
    #[serde(default)]
    pub search: ListPageSettings,
    #[serde(default, rename = "search/[keyword]")]
    pub search_result: ListPageSettings,
}

/// Pages with only a user-selectable ordering (myday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedPageSettings {
    #[serde(default)]
    pub ordering: Option<Ordering>,
}

/// Pages with only the hide-completed toggle (important, planned, search*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPageSettings {
    #[serde(default)]
    pub is_hide_completed_items: bool,
}

/// Pages with only a theme color (all, completed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedPageSettings {
    #[serde(default)]
    pub theme_color: ThemeColor,
}

/// The inbox supports both a theme and an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxPageSettings {
    #[serde(default)]
    pub theme_color: ThemeColor,
    #[serde(default)]
    pub ordering: Option<Ordering>,
}
