use serde::{Deserialize, Serialize};

/// A top-level to-do item.
///
/// Field names serialize as camelCase so the persisted JSON matches the
/// layout the browser app writes to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique id (UUID v4), assigned at creation, never changed
    pub id: String,
    /// Title text; callers trim and refuse blank input before dispatch
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
    /// Child checklist items, in creation order
    #[serde(default)]
    pub sub_steps: Vec<SubStep>,
    #[serde(default)]
    pub is_important: bool,
    #[serde(default)]
    pub is_marked_as_today_task: bool,
    /// Epoch milliseconds; `None` = no deadline
    #[serde(default)]
    pub deadline: Option<i64>,
    #[serde(default)]
    pub memo: String,
    /// Epoch milliseconds, set once at creation
    pub created_at: i64,
    /// Stamped on every mark-complete; deliberately kept on mark-incomplete
    #[serde(default)]
    pub completed_at: Option<i64>,
    /// Ordering flag: stamped only by the with-ordering-flag variant
    #[serde(default)]
    pub marked_as_important_at: Option<i64>,
    /// Ordering flag: stamped only by the with-ordering-flag variant
    #[serde(default)]
    pub marked_as_today_task_at: Option<i64>,
}

/// A child checklist item belonging to exactly one task. No nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStep {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
    pub created_at: i64,
}

/// Creation-time fields for a new task. Everything except the title is an
/// optional override of the defaults.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub is_complete: bool,
    pub is_important: bool,
    pub is_marked_as_today_task: bool,
    pub deadline: Option<i64>,
    pub memo: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        TaskDraft {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial update for a task. `None` = leave the field alone.
///
/// `deadline` is doubly optional so "clear the deadline" (`Some(None)`) and
/// "don't touch it" (`None`) stay distinct.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub memo: Option<String>,
    pub deadline: Option<Option<i64>>,
    pub is_complete: Option<bool>,
    pub is_important: Option<bool>,
    pub is_marked_as_today_task: Option<bool>,
}

/// Partial update for a sub-step.
#[derive(Debug, Clone, Default)]
pub struct SubStepPatch {
    pub title: Option<String>,
    pub is_complete: Option<bool>,
}
