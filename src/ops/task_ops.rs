use uuid::Uuid;

use crate::model::task::{SubStep, SubStepPatch, Task, TaskDraft, TaskPatch};
use crate::ops::ActionError;

fn find_task_mut<'a>(items: &'a mut [Task], id: &str) -> Result<&'a mut Task, ActionError> {
    items
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| ActionError::TaskNotFound(id.to_string()))
}

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

/// Append a new task built from `draft`. Returns the generated id.
///
/// Creation-time `is_important` / `is_marked_as_today_task` overrides also
/// stamp the matching ordering flag, so a task created important sorts like
/// one just marked important.
pub fn create_todo_item(items: &mut Vec<Task>, draft: TaskDraft, now: i64) -> String {
    let id = Uuid::new_v4().to_string();
    items.push(Task {
        id: id.clone(),
        title: draft.title,
        is_complete: draft.is_complete,
        sub_steps: Vec::new(),
        is_important: draft.is_important,
        is_marked_as_today_task: draft.is_marked_as_today_task,
        deadline: draft.deadline,
        memo: draft.memo,
        created_at: now,
        completed_at: None,
        marked_as_important_at: draft.is_important.then_some(now),
        marked_as_today_task_at: draft.is_marked_as_today_task.then_some(now),
    });
    id
}

pub fn remove_todo_item(items: &mut Vec<Task>, id: &str) -> Result<(), ActionError> {
    let index = items
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| ActionError::TaskNotFound(id.to_string()))?;
    items.remove(index);
    Ok(())
}

/// Shallow-merge `patch` into the task. The id is not patchable.
pub fn update_todo_item(items: &mut [Task], id: &str, patch: TaskPatch) -> Result<(), ActionError> {
    let task = find_task_mut(items, id)?;
    if let Some(title) = patch.title {
        task.title = title;
    }
    if let Some(memo) = patch.memo {
        task.memo = memo;
    }
    if let Some(deadline) = patch.deadline {
        task.deadline = deadline;
    }
    if let Some(is_complete) = patch.is_complete {
        task.is_complete = is_complete;
    }
    if let Some(is_important) = patch.is_important {
        task.is_important = is_important;
    }
    if let Some(is_today) = patch.is_marked_as_today_task {
        task.is_marked_as_today_task = is_today;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Completion / importance / today flags
// ---------------------------------------------------------------------------

/// Mark complete and stamp `completed_at`. The stamp doubles as the
/// ordering flag for the completed list, so there is no stamp-free variant.
pub fn mark_as_complete(items: &mut [Task], id: &str, now: i64) -> Result<(), ActionError> {
    let task = find_task_mut(items, id)?;
    task.is_complete = true;
    task.completed_at = Some(now);
    Ok(())
}

/// Clears the flag but keeps `completed_at` as last-completed history.
pub fn mark_as_incomplete(items: &mut [Task], id: &str) -> Result<(), ActionError> {
    find_task_mut(items, id)?.is_complete = false;
    Ok(())
}

/// Flag only — never touches `marked_as_important_at`, so lists that sort
/// by that stamp do not reshuffle.
pub fn mark_as_important(items: &mut [Task], id: &str) -> Result<(), ActionError> {
    find_task_mut(items, id)?.is_important = true;
    Ok(())
}

pub fn mark_as_unimportant(items: &mut [Task], id: &str) -> Result<(), ActionError> {
    find_task_mut(items, id)?.is_important = false;
    Ok(())
}

/// Flag plus ordering stamp, for the pages that float freshly-flagged
/// tasks to the top.
pub fn mark_as_important_with_ordering_flag(
    items: &mut [Task],
    id: &str,
    now: i64,
) -> Result<(), ActionError> {
    let task = find_task_mut(items, id)?;
    task.is_important = true;
    task.marked_as_important_at = Some(now);
    Ok(())
}

pub fn mark_as_today_task_with_ordering_flag(
    items: &mut [Task],
    id: &str,
    now: i64,
) -> Result<(), ActionError> {
    let task = find_task_mut(items, id)?;
    task.is_marked_as_today_task = true;
    task.marked_as_today_task_at = Some(now);
    Ok(())
}

pub fn mark_as_non_today_task(items: &mut [Task], id: &str) -> Result<(), ActionError> {
    find_task_mut(items, id)?.is_marked_as_today_task = false;
    Ok(())
}

// ---------------------------------------------------------------------------
// Deadline
// ---------------------------------------------------------------------------

pub fn set_deadline(items: &mut [Task], id: &str, deadline: i64) -> Result<(), ActionError> {
    find_task_mut(items, id)?.deadline = Some(deadline);
    Ok(())
}

pub fn unset_deadline(items: &mut [Task], id: &str) -> Result<(), ActionError> {
    find_task_mut(items, id)?.deadline = None;
    Ok(())
}

// ---------------------------------------------------------------------------
// Sub-steps
// ---------------------------------------------------------------------------

/// Append a sub-step to the task. Returns the generated sub-step id.
pub fn create_sub_step(
    items: &mut [Task],
    task_id: &str,
    title: String,
    now: i64,
) -> Result<String, ActionError> {
    let task = find_task_mut(items, task_id)?;
    let id = Uuid::new_v4().to_string();
    task.sub_steps.push(SubStep {
        id: id.clone(),
        title,
        is_complete: false,
        created_at: now,
    });
    Ok(id)
}

pub fn update_sub_step(
    items: &mut [Task],
    task_id: &str,
    step_id: &str,
    patch: SubStepPatch,
) -> Result<(), ActionError> {
    let task = find_task_mut(items, task_id)?;
    let step = task
        .sub_steps
        .iter_mut()
        .find(|s| s.id == step_id)
        .ok_or_else(|| ActionError::SubStepNotFound {
            task_id: task_id.to_string(),
            step_id: step_id.to_string(),
        })?;
    if let Some(title) = patch.title {
        step.title = title;
    }
    if let Some(is_complete) = patch.is_complete {
        step.is_complete = is_complete;
    }
    Ok(())
}

pub fn remove_sub_step(items: &mut [Task], task_id: &str, step_id: &str) -> Result<(), ActionError> {
    let task = find_task_mut(items, task_id)?;
    let index = task
        .sub_steps
        .iter()
        .position(|s| s.id == step_id)
        .ok_or_else(|| ActionError::SubStepNotFound {
            task_id: task_id.to_string(),
            step_id: step_id.to_string(),
        })?;
    task.sub_steps.remove(index);
    Ok(())
}
