use std::cmp::Ordering as Cmp;

use crate::model::settings::{Ordering, OrderingCriterion, OrderingDirection};
use crate::model::task::Task;

/// How recently the task was flagged for attention. Used as the secondary
/// tiebreak on the pages that float freshly-flagged tasks to the top;
/// falls back to creation time so unflagged tasks still order by recency.
fn flagged_recency(task: &Task) -> i64 {
    task.marked_as_important_at
        .unwrap_or(0)
        .max(task.marked_as_today_task_at.unwrap_or(0))
        .max(task.created_at)
}

fn by_flagged_recency(a: &Task, b: &Task) -> Cmp {
    flagged_recency(b)
        .cmp(&flagged_recency(a))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Deadline ascending; tasks without a deadline sort last.
fn by_deadline(a: &Task, b: &Task) -> Cmp {
    match (a.deadline, b.deadline) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Cmp::Less,
        (None, Some(_)) => Cmp::Greater,
        (None, None) => Cmp::Equal,
    }
}

fn criterion_cmp(criterion: OrderingCriterion, a: &Task, b: &Task) -> Cmp {
    match criterion {
        // flagged tasks first
        OrderingCriterion::Importance => b.is_important.cmp(&a.is_important),
        OrderingCriterion::MyDay => b.is_marked_as_today_task.cmp(&a.is_marked_as_today_task),
        OrderingCriterion::Deadline => by_deadline(a, b),
        OrderingCriterion::Alphabetically => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title)),
        OrderingCriterion::CreationDate => a.created_at.cmp(&b.created_at),
    }
}

/// Sort for the pages with a user-selectable ordering (My Day, Inbox).
///
/// The selected criterion is the primary key — direction reverses it, not
/// the tiebreak — and ties fall back to most-recently-flagged first. With
/// no ordering selected the tiebreak is the whole sort.
pub fn sort_user_ordered(tasks: &mut [&Task], ordering: Option<Ordering>) {
    tasks.sort_by(|a, b| {
        let primary = match ordering {
            Some(o) => {
                let cmp = criterion_cmp(o.criterion, a, b);
                match o.direction {
                    OrderingDirection::Ascending => cmp,
                    OrderingDirection::Descending => cmp.reverse(),
                }
            }
            None => Cmp::Equal,
        };
        primary.then_with(|| by_flagged_recency(a, b))
    });
}

/// Planned: soonest deadline first, then oldest created.
pub fn sort_planned(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| by_deadline(a, b).then_with(|| a.created_at.cmp(&b.created_at)));
}

/// Completed: most recently completed first.
pub fn sort_completed(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| {
        b.completed_at
            .unwrap_or(0)
            .cmp(&a.completed_at.unwrap_or(0))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Stable creation order for the pages with no re-ranking (Important, All).
pub fn sort_by_creation(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
}
