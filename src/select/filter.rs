use regex::Regex;

use crate::model::task::Task;

/// Numeric bounds on `deadline`, matching the `$gt/$gte/$lt/$lte` filter
/// shape. All bounds are optional and conjunctive; a task without a
/// deadline never matches a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeadlineRange {
    pub gt: Option<i64>,
    pub gte: Option<i64>,
    pub lt: Option<i64>,
    pub lte: Option<i64>,
}

impl DeadlineRange {
    pub fn contains(&self, value: i64) -> bool {
        if let Some(gt) = self.gt {
            if value <= gt {
                return false;
            }
        }
        if let Some(gte) = self.gte {
            if value < gte {
                return false;
            }
        }
        if let Some(lt) = self.lt {
            if value >= lt {
                return false;
            }
        }
        if let Some(lte) = self.lte {
            if value > lte {
                return false;
            }
        }
        true
    }
}

/// A filter over the task collection: field equality, a deadline range,
/// and/or a compiled pattern on the string fields. All present clauses
/// must hold.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub is_complete: Option<bool>,
    pub is_important: Option<bool>,
    pub is_marked_as_today_task: Option<bool>,
    /// `Some(true)` = must have a deadline, `Some(false)` = must not
    pub has_deadline: Option<bool>,
    pub deadline: Option<DeadlineRange>,
    /// Matched against title and memo
    pub pattern: Option<Regex>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(want) = self.is_complete {
            if task.is_complete != want {
                return false;
            }
        }
        if let Some(want) = self.is_important {
            if task.is_important != want {
                return false;
            }
        }
        if let Some(want) = self.is_marked_as_today_task {
            if task.is_marked_as_today_task != want {
                return false;
            }
        }
        if let Some(want) = self.has_deadline {
            if task.deadline.is_some() != want {
                return false;
            }
        }
        if let Some(range) = &self.deadline {
            match task.deadline {
                Some(value) if range.contains(value) => {}
                _ => return false,
            }
        }
        if let Some(re) = &self.pattern {
            if !re.is_match(&task.title) && !re.is_match(&task.memo) {
                return false;
            }
        }
        true
    }
}

pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskDraft;
    use crate::ops::task_ops::create_todo_item;

    fn with_deadline(items: &mut Vec<Task>, title: &str, deadline: Option<i64>) {
        let draft = TaskDraft {
            title: title.into(),
            deadline,
            ..Default::default()
        };
        create_todo_item(items, draft, 0);
    }

    #[test]
    fn half_open_range_selects_exactly_gte_lt() {
        let mut items = Vec::new();
        for d in [5, 10, 15, 20, 25] {
            with_deadline(&mut items, &format!("d{d}"), Some(d));
        }
        with_deadline(&mut items, "none", None);

        let filter = TaskFilter {
            deadline: Some(DeadlineRange {
                gte: Some(10),
                lt: Some(20),
                ..Default::default()
            }),
            ..Default::default()
        };
        let hits = filter_tasks(&items, &filter);
        let titles: Vec<_> = hits.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["d10", "d15"]);
    }

    #[test]
    fn empty_range_selects_nothing() {
        let mut items = Vec::new();
        for d in [5, 10, 15] {
            with_deadline(&mut items, "t", Some(d));
        }
        let filter = TaskFilter {
            deadline: Some(DeadlineRange {
                gte: Some(10),
                lt: Some(10),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(filter_tasks(&items, &filter).is_empty());
    }

    #[test]
    fn exclusive_bounds() {
        let range = DeadlineRange {
            gt: Some(10),
            lte: Some(20),
            ..Default::default()
        };
        assert!(!range.contains(10));
        assert!(range.contains(11));
        assert!(range.contains(20));
        assert!(!range.contains(21));
    }

    #[test]
    fn clauses_are_conjunctive() {
        let mut items = Vec::new();
        let draft = TaskDraft {
            title: "report".into(),
            is_important: true,
            ..Default::default()
        };
        create_todo_item(&mut items, draft, 0);
        create_todo_item(&mut items, TaskDraft::new("report two"), 0);

        let filter = TaskFilter {
            is_important: Some(true),
            pattern: Some(Regex::new("report").unwrap()),
            ..Default::default()
        };
        assert_eq!(filter_tasks(&items, &filter).len(), 1);
    }

    #[test]
    fn pattern_matches_memo_too() {
        let mut items = Vec::new();
        let draft = TaskDraft {
            title: "call".into(),
            memo: "about the invoice".into(),
            ..Default::default()
        };
        create_todo_item(&mut items, draft, 0);

        let filter = TaskFilter {
            pattern: Some(Regex::new("invoice").unwrap()),
            ..Default::default()
        };
        assert_eq!(filter_tasks(&items, &filter).len(), 1);
    }
}
