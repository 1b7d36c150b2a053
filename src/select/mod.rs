//! Read-only projections over the app state: per-page task views, filters,
//! and search. Per-page membership and default order are part of the
//! store's contract, not a presentation choice.

pub mod filter;
pub mod search;
pub mod sort;

pub use filter::{filter_tasks, DeadlineRange, TaskFilter};
pub use search::{keyword_pattern, matches_keyword, search_tasks};

use crate::model::settings::{Ordering, PageKey};
use crate::model::state::AppState;
use crate::model::task::Task;

fn ordering_for(state: &AppState, page: PageKey) -> Option<Ordering> {
    match page {
        PageKey::MyDay => state.page_settings.myday.ordering,
        PageKey::Inbox => state.page_settings.inbox.ordering,
        _ => None,
    }
}

fn hides_completed(state: &AppState, page: PageKey) -> bool {
    match page {
        PageKey::Important => state.page_settings.important.is_hide_completed_items,
        PageKey::Planned => state.page_settings.planned.is_hide_completed_items,
        PageKey::Search => state.page_settings.search.is_hide_completed_items,
        PageKey::SearchResult => state.page_settings.search_result.is_hide_completed_items,
        _ => false,
    }
}

/// The task list a page displays: membership filter, hide-completed
/// toggle, then the page's sort. `keyword` only applies to the search
/// pages (no keyword = every task is a hit).
pub fn tasks_for_page<'a>(
    state: &'a AppState,
    page: PageKey,
    keyword: Option<&str>,
) -> Vec<&'a Task> {
    let items = &state.todo_items;
    let mut view: Vec<&Task> = match page {
        PageKey::MyDay => items.iter().filter(|t| t.is_marked_as_today_task).collect(),
        PageKey::Important => items.iter().filter(|t| t.is_important).collect(),
        PageKey::Planned => items.iter().filter(|t| t.deadline.is_some()).collect(),
        PageKey::Completed => items.iter().filter(|t| t.is_complete).collect(),
        PageKey::All | PageKey::Inbox => items.iter().collect(),
        PageKey::Search | PageKey::SearchResult => match keyword {
            Some(kw) => search_tasks(items, kw),
            None => items.iter().collect(),
        },
    };

    if hides_completed(state, page) {
        view.retain(|t| !t.is_complete);
    }

    match page {
        PageKey::MyDay | PageKey::Inbox => {
            sort::sort_user_ordered(&mut view, ordering_for(state, page))
        }
        PageKey::Planned => sort::sort_planned(&mut view),
        PageKey::Completed => sort::sort_completed(&mut view),
        PageKey::Important | PageKey::All | PageKey::Search | PageKey::SearchResult => {
            sort::sort_by_creation(&mut view)
        }
    }
    view
}
