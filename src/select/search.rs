use regex::Regex;

use crate::model::task::Task;

/// Compile a search keyword into the matcher used by the search pages:
/// literal (escaped), case-insensitive.
pub fn keyword_pattern(keyword: &str) -> Regex {
    // escaped literal, so the pattern cannot fail to compile
    Regex::new(&format!("(?i){}", regex::escape(keyword))).expect("escaped keyword is valid")
}

/// Does the task match the keyword on any of its string fields (title,
/// memo, sub-step titles)?
pub fn matches_keyword(task: &Task, pattern: &Regex) -> bool {
    pattern.is_match(&task.title)
        || pattern.is_match(&task.memo)
        || task.sub_steps.iter().any(|s| pattern.is_match(&s.title))
}

pub fn search_tasks<'a>(tasks: &'a [Task], keyword: &str) -> Vec<&'a Task> {
    let pattern = keyword_pattern(keyword);
    tasks.iter().filter(|t| matches_keyword(t, &pattern)).collect()
}
