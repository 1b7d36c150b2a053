use std::path::PathBuf;

use chrono::{Local, NaiveDate, TimeZone};

use crate::bootstrap::{self, HttpSeedSource, NoSeedSource, SeedSource};
use crate::cli::commands::{AddArgs, Cli, Commands, DueArgs, IdArg, ListArgs, SearchArgs};
use crate::io::storage::FileStorage;
use crate::model::settings::PageKey;
use crate::model::task::{Task, TaskDraft};
use crate::ops::Action;
use crate::select;
use crate::store::{Store, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown page: {0} (expected myday|important|planned|all|completed|inbox)")]
    UnknownPage(String),
    #[error("no task matches id prefix {0}")]
    NoMatch(String),
    #[error("id prefix {0} is ambiguous")]
    AmbiguousId(String),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    BadDate(String),
}

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(default_data_dir);
    let mut store = Store::new(Box::new(FileStorage::new(&data_dir)));
    let source: Box<dyn SeedSource> = if cli.no_fetch {
        Box::new(NoSeedSource)
    } else {
        Box::new(HttpSeedSource::default())
    };
    bootstrap::run_bootstrap(&mut store, source.as_ref())?;

    match cli.command {
        Commands::List(args) => cmd_list(&store, args),
        Commands::Add(args) => cmd_add(&mut store, args),
        Commands::Show(args) => cmd_show(&store, args),
        Commands::Done(args) => {
            let id = resolve_id(&store, &args.id)?;
            store.dispatch(Action::MarkAsCompleteWithOrderingFlag { id })?;
            Ok(())
        }
        Commands::Undone(args) => {
            let id = resolve_id(&store, &args.id)?;
            store.dispatch(Action::MarkAsIncomplete { id })?;
            Ok(())
        }
        Commands::Important(args) => {
            let id = resolve_id(&store, &args.id)?;
            // honor the "move important tasks" setting the way the UI does
            let action = if store.state().settings.general.move_important_task {
                Action::MarkAsImportantWithOrderingFlag { id }
            } else {
                Action::MarkAsImportant { id }
            };
            store.dispatch(action)?;
            Ok(())
        }
        Commands::Today(args) => {
            let id = resolve_id(&store, &args.id)?;
            store.dispatch(Action::MarkAsTodayTaskWithOrderingFlag { id })?;
            Ok(())
        }
        Commands::Remove(args) => {
            let id = resolve_id(&store, &args.id)?;
            store.dispatch(Action::RemoveTodoItem { id })?;
            Ok(())
        }
        Commands::Sub(args) => {
            let task_id = resolve_id(&store, &args.id)?;
            store.dispatch(Action::CreateSubStep {
                task_id,
                title: args.title,
            })?;
            Ok(())
        }
        Commands::Due(args) => cmd_due(&mut store, args),
        Commands::Search(args) => cmd_search(&store, args),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daylist")
}

fn parse_page(raw: &str) -> Result<PageKey, CliError> {
    match raw {
        "myday" => Ok(PageKey::MyDay),
        "important" => Ok(PageKey::Important),
        "planned" => Ok(PageKey::Planned),
        "all" => Ok(PageKey::All),
        "completed" => Ok(PageKey::Completed),
        "inbox" => Ok(PageKey::Inbox),
        other => Err(CliError::UnknownPage(other.to_string())),
    }
}

/// Resolve a full id or unique prefix against the current collection.
fn resolve_id(store: &Store, prefix: &str) -> Result<String, CliError> {
    let mut matches = store
        .state()
        .todo_items
        .iter()
        .filter(|t| t.id.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task.id.clone()),
        (Some(_), Some(_)) => Err(CliError::AmbiguousId(prefix.to_string())),
        (None, _) => Err(CliError::NoMatch(prefix.to_string())),
    }
}

fn parse_due(raw: &str) -> Result<i64, CliError> {
    let date: NaiveDate = raw
        .parse()
        .map_err(|_| CliError::BadDate(raw.to_string()))?;
    let midnight = date.and_hms_opt(0, 0, 0).expect("midnight exists");
    // a DST gap can make local midnight nonexistent; refuse the date
    // rather than fall back to a bogus timestamp
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| CliError::BadDate(raw.to_string()))
}

fn format_due(deadline: i64) -> String {
    match Local.timestamp_millis_opt(deadline).earliest() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => deadline.to_string(),
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn print_task(task: &Task) {
    let check = if task.is_complete { 'x' } else { ' ' };
    let mut line = format!("[{check}] {}  {}", short_id(&task.id), task.title);
    if task.is_important {
        line.push_str("  *");
    }
    if task.is_marked_as_today_task {
        line.push_str("  @today");
    }
    if let Some(deadline) = task.deadline {
        line.push_str(&format!("  (due {})", format_due(deadline)));
    }
    println!("{line}");
}

fn cmd_list(store: &Store, args: ListArgs) -> Result<(), CliError> {
    let page = parse_page(&args.page)?;
    let tasks = select::tasks_for_page(store.state(), page, None);
    if tasks.is_empty() {
        println!("(empty)");
        return Ok(());
    }
    for task in tasks {
        print_task(task);
    }
    Ok(())
}

fn cmd_add(store: &mut Store, args: AddArgs) -> Result<(), CliError> {
    let title = args.title.trim().to_string();
    if title.is_empty() {
        // blank titles are refused before dispatch; the store accepts what
        // it is given
        eprintln!("refusing to add a task with an empty title");
        return Ok(());
    }
    let deadline = args.due.as_deref().map(parse_due).transpose()?;
    let draft = TaskDraft {
        title,
        is_important: args.important,
        is_marked_as_today_task: args.today,
        deadline,
        memo: args.memo.unwrap_or_default(),
        ..Default::default()
    };
    store.dispatch(Action::CreateTodoItem(draft))?;
    if let Some(task) = store.state().todo_items.last() {
        print_task(task);
    }
    Ok(())
}

fn cmd_show(store: &Store, args: IdArg) -> Result<(), CliError> {
    let id = resolve_id(store, &args.id)?;
    let task = store.state().task(&id).expect("resolved id exists");
    print_task(task);
    if !task.memo.is_empty() {
        println!("    memo: {}", task.memo);
    }
    for step in &task.sub_steps {
        let check = if step.is_complete { 'x' } else { ' ' };
        println!("    [{check}] {}  {}", short_id(&step.id), step.title);
    }
    Ok(())
}

fn cmd_due(store: &mut Store, args: DueArgs) -> Result<(), CliError> {
    let id = resolve_id(store, &args.id)?;
    let action = match args.date.as_deref() {
        Some(raw) => Action::SetDeadline {
            id,
            deadline: parse_due(raw)?,
        },
        None => Action::UnsetDeadline { id },
    };
    store.dispatch(action)?;
    Ok(())
}

fn cmd_search(store: &Store, args: SearchArgs) -> Result<(), CliError> {
    let hits = select::search_tasks(&store.state().todo_items, &args.keyword);
    if hits.is_empty() {
        println!("(no matches)");
        return Ok(());
    }
    for task in hits {
        print_task(task);
    }
    Ok(())
}
