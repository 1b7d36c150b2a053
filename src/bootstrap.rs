//! First-run seeding and the bootstrap driver.
//!
//! Bootstrap is two-phase: `Store::begin_bootstrap` loads and merges the
//! snapshot, then the seed fetch runs out here with no store access, and
//! `Store::complete_bootstrap` commits. A fetch that fails or returns
//! nothing still ends with a ready app and an empty list — bootstrap never
//! leaves the app stuck in not-ready.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::model::state::AppState;
use crate::model::task::TaskDraft;
use crate::ops::task_ops;
use crate::store::{Clock, Store, StoreError};

/// Endpoint serving demo seed records on first run.
pub const SEED_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Upper bound on seeded tasks.
const SEED_COUNT: usize = 8;

/// The wire shape of one seed record.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecord {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of first-run seed data.
pub trait SeedSource {
    fn fetch(&self) -> Result<Vec<SeedRecord>, SeedError>;
}

/// Fetches seed records from a fixed HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSeedSource { url: url.into() }
    }
}

impl Default for HttpSeedSource {
    fn default() -> Self {
        HttpSeedSource::new(SEED_URL)
    }
}

impl SeedSource for HttpSeedSource {
    fn fetch(&self) -> Result<Vec<SeedRecord>, SeedError> {
        let records = reqwest::blocking::get(&self.url)?
            .error_for_status()?
            .json()?;
        Ok(records)
    }
}

/// A source with nothing to offer; first run starts with an empty list.
#[derive(Debug, Clone, Default)]
pub struct NoSeedSource;

impl SeedSource for NoSeedSource {
    fn fetch(&self) -> Result<Vec<SeedRecord>, SeedError> {
        Ok(Vec::new())
    }
}

/// Turn fetched records into tasks: a sampled subset with varied
/// importance / today / deadline flags, so a first-run demo has something
/// on every page. Ids are freshly generated, never taken from the feed.
pub fn seed_tasks(state: &mut AppState, clock: &mut dyn Clock, records: &[SeedRecord]) {
    let mut rng = rand::thread_rng();
    let picked: Vec<&SeedRecord> = records
        .choose_multiple(&mut rng, SEED_COUNT.min(records.len()))
        .collect();

    for record in picked {
        let now = clock.now_ms();
        let deadline = rng
            .gen_bool(0.4)
            .then(|| now + rng.gen_range(1..=14) * 24 * 60 * 60 * 1000);
        let draft = TaskDraft {
            title: record.title.clone(),
            is_complete: record.completed,
            is_important: rng.gen_bool(0.25),
            is_marked_as_today_task: rng.gen_bool(0.25),
            deadline,
            memo: String::new(),
        };
        let id = task_ops::create_todo_item(&mut state.todo_items, draft, now);
        if record.completed {
            // seeded-complete tasks need a completion stamp for the
            // completed list's ordering
            let _ = task_ops::mark_as_complete(&mut state.todo_items, &id, now);
        }
    }
}

/// Run a full bootstrap against the given seed source. Fetch failures are
/// logged and degraded to an empty seed set.
pub fn run_bootstrap(store: &mut Store, source: &dyn SeedSource) -> Result<(), StoreError> {
    let ticket = store.begin_bootstrap();
    let records = if ticket.needs_seed {
        source.fetch().unwrap_or_else(|e| {
            log::warn!("continuing with an empty list: {e}");
            Vec::new()
        })
    } else {
        Vec::new()
    };
    store.complete_bootstrap(ticket, |state, clock| seed_tasks(state, clock, &records))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStorage;
    use crate::store::TickClock;

    struct FailingSource;

    impl SeedSource for FailingSource {
        fn fetch(&self) -> Result<Vec<SeedRecord>, SeedError> {
            // simplest way to manufacture a reqwest::Error without a server
            Err(SeedError::Http(
                reqwest::blocking::get("http://127.0.0.1:1/unreachable").unwrap_err(),
            ))
        }
    }

    struct StaticSource(Vec<SeedRecord>);

    impl SeedSource for StaticSource {
        fn fetch(&self) -> Result<Vec<SeedRecord>, SeedError> {
            Ok(self.0.clone())
        }
    }

    fn record(id: u32, title: &str, completed: bool) -> SeedRecord {
        SeedRecord {
            id,
            title: title.into(),
            completed,
        }
    }

    fn test_store(storage: &MemoryStorage) -> Store {
        Store::with_clock(Box::new(storage.clone()), Box::new(TickClock::default()))
    }

    #[test]
    fn seeds_on_empty_storage() {
        let storage = MemoryStorage::new();
        let mut store = test_store(&storage);
        let source = StaticSource(vec![
            record(1, "alpha", false),
            record(2, "beta", true),
            record(3, "gamma", false),
        ]);

        run_bootstrap(&mut store, &source).unwrap();
        assert!(store.state().is_app_ready);
        assert_eq!(store.state().todo_items.len(), 3);

        let mut ids: Vec<_> = store.state().todo_items.iter().map(|t| &t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        let done = store
            .state()
            .todo_items
            .iter()
            .find(|t| t.title == "beta")
            .unwrap();
        assert!(done.is_complete);
        assert!(done.completed_at.is_some());
    }

    #[test]
    fn samples_at_most_the_cap() {
        let storage = MemoryStorage::new();
        let mut store = test_store(&storage);
        let records: Vec<_> = (0..200).map(|i| record(i, &format!("t{i}"), false)).collect();

        run_bootstrap(&mut store, &StaticSource(records)).unwrap();
        assert_eq!(store.state().todo_items.len(), SEED_COUNT);
    }

    #[test]
    fn fetch_failure_still_ends_ready() {
        let storage = MemoryStorage::new();
        let mut store = test_store(&storage);
        run_bootstrap(&mut store, &FailingSource).unwrap();
        assert!(store.state().is_app_ready);
        assert!(store.state().todo_items.is_empty());
    }

    #[test]
    fn corrupt_storage_recovers() {
        let storage = MemoryStorage::new();
        storage.seed_raw("not json");
        let mut store = test_store(&storage);
        run_bootstrap(&mut store, &StaticSource(vec![record(1, "seeded", false)])).unwrap();

        assert!(store.state().is_app_ready);
        assert_eq!(store.state().todo_items.len(), 1);
        // the bad entry was overwritten by a good snapshot
        let raw = storage.contents().unwrap();
        assert!(raw.starts_with('{'));
    }

    #[test]
    fn existing_tasks_suppress_seeding() {
        let storage = MemoryStorage::new();
        {
            let mut store = test_store(&storage);
            store
                .dispatch(crate::ops::Action::CreateTodoItem(TaskDraft::new("mine")))
                .unwrap();
        }
        let mut store = test_store(&storage);
        run_bootstrap(&mut store, &StaticSource(vec![record(1, "seed", false)])).unwrap();
        assert_eq!(store.state().todo_items.len(), 1);
        assert_eq!(store.state().todo_items[0].title, "mine");
    }
}
