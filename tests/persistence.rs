use std::fs;

use pretty_assertions::assert_eq;

use daylist::bootstrap::{run_bootstrap, NoSeedSource, SeedRecord, SeedSource};
use daylist::io::snapshot;
use daylist::io::storage::{FileStorage, MemoryStorage, STORAGE_KEY};
use daylist::model::settings::{
    GeneralKey, Ordering, OrderingCriterion, OrderingDirection, PageKey, SmartListKey, ThemeColor,
};
use daylist::model::state::AppState;
use daylist::model::task::TaskDraft;
use daylist::ops::Action;
use daylist::store::{Store, TickClock};

struct OneSeed;

impl SeedSource for OneSeed {
    fn fetch(&self) -> Result<Vec<SeedRecord>, daylist::bootstrap::SeedError> {
        Ok(vec![SeedRecord {
            id: 1,
            title: "seeded task".into(),
            completed: false,
        }])
    }
}

/// Build a state with every persisted corner populated, through the public
/// action surface.
fn populate(store: &mut Store) {
    store
        .dispatch(Action::CreateTodoItem(TaskDraft {
            title: "alpha".into(),
            is_important: true,
            deadline: Some(5_000),
            memo: "with a memo".into(),
            ..Default::default()
        }))
        .unwrap();
    store
        .dispatch(Action::CreateTodoItem(TaskDraft::new("beta")))
        .unwrap();
    let beta_id = store.state().todo_items[1].id.clone();
    store
        .dispatch(Action::CreateSubStep {
            task_id: beta_id.clone(),
            title: "beta step".into(),
        })
        .unwrap();
    store
        .dispatch(Action::MarkAsCompleteWithOrderingFlag { id: beta_id })
        .unwrap();
    store
        .dispatch(Action::TurnOffGeneral(GeneralKey::ConfirmBeforeRemoving))
        .unwrap();
    store
        .dispatch(Action::TurnOnSmartList(SmartListKey::AutoHideEmptyLists))
        .unwrap();
    store
        .dispatch(Action::HideCompletedItems(PageKey::Planned))
        .unwrap();
    store
        .dispatch(Action::SetThemeColor {
            page: PageKey::Completed,
            color: ThemeColor::Lime,
        })
        .unwrap();
    store
        .dispatch(Action::SetOrderingCriterion {
            page: PageKey::MyDay,
            criterion: OrderingCriterion::Importance,
            direction: OrderingDirection::Descending,
        })
        .unwrap();
    store.dispatch(Action::OpenSearchBox).unwrap();
}

#[test]
fn full_state_round_trips_through_storage() {
    let storage = MemoryStorage::new();
    let mut store = Store::with_clock(Box::new(storage.clone()), Box::new(TickClock::default()));
    populate(&mut store);

    let restored = snapshot::merge(AppState::default(), snapshot::load(&storage));

    let mut expected = store.state().clone();
    expected.reset_transient();
    assert_eq!(restored, expected);
    assert_eq!(
        restored.page_settings.myday.ordering,
        Some(Ordering {
            criterion: OrderingCriterion::Importance,
            direction: OrderingDirection::Descending,
        })
    );
    assert!(restored.is_active_search_box);
}

#[test]
fn corrupt_file_on_disk_recovers_and_reseeds() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(format!("{STORAGE_KEY}.json"));
    fs::write(&path, "not json").unwrap();

    let mut store = Store::with_clock(
        Box::new(FileStorage::new(dir.path())),
        Box::new(TickClock::default()),
    );
    run_bootstrap(&mut store, &OneSeed).unwrap();

    assert!(store.state().is_app_ready);
    assert_eq!(store.state().todo_items.len(), 1);
    assert_eq!(store.state().todo_items[0].title, "seeded task");

    // the corrupt entry has been replaced with a valid snapshot
    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_object());
}

#[test]
fn snapshot_from_older_version_with_extra_fields_loads() {
    let storage = MemoryStorage::new();
    storage.seed_raw(
        r#"{
            "schemaVersion": 99,
            "todoItems": [
                {"id": "t1", "title": "from the browser", "createdAt": 10,
                 "isImportant": true, "unknownField": [1, 2]}
            ],
            "settings": {"smartList": {"planned": false}},
            "isActiveSidebar": true
        }"#,
    );

    let state = snapshot::merge(AppState::default(), snapshot::load(&storage));
    assert_eq!(state.todo_items.len(), 1);
    let task = &state.todo_items[0];
    assert_eq!(task.title, "from the browser");
    assert!(task.is_important);
    // absent optional fields take their defaults
    assert!(!task.is_complete);
    assert_eq!(task.deadline, None);
    assert!(task.sub_steps.is_empty());

    assert!(!state.settings.smart_list.planned);
    assert!(state.settings.smart_list.important);
    assert!(state.is_active_sidebar);
}

#[test]
fn write_failure_is_reported_not_swallowed() {
    let storage = MemoryStorage::new();
    let mut failing = storage.clone();
    failing.set_fail_writes(true);
    let err = snapshot::save(&mut failing, &AppState::default()).unwrap_err();
    assert!(err.to_string().contains("quota"));
}

#[test]
fn bootstrap_over_no_seed_source_still_ready() {
    let storage = MemoryStorage::new();
    let mut store = Store::with_clock(Box::new(storage.clone()), Box::new(TickClock::default()));
    run_bootstrap(&mut store, &NoSeedSource).unwrap();
    assert!(store.state().is_app_ready);
    assert!(store.state().todo_items.is_empty());
    // even an empty bootstrap leaves a durable snapshot behind
    assert!(storage.contents().is_some());
}
