use chrono::Utc;

use crate::io::storage::{Storage, StorageError};
use crate::io::snapshot;
use crate::model::state::AppState;
use crate::ops::{self, Action, ActionError};

/// Millisecond clock injected into the store, so timestamp invariants are
/// deterministic under test.
pub trait Clock {
    fn now_ms(&mut self) -> i64;
}

/// Wall-clock epoch milliseconds.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&mut self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Strictly increasing fake clock: one millisecond per reading. For tests
/// and deterministic demos.
#[derive(Debug)]
pub struct TickClock {
    next: i64,
}

impl TickClock {
    pub fn starting_at(next: i64) -> Self {
        TickClock { next }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        TickClock::starting_at(1)
    }
}

impl Clock for TickClock {
    fn now_ms(&mut self) -> i64 {
        let now = self.next;
        self.next += 1;
        now
    }
}

/// Error surfaced by a dispatch: either the action itself failed (an
/// invariant violation by the caller) or the snapshot write did.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handed out by `begin_bootstrap`; a completion carrying a stale ticket
/// is discarded, so a re-triggered bootstrap cannot double-seed.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapTicket {
    pub(crate) generation: u64,
    /// True when the merged state came up with no tasks and the caller
    /// should go fetch seed data.
    pub needs_seed: bool,
}

/// The state container: owns the app state, the durable storage, and the
/// clock. An explicit instance — construct as many as you like (tests run
/// several side by side); there is no global.
pub struct Store {
    state: AppState,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    bootstrap_generation: u64,
}

impl Store {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Store::with_clock(storage, Box::new(SystemClock))
    }

    pub fn with_clock(storage: Box<dyn Storage>, clock: Box<dyn Clock>) -> Self {
        Store {
            state: AppState::default(),
            storage,
            clock,
            bootstrap_generation: 0,
        }
    }

    /// The current state, for selectors. All writes go through `dispatch`.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one action and persist the result.
    ///
    /// The reducer runs on a working copy and the snapshot is written
    /// before the copy is committed, so a failed save leaves the
    /// observable state exactly as it was — from the caller's side the
    /// transition and the write are one atomic step.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let now = self.clock.now_ms();
        let mut next = self.state.clone();
        ops::apply(&mut next, action, now)?;
        snapshot::save(self.storage.as_mut(), &next)?;
        self.state = next;
        Ok(())
    }

    /// Phase one of bootstrap: load and merge the stored snapshot, and say
    /// whether seed data is wanted. Invalidates any earlier ticket.
    pub fn begin_bootstrap(&mut self) -> BootstrapTicket {
        self.bootstrap_generation += 1;
        let stored = snapshot::load(self.storage.as_ref());
        self.state = snapshot::merge(AppState::default(), stored);
        log::debug!(
            "bootstrap {} loaded {} stored tasks",
            self.bootstrap_generation,
            self.state.todo_items.len()
        );
        BootstrapTicket {
            generation: self.bootstrap_generation,
            needs_seed: self.state.todo_items.is_empty(),
        }
    }

    /// Phase two: commit the bootstrap. Returns `Ok(false)` without
    /// touching anything when the ticket is stale. `seed` runs only if the
    /// collection is still empty.
    pub fn complete_bootstrap(
        &mut self,
        ticket: BootstrapTicket,
        seed: impl FnOnce(&mut AppState, &mut dyn Clock),
    ) -> Result<bool, StoreError> {
        if ticket.generation != self.bootstrap_generation {
            log::debug!("discarding stale bootstrap completion {}", ticket.generation);
            return Ok(false);
        }
        if self.state.todo_items.is_empty() {
            seed(&mut self.state, self.clock.as_mut());
        }
        self.state.is_app_ready = true;
        snapshot::save(self.storage.as_mut(), &self.state)?;
        Ok(true)
    }
}
