//! Counter state engine
//!
//! Owns the running circle count and the fixed 5556 goal. Every mutation
//! clamps the total into `0..=TARGET_CIRCLES`, writes both persisted fields
//! through to the [`CounterStore`](crate::storage::CounterStore), and then
//! notifies registered change listeners with a snapshot of the new state.
//!
//! There is no hidden global: the binary constructs one [`Counter`] at
//! startup and passes it down. All operations are synchronous; `&mut self`
//! on the mutators is the only locking discipline the engine needs.

pub mod plural;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::storage::{CounterStore, StorageError};
use plural::plural_circles;

/// The fixed completion goal. Not persisted; defined once for the process.
pub const TARGET_CIRCLES: u64 = 5556;

/// The two persisted scalars plus their derived read-only views.
///
/// Field names serialize under the original `totalCircles` /
/// `todayIncrement` keys, with both defaulting to 0 on first run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CounterSnapshot {
    /// Cumulative progress, always within `0..=TARGET_CIRCLES`.
    #[serde(default)]
    pub total_circles: u64,
    /// Amount added by the most recent successful increment. Overwritten,
    /// not accumulated, by each call.
    #[serde(default)]
    pub today_increment: u64,
}

impl CounterSnapshot {
    /// Completion ratio in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        self.total_circles as f64 / TARGET_CIRCLES as f64
    }

    /// Whether the goal has been reached. Under the clamp invariant this
    /// is equivalent to `total_circles == TARGET_CIRCLES`.
    pub fn is_complete(&self) -> bool {
        self.total_circles >= TARGET_CIRCLES
    }

    /// Clipboard-ready summary, e.g. `"25 кругов (1200)"`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({})",
            self.today_increment,
            plural_circles(self.today_increment),
            self.total_circles
        )
    }
}

/// Callback invoked with the new state after every successful mutation.
pub type ChangeListener = Box<dyn FnMut(CounterSnapshot)>;

/// The counter engine: state, write-through persistence, change listeners.
pub struct Counter {
    store: CounterStore,
    state: CounterSnapshot,
    listeners: Vec<ChangeListener>,
}

impl Counter {
    /// Load persisted state from the store, or start from zeros on first run.
    pub fn open(store: CounterStore) -> Result<Self, StorageError> {
        let state = store.load()?;
        debug!(
            total = state.total_circles,
            today = state.today_increment,
            "loaded counter state"
        );
        Ok(Self {
            store,
            state,
            listeners: Vec::new(),
        })
    }

    /// Current state.
    pub fn state(&self) -> &CounterSnapshot {
        &self.state
    }

    /// Register a listener called with a snapshot after each mutation.
    pub fn on_change(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Add `amount` circles, saturating at the target.
    ///
    /// Non-positive amounts are ignored: the call is a no-op, not an error.
    /// A successful call overwrites `today_increment` with `amount`.
    pub fn increment(&mut self, amount: i64) -> Result<(), StorageError> {
        if amount <= 0 {
            debug!(amount, "ignoring non-positive increment");
            return Ok(());
        }
        let amount = amount as u64;
        self.state.today_increment = amount;
        self.state.total_circles = (self.state.total_circles + amount).min(TARGET_CIRCLES);
        self.persist_and_notify()
    }

    /// Set the total to an absolute value, clamped into `0..=TARGET_CIRCLES`.
    /// Leaves `today_increment` untouched.
    pub fn set_count(&mut self, count: i64) -> Result<(), StorageError> {
        self.state.total_circles = count.clamp(0, TARGET_CIRCLES as i64) as u64;
        self.persist_and_notify()
    }

    /// Zero both fields. Unconditional; confirmation is a UI concern.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.state = CounterSnapshot::default();
        self.persist_and_notify()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn summary(&self) -> String {
        self.state.summary()
    }

    fn persist_and_notify(&mut self) -> Result<(), StorageError> {
        self.store.save(&self.state)?;
        trace!(
            total = self.state.total_circles,
            today = self.state.today_increment,
            "counter state persisted"
        );
        let snapshot = self.state;
        for listener in &mut self.listeners {
            listener(snapshot);
        }
        Ok(())
    }
}
