//! # krugi
//!
//! A small CLI tool that tracks a running count of practice circles toward a
//! fixed goal of 5556, persists the count between invocations, and copies a
//! formatted Russian summary to the clipboard.
//!
//! ## Usage
//!
//! ```bash
//! krugi add 108        # add circles done today
//! krugi                # show count, target and percentage
//! krugi copy           # put "108 кругов (1308)" on the clipboard
//! krugi set 1200       # absolute correction, clamped to 0..=5556
//! krugi reset          # back to zero (asks for confirmation)
//! ```
//!
//! ## Modules
//!
//! - `counter` - The state engine: clamped accumulation, derived progress
//!   views, Russian pluralization, change notification
//! - `storage` - JSON state file with atomic writes and corruption recovery
//! - `clipboard` - Best-effort system clipboard access

pub mod clipboard;
pub mod counter;
pub mod storage;

pub use counter::{Counter, CounterSnapshot, TARGET_CIRCLES};
pub use storage::{CounterStore, StorageError};
