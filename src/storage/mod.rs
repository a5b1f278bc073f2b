//! JSON file persistence for the counter
//!
//! State lives in a single human-readable `state.json` holding the two
//! persisted scalars. Saves are atomic (temp file plus rename) so an
//! interrupted write never leaves a half-written state file. A state file
//! that no longer parses is backed up beside itself and replaced with
//! defaults; the tool never refuses to start over a bad state file.

mod error;

pub use error::StorageError;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use directories::ProjectDirs;
use tracing::warn;

use crate::counter::CounterSnapshot;

const STATE_FILE: &str = "state.json";

/// Load-on-construct / save-on-mutate repository for [`CounterSnapshot`].
pub struct CounterStore {
    root: PathBuf,
}

impl CounterStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&root).map_err(|source| StorageError::CreateDir {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Platform data directory for the default store location.
    pub fn default_root() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("io", "krugi", "krugi")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::NoDataDir)
    }

    /// Path of the state file inside this store.
    pub fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILE)
    }

    /// Read persisted state. Missing file or missing keys mean first run
    /// and yield zeros; an unparseable file is backed up and replaced.
    pub fn load(&self) -> Result<CounterSnapshot, StorageError> {
        let state_file = self.state_path();

        if !state_file.exists() {
            return Ok(CounterSnapshot::default());
        }

        match fs::read_to_string(&state_file) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => Ok(state),
                Err(e) => {
                    let backup = self
                        .root
                        .join(format!("{STATE_FILE}.corrupted.{}", Utc::now().timestamp()));
                    if let Err(rename_err) = fs::rename(&state_file, &backup) {
                        warn!(error = %rename_err, "could not back up corrupted state file");
                    } else {
                        eprintln!("⚠️  State file corrupted, backed up to {backup:?}");
                        eprintln!("   Error: {e}");
                    }
                    Ok(CounterSnapshot::default())
                }
            },
            Err(e) => {
                warn!(path = %state_file.display(), error = %e, "cannot read state file, starting fresh");
                Ok(CounterSnapshot::default())
            }
        }
    }

    /// Write state atomically: serialize to a temp file, then rename.
    pub fn save(&self, state: &CounterSnapshot) -> Result<(), StorageError> {
        let temp_file = self.root.join(format!("{STATE_FILE}.tmp"));
        let final_file = self.state_path();

        let json = serde_json::to_string_pretty(state)?;
        write_file(&temp_file, &json)?;
        fs::rename(&temp_file, &final_file).map_err(|source| StorageError::Write {
            path: final_file,
            source,
        })?;

        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), StorageError> {
    fs::write(path, contents).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
