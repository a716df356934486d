//! Process-local database: the collections plus the handles used to reach them.

pub mod write_actor;

use std::sync::{Arc, RwLock};

use goalplan_core::assets::Asset;
use goalplan_core::goals::Goal;
use goalplan_core::Result;

use crate::errors::StorageError;

pub use write_actor::{spawn_writer, WriteHandle};

/// All stored entities. Ids come from monotonically increasing counters and
/// are never reused, even after deletes.
#[derive(Debug, Default)]
pub struct MemoryDb {
    pub(crate) goals: Vec<Goal>,
    pub(crate) assets: Vec<Asset>,
    last_goal_id: i64,
    last_asset_id: i64,
}

impl MemoryDb {
    pub(crate) fn next_goal_id(&mut self) -> i64 {
        self.last_goal_id += 1;
        self.last_goal_id
    }

    pub(crate) fn next_asset_id(&mut self) -> i64 {
        self.last_asset_id += 1;
        self.last_asset_id
    }
}

/// Shared handle to the in-memory database.
pub type DbHandle = Arc<RwLock<MemoryDb>>;

/// Creates an empty database.
pub fn init() -> DbHandle {
    Arc::new(RwLock::new(MemoryDb::default()))
}

/// Runs a read-only query under a shared lock.
pub fn read<T>(db: &DbHandle, query: impl FnOnce(&MemoryDb) -> Result<T>) -> Result<T> {
    let guard = db.read().map_err(StorageError::from)?;
    query(&guard)
}
