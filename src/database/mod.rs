pub mod activities_repo;
pub mod seed;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::ActivityTable;

/// Process-wide activities table. Lives only as long as the process.
#[derive(Clone, Default)]
pub struct ActivitiesDb {
    table: Arc<RwLock<ActivityTable>>,
}

impl ActivitiesDb {
    pub fn new(table: ActivityTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::initial_activities())
    }
}
