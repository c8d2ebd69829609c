use super::ActivitiesDb;
use crate::models::{Activity, ActivityTable};

pub async fn list_activities(db: &ActivitiesDb) -> ActivityTable {
    db.table.read().await.clone()
}

/// Runs `f` on the named activity while holding the write lock, so a check
/// and the mutation that depends on it happen as one step.
/// Returns `None` if no activity has that name.
pub async fn update_activity<R>(
    db: &ActivitiesDb,
    name: &str,
    f: impl FnOnce(&mut Activity) -> R,
) -> Option<R> {
    let mut table = db.table.write().await;
    table.get_mut(name).map(f)
}
