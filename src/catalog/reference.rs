use std::path::Path;
use std::sync::OnceLock;

use tracing::info;

use crate::catalog::persistence::load_workout_references;
use crate::error::Result;
use crate::planner::workout::WorkoutReferenceSet;

/// Process-wide workout reference table, immutable once loaded.
static REFERENCE: OnceLock<WorkoutReferenceSet> = OnceLock::new();

/// Load the reference table on first use and return the shared copy.
///
/// Only the first successful call reads `path`; later calls return the cached
/// table whatever path they pass. A failed load leaves the cell empty.
pub fn global<P: AsRef<Path>>(path: P) -> Result<&'static WorkoutReferenceSet> {
    if let Some(set) = REFERENCE.get() {
        return Ok(set);
    }

    let path = path.as_ref();
    let set = WorkoutReferenceSet::new(load_workout_references(path)?)?;
    info!(rows = set.len(), path = %path.display(), "workout reference table loaded");

    Ok(REFERENCE.get_or_init(|| set))
}

/// The shared table, if it has been loaded.
pub fn get() -> Option<&'static WorkoutReferenceSet> {
    REFERENCE.get()
}
