use skillmatch_db::PgStaffingStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: skillmatch_db::DbPool,
}

impl AppState {
    /// Storage collaborator for the matching engine, sharing this state's pool.
    pub fn staffing_store(&self) -> PgStaffingStore {
        PgStaffingStore::new(self.pool.clone())
    }
}
