use roster_core::Roster;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
}

impl AppState {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }
}
