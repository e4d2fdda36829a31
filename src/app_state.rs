//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::dashboard::DashboardState;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dashboard shown to the user.
    ///
    /// There is a single dashboard shared by every request.
    pub dashboard: Arc<Mutex<DashboardState>>,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `seed` fixes the random number generator used for the mock data so
    /// that runs are reproducible. If `seed` is `None`, the generator is
    /// seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(DashboardState::new(seed))),
        }
    }
}
