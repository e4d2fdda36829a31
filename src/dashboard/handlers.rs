//! Dashboard HTTP handlers.
//!
//! Each handler applies one transition to the shared [DashboardState] and
//! renders the part of the page that changed.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    AppState, Error,
    dashboard::{
        state::DashboardState,
        table::transactions_table,
        view::{dashboard_view, pagination_controls, regenerated_data_partial},
    },
    month::parse_month,
};

/// The state needed by the dashboard handlers.
#[derive(Debug, Clone)]
pub struct SharedDashboard {
    /// The dashboard shown to the user.
    pub dashboard: Arc<Mutex<DashboardState>>,
}

impl FromRef<AppState> for SharedDashboard {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dashboard: state.dashboard.clone(),
        }
    }
}

impl SharedDashboard {
    fn lock(&self) -> Result<MutexGuard<'_, DashboardState>, Error> {
        self.dashboard
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire dashboard lock: {error}"))
            .map_err(|_| Error::DashboardLockError)
    }
}

/// Form data for selecting a month.
#[derive(Debug, Deserialize)]
pub struct MonthForm {
    /// The English name of the month, e.g. "March".
    pub month: String,
}

/// Form data for the search box.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// The text typed into the search box.
    #[serde(default)]
    pub search: String,
}

/// Display the dashboard page.
///
/// Loading the page resets the month, search text and page number and
/// generates new data.
pub async fn get_dashboard_page(State(state): State<SharedDashboard>) -> Result<Response, Error> {
    let mut dashboard = state.lock()?;
    dashboard.mount();

    Ok(dashboard_view(&dashboard).into_response())
}

/// Select a month and return the regenerated table and chart.
pub async fn select_month(
    State(state): State<SharedDashboard>,
    Form(form): Form<MonthForm>,
) -> Response {
    let month = match parse_month(&form.month) {
        Ok(month) => month,
        Err(error) => {
            tracing::debug!("rejected month selection: {error}");
            return error.into_alert_response();
        }
    };

    let mut dashboard = match state.lock() {
        Ok(dashboard) => dashboard,
        Err(error) => return error.into_alert_response(),
    };

    dashboard.set_month(month);

    regenerated_data_partial(&dashboard).into_response()
}

/// Update the search text and return the filtered table.
pub async fn update_search(
    State(state): State<SharedDashboard>,
    Form(form): Form<SearchForm>,
) -> Response {
    let mut dashboard = match state.lock() {
        Ok(dashboard) => dashboard,
        Err(error) => return error.into_alert_response(),
    };

    dashboard.set_search_text(form.search);
    tracing::debug!(
        "search {:?} matched {} of {} transactions",
        dashboard.search_text(),
        dashboard.visible_transactions().len(),
        dashboard.transactions().len()
    );

    transactions_table(dashboard.visible_transactions()).into_response()
}

/// Go to the previous page and return the pagination controls.
pub async fn go_to_previous_page(State(state): State<SharedDashboard>) -> Response {
    let mut dashboard = match state.lock() {
        Ok(dashboard) => dashboard,
        Err(error) => return error.into_alert_response(),
    };

    dashboard.previous_page();

    pagination_controls(dashboard.page()).into_response()
}

/// Go to the next page and return the pagination controls.
pub async fn go_to_next_page(State(state): State<SharedDashboard>) -> Response {
    let mut dashboard = match state.lock() {
        Ok(dashboard) => dashboard,
        Err(error) => return error.into_alert_response(),
    };

    dashboard.next_page();

    pagination_controls(dashboard.page()).into_response()
}
