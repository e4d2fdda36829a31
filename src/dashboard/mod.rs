//! Dashboard module
//!
//! Provides the page with the month selector, the searchable transactions
//! table, the page counter and the price distribution chart.

mod charts;
mod handlers;
mod state;
mod table;
mod view;

pub use handlers::{
    get_dashboard_page, go_to_next_page, go_to_previous_page, select_month, update_search,
};
pub use state::DashboardState;
