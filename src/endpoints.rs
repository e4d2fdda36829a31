//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page. Loading it resets the dashboard and generates new data.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route for selecting a month, which regenerates the data.
pub const DASHBOARD_MONTH: &str = "/dashboard/month";
/// The route for updating the search text.
pub const DASHBOARD_SEARCH: &str = "/dashboard/search";
/// The route for going to the previous page.
pub const DASHBOARD_PREVIOUS_PAGE: &str = "/dashboard/page/previous";
/// The route for going to the next page.
pub const DASHBOARD_NEXT_PAGE: &str = "/dashboard/page/next";
/// The route for static files.
pub const STATIC: &str = "/static";
