//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::{
        get_dashboard_page, go_to_next_page, go_to_previous_page, select_month, update_search,
    },
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_MONTH, post(select_month))
        .route(endpoints::DASHBOARD_SEARCH, post(update_search))
        .route(endpoints::DASHBOARD_PREVIOUS_PAGE, post(go_to_previous_page))
        .route(endpoints::DASHBOARD_NEXT_PAGE, post(go_to_next_page))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use axum_test::TestServer;

    use crate::{AppState, build_router, endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server = TestServer::new(build_router(AppState::new(Some(1))));

        let response = server.get("/does/not/exist").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn dashboard_routes_reject_wrong_method() {
        let server = TestServer::new(build_router(AppState::new(Some(1))));

        let response = server.get(endpoints::DASHBOARD_NEXT_PAGE).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
