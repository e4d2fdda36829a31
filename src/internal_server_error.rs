//! Defines the page to display when a request cannot be completed.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl InternalServerError<'_> {
    pub fn into_html(self, header: &str) -> Html<String> {
        Html(error_view("Error", header, self.description, self.fix).into_string())
    }

    /// Render the error page with a status code other than 500.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html(status_code.as_str())).into_response()
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        self.into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
