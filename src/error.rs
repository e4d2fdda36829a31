//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The month in a form is not one of the months in the month selector.
    #[error("\"{0}\" is not a valid month")]
    InvalidMonth(String),

    /// Could not acquire the lock on the dashboard state.
    ///
    /// This happens if another request panicked while holding the lock.
    #[error("could not acquire the dashboard lock")]
    DashboardLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidMonth(month) => InternalServerError {
                description: "Invalid Month",
                fix: &format!("\"{month}\" is not a month. Go back and pick a month from the list."),
            }
            .into_response_with_status(StatusCode::BAD_REQUEST),
            Error::DashboardLockError => InternalServerError::default().into_response(),
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidMonth(month) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid month".to_owned(),
                    details: format!("\"{month}\" is not a month. Pick a month from the list."),
                },
            ),
            Error::DashboardLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Something went wrong".to_owned(),
                    details: "Reload the page or check the server logs.".to_owned(),
                },
            ),
        };

        alert.into_response_with_status(status_code)
    }
}
