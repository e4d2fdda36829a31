//! Alert messages that htmx swaps into the page's alert container.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// An error message with a short headline and optional details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let Alert { message, details } = self;

        html!(
            div class="alert alert-error" role="alert"
            {
                p class="alert-message" { (message) }

                @if !details.is_empty() {
                    p class="alert-details" { (details) }
                }

                button
                    type="button"
                    class="alert-dismiss"
                    onclick="this.parentElement.remove()"
                {
                    "Dismiss"
                }
            }
        )
    }

    /// Render the alert with `status_code`.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}
