//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::{html::error_view, not_found::get_404_not_found_response};

/// The errors that may occur in the application.
///
/// Validation failures are not errors: they travel as
/// [ValidationErrors](crate::ValidationErrors) and never leave the form.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The car API could not be reached at all, e.g. connection refused or
    /// a timeout.
    ///
    /// The message should only be logged for debugging on the server. The
    /// client is shown a general "try again" alert instead.
    #[error("could not reach the car API: {0}")]
    ApiUnreachable(String),

    /// The car API answered with a non-success status code.
    ///
    /// The status is not classified further. Whatever the cause, the user's
    /// changes were not saved and they may retry.
    #[error("the car API responded with status {0}")]
    UpstreamStatus(u16),

    /// The car API answered with a body that could not be decoded as the
    /// expected JSON shape.
    #[error("could not decode the car API response: {0}")]
    InvalidApiResponse(String),

    /// The requested car could not be found.
    ///
    /// Clients should check that the id is correct and that the car has not
    /// been deleted since the list was last refreshed.
    #[error("the requested car could not be found")]
    NotFound,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if let Some(status) = value.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                return Error::NotFound;
            }

            return Error::UpstreamStatus(status.as_u16());
        }

        if value.is_decode() {
            return Error::InvalidApiResponse(value.to_string());
        }

        Error::ApiUnreachable(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // The remaining errors all mean the car API let us down, which
            // the client cannot fix beyond trying again.
            error => {
                tracing::error!("an error occurred while talking to the car API: {error}");
                (
                    axum::http::StatusCode::BAD_GATEWAY,
                    error_view(
                        "Car API Unavailable",
                        "502",
                        "The car catalogue could not be loaded.",
                        "Try again later or check the server logs.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
