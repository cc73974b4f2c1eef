//! Defines the route handler that opens the create car form.
use axum::response::{IntoResponse, Response};
use time::OffsetDateTime;

use crate::car::{CarForm, Mode, ValidationErrors, form_view::car_modal};

/// Render the modal with an empty car form.
///
/// Every open re-seeds the form from the empty template and clears any
/// errors from a previous attempt.
pub async fn get_new_car_page() -> Response {
    let max_year = OffsetDateTime::now_utc().year();

    car_modal(
        &Mode::Create,
        &CarForm::default(),
        &ValidationErrors::default(),
        None,
        max_year,
    )
    .into_response()
}
