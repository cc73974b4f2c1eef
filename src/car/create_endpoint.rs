//! Defines the endpoint for creating a new car.
use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxResponseTrigger;
use time::OffsetDateTime;

use crate::{
    AppState,
    alert::Alert,
    car::{
        CarApi, CarForm, Mode, ValidationErrors, form_view::car_form_view,
        validation::validate_car_form,
    },
};

/// The htmx event that tells the car table to re-fetch itself.
pub const CARS_CHANGED_EVENT: &str = "cars-changed";

/// The state needed to create a car.
#[derive(Debug, Clone)]
pub struct CreateCarState<A>
where
    A: CarApi,
{
    /// The client for the car API that stores the catalogue.
    pub car_api: A,
}

impl<A> FromRef<AppState<A>> for CreateCarState<A>
where
    A: CarApi,
{
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            car_api: state.car_api.clone(),
        }
    }
}

/// A route handler for creating a new car from the submitted form.
///
/// On success the `cars-changed` event is triggered so the car table
/// refreshes; the form stays open with its values intact. Validation
/// failures re-render the form with inline errors. Car API failures are
/// logged and surfaced as an alert without blocking a retry.
pub async fn create_car_endpoint<A>(
    State(state): State<CreateCarState<A>>,
    Form(form): Form<CarForm>,
) -> Response
where
    A: CarApi,
{
    let today = OffsetDateTime::now_utc().date();

    let record = match validate_car_form(&form, today) {
        Ok(record) => record,
        Err(errors) => {
            return car_form_view(&Mode::Create, &form, &errors, None, today.year())
                .into_response();
        }
    };

    match state.car_api.create_car(&record).await {
        Ok(()) => (
            HxResponseTrigger::normal([CARS_CHANGED_EVENT]),
            car_form_view(
                &Mode::Create,
                &form,
                &ValidationErrors::default(),
                Some(Alert::success(
                    "Car created",
                    "The car was added to the catalogue.",
                )),
                today.year(),
            ),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not create a car via the car API: {error}");
            car_form_view(
                &Mode::Create,
                &form,
                &ValidationErrors::default(),
                Some(Alert::error(
                    "Could not save the car",
                    "The car API could not be reached. Your changes were not saved, \
                    try submitting again.",
                )),
                today.year(),
            )
            .into_response()
        }
    }
}
