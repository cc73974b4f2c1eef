//! Defines the endpoint for updating an existing car.
use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxResponseTrigger;
use time::OffsetDateTime;

use crate::{
    AppState,
    alert::Alert,
    car::{
        CarApi, CarForm, CarId, Mode, ValidationErrors, create_endpoint::CARS_CHANGED_EVENT,
        form_view::car_form_view, validation::validate_car_form,
    },
};

/// The state needed to update a car.
#[derive(Debug, Clone)]
pub struct UpdateCarState<A>
where
    A: CarApi,
{
    /// The client for the car API that stores the catalogue.
    pub car_api: A,
}

impl<A> FromRef<AppState<A>> for UpdateCarState<A>
where
    A: CarApi,
{
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            car_api: state.car_api.clone(),
        }
    }
}

/// A route handler for updating the car in the path from the submitted form.
///
/// Behaves like the create endpoint except the validated record is dispatched
/// to the car whose id was captured when the form was opened.
pub async fn update_car_endpoint<A>(
    Path(car_id): Path<CarId>,
    State(state): State<UpdateCarState<A>>,
    Form(form): Form<CarForm>,
) -> Response
where
    A: CarApi,
{
    let today = OffsetDateTime::now_utc().date();
    let mode = Mode::Edit(car_id.clone());

    let record = match validate_car_form(&form, today) {
        Ok(record) => record,
        Err(errors) => {
            return car_form_view(&mode, &form, &errors, None, today.year()).into_response();
        }
    };

    match state.car_api.update_car(&car_id, &record).await {
        Ok(()) => (
            HxResponseTrigger::normal([CARS_CHANGED_EVENT]),
            car_form_view(
                &mode,
                &form,
                &ValidationErrors::default(),
                Some(Alert::success("Car updated", "The changes were saved.")),
                today.year(),
            ),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not update car {car_id} via the car API: {error}");
            car_form_view(
                &mode,
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
