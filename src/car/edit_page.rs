//! Defines the route handler that opens the edit car form.
use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    car::{
        CarApi, CarForm, CarId, Mode, ValidationErrors,
        form_view::{car_modal, car_modal_error},
    },
};

/// The state needed to open the edit car form.
#[derive(Debug, Clone)]
pub struct EditCarPageState<A>
where
    A: CarApi,
{
    /// The client for the car API that stores the catalogue.
    pub car_api: A,
}

impl<A> FromRef<AppState<A>> for EditCarPageState<A>
where
    A: CarApi,
{
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            car_api: state.car_api.clone(),
        }
    }
}

/// Render the modal with the form seeded from the selected car.
///
/// The form is re-seeded from the authoritative record on every open, so
/// switching between cars always starts from their stored values with no
/// leftover errors.
pub async fn get_edit_car_page<A>(
    Path(car_id): Path<CarId>,
    State(state): State<EditCarPageState<A>>,
) -> Response
where
    A: CarApi,
{
    let max_year = OffsetDateTime::now_utc().year();

    match state.car_api.get_car(&car_id).await {
        Ok(car) => car_modal(
            &Mode::Edit(car.id.clone()),
            &CarForm::from(&car),
            &ValidationErrors::default(),
            None,
            max_year,
        )
        .into_response(),
        Err(Error::NotFound) => car_modal_error(
            "Car not found",
            "The car may have been deleted. Close this dialog and refresh the list.",
        )
        .into_response(),
        Err(error) => {
            tracing::error!("could not fetch car {car_id} from the car API: {error}");
            car_modal_error(
                "Could not load the car",
                "The car API could not be reached. Close this dialog and try again.",
            )
            .into_response()
        }
    }
}

#[cfg(test)]
mod get_edit_car_page_tests {
    use axum::extract::{Path, State};
    use scraper::Selector;

    use crate::{
        Error,
        car::{Car, core::test_record},
        test_utils::{
            FakeCarApi, assert_form_input_with_value, assert_hx_endpoint, assert_status_ok,
            must_get_form, parse_html_fragment,
        },
    };

    use super::{EditCarPageState, get_edit_car_page};

    fn get_test_state(cars: Vec<Car>) -> EditCarPageState<FakeCarApi> {
        EditCarPageState {
            car_api: FakeCarApi::with_cars(cars),
        }
    }

    #[tokio::test]
    async fn seeds_the_form_from_the_selected_car() {
        let car = Car {
            id: "42".to_owned(),
            record: test_record(),
        };
        let state = get_test_state(vec![car]);

        let response = get_edit_car_page(Path("42".to_owned()), State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/api/cars/42", "hx-put");
        assert_form_input_with_value(&form, "make", "text", "Toyota");
        assert_form_input_with_value(&form, "year", "number", "2012");
        assert_form_input_with_value(&form, "msrp", "number", "18500");
    }

    #[tokio::test]
    async fn reopening_the_form_re_seeds_identical_values() {
        let car = Car {
            id: "42".to_owned(),
            record: test_record(),
        };
        let state = get_test_state(vec![car]);

        let first = get_edit_car_page(Path("42".to_owned()), State(state.clone())).await;
        let second = get_edit_car_page(Path("42".to_owned()), State(state)).await;

        let first_body = parse_html_fragment(first).await.html();
        let second_body = parse_html_fragment(second).await.html();

        assert_eq!(first_body, second_body);
    }

    #[tokio::test]
    async fn missing_car_shows_a_not_found_message() {
        let state = get_test_state(vec![]);

        let response = get_edit_car_page(Path("missing".to_owned()), State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;

        let alert_selector = Selector::parse("div[role=alert] p").unwrap();
        let message = html
            .select(&alert_selector)
            .next()
            .expect("want an alert message")
            .text()
            .collect::<String>();
        assert_eq!(message, "Car not found");
    }

    #[tokio::test]
    async fn api_failure_shows_a_transport_error_message() {
        let state = EditCarPageState {
            car_api: FakeCarApi::failing_with(Error::ApiUnreachable("timed out".to_owned())),
        };

        let response = get_edit_car_page(Path("42".to_owned()), State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;

        let alert_selector = Selector::parse("div[role=alert] p").unwrap();
        let message = html
            .select(&alert_selector)
            .next()
            .expect("want an alert message")
            .text()
            .collect::<String>();
        assert_eq!(message, "Could not load the car");
    }
}
