//! The car list page and the table fragment it refreshes.
use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    car::{Car, CarApi},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_msrp,
    },
};

/// The state needed to render the car list.
#[derive(Debug, Clone)]
pub struct CarsPageState<A>
where
    A: CarApi,
{
    /// The client for the car API that stores the catalogue.
    pub car_api: A,
}

impl<A> FromRef<AppState<A>> for CarsPageState<A>
where
    A: CarApi,
{
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            car_api: state.car_api.clone(),
        }
    }
}

/// Render the page listing every car in the catalogue.
///
/// The table re-fetches itself whenever a `cars-changed` event reaches the
/// body, which the create and update endpoints trigger after a successful
/// submission.
///
/// # Errors
/// Returns an [Error] rendered as a full error page when the car list could
/// not be fetched from the car API.
pub async fn get_cars_page<A>(State(state): State<CarsPageState<A>>) -> Result<Response, Error>
where
    A: CarApi,
{
    let cars = state.car_api.list_cars().await?;

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl"
            {
                div class="flex items-center justify-between mb-4"
                {
                    h1 class="text-2xl font-bold" { "Cars" }

                    button
                        hx-get=(endpoints::NEW_CAR_VIEW)
                        hx-target="#car-modal"
                        tabindex="0"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Add Car"
                    }
                }

                div
                    id="car-table"
                    hx-get=(endpoints::CAR_TABLE)
                    hx-trigger="cars-changed from:body"
                {
                    (car_table(&cars))
                }

                // The create/edit modal is loaded into this container.
                div id="car-modal" {}
            }
        }
    };

    Ok(base("Cars", &content).into_response())
}

/// Render the car table fragment for htmx refreshes.
///
/// A fetch failure renders an inline message instead of an error page, so a
/// failed refresh does not wipe out the rest of the page.
pub async fn get_car_table<A>(State(state): State<CarsPageState<A>>) -> Response
where
    A: CarApi,
{
    match state.car_api.list_cars().await {
        Ok(cars) => car_table(&cars).into_response(),
        Err(error) => {
            tracing::error!("could not fetch the car list from the car API: {error}");
            car_table_unavailable().into_response()
        }
    }
}

fn car_table(cars: &[Car]) -> Markup {
    html! {
        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th class=(TABLE_CELL_STYLE) { "Make" }
                    th class=(TABLE_CELL_STYLE) { "Model" }
                    th class=(TABLE_CELL_STYLE) { "Year" }
                    th class=(TABLE_CELL_STYLE) { "Transmission" }
                    th class=(TABLE_CELL_STYLE) { "Size" }
                    th class=(TABLE_CELL_STYLE) { "Style" }
                    th class=(TABLE_CELL_STYLE) { "MSRP" }
                    th class=(TABLE_CELL_STYLE) { "" }
                }
            }

            tbody
            {
                @if cars.is_empty()
                {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE) colspan="8" { "No cars yet. Add the first one." }
                    }
                }

                @for car in cars
                {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE) { (car.record.make) }
                        td class=(TABLE_CELL_STYLE) { (car.record.model) }
                        td class=(TABLE_CELL_STYLE) { (car.record.year) }
                        td class=(TABLE_CELL_STYLE) { (car.record.transmission_type) }
                        td class=(TABLE_CELL_STYLE) { (car.record.vehicle_size) }
                        td class=(TABLE_CELL_STYLE) { (car.record.vehicle_style) }
                        td class=(TABLE_CELL_STYLE) { (format_msrp(car.record.msrp)) }
                        td class=(TABLE_CELL_STYLE)
                        {
                            button
                                hx-get=(endpoints::format_endpoint(endpoints::EDIT_CAR_VIEW, &car.id))
                                hx-target="#car-modal"
                                tabindex="0"
                                class=(LINK_STYLE)
                            {
                                "Edit"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn car_table_unavailable() -> Markup {
    html! {
        p class="text-red-500 text-base"
        {
            "The car list could not be loaded. Try again later or check the server logs."
        }
    }
}

#[cfg(test)]
mod cars_page_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::{
        Error,
        car::{Car, core::test_record},
        endpoints,
        test_utils::{FakeCarApi, assert_status_ok, parse_html_document, parse_html_fragment},
    };

    use super::{CarsPageState, get_car_table, get_cars_page};

    fn get_test_state(cars: Vec<Car>) -> CarsPageState<FakeCarApi> {
        CarsPageState {
            car_api: FakeCarApi::with_cars(cars),
        }
    }

    fn test_car(id: &str) -> Car {
        Car {
            id: id.to_owned(),
            record: test_record(),
        }
    }

    #[tokio::test]
    async fn lists_every_car_with_an_edit_button() {
        let state = get_test_state(vec![test_car("1"), test_car("2")]);

        let response = get_cars_page(State(state)).await.into_response();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;

        let row_selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(html.select(&row_selector).count(), 2);

        let edit_selector = Selector::parse("tbody button[hx-get]").unwrap();
        let edit_targets = html
            .select(&edit_selector)
            .filter_map(|button| button.value().attr("hx-get"))
            .collect::<Vec<_>>();
        assert_eq!(edit_targets, vec!["/cars/1/edit", "/cars/2/edit"]);
    }

    #[tokio::test]
    async fn table_refreshes_on_cars_changed() {
        let state = get_test_state(vec![]);

        let response = get_cars_page(State(state)).await.into_response();
        let html = parse_html_document(response).await;

        let table_selector = Selector::parse("div#car-table").unwrap();
        let table = html
            .select(&table_selector)
            .next()
            .expect("want a #car-table container");

        assert_eq!(table.value().attr("hx-get"), Some(endpoints::CAR_TABLE));
        assert_eq!(
            table.value().attr("hx-trigger"),
            Some("cars-changed from:body")
        );
    }

    #[tokio::test]
    async fn page_has_a_modal_container_and_add_button() {
        let state = get_test_state(vec![]);

        let response = get_cars_page(State(state)).await.into_response();
        let html = parse_html_document(response).await;

        let modal_selector = Selector::parse("div#car-modal").unwrap();
        assert!(
            html.select(&modal_selector).next().is_some(),
            "want a #car-modal container"
        );

        let add_selector = Selector::parse("button[hx-get='/cars/new']").unwrap();
        let add_button = html
            .select(&add_selector)
            .next()
            .expect("want an add car button");
        assert_eq!(add_button.value().attr("hx-target"), Some("#car-modal"));
    }

    #[tokio::test]
    async fn table_fragment_lists_cars() {
        let state = get_test_state(vec![test_car("1")]);

        let response = get_car_table(State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;

        let cell_selector = Selector::parse("td").unwrap();
        let cells = html
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>())
            .collect::<Vec<_>>();
        assert!(
            cells.contains(&"$18,500".to_owned()),
            "want a formatted MSRP cell, got {cells:?}"
        );
    }

    #[tokio::test]
    async fn page_load_failure_renders_the_error_page() {
        let state = CarsPageState {
            car_api: FakeCarApi::failing_with(Error::ApiUnreachable(
                "connection refused".to_owned(),
            )),
        };

        let response = get_cars_page(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let html = parse_html_document(response).await;
        let h1_selector = Selector::parse("h1").unwrap();
        let heading = html
            .select(&h1_selector)
            .next()
            .expect("want an h1 on the error page")
            .text()
            .collect::<String>();
        assert_eq!(heading.trim(), "502");
    }

    #[tokio::test]
    async fn table_refresh_failure_shows_an_inline_message() {
        let state = CarsPageState {
            car_api: FakeCarApi::failing_with(Error::ApiUnreachable(
                "connection refused".to_owned(),
            )),
        };

        let response = get_car_table(State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;

        let error_selector = Selector::parse("p.text-red-500").unwrap();
        let message = html
            .select(&error_selector)
            .next()
            .expect("want an error message")
            .text()
            .collect::<String>();
        assert!(
            message.contains("could not be loaded"),
            "got message {message:?}"
        );
    }
}
