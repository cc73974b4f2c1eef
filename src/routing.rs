//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};

use crate::{
    AppState,
    car::{
        CarApi, create_car_endpoint, get_car_table, get_cars_page, get_edit_car_page,
        get_new_car_page, update_car_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router<A>(state: AppState<A>) -> Router
where
    A: CarApi,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::CARS_VIEW, get(get_cars_page::<A>))
        .route(endpoints::CAR_TABLE, get(get_car_table::<A>))
        .route(endpoints::NEW_CAR_VIEW, get(get_new_car_page))
        .route(endpoints::EDIT_CAR_VIEW, get(get_edit_car_page::<A>))
        .route(endpoints::CARS_API, post(create_car_endpoint::<A>))
        .route(endpoints::PUT_CAR, put(update_car_endpoint::<A>))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the car list page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::CARS_VIEW)
}
