//! The car catalogue: the domain types, the form and its validation, the
//! pages for listing and editing cars, and the client for the car API that
//! stores them.

mod api;
mod cars_page;
mod core;
mod create_endpoint;
mod create_page;
mod edit_endpoint;
mod edit_page;
mod form;
mod form_view;
mod validation;

pub use api::{CarApi, RestCarApi};
pub use cars_page::{get_car_table, get_cars_page};
pub use core::{Car, CarId, CarRecord, TransmissionType, VehicleSize};
pub use create_endpoint::create_car_endpoint;
pub use create_page::get_new_car_page;
pub use edit_endpoint::update_car_endpoint;
pub use edit_page::get_edit_car_page;
pub use form::{CarForm, Mode};
pub use validation::{ValidationErrors, validate_car_form};
