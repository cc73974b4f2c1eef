//! The app's route URIs.
//!
//! For endpoints that take a car id parameter, e.g. '/cars/{car_id}/edit',
//! use [format_endpoint].

/// The root route which redirects to the car list.
pub const ROOT: &str = "/";
/// The page listing every car in the catalogue.
pub const CARS_VIEW: &str = "/cars";
/// The car table fragment, re-fetched when the catalogue changes.
pub const CAR_TABLE: &str = "/cars/table";
/// The form for creating a new car.
pub const NEW_CAR_VIEW: &str = "/cars/new";
/// The form for editing an existing car.
pub const EDIT_CAR_VIEW: &str = "/cars/{car_id}/edit";

/// The route to create a car.
pub const CARS_API: &str = "/api/cars";
/// The route to update a car.
pub const PUT_CAR: &str = "/api/cars/{car_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/cars/{car_id}/edit', '{car_id}' is the
/// parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
