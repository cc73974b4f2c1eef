//! Implements a struct that holds the state of the server.
use crate::car::CarApi;

/// The state of the server.
///
/// Generic over the [CarApi] implementation so tests can swap the real HTTP
/// client for a recording fake.
#[derive(Debug, Clone)]
pub struct AppState<A>
where
    A: CarApi,
{
    /// The client for the car API that stores the catalogue.
    pub car_api: A,
}

impl<A> AppState<A>
where
    A: CarApi,
{
    /// Create a new [AppState] around a car API client.
    pub fn new(car_api: A) -> Self {
        Self { car_api }
    }
}
