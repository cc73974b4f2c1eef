//! The client for the car API that stores the catalogue.
//!
//! [CarApi] is the seam between the endpoints and the network: handlers are
//! generic over it, and tests swap in a recording fake.
use std::future::Future;

use crate::{
    Error,
    car::{Car, CarRecord},
};

/// Handles the retrieval and persistence of cars.
///
/// All persistence lives behind this trait so the outcome of every call is an
/// explicit [Result] rather than a fire-and-forget side effect.
pub trait CarApi: Clone + Send + Sync + 'static {
    /// Fetch every car in the catalogue.
    fn list_cars(&self) -> impl Future<Output = Result<Vec<Car>, Error>> + Send;

    /// Fetch a single car by its id.
    fn get_car(&self, car_id: &str) -> impl Future<Output = Result<Car, Error>> + Send;

    /// Store `record` as a new car. The car API assigns the id.
    fn create_car(&self, record: &CarRecord) -> impl Future<Output = Result<(), Error>> + Send;

    /// Overwrite the car with id `car_id` with `record`.
    fn update_car(
        &self,
        car_id: &str,
        record: &CarRecord,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// The [CarApi] implementation that talks to the real car API over HTTP.
#[derive(Debug, Clone)]
pub struct RestCarApi {
    client: reqwest::Client,
    base_url: String,
}

impl RestCarApi {
    /// Create a client for the car API at `base_url`,
    /// e.g. "http://localhost:5000/api".
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CarApi for RestCarApi {
    async fn list_cars(&self) -> Result<Vec<Car>, Error> {
        let cars = self
            .client
            .get(self.url("/cars"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(cars)
    }

    async fn get_car(&self, car_id: &str) -> Result<Car, Error> {
        let car = self
            .client
            .get(self.url(&format!("/cars/{car_id}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(car)
    }

    async fn create_car(&self, record: &CarRecord) -> Result<(), Error> {
        self.client
            .post(self.url("/cars"))
            .json(record)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn update_car(&self, car_id: &str, record: &CarRecord) -> Result<(), Error> {
        self.client
            .put(self.url(&format!("/cars/{car_id}")))
            .json(record)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
