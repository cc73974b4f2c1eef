use std::sync::{Arc, Mutex};

use crate::{
    Error,
    car::{Car, CarApi, CarId, CarRecord},
};

/// An in-memory [CarApi] that records every write it receives.
///
/// Construct it with [FakeCarApi::failing_with] to make every call return
/// the given error instead.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeCarApi {
    cars: Arc<Mutex<Vec<Car>>>,
    created: Arc<Mutex<Vec<CarRecord>>>,
    updated: Arc<Mutex<Vec<(CarId, CarRecord)>>>,
    fail_with: Arc<Mutex<Option<Error>>>,
}

impl FakeCarApi {
    pub(crate) fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: Arc::new(Mutex::new(cars)),
            ..Default::default()
        }
    }

    pub(crate) fn failing_with(error: Error) -> Self {
        Self {
            fail_with: Arc::new(Mutex::new(Some(error))),
            ..Default::default()
        }
    }

    /// The records received by [CarApi::create_car], in call order.
    pub(crate) fn created(&self) -> Vec<CarRecord> {
        self.created.lock().unwrap().clone()
    }

    /// The id and record pairs received by [CarApi::update_car], in call order.
    pub(crate) fn updated(&self) -> Vec<(CarId, CarRecord)> {
        self.updated.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), Error> {
        match self.fail_with.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl CarApi for FakeCarApi {
    async fn list_cars(&self) -> Result<Vec<Car>, Error> {
        self.check_failure()?;

        Ok(self.cars.lock().unwrap().clone())
    }

    async fn get_car(&self, car_id: &str) -> Result<Car, Error> {
        self.check_failure()?;

        self.cars
            .lock()
            .unwrap()
            .iter()
            .find(|car| car.id == car_id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    async fn create_car(&self, record: &CarRecord) -> Result<(), Error> {
        self.check_failure()?;

        self.created.lock().unwrap().push(record.clone());

        Ok(())
    }

    async fn update_car(&self, car_id: &str, record: &CarRecord) -> Result<(), Error> {
        self.check_failure()?;

        self.updated
            .lock()
            .unwrap()
            .push((car_id.to_owned(), record.clone()));

        Ok(())
    }
}
