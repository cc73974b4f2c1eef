//! The raw state of the car form.
//!
//! Field values stay as the strings the browser submitted until validation
//! coerces them, so an invalid year or price survives a re-render unchanged.
use serde::{Deserialize, Serialize};

use crate::car::{Car, CarId};

/// Whether the form creates a new car or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Submitting creates a new car.
    Create,
    /// Submitting overwrites the car with the given id.
    Edit(CarId),
}

/// The raw values of the car form's seven fields.
///
/// Unknown form fields are discarded during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarForm {
    /// The manufacturer as typed.
    #[serde(default)]
    pub make: String,
    /// The model name as typed.
    #[serde(default)]
    pub model: String,
    /// The model year as typed, not yet coerced to an integer.
    #[serde(default)]
    pub year: String,
    /// The selected transmission type's wire value, or empty.
    #[serde(default)]
    pub transmission_type: String,
    /// The price as typed, not yet coerced to an integer.
    #[serde(default)]
    pub msrp: String,
    /// The selected vehicle size's wire value, or empty.
    #[serde(default)]
    pub vehicle_size: String,
    /// The body style as typed.
    #[serde(default)]
    pub vehicle_style: String,
}

impl Default for CarForm {
    /// The empty template seeded into a freshly opened create form.
    fn default() -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: String::new(),
            transmission_type: String::new(),
            msrp: "0".to_owned(),
            vehicle_size: String::new(),
            vehicle_style: String::new(),
        }
    }
}

impl From<&Car> for CarForm {
    /// Seed the form from a stored car when the edit form opens.
    fn from(car: &Car) -> Self {
        Self {
            make: car.record.make.clone(),
            model: car.record.model.clone(),
            year: car.record.year.to_string(),
            transmission_type: car.record.transmission_type.to_string(),
            msrp: car.record.msrp.to_string(),
            vehicle_size: car.record.vehicle_size.to_string(),
            vehicle_style: car.record.vehicle_style.clone(),
        }
    }
}
