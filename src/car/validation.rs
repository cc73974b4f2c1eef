//! Validation of the car form.
//!
//! Every field is checked independently and all failures are reported
//! together, so the user sees the full picture after one submit.
use time::Date;

use crate::car::{CarForm, CarRecord, TransmissionType, VehicleSize};

/// The oldest model year the catalogue accepts.
pub const MIN_YEAR: i32 = 1900;

/// The lowest price in whole dollars the catalogue accepts.
pub const MIN_MSRP: i64 = 1000;

/// One optional message per form field, describing the first violated
/// constraint for that field.
///
/// A fresh set replaces the previous one on every failed validation, and an
/// empty set is rendered whenever the form is (re)opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// The message for the make field, if it failed.
    pub make: Option<String>,
    /// The message for the model field, if it failed.
    pub model: Option<String>,
    /// The message for the year field, if it failed.
    pub year: Option<String>,
    /// The message for the transmission type field, if it failed.
    pub transmission_type: Option<String>,
    /// The message for the MSRP field, if it failed.
    pub msrp: Option<String>,
    /// The message for the vehicle size field, if it failed.
    pub vehicle_size: Option<String>,
    /// The message for the vehicle style field, if it failed.
    pub vehicle_style: Option<String>,
}

impl ValidationErrors {
    /// Whether no field failed validation.
    pub fn is_empty(&self) -> bool {
        self.make.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.transmission_type.is_none()
            && self.msrp.is_none()
            && self.vehicle_size.is_none()
            && self.vehicle_style.is_none()
    }
}

/// Check `form` against the catalogue's constraints and coerce it into a
/// [CarRecord].
///
/// `today` sets the upper bound for the model year and should be the current
/// date at the time of submission. Passing it in keeps validation a pure
/// function that tests can pin to a fixed date.
///
/// # Errors
/// Returns [ValidationErrors] with a message for every failing field. The
/// checks do not stop at the first failure.
pub fn validate_car_form(form: &CarForm, today: Date) -> Result<CarRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.make.is_empty() {
        errors.make = Some("Make is required".to_owned());
    }

    if form.model.is_empty() {
        errors.model = Some("Model is required".to_owned());
    }

    if form.vehicle_style.is_empty() {
        errors.vehicle_style = Some("Vehicle style is required".to_owned());
    }

    let max_year = today.year();
    let year = match form.year.trim() {
        "" => {
            errors.year = Some("Year is required".to_owned());
            None
        }
        text => match text.parse::<i32>() {
            Ok(year) if year < MIN_YEAR => {
                errors.year = Some(format!("Year must be {MIN_YEAR} or later"));
                None
            }
            Ok(year) if year > max_year => {
                errors.year = Some(format!("Year must not be later than {max_year}"));
                None
            }
            Ok(year) => Some(year),
            Err(_) => {
                errors.year = Some("Year must be a whole number".to_owned());
                None
            }
        },
    };

    let transmission_type = match form.transmission_type.as_str() {
        "" => {
            errors.transmission_type = Some("Transmission type is required".to_owned());
            None
        }
        text => match TransmissionType::parse(text) {
            Some(transmission_type) => Some(transmission_type),
            None => {
                errors.transmission_type = Some(
                    "Transmission type must be one of MANUAL, AUTOMATIC, AUTOMATED_MANUAL, \
                    DIRECT_DRIVE or UNKNOWN"
                        .to_owned(),
                );
                None
            }
        },
    };

    let msrp = match form.msrp.trim() {
        "" => {
            errors.msrp = Some("MSRP is required".to_owned());
            None
        }
        text => match text.parse::<i64>() {
            Ok(msrp) if msrp < MIN_MSRP => {
                errors.msrp = Some(format!("MSRP must be at least {MIN_MSRP}"));
                None
            }
            Ok(msrp) => Some(msrp),
            Err(_) => {
                errors.msrp = Some("MSRP must be a whole number".to_owned());
                None
            }
        },
    };

    let vehicle_size = match form.vehicle_size.as_str() {
        "" => {
            errors.vehicle_size = Some("Vehicle size is required".to_owned());
            None
        }
        text => match VehicleSize::parse(text) {
            Some(vehicle_size) => Some(vehicle_size),
            None => {
                errors.vehicle_size =
                    Some("Vehicle size must be one of Compact, Midsize or Large".to_owned());
                None
            }
        },
    };

    match (year, transmission_type, msrp, vehicle_size) {
        (Some(year), Some(transmission_type), Some(msrp), Some(vehicle_size))
            if errors.is_empty() =>
        {
            Ok(CarRecord {
                make: form.make.clone(),
                model: form.model.clone(),
                year,
                transmission_type,
                msrp,
                vehicle_size,
                vehicle_style: form.vehicle_style.clone(),
            })
        }
        _ => Err(errors),
    }
}
