//! The car domain types and their wire format.
//!
//! The JSON field names (`Make`, `Year`, `_id`, ...) must match the car API's
//! documents exactly, so every struct here carries explicit serde renames.
use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier the car API assigns to a stored car.
pub type CarId = String;

/// How a car's transmission shifts gears.
///
/// The wire values are case-sensitive, exact matches against the car API's
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransmissionType {
    /// The driver shifts gears by hand.
    #[serde(rename = "MANUAL")]
    Manual,
    /// The car shifts gears on its own.
    #[serde(rename = "AUTOMATIC")]
    Automatic,
    /// A manual gearbox shifted by computer-controlled actuators.
    #[serde(rename = "AUTOMATED_MANUAL")]
    AutomatedManual,
    /// No discrete gears, e.g. an electric drivetrain or CVT.
    #[serde(rename = "DIRECT_DRIVE")]
    DirectDrive,
    /// The transmission type is not recorded.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl TransmissionType {
    /// Every transmission type, in the order they appear in form selects.
    pub const ALL: [TransmissionType; 5] = [
        TransmissionType::Manual,
        TransmissionType::Automatic,
        TransmissionType::AutomatedManual,
        TransmissionType::DirectDrive,
        TransmissionType::Unknown,
    ];

    /// The wire value for this transmission type.
    pub fn as_str(self) -> &'static str {
        match self {
            TransmissionType::Manual => "MANUAL",
            TransmissionType::Automatic => "AUTOMATIC",
            TransmissionType::AutomatedManual => "AUTOMATED_MANUAL",
            TransmissionType::DirectDrive => "DIRECT_DRIVE",
            TransmissionType::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire value. Matches are case-sensitive, so "manual" is rejected.
    pub fn parse(text: &str) -> Option<TransmissionType> {
        TransmissionType::ALL
            .into_iter()
            .find(|transmission_type| transmission_type.as_str() == text)
    }
}

impl fmt::Display for TransmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The size class of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleSize {
    /// A small car such as a hatchback.
    Compact,
    /// A mid-sized car such as a typical sedan.
    Midsize,
    /// A large car such as a full-size SUV.
    Large,
}

impl VehicleSize {
    /// Every vehicle size, in the order they appear in form selects.
    pub const ALL: [VehicleSize; 3] =
        [VehicleSize::Compact, VehicleSize::Midsize, VehicleSize::Large];

    /// The wire value for this vehicle size.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleSize::Compact => "Compact",
            VehicleSize::Midsize => "Midsize",
            VehicleSize::Large => "Large",
        }
    }

    /// Parse a wire value. Matches are case-sensitive, so "compact" is rejected.
    pub fn parse(text: &str) -> Option<VehicleSize> {
        VehicleSize::ALL
            .into_iter()
            .find(|vehicle_size| vehicle_size.as_str() == text)
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized car record, the body of create and update requests.
///
/// A `CarRecord` only exists as the output of successful validation, so its
/// fields always satisfy the catalogue's constraints. It carries no id: the
/// car API assigns one on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    /// The manufacturer, e.g. "Toyota".
    #[serde(rename = "Make")]
    pub make: String,
    /// The model name, e.g. "Corolla".
    #[serde(rename = "Model")]
    pub model: String,
    /// The model year, between 1900 and the current calendar year.
    #[serde(rename = "Year")]
    pub year: i32,
    /// How the car shifts gears.
    #[serde(rename = "TransmissionType")]
    pub transmission_type: TransmissionType,
    /// The manufacturer's suggested retail price in whole dollars, at least 1000.
    #[serde(rename = "MSRP")]
    pub msrp: i64,
    /// The size class of the car.
    #[serde(rename = "VehicleSize")]
    pub vehicle_size: VehicleSize,
    /// The body style, e.g. "Sedan".
    #[serde(rename = "VehicleStyle")]
    pub vehicle_style: String,
}

/// A car stored in the catalogue: a [CarRecord] plus the id the car API
/// assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// The car API's identifier for this car.
    #[serde(rename = "_id")]
    pub id: CarId,
    /// The car's fields.
    #[serde(flatten)]
    pub record: CarRecord,
}

#[cfg(test)]
pub(crate) fn test_record() -> CarRecord {
    CarRecord {
        make: "Toyota".to_owned(),
        model: "Corolla".to_owned(),
        year: 2012,
        transmission_type: TransmissionType::Manual,
        msrp: 18_500,
        vehicle_size: VehicleSize::Compact,
        vehicle_style: "Sedan".to_owned(),
    }
}
