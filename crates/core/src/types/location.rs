//! Delivery location captured at checkout.

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`DeliveryLocation`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Where an order should be delivered.
///
/// Fields are stored trimmed; all three are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryLocation {
    pub region: String,
    /// City or municipality.
    pub city: String,
    pub barangay: String,
}

impl DeliveryLocation {
    /// Build a location from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `LocationError::MissingField` naming the first blank field.
    pub fn new(region: &str, city: &str, barangay: &str) -> Result<Self, LocationError> {
        Ok(Self {
            region: required("region", region)?,
            city: required("city", city)?,
            barangay: required("barangay", barangay)?,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, LocationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LocationError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}
