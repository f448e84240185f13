//! Request parsing: seven named form fields into a fixed-order feature vector.

use serde::Deserialize;

use crate::errors::{AdvisorError, AdvisorResult};

/// Number of features the scalers and classifier were fitted on.
pub const FEATURE_COUNT: usize = 7;

/// Wire-level field names, in pipeline order. `Phosporus` and `Ph` are kept
/// exactly as the original form spells them; renaming would break existing
/// clients.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Nitrogen",
    "Phosporus",
    "Potassium",
    "Temperature",
    "Humidity",
    "Ph",
    "Rainfall",
];

/// Raw form submission. Fields arrive as strings and are parsed explicitly
/// so a missing or non-numeric value surfaces as `InvalidInput` instead of
/// an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementForm {
    #[serde(rename = "Nitrogen")]
    pub nitrogen: Option<String>,
    #[serde(rename = "Phosporus")]
    pub phosphorus: Option<String>,
    #[serde(rename = "Potassium")]
    pub potassium: Option<String>,
    #[serde(rename = "Temperature")]
    pub temperature: Option<String>,
    #[serde(rename = "Humidity")]
    pub humidity: Option<String>,
    #[serde(rename = "Ph")]
    pub ph: Option<String>,
    #[serde(rename = "Rainfall")]
    pub rainfall: Option<String>,
}

impl MeasurementForm {
    /// Parse all seven fields in fixed order. Fails on the first missing or
    /// non-numeric field, naming it.
    pub fn to_feature_vector(&self) -> AdvisorResult<[f64; FEATURE_COUNT]> {
        Ok([
            parse_field("Nitrogen", self.nitrogen.as_deref())?,
            parse_field("Phosporus", self.phosphorus.as_deref())?,
            parse_field("Potassium", self.potassium.as_deref())?,
            parse_field("Temperature", self.temperature.as_deref())?,
            parse_field("Humidity", self.humidity.as_deref())?,
            parse_field("Ph", self.ph.as_deref())?,
            parse_field("Rainfall", self.rainfall.as_deref())?,
        ])
    }
}

fn parse_field(name: &str, raw: Option<&str>) -> AdvisorResult<f64> {
    let raw = raw.ok_or_else(|| AdvisorError::invalid_input(name, "field is missing"))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AdvisorError::invalid_input(name, format!("'{raw}' is not a number")))?;
    if !value.is_finite() {
        return Err(AdvisorError::invalid_input(name, "value must be finite"));
    }
    Ok(value)
}
