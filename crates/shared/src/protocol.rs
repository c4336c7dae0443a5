//! Wire shape of the NeoWs feed response. Only the fields the rolodex reads
//! are modeled; everything else the upstream sends is ignored.

use std::collections::HashMap;
use std::num::ParseFloatError;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub near_earth_objects: HashMap<String, Vec<RawNearEarthObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNearEarthObject {
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    pub is_potentially_hazardous_asteroid: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub feet: DiameterRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    pub miles_per_hour: Quantity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub miles: Quantity,
}

/// The feed encodes most measurements as decimal strings, but numbers show
/// up too, so both decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Quantity {
    pub fn as_f64(&self) -> Result<f64, ParseFloatError> {
        match self {
            Quantity::Number(value) => Ok(*value),
            Quantity::Text(raw) => raw.trim().parse(),
        }
    }
}
