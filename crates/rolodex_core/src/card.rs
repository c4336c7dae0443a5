//! Card view-model: one record rendered as a title plus display lines.

use shared::domain::NeoRecord;

pub const HAZARDOUS_LABEL: &str = "Categorized as \"Potentially Hazardous\"";
pub const NOT_HAZARDOUS_LABEL: &str = "Not categorized as \"Potentially Hazardous\"";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeoCard {
    pub title: String,
    pub lines: Vec<String>,
}

impl NeoCard {
    /// Quantities render rounded to the nearest whole unit.
    pub fn from_record(record: &NeoRecord) -> Self {
        let hazard_label = if record.is_potentially_hazardous {
            HAZARDOUS_LABEL
        } else {
            NOT_HAZARDOUS_LABEL
        };

        Self {
            title: record.name.clone(),
            lines: vec![
                format!(
                    "Approx. Diameter: {} feet",
                    record.approx_diameter_feet.round() as i64
                ),
                format!(
                    "Relative Velocity: {} miles per hour",
                    record.relative_velocity_mph.round() as i64
                ),
                format!(
                    "Miss Distance: {} miles",
                    record.miss_distance_miles.round() as i64
                ),
                hazard_label.to_string(),
            ],
        }
    }
}
