use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Projects a date into the zero-padded `YYYY-MM-DD` form the feed API uses.
pub fn feed_date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The fallback date when the user has made no explicit selection.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub name: String,
    pub approx_diameter_feet: f64,
    pub relative_velocity_mph: f64,
    pub miss_distance_miles: f64,
    pub is_potentially_hazardous: bool,
}

/// The ordered records for exactly one queried date. Replaced wholesale on
/// every successful fetch, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub date: NaiveDate,
    pub records: Vec<NeoRecord>,
}

impl ResultSet {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
