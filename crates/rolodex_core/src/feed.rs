//! The fetch-transform pipeline: one GET against the NeoWs feed for a
//! single-day window, decoded and mapped into simplified records.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use shared::{
    domain::{feed_date_string, local_today, NeoRecord, ResultSet},
    protocol::{FeedResponse, RawNearEarthObject},
};
use tracing::{debug, info, warn};

use crate::{config::Settings, error::FeedError};

/// What to do with one malformed object inside an otherwise valid response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedObjectPolicy {
    /// The whole fetch fails with `InvalidResponseShape`.
    FailWholeFetch,
    /// The malformed object is dropped and the rest of the day survives.
    SkipObject,
}

/// Policy in force for `FeedClient`: one malformed object fails the whole
/// fetch, never a partial day.
pub const MALFORMED_OBJECT_POLICY: MalformedObjectPolicy = MalformedObjectPolicy::FailWholeFetch;

#[async_trait]
pub trait NeoFeed: Send + Sync {
    /// Fetches the records for `date`, or for today when `date` is `None`.
    async fn fetch_for_date(&self, date: Option<NaiveDate>) -> Result<ResultSet, FeedError>;
}

pub struct FeedClient {
    http: Client,
    settings: Settings,
}

impl FeedClient {
    pub fn new(settings: Settings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    async fn fetch_for_date_impl(&self, date: Option<NaiveDate>) -> Result<ResultSet, FeedError> {
        let date = date.unwrap_or_else(local_today);
        let (api_base_url, api_key) = self.settings.resolved()?;
        let date_key = feed_date_string(date);

        debug!(date = %date_key, "querying feed");
        let response = self
            .http
            .get(api_base_url)
            .query(&[
                ("start_date", date_key.as_str()),
                ("end_date", date_key.as_str()),
                ("api_key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus { status });
        }

        let body = response.text().await?;
        let feed: FeedResponse = serde_json::from_str(&body)
            .map_err(|err| FeedError::shape(format!("undecodable feed body: {err}")))?;

        let records = records_for_date(&feed, &date_key, MALFORMED_OBJECT_POLICY)?;
        info!(date = %date_key, count = records.len(), "feed fetched");
        Ok(ResultSet { date, records })
    }
}

#[async_trait]
impl NeoFeed for FeedClient {
    async fn fetch_for_date(&self, date: Option<NaiveDate>) -> Result<ResultSet, FeedError> {
        self.fetch_for_date_impl(date).await
    }
}

pub(crate) fn records_for_date(
    feed: &FeedResponse,
    date_key: &str,
    policy: MalformedObjectPolicy,
) -> Result<Vec<NeoRecord>, FeedError> {
    // The upstream omits the date key entirely on zero-object days.
    let Some(raw_objects) = feed.near_earth_objects.get(date_key) else {
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(raw_objects.len());
    for raw in raw_objects {
        match record_from_raw(raw) {
            Ok(record) => records.push(record),
            Err(err) => match policy {
                MalformedObjectPolicy::FailWholeFetch => return Err(err),
                MalformedObjectPolicy::SkipObject => {
                    warn!(name = %raw.name, error = %err, "skipping malformed feed object");
                }
            },
        }
    }

    Ok(records)
}

fn record_from_raw(raw: &RawNearEarthObject) -> Result<NeoRecord, FeedError> {
    let feet = &raw.estimated_diameter.feet;
    let approach = raw.close_approach_data.first().ok_or_else(|| {
        FeedError::shape(format!("object '{}' has no close approach data", raw.name))
    })?;

    let relative_velocity_mph = approach
        .relative_velocity
        .miles_per_hour
        .as_f64()
        .map_err(|err| {
            FeedError::shape(format!(
                "object '{}' has an unparsable relative velocity: {err}",
                raw.name
            ))
        })?;
    let miss_distance_miles = approach.miss_distance.miles.as_f64().map_err(|err| {
        FeedError::shape(format!(
            "object '{}' has an unparsable miss distance: {err}",
            raw.name
        ))
    })?;

    Ok(NeoRecord {
        name: raw.name.clone(),
        approx_diameter_feet: (feet.estimated_diameter_min + feet.estimated_diameter_max) / 2.0,
        relative_velocity_mph,
        miss_distance_miles,
        is_potentially_hazardous: raw.is_potentially_hazardous_asteroid,
    })
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
