//! Selection controller: owns the selected date and the current result set,
//! and turns fetch outcomes into events the front-end reacts to.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::domain::{feed_date_string, local_today, ResultSet};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

use crate::feed::NeoFeed;

#[derive(Debug, Clone)]
pub enum ControllerEvent {
    /// The current result set was replaced wholesale.
    ResultsReplaced { results: ResultSet },
    /// The view should jump back to the top of the list.
    ScrollToTop,
    /// The transient success indicator should start its hold-and-fade cycle.
    IndicatorTriggered,
}

struct ControllerState {
    selected_date: NaiveDate,
    results: ResultSet,
    latest_request: u64,
}

/// Requests are stamped with a token when they start; a response lands only
/// if its token is still the latest, so a slow fetch can never overwrite a
/// newer selection.
pub struct SelectionController {
    feed: Arc<dyn NeoFeed>,
    inner: Mutex<ControllerState>,
    events: broadcast::Sender<ControllerEvent>,
}

impl SelectionController {
    pub fn new(feed: Arc<dyn NeoFeed>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        let today = local_today();
        Arc::new(Self {
            feed,
            inner: Mutex::new(ControllerState {
                selected_date: today,
                results: ResultSet::empty(today),
                latest_request: 0,
            }),
            events,
        })
    }

    /// First fetch on startup. Same path as a user selection of today.
    pub async fn initialize(&self) {
        self.select_date(None).await;
    }

    /// Applies a selection: the date flips immediately, then the fetch runs
    /// and its outcome lands only if no later selection superseded it.
    pub async fn select_date(&self, date: Option<NaiveDate>) {
        let date = date.unwrap_or_else(local_today);
        let request = {
            let mut guard = self.inner.lock().await;
            guard.selected_date = date;
            guard.latest_request += 1;
            guard.latest_request
        };

        match self.feed.fetch_for_date(Some(date)).await {
            Ok(results) => self.apply_results(request, results).await,
            Err(err) => {
                warn!(
                    date = %feed_date_string(date),
                    error = %err,
                    "feed fetch failed; keeping previous results"
                );
            }
        }
    }

    async fn apply_results(&self, request: u64, results: ResultSet) {
        {
            let mut guard = self.inner.lock().await;
            if request != guard.latest_request {
                debug!(
                    date = %feed_date_string(results.date),
                    "dropping response from a superseded request"
                );
                return;
            }
            guard.results = results.clone();
        }

        let _ = self.events.send(ControllerEvent::ResultsReplaced { results });
        let _ = self.events.send(ControllerEvent::ScrollToTop);
        let _ = self.events.send(ControllerEvent::IndicatorTriggered);
    }

    pub async fn snapshot(&self) -> (NaiveDate, ResultSet) {
        let guard = self.inner.lock().await;
        (guard.selected_date, guard.results.clone())
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
