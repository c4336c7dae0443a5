//! Core of the NEO Rolodex: the date-driven feed pipeline and the selection
//! controller that owns what the screen shows.

pub mod card;
pub mod config;
pub mod controller;
pub mod error;
pub mod feed;
pub mod indicator;

pub use card::NeoCard;
pub use config::Settings;
pub use controller::{ControllerEvent, SelectionController};
pub use error::FeedError;
pub use feed::{FeedClient, MalformedObjectPolicy, NeoFeed, MALFORMED_OBJECT_POLICY};
pub use indicator::{IndicatorPhase, SuccessIndicator};
