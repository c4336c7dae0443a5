use crate::error::FeedError;

pub const API_URL_VAR: &str = "NEO_FEED_API_URL";
pub const API_KEY_VAR: &str = "NEO_FEED_API_KEY";

/// Environment-resolved feed settings. Read once at startup; a missing value
/// is not an error until the first fetch actually needs it.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        let mut settings = Settings::default();

        if let Ok(v) = std::env::var(API_URL_VAR) {
            settings.api_base_url = non_blank(v);
        }
        if let Ok(v) = std::env::var(API_KEY_VAR) {
            settings.api_key = non_blank(v);
        }

        settings
    }

    pub fn new(api_base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: Some(api_base_url.into()),
            api_key: Some(api_key.into()),
        }
    }

    pub(crate) fn resolved(&self) -> Result<(&str, &str), FeedError> {
        let api_base_url = self
            .api_base_url
            .as_deref()
            .ok_or(FeedError::ConfigurationMissing { name: API_URL_VAR })?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(FeedError::ConfigurationMissing { name: API_KEY_VAR })?;
        Ok((api_base_url, api_key))
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
