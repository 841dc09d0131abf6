// client/src/api.rs
// HTTP client for the marquee server's REST endpoints.

use reqwest::Client;

use crate::model::{LogEntry, OutgoingMessage};

/// Errors from the marquee server API. Callers log these and move on; no
/// API failure is surfaced to the user or retried beyond the regular poll.
#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Status(u16),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status(code) => write!(f, "server returned HTTP {}", code),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn check(res: &reqwest::Response) -> ApiResult<()> {
        if res.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(res.status().as_u16()))
        }
    }

    /// POST a new ticker message. The response body is a status blob we
    /// never inspect; only the HTTP status matters.
    pub async fn send_message(&self, msg: &OutgoingMessage) -> ApiResult<()> {
        let url = format!("{}/api/send-message", self.base_url);
        let res = self.client.post(&url).json(msg).send().await?;
        Self::check(&res)
    }

    /// Fetch the full message history, newest first.
    pub async fn message_history(&self) -> ApiResult<Vec<LogEntry>> {
        let url = format!("{}/api/message-history", self.base_url);
        let res = self.client.get(&url).send().await?;
        Self::check(&res)?;
        let entries = res.json::<Vec<LogEntry>>().await?;
        Ok(entries)
    }

    /// Mute a message for `duration` minutes (server contract).
    pub async fn ignore_message(&self, message_id: &str, duration: i64) -> ApiResult<()> {
        let url = format!("{}/api/ignore_message", self.base_url);
        let body = serde_json::json!({
            "message_id": message_id,
            "duration": duration,
        });
        let res = self.client.post(&url).json(&body).send().await?;
        Self::check(&res)
    }

    pub async fn clear_history(&self) -> ApiResult<()> {
        let url = format!("{}/api/clear-history", self.base_url);
        let res = self.client.post(&url).send().await?;
        Self::check(&res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:5501///");
        assert_eq!(client.base_url(), "http://localhost:5501");
    }
}
