use reqwest::blocking::Client;
use tracing::debug;

use crate::error::Result;

pub const USER_AGENT: &str = "Chrome/4.0.249.0 Safari/532.5";

/// Blocking HTTP session. Tracks how many requests it has triggered so the
/// caller can report the count without any process-global state.
pub struct FetchSession {
    client: Client,
    requests: u32,
}

impl FetchSession {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            requests: 0,
        })
    }

    /// GETs `url` and returns the response body. A request counts as triggered
    /// even when it fails mid-flight; non-2xx statuses are errors.
    pub fn fetch_text(&mut self, url: &str) -> Result<String> {
        self.requests += 1;
        debug!(url, "requesting catalog page");
        let body = self
            .client
            .get(url)
            .header("User-agent", USER_AGENT)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }

    pub fn request_count(&self) -> u32 {
        self.requests
    }
}
