use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

/// Identity sent with every request; Wikipedia rejects blank agents.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

pub fn build_client() -> anyhow::Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// GET one article page as text. A non-2xx reply is an error, not a body.
pub fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    Ok(response.text()?)
}

// ── Tests ──
