use {
    reqwest::{Client, StatusCode},
    thiserror::Error,
};

use crate::{
    config::DF,
    domain::{Ticker, TickersResponse},
    utils::AppInstant,
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(StatusCode),
    #[error("malformed tickers body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not start async runtime: {0}")]
    Runtime(String),
}

fn build_client() -> Result<Client, FetchError> {
    #[cfg(not(target_arch = "wasm32"))]
    let builder = Client::builder().timeout(std::time::Duration::from_millis(
        crate::config::COINLORE.timeout_ms,
    ));
    #[cfg(target_arch = "wasm32")]
    let builder = Client::builder();

    Ok(builder.build()?)
}

/// Single GET against the tickers endpoint. No retry.
pub async fn fetch_tickers(url: &str) -> Result<Vec<Ticker>, FetchError> {
    let start = AppInstant::now();
    let response = build_client()?.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    let tickers = parse_tickers_body(&body)?;

    if DF.log_performance {
        log::info!(
            "Fetched {} tickers from {} in {:.0}ms",
            tickers.len(),
            url,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
    Ok(tickers)
}

/// Decode the `{"data": [...]}` envelope, keeping API order.
pub fn parse_tickers_body(body: &str) -> Result<Vec<Ticker>, FetchError> {
    let envelope: TickersResponse = serde_json::from_str(body)?;
    Ok(envelope.data)
}
