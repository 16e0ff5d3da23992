mod coinlore;
mod fetch_task;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod test_server;

pub use {
    coinlore::{FetchError, fetch_tickers, parse_tickers_body},
    fetch_task::{FetchOutcome, spawn_ticker_fetch},
};
