// Runs the one-shot tickers fetch off the UI thread and hands the result back over a channel.

use {
    eframe::egui::Context,
    std::sync::mpsc::{self, Receiver, Sender},
};

use crate::{
    data::{FetchError, fetch_tickers},
    domain::Ticker,
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Builder};

pub type FetchOutcome = Result<Vec<Ticker>, FetchError>;

/// Spawn the fetch and return the receiving end. Exactly one outcome is sent.
///
/// Whoever holds the receiver owns the result. If it has been dropped by the time the
/// fetch resolves (component gone), the outcome is discarded.
pub fn spawn_ticker_fetch(url: &'static str, ctx: Context) -> Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel();

    #[cfg(not(target_arch = "wasm32"))]
    {
        thread::spawn(move || {
            let outcome = match Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt.block_on(fetch_tickers(url)),
                Err(e) => Err(FetchError::Runtime(e.to_string())),
            };
            deliver(&tx, outcome, &ctx);
        });
    }

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fetch_tickers(url).await;
            deliver(&tx, outcome, &ctx);
        });
    }

    rx
}

fn deliver(tx: &Sender<FetchOutcome>, outcome: FetchOutcome, ctx: &Context) {
    if tx.send(outcome).is_err() {
        log::debug!("Ticker fetch resolved after its table was dropped; result discarded");
        return;
    }
    ctx.request_repaint();
}
