/// Public ticker-list endpoint and client limits.
pub struct CoinloreConfig {
    pub tickers_url: &'static str,
    /// Native only. The browser fetch API owns timeouts on WASM.
    pub timeout_ms: u64,
}

pub const COINLORE: CoinloreConfig = CoinloreConfig {
    tickers_url: "https://api.coinlore.net/api/tickers/",
    timeout_ms: 10_000,
};
