//! Debugging feature flags.

pub struct LogFlags {
    /// Dump the first few decoded tickers after a successful fetch.
    pub log_fetch_payload: bool,

    /// Log every page change.
    pub log_pagination: bool,

    /// Log fetch latency (request start to decoded body).
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch_payload: true,
    log_pagination: false,
    log_performance: true,
};
