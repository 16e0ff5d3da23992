/// Monotonic clock that also works in the browser (`std::time::Instant` panics on wasm32).
pub type AppInstant = web_time::Instant;
