//! Configuration module for the ticker table application.

// Can all be private because we have a public re-export.
mod coinlore;
mod debug;
mod table;

pub use coinlore::{COINLORE, CoinloreConfig};
pub use debug::DF;
pub use table::{TABLE, TableConfig};
