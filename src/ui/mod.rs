mod columns;
mod styles;
mod ticker_table;
mod ui_config;
mod ui_text;

pub use columns::ticker_columns;
pub use styles::row_background;
pub use ticker_table::{PagerAction, PagerControls, TickerTable};

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
