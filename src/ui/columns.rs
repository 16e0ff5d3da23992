use crate::{
    domain::Ticker,
    table::{ColumnDef, HeaderLabel},
    ui::ui_text::{ICON_COIN, ICON_CODE, ICON_PRICE, ICON_SUPPLY, UI_TEXT},
};

/// The four fixed ticker columns. Content-invariant; cheap enough to rebuild on demand.
pub fn ticker_columns() -> Vec<ColumnDef<Ticker>> {
    vec![
        ColumnDef::new("name", |t| t.name.as_str(), || HeaderLabel {
            icon: ICON_COIN,
            text: UI_TEXT.header_coin,
        }),
        ColumnDef::new("symbol", |t| t.symbol.as_str(), || HeaderLabel {
            icon: ICON_CODE,
            text: UI_TEXT.header_code,
        }),
        ColumnDef::new("price_usd", |t| t.price_usd.as_str(), || HeaderLabel {
            icon: ICON_PRICE,
            text: UI_TEXT.header_price,
        }),
        // Supply reads better with its unit, which lives in the symbol field
        ColumnDef::<Ticker>::new("tsupply", |t| t.tsupply.as_str(), || HeaderLabel {
            icon: ICON_SUPPLY,
            text: UI_TEXT.header_total_supply,
        })
        .with_cell(|ctx| format!("{} {}", ctx.value, ctx.row.symbol)),
    ]
}
