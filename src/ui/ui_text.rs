use std::sync::LazyLock;

pub const ICON_COIN: &str = "💰";
pub const ICON_CODE: &str = "📄";
pub const ICON_PRICE: &str = "🤑";
pub const ICON_SUPPLY: &str = "📈";

pub struct UiText {
    // --- Column headers ---
    pub header_coin: &'static str,
    pub header_code: &'static str,
    pub header_price: &'static str,
    pub header_total_supply: &'static str,

    // --- Pager ---
    pub button_previous: String,
    pub button_next: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    header_coin: "Coin",
    header_code: "Code",
    header_price: "Price",
    header_total_supply: "Total Supply",

    button_previous: "Previous".to_string(),
    button_next: "Next".to_string(),
});
