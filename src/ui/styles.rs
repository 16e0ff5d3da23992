use {
    crate::{
        config::TABLE,
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, Response, RichText, Ui},
};

/// Background for a body row, keyed by absolute index parity (not position within the page).
pub fn row_background(index: usize) -> Color32 {
    if index % 2 != 0 {
        TABLE.row_color_odd
    } else {
        TABLE.row_color_even
    }
}

pub(crate) trait UiStyleExt {
    /// Paint the whole cell rect, then the text on top.
    fn filled_cell(&mut self, text: &str, fill: Color32);
    fn header_label(&mut self, text: impl Into<String>);
    /// Bold pager button. Call sites only draw it when the direction is available.
    fn pager_button(&mut self, text: &str, enabled: bool) -> Response;
}

impl UiStyleExt for Ui {
    fn filled_cell(&mut self, text: &str, fill: Color32) {
        self.painter().rect_filled(self.max_rect(), 0.0, fill);
        self.add_space(4.0);
        self.label(RichText::new(text).small().color(TABLE.cell_text_color));
    }

    fn header_label(&mut self, text: impl Into<String>) {
        self.add_space(4.0);
        self.label(RichText::new(text).strong().color(UI_CONFIG.colors.header_text));
    }

    fn pager_button(&mut self, text: &str, enabled: bool) -> Response {
        self.add_enabled(
            enabled,
            eframe::egui::Button::new(RichText::new(text).strong().color(UI_CONFIG.colors.pager_text))
                .frame(false),
        )
    }
}
