use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub central_panel: Color32,
    pub table_border: Color32,
    pub header_text: Color32,
    pub pager_text: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Share of the panel width the table occupies.
    pub table_width_frac: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        central_panel: Color32::WHITE,
        table_border: Color32::from_rgb(200, 200, 200),
        header_text: Color32::BLACK,
        pager_text: Color32::BLACK,
    },
    table_width_frac: 0.95,
};

impl UiConfig {
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(0, 12),
            ..Default::default()
        }
    }

    /// Bordered frame drawn around the table and its pager.
    pub fn table_frame(&self) -> Frame {
        Frame {
            fill: Color32::TRANSPARENT,
            stroke: Stroke::new(1.0, self.colors.table_border),
            inner_margin: Margin::same(0),
            ..Default::default()
        }
    }
}
