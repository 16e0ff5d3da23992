use eframe::egui::Color32;

pub struct TableConfig {
    pub page_size: usize,
    pub row_height: f32,
    pub header_height: f32,
    pub min_column_width: f32,

    // Row striping, keyed by absolute row index parity
    pub row_color_even: Color32,
    pub row_color_odd: Color32,
    pub cell_text_color: Color32,
}

pub const TABLE: TableConfig = TableConfig {
    page_size: 10,
    row_height: 28.0,
    header_height: 32.0,
    min_column_width: 120.0,

    row_color_even: Color32::from_rgb(0xE4, 0xE4, 0xE4),
    row_color_odd: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    cell_text_color: Color32::from_rgb(20, 20, 20),
};
