use eframe::{
    Frame,
    egui::{CentralPanel, Context, Visuals},
};

use crate::{
    Cli,
    ui::{TickerTable, UI_CONFIG},
};

/// Composition root: one ticker table in the central panel.
pub struct App {
    ticker_table: TickerTable,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        if args.verbose {
            log::debug!("Starting with verbose logging");
        }
        setup_custom_visuals(&cc.egui_ctx);
        Self {
            ticker_table: TickerTable::new(&cc.egui_ctx),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                self.ticker_table.show(ui);
            });
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let visuals = Visuals::light();
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
