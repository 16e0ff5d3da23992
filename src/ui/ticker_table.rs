use {
    eframe::egui::{Align, Context, Layout, Ui},
    egui_extras::{Column, TableBuilder},
    std::sync::mpsc::{Receiver, TryRecvError},
};

use crate::{
    config::{COINLORE, DF, TABLE},
    data::{FetchOutcome, spawn_ticker_fetch},
    domain::Ticker,
    table::TableModel,
    ui::{
        UI_CONFIG, UI_TEXT,
        columns::ticker_columns,
        styles::{UiStyleExt, row_background},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    Previous,
    Next,
}

/// Which pager buttons exist this frame. A direction with no page is not drawn at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PagerControls {
    pub previous: bool,
    pub next: bool,
}

/// Paginated table of coin tickers, filled by a single fetch started on construction.
///
/// The fetched list lives only here. Dropping the table drops the fetch receiver, so a
/// fetch that completes afterwards has nowhere to deliver and is discarded.
pub struct TickerTable {
    model: TableModel<Ticker>,
    pending: Option<Receiver<FetchOutcome>>,
}

impl TickerTable {
    /// Mount: start the one-shot fetch. The table is empty until it resolves.
    pub fn new(ctx: &Context) -> Self {
        Self::with_receiver(spawn_ticker_fetch(COINLORE.tickers_url, ctx.clone()))
    }

    pub(crate) fn with_receiver(rx: Receiver<FetchOutcome>) -> Self {
        Self {
            model: TableModel::new(Vec::new(), ticker_columns(), TABLE.page_size),
            pending: Some(rx),
        }
    }

    pub fn model(&self) -> &TableModel<Ticker> {
        &self.model
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Pick up the fetch outcome if it has arrived. Safe to call every frame.
    pub fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                log::error!("Error: ticker fetch ended without a result");
            }
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(tickers) => {
                if DF.log_fetch_payload {
                    log::info!(
                        "Data: {} tickers, first: {:?}",
                        tickers.len(),
                        tickers.first()
                    );
                }
                self.model.set_data(tickers);
            }
            Err(e) => log::error!("Error: {}", e),
        }
    }

    pub fn pager(&self) -> PagerControls {
        PagerControls {
            previous: self.model.can_previous_page(),
            next: self.model.can_next_page(),
        }
    }

    pub fn apply_pager_action(&mut self, action: PagerAction) {
        match action {
            PagerAction::Previous => self.model.previous_page(),
            PagerAction::Next => self.model.next_page(),
        }
        if DF.log_pagination {
            log::info!(
                "Page {:?} -> {}/{}",
                action,
                self.model.pagination().page_index + 1,
                self.model.page_count()
            );
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.poll();

        let width = ui.available_width() * UI_CONFIG.table_width_frac;
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.set_max_width(width);
            UI_CONFIG.table_frame().show(ui, |ui| {
                self.render_table(ui);
                action = render_pager(ui, self.pager()).clicked;
            });
        });

        if let Some(action) = action {
            self.apply_pager_action(action);
        }
    }

    fn render_table(&self, ui: &mut Ui) {
        let columns = self.model.columns();
        let header_groups = self.model.header_groups();
        let rows = self.model.row_model();

        TableBuilder::new(ui)
            .id_salt("ticker_table")
            .striped(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(
                Column::remainder().at_least(TABLE.min_column_width),
                columns.len(),
            )
            .header(TABLE.header_height, |mut header| {
                // Flat columns: exactly one group, so one header row.
                for group in &header_groups {
                    for h in &group.headers {
                        header.col(|ui| {
                            if !h.is_placeholder {
                                ui.header_label(h.label.render());
                            }
                        });
                    }
                }
            })
            .body(|mut body| {
                for row in &rows {
                    let fill = row_background(row.index);
                    body.row(TABLE.row_height, |mut table_row| {
                        for cell in row.visible_cells(columns) {
                            table_row.col(|ui| ui.filled_cell(&cell.text, fill));
                        }
                    });
                }
            });
    }
}

/// What the pager put on screen this frame, and which button (if any) was clicked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PagerResponse {
    drawn: PagerControls,
    clicked: Option<PagerAction>,
}

fn render_pager(ui: &mut Ui, controls: PagerControls) -> PagerResponse {
    let mut out = PagerResponse::default();
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        if controls.previous {
            out.drawn.previous = true;
            if ui.pager_button(&UI_TEXT.button_previous, controls.previous).clicked() {
                out.clicked = Some(PagerAction::Previous);
            }
        }
        if controls.next {
            out.drawn.next = true;
            if ui.pager_button(&UI_TEXT.button_next, controls.next).clicked() {
                out.clicked = Some(PagerAction::Next);
            }
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::data::FetchError,
        eframe::egui::{CentralPanel, RawInput},
        reqwest::StatusCode,
        std::sync::mpsc::{self, Sender},
    };

    fn fixture(n: usize) -> Vec<Ticker> {
        (0..n)
            .map(|i| {
                Ticker::new(
                    format!("Coin {}", i),
                    format!("C{}", i),
                    format!("{}.50", i * 10),
                    format!("{}000", i + 1),
                )
            })
            .collect()
    }

    fn pending_table() -> (TickerTable, Sender<FetchOutcome>) {
        let (tx, rx) = mpsc::channel();
        (TickerTable::with_receiver(rx), tx)
    }

    fn loaded_table(n: usize) -> TickerTable {
        let (mut table, tx) = pending_table();
        tx.send(Ok(fixture(n))).unwrap();
        table.poll();
        table
    }

    fn visible(table: &TickerTable) -> Vec<Ticker> {
        table.model().row_model().iter().map(|r| r.original.clone()).collect()
    }

    #[test]
    fn starts_empty_until_the_fetch_resolves() {
        let (mut table, tx) = pending_table();
        table.poll();
        assert!(table.is_fetch_pending());
        assert!(table.model().core_row_model().is_empty());

        tx.send(Ok(fixture(7))).unwrap();
        table.poll();
        assert!(!table.is_fetch_pending());
        assert_eq!(table.model().core_row_model().len(), 7);
    }

    #[test]
    fn all_rows_are_reachable_across_pages() {
        let mut table = loaded_table(25);
        assert_eq!(table.model().core_row_model().len(), 25);

        let mut seen = visible(&table).len();
        while table.pager().next {
            table.apply_pager_action(PagerAction::Next);
            seen += visible(&table).len();
        }
        assert_eq!(seen, 25);
    }

    #[test]
    fn error_status_leaves_the_table_empty() {
        let (mut table, tx) = pending_table();
        tx.send(Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)))
            .unwrap();
        table.poll();
        assert!(!table.is_fetch_pending());
        assert!(table.model().row_model().is_empty());
        assert_eq!(
            table.pager(),
            PagerControls {
                previous: false,
                next: false
            }
        );
    }

    #[test]
    fn sender_dropped_without_result_stops_polling() {
        let (mut table, tx) = pending_table();
        drop(tx);
        table.poll();
        assert!(!table.is_fetch_pending());
        assert!(table.model().row_model().is_empty());
    }

    #[test]
    fn result_after_drop_is_discarded() {
        let (table, tx) = pending_table();
        drop(table);
        assert!(tx.send(Ok(fixture(3))).is_err());
    }

    #[test]
    fn pager_buttons_follow_boundary_flags() {
        let mut table = loaded_table(25);
        assert_eq!(table.pager(), PagerControls { previous: false, next: true });

        table.apply_pager_action(PagerAction::Next);
        assert_eq!(table.pager(), PagerControls { previous: true, next: true });

        table.apply_pager_action(PagerAction::Next);
        assert_eq!(table.pager(), PagerControls { previous: true, next: false });
    }

    #[test]
    fn next_then_previous_restores_first_page() {
        let mut table = loaded_table(25);
        let first_page = visible(&table);
        assert_eq!(first_page.len(), TABLE.page_size);

        table.apply_pager_action(PagerAction::Next);
        assert_ne!(visible(&table), first_page);
        table.apply_pager_action(PagerAction::Previous);
        assert_eq!(visible(&table), first_page);
    }

    #[test]
    fn row_colors_use_absolute_index_on_every_page() {
        let mut table = loaded_table(25);
        table.apply_pager_action(PagerAction::Next);
        let rows = table.model().row_model();
        assert_eq!(rows[0].index, TABLE.page_size);
        for row in &rows {
            let expected = if row.index % 2 == 0 {
                TABLE.row_color_even
            } else {
                TABLE.row_color_odd
            };
            assert_eq!(row_background(row.index), expected);
        }
    }

    #[test]
    fn supply_cell_shows_symbol() {
        let table = loaded_table(2);
        let rows = table.model().row_model();
        let cells = rows[1].visible_cells(table.model().columns());
        assert_eq!(cells[3].text, "2000 C1");
    }

    fn drawn_pager(controls: PagerControls) -> PagerControls {
        let ctx = Context::default();
        let mut drawn = None;
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                drawn = Some(render_pager(ui, controls).drawn);
            });
        });
        drawn.unwrap()
    }

    #[test]
    fn first_page_draws_no_previous_button() {
        let table = loaded_table(25);
        assert_eq!(
            drawn_pager(table.pager()),
            PagerControls {
                previous: false,
                next: true
            }
        );
    }

    #[test]
    fn last_page_draws_no_next_button() {
        let mut table = loaded_table(25);
        while table.pager().next {
            table.apply_pager_action(PagerAction::Next);
        }
        assert_eq!(
            drawn_pager(table.pager()),
            PagerControls {
                previous: true,
                next: false
            }
        );
    }

    #[test]
    fn empty_table_draws_no_pager_buttons() {
        let (table, _tx) = pending_table();
        assert_eq!(drawn_pager(table.pager()), PagerControls::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test(flavor = "multi_thread")]
    async fn server_error_leaves_mounted_table_empty() {
        let url = crate::data::test_server::serve_once("500 Internal Server Error", "{}").await;
        let url: &'static str = Box::leak(url.into_boxed_str());
        let mut table =
            TickerTable::with_receiver(spawn_ticker_fetch(url, Context::default()));

        for _ in 0..200 {
            table.poll();
            if !table.is_fetch_pending() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(25)).await;
        }
        assert!(!table.is_fetch_pending());
        assert!(table.model().core_row_model().is_empty());
        assert_eq!(table.pager(), PagerControls::default());
    }

    #[test]
    fn renders_headless_in_every_state() {
        let ctx = Context::default();
        let (mut empty, _tx) = pending_table();
        let mut full = loaded_table(25);
        full.apply_pager_action(PagerAction::Next);

        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                ui.push_id("empty", |ui| empty.show(ui));
                ui.push_id("full", |ui| full.show(ui));
            });
        });
        assert_eq!(full.model().pagination().page_index, 1);
    }
}
