/// Context handed to a cell renderer: the value under the column's accessor plus the whole row.
pub struct CellContext<'a, T> {
    pub value: &'a str,
    pub row: &'a T,
}

/// A header label: decorative icon followed by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLabel {
    pub icon: &'static str,
    pub text: &'static str,
}

impl HeaderLabel {
    pub fn render(&self) -> String {
        format!("{}{}", self.icon, self.text)
    }
}

/// Static column declaration: accessor key plus header and cell renderers.
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub accessor: fn(&T) -> &str,
    pub header: fn() -> HeaderLabel,
    pub cell: fn(&CellContext<'_, T>) -> String,
}

impl<T> ColumnDef<T> {
    /// Column that renders its accessor value verbatim.
    pub fn new(id: &'static str, accessor: fn(&T) -> &str, header: fn() -> HeaderLabel) -> Self {
        Self {
            id,
            accessor,
            header,
            cell: |ctx| ctx.value.to_string(),
        }
    }

    pub fn with_cell(mut self, cell: fn(&CellContext<'_, T>) -> String) -> Self {
        self.cell = cell;
        self
    }

    pub fn render_cell(&self, row: &T) -> String {
        let ctx = CellContext {
            value: (self.accessor)(row),
            row,
        };
        (self.cell)(&ctx)
    }
}
