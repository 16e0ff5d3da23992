use crate::table::{ColumnDef, HeaderLabel, PaginationState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: String,
    pub column_id: &'static str,
    /// Set for filler headers in multi-level heads. Flat column sets never produce one.
    pub is_placeholder: bool,
    pub label: HeaderLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub id: String,
    pub depth: usize,
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: String,
    pub column_id: &'static str,
    pub text: String,
}

/// A data row with its absolute position in the full dataset.
#[derive(Debug)]
pub struct Row<'a, T> {
    pub id: String,
    pub index: usize,
    pub original: &'a T,
}

impl<T> Row<'_, T> {
    pub fn visible_cells(&self, columns: &[ColumnDef<T>]) -> Vec<Cell> {
        columns
            .iter()
            .map(|col| Cell {
                id: format!("{}_{}", self.id, col.id),
                column_id: col.id,
                text: col.render_cell(self.original),
            })
            .collect()
    }
}

/// Table state over `{data, columns}`: core row model, paginated row model and paging commands.
pub struct TableModel<T> {
    data: Vec<T>,
    columns: Vec<ColumnDef<T>>,
    pagination: PaginationState,
}

impl<T> TableModel<T> {
    pub fn new(data: Vec<T>, columns: Vec<ColumnDef<T>>, page_size: usize) -> Self {
        Self {
            data,
            columns,
            pagination: PaginationState::new(page_size),
        }
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Replace the dataset wholesale. The page index goes back to the first page.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.pagination.page_index = 0;
    }

    pub fn header_groups(&self) -> Vec<HeaderGroup> {
        let headers = self
            .columns
            .iter()
            .map(|col| Header {
                id: col.id.to_string(),
                column_id: col.id,
                is_placeholder: false,
                label: (col.header)(),
            })
            .collect();
        vec![HeaderGroup {
            id: "0".to_string(),
            depth: 0,
            headers,
        }]
    }

    pub fn core_row_model(&self) -> Vec<Row<'_, T>> {
        self.rows_in(0, self.data.len())
    }

    /// Rows on the current page. Indices stay absolute.
    pub fn row_model(&self) -> Vec<Row<'_, T>> {
        let (start, end) = self.pagination.bounds(self.data.len());
        self.rows_in(start, end)
    }

    fn rows_in(&self, start: usize, end: usize) -> Vec<Row<'_, T>> {
        self.data[start..end]
            .iter()
            .enumerate()
            .map(|(offset, original)| {
                let index = start + offset;
                Row {
                    id: index.to_string(),
                    index,
                    original,
                }
            })
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.data.len())
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.can_previous()
    }

    pub fn can_next_page(&self) -> bool {
        self.pagination.can_next(self.data.len())
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.pagination.page_index -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.pagination.page_index += 1;
        }
    }
}
