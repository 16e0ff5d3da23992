//! Hand-rolled table state: column declarations, header groups, core and paginated row models.

mod column;
mod model;
mod pagination;

pub use {
    column::{CellContext, ColumnDef, HeaderLabel},
    model::{Cell, Header, HeaderGroup, Row, TableModel},
    pagination::PaginationState,
};
