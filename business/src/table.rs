//! Rendered record tables and the column layout read from their header row.

use std::cell::{Cell, RefCell};

use log::debug;

use crate::record::{DeleteRequest, RecordKind};

/// A rendered table of records.
///
/// Implemented by the in-memory [`Table`] and by the DOM-backed table of the
/// web front-end. Methods take `&self`: the table is shared by every pending
/// delete and only ever mutated by removing whole rows.
pub trait RecordTable {
    /// Handle to one data row.
    type Row: Clone;

    /// Header labels in column order, as rendered.
    fn headers(&self) -> Vec<String>;

    /// Text of the cell at `column` in `row`, or `None` when the row has no
    /// such cell.
    fn cell_text(&self, row: &Self::Row, column: usize) -> Option<String>;

    /// Remove `row` from the table. Removing a row twice is a no-op.
    fn remove_row(&self, row: &Self::Row);
}

/// Positions of the columns a delete request is built from.
///
/// Computed once from the header row and reused for every delete; headers
/// added or removed afterwards are not picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    license_plate: Option<usize>,
    phone_number: Option<usize>,
    has_exit_time: bool,
}

impl ColumnLayout {
    pub const LICENSE_PLATE: &'static str = "license plate";
    pub const PHONE_NUMBER: &'static str = "phone number";
    pub const EXIT_TIME: &'static str = "exit time";

    /// Match header labels, trimmed and lowercased, against the known columns.
    ///
    /// A repeated label resolves to its last position.
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut layout = Self::default();

        for (index, header) in headers.into_iter().enumerate() {
            let label = header.as_ref().trim().to_lowercase();
            debug!("Header {index}: {label:?}");

            match label.as_str() {
                Self::PHONE_NUMBER => layout.phone_number = Some(index),
                Self::LICENSE_PLATE => layout.license_plate = Some(index),
                Self::EXIT_TIME => layout.has_exit_time = true,
                _ => {}
            }
        }

        layout
    }

    pub fn of<T: RecordTable + ?Sized>(table: &T) -> Self {
        Self::from_headers(table.headers())
    }

    pub fn license_plate(&self) -> Option<usize> {
        self.license_plate
    }

    pub fn phone_number(&self) -> Option<usize> {
        self.phone_number
    }

    pub fn has_exit_time(&self) -> bool {
        self.has_exit_time
    }

    /// Record kind implied by the columns: an exit time means visitors.
    pub fn record_kind(&self) -> RecordKind {
        RecordKind::from_exit_time_column(self.has_exit_time)
    }

    /// Read the identifying cells of `row`.
    ///
    /// Columns that were not found in the header, or cells missing from a
    /// short row, come back as `None`.
    pub fn delete_request<T: RecordTable + ?Sized>(&self, table: &T, row: &T::Row) -> DeleteRequest {
        let read = |column: Option<usize>| column.and_then(|index| table.cell_text(row, index));

        DeleteRequest {
            license_plate: read(self.license_plate),
            phone_number: read(self.phone_number),
        }
    }
}

/// Stable handle to a row of an in-memory [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

#[derive(Debug)]
struct Row {
    id: RowId,
    cells: Vec<String>,
}

/// In-memory record table.
///
/// Rows keep their [`RowId`] for their whole life, so a delete that settles
/// after other rows were removed still removes the right one.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: RefCell<Vec<Row>>,
    next_id: Cell<u64>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: RefCell::default(),
            next_id: Cell::default(),
        }
    }

    /// Append a row and return its handle.
    pub fn push_row<I, S>(&self, cells: I) -> RowId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = RowId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.rows.borrow_mut().push(Row {
            id,
            cells: cells.into_iter().map(Into::into).collect(),
        });

        id
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.borrow().iter().any(|row| row.id == id)
    }

    /// Cells of the row, if it is still in the table.
    pub fn row(&self, id: RowId) -> Option<Vec<String>> {
        self.rows
            .borrow()
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.cells.clone())
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl RecordTable for Table {
    type Row = RowId;

    fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn cell_text(&self, row: &RowId, column: usize) -> Option<String> {
        self.rows
            .borrow()
            .iter()
            .find(|r| r.id == *row)
            .and_then(|r| r.cells.get(column).cloned())
    }

    fn remove_row(&self, row: &RowId) {
        self.rows.borrow_mut().retain(|r| r.id != *row);
    }
}
