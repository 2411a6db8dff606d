//! Row deletion controller.
//
// Binding reads the table's header row once and keeps the resulting layout
// for the controller's lifetime. Each delete then:
//
// - reads the license plate / phone number cells of the clicked row
// - POSTs them to the endpoint of the table's record kind
// - removes the row only after the backend confirms
//
// Deletes are independent: several may be in flight at once and none is
// retried or cancelled.

use std::rc::Rc;

use log::{error, info, warn};

use crate::BusinessConfig;
use crate::api::{self, ApiError};
use crate::record::{DeleteRequest, RecordKind};
use crate::table::{ColumnLayout, RecordTable};

/// Text of the blocking notice shown when the backend refuses a delete.
pub const DELETE_REJECTED_MESSAGE: &str = "Error deleting record";

/// Blocking user-facing notification (`window.alert` in the browser).
pub trait Notifier {
    fn alert(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}

impl<T: RecordTable + ?Sized> RecordTable for Rc<T> {
    type Row = T::Row;

    fn headers(&self) -> Vec<String> {
        (**self).headers()
    }

    fn cell_text(&self, row: &Self::Row, column: usize) -> Option<String> {
        (**self).cell_text(row, column)
    }

    fn remove_row(&self, row: &Self::Row) {
        (**self).remove_row(row);
    }
}

/// How a single delete ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Backend confirmed; the row is gone from the table.
    Removed,
    /// Backend answered without a truthy `success`; the row stays and the
    /// user was notified.
    Rejected,
    /// The request failed or the answer was not JSON; the row stays and the
    /// error was only logged.
    Failed(ApiError),
}

impl DeleteOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// Maps delete clicks on rows of one table to backend deletions.
pub struct RowDeletionController<T: RecordTable, N: Notifier> {
    table: T,
    layout: ColumnLayout,
    kind: RecordKind,
    config: BusinessConfig,
    notifier: N,
}

impl<T: RecordTable, N: Notifier> RowDeletionController<T, N> {
    /// Bind to `table`, taking the record kind from its columns.
    pub fn bind(table: T, config: BusinessConfig, notifier: N) -> Self {
        let layout = ColumnLayout::of(&table);
        let kind = layout.record_kind();
        Self::new(table, layout, kind, config, notifier)
    }

    /// Bind to `table` for records of a known kind.
    pub fn bind_with_kind(table: T, kind: RecordKind, config: BusinessConfig, notifier: N) -> Self {
        let layout = ColumnLayout::of(&table);
        Self::new(table, layout, kind, config, notifier)
    }

    fn new(
        table: T,
        layout: ColumnLayout,
        kind: RecordKind,
        config: BusinessConfig,
        notifier: N,
    ) -> Self {
        info!("Bound {kind} table: {layout:?}");
        Self {
            table,
            layout,
            kind,
            config,
            notifier,
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Payload a delete of `row` would send.
    pub fn delete_request(&self, row: &T::Row) -> DeleteRequest {
        self.layout.delete_request(&self.table, row)
    }

    /// Delete the record shown in `row`.
    pub async fn delete_row(&self, row: T::Row) -> DeleteOutcome {
        let request = self.delete_request(&row);
        info!(
            "License Plate: {:?}, Phone Number: {:?}",
            request.license_plate, request.phone_number
        );

        match api::delete_record(&self.config, self.kind, &request).await {
            Ok(response) if response.is_success() => {
                self.table.remove_row(&row);
                DeleteOutcome::Removed
            }
            Ok(response) => {
                warn!("Backend refused to delete {kind} record: {response:?}", kind = self.kind);
                self.notifier.alert(DELETE_REJECTED_MESSAGE);
                DeleteOutcome::Rejected
            }
            Err(err) => {
                error!("Error: {err}");
                DeleteOutcome::Failed(err)
            }
        }
    }
}
