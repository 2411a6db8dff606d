//! Business layer of the gatehouse management pages.
//!
//! Everything here is platform independent: the web front-end supplies a
//! [`RecordTable`] over the DOM and a [`Notifier`] over `window.alert`, and
//! drives [`RowDeletionController`] from click handlers.

pub mod api;
mod config;
mod controller;
pub mod flash;
pub mod http;
mod record;
mod table;
pub mod tabs;

pub use api::{ApiError, ApiResult, delete_record};
pub use config::{BusinessConfig, ConfigError};
pub use controller::{DELETE_REJECTED_MESSAGE, DeleteOutcome, Notifier, RowDeletionController};
pub use flash::{FlashFade, FlashPhase};
pub use record::{DeleteRequest, DeleteResponse, RecordKind};
pub use table::{ColumnLayout, RecordTable, RowId, Table};
pub use tabs::{TabError, TabSet};
