//! Markup contract with the server-rendered templates.

/// Tables are bound one by one.
pub const TABLE: &str = "table";
/// Header cells of a table, in document order.
pub const HEADER_CELL: &str = "th";
/// Delete control inside a data row.
pub const DELETE_BUTTON: &str = ".delete-btn";
/// Row enclosing a delete control.
pub const ROW: &str = "tr";

/// Banner holding the flashed messages.
pub const FLASH_BANNER_ID: &str = "flash-messages";
pub const FADE_OUT_CLASS: &str = "fade-out";

pub const TAB: &str = ".tab";
pub const TAB_CONTENT: &str = ".tab-content";
/// Attribute of a tab naming the id of its panel.
pub const TAB_TARGET_ATTR: &str = "data-tab";
pub const ACTIVE_CLASS: &str = "active";

/// `:nth-child` selector of the data cell in `column` (zero-based).
pub fn cell(column: usize) -> String {
    format!("td:nth-child({})", column + 1)
}
