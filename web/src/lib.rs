//! Browser front-end of the gatehouse management pages.
//!
//! Compiled to `wasm32-unknown-unknown` and loaded by the server-rendered
//! pages. On page-ready it fades out the flash banner, wires the tab bar and
//! binds a [`gatehouse_business::RowDeletionController`] to every table with
//! delete buttons. On native targets only the selectors are built.

pub mod selectors;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::start;
