//! `invoicedb-store`: SQLite side of the retail pipeline.
//!
//! Resets the two load tables, bulk-loads a CSV under one transaction,
//! derives the `totalprice` view, and runs the fixed reports.

use std::path::Path;

use rusqlite::Connection;

use invoicedb_core::{Error, Layout};

pub mod connection;
pub mod loader;
pub mod report;
pub mod schema;
pub mod view;

pub use loader::LoadSummary;
pub use report::Report;

/// Full load: open the input, reset the schema, then load every line.
///
/// The input is opened before the reset so a bad path leaves the
/// existing tables alone.
pub fn ingest(conn: &mut Connection, layout: &Layout, path: &Path) -> Result<LoadSummary, Error> {
    let input = loader::open_input(path)?;
    schema::reset(conn)?;
    log::info!("loading {}", path.display());
    loader::load(conn, layout, input)
}
