//! `invoicedb-core`: record types, column layout, and the error taxonomy.
//!
//! Pure crate: turns raw delimited lines into typed invoice lines.
//! No database or filesystem dependencies.

pub mod error;
pub mod layout;
pub mod model;

pub use error::{Error, ErrorKind};
pub use layout::{ColumnSpec, Decoder, Field, Layout};
pub use model::{DescribedLine, InvoiceLine, InvoiceTotal, ReportOutput};
