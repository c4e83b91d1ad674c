// Destructive reset of the two load tables

use rusqlite::{params, Connection};

use invoicedb_core::Error;

pub const INVOICES_TABLE: &str = "invoices";
pub const STOCKCODES_TABLE: &str = "stockcodes";

// No foreign key between the two tables; the loader keeps them consistent.
// The view is dropped first so it never outlives the table it reads.
const SCHEMA: &str = r#"
DROP VIEW IF EXISTS totalprice;
DROP TABLE IF EXISTS invoices;
DROP TABLE IF EXISTS stockcodes;

CREATE TABLE stockcodes (
    StockCode VARCHAR(100),
    Description VARCHAR(100)
);

CREATE TABLE invoices (
    InvoiceNo VARCHAR(100),
    StockCode VARCHAR(100),
    Quantity INT,
    InvoiceDate VARCHAR(100),
    UnitPrice DOUBLE,
    CustomerID VARCHAR(100),
    Country VARCHAR(100)
);
"#;

/// Drop and recreate `invoices` and `stockcodes`. All existing rows are lost.
pub fn reset(conn: &Connection) -> Result<(), Error> {
    conn.execute_batch(SCHEMA).map_err(Error::database)?;
    log::info!("schema reset: {INVOICES_TABLE}, {STOCKCODES_TABLE}");
    Ok(())
}

pub fn table_exists(conn: &Connection, name: &str) -> Result<bool, Error> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![name],
            |row| row.get(0),
        )
        .map_err(Error::database)?;
    Ok(count > 0)
}
