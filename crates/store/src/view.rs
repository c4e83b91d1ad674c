// Per-invoice total price, derived on demand

use rusqlite::Connection;

use invoicedb_core::{Error, InvoiceTotal};

pub const VIEW_NAME: &str = "totalprice";

const CREATE_VIEW: &str = r#"
DROP VIEW IF EXISTS totalprice;
CREATE VIEW totalprice AS
    SELECT InvoiceNo, SUM(Quantity * UnitPrice) AS Total_Price
    FROM invoices
    GROUP BY InvoiceNo;
"#;

/// Replace the `totalprice` view with one computed from the current rows.
pub fn create_total_price_view(conn: &Connection) -> Result<(), Error> {
    conn.execute_batch(CREATE_VIEW).map_err(Error::database)?;
    log::info!("view {VIEW_NAME} created");
    Ok(())
}

/// Recreate the view and read it back. Row order is whatever SQLite returns.
pub fn totals(conn: &Connection) -> Result<Vec<InvoiceTotal>, Error> {
    create_total_price_view(conn)?;
    select_totals(conn, "SELECT InvoiceNo, Total_Price FROM totalprice")
}

pub(crate) fn select_totals(conn: &Connection, sql: &str) -> Result<Vec<InvoiceTotal>, Error> {
    let mut stmt = conn.prepare(sql).map_err(Error::database)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(InvoiceTotal {
                invoice_no: row.get(0)?,
                total_price: row.get(1)?,
            })
        })
        .map_err(Error::database)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Error::database)
}
