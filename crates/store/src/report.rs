//! The four fixed reports.
//!
//! | # | Report                                   | Shape                     |
//! |---|------------------------------------------|---------------------------|
//! | 1 | invoice lines joined to descriptions     | [`DescribedLine`] rows    |
//! | 2 | number of distinct invoices              | single count              |
//! | 3 | total price per invoice                  | [`InvoiceTotal`] rows     |
//! | 4 | highest-value invoice                    | one [`InvoiceTotal`]      |
//!
//! Report 1 joins on StockCode without deduplicating `stockcodes`, so a
//! stock code that occurs k times yields k * k joined rows.

use rusqlite::{Connection, OptionalExtension};

use invoicedb_core::{DescribedLine, Error, InvoiceTotal, ReportOutput};

use crate::schema::{table_exists, INVOICES_TABLE};
use crate::view::{create_total_price_view, select_totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Lines,
    InvoiceCount,
    Totals,
    TopInvoice,
}

impl Report {
    pub const ALL: [Report; 4] = [Self::Lines, Self::InvoiceCount, Self::Totals, Self::TopInvoice];

    pub fn number(&self) -> u8 {
        match self {
            Self::Lines => 1,
            Self::InvoiceCount => 2,
            Self::Totals => 3,
            Self::TopInvoice => 4,
        }
    }
}

pub fn run(conn: &Connection, report: Report) -> Result<ReportOutput, Error> {
    if !table_exists(conn, INVOICES_TABLE)? {
        return Err(Error::Database(format!(
            "table '{INVOICES_TABLE}' does not exist; run a load first"
        )));
    }

    log::debug!("running report {}", report.number());
    match report {
        Report::Lines => described_lines(conn).map(ReportOutput::Lines),
        Report::InvoiceCount => invoice_count(conn).map(ReportOutput::InvoiceCount),
        Report::Totals => totals(conn).map(ReportOutput::Totals),
        Report::TopInvoice => top_invoice(conn).map(ReportOutput::TopInvoice),
    }
}

const DESCRIBED_LINES: &str = r#"
SELECT InvoiceNo, StockCode, Description, Quantity, InvoiceDate, UnitPrice, CustomerID, Country
FROM invoices NATURAL JOIN stockcodes
ORDER BY invoices.rowid, stockcodes.rowid
"#;

pub fn described_lines(conn: &Connection) -> Result<Vec<DescribedLine>, Error> {
    let mut stmt = conn.prepare(DESCRIBED_LINES).map_err(Error::database)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(DescribedLine {
                invoice_no: row.get(0)?,
                stock_code: row.get(1)?,
                description: row.get(2)?,
                quantity: row.get(3)?,
                invoice_date: row.get(4)?,
                unit_price: row.get(5)?,
                customer_id: row.get(6)?,
                country: row.get(7)?,
            })
        })
        .map_err(Error::database)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Error::database)
}

pub fn invoice_count(conn: &Connection) -> Result<i64, Error> {
    conn.query_row(
        "SELECT COUNT(*) FROM (SELECT InvoiceNo FROM invoices GROUP BY InvoiceNo)",
        [],
        |row| row.get(0),
    )
    .map_err(Error::database)
}

/// Every invoice with its total, ordered by InvoiceNo.
pub fn totals(conn: &Connection) -> Result<Vec<InvoiceTotal>, Error> {
    create_total_price_view(conn)?;
    select_totals(conn, "SELECT InvoiceNo, Total_Price FROM totalprice ORDER BY InvoiceNo")
}

/// The invoice with the largest total. Ties go to the smallest InvoiceNo.
pub fn top_invoice(conn: &Connection) -> Result<Option<InvoiceTotal>, Error> {
    create_total_price_view(conn)?;
    conn.query_row(
        "SELECT InvoiceNo, Total_Price FROM totalprice ORDER BY Total_Price DESC, InvoiceNo ASC LIMIT 1",
        [],
        |row| {
            Ok(InvoiceTotal {
                invoice_no: row.get(0)?,
                total_price: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(Error::database)
}
