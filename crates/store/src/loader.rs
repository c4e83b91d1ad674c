// Bulk load of the retail CSV into `invoices` and `stockcodes`
//
// The whole file goes in under one transaction. The first bad line returns
// an error and the transaction is dropped without a commit, which rolls
// everything back.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rusqlite::{params, Connection};

use invoicedb_core::{Error, Layout};

const INSERT_INVOICE: &str = "INSERT INTO invoices (InvoiceNo, StockCode, Quantity, InvoiceDate, UnitPrice, CustomerID, Country) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const INSERT_STOCKCODE: &str = "INSERT INTO stockcodes (StockCode, Description) VALUES (?1, ?2)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Data lines inserted (header excluded).
    pub lines: u64,
}

pub fn open_input(path: &Path) -> Result<BufReader<File>, Error> {
    let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
    Ok(BufReader::new(file))
}

/// Load every data line of `input` into the existing tables.
///
/// Exactly one physical line, the header, is dropped without inspection,
/// even when it is blank. Every later line goes through
/// [`Layout::parse_line`] and becomes one `invoices` row and one
/// `stockcodes` row, in input order. A blank data line has one field and
/// fails the load.
pub fn load<R: BufRead>(conn: &mut Connection, layout: &Layout, mut input: R) -> Result<LoadSummary, Error> {
    let tx = conn.transaction().map_err(Error::database)?;
    let mut lines = 0u64;
    {
        let mut insert_invoice = tx.prepare_cached(INSERT_INVOICE).map_err(Error::database)?;
        let mut insert_stockcode = tx.prepare_cached(INSERT_STOCKCODE).map_err(Error::database)?;

        let mut buf = Vec::new();
        let mut line_no = 0u64;
        loop {
            buf.clear();
            let read = input.read_until(b'\n', &mut buf).map_err(|e| Error::io("input", e))?;
            if read == 0 {
                break;
            }
            line_no += 1;
            if line_no == 1 {
                continue;
            }

            let text = decode_text(&buf, line_no);
            let line = layout.parse_line(line_no, &text)?;

            insert_invoice
                .execute(params![
                    line.invoice_no,
                    line.stock_code,
                    line.quantity,
                    line.invoice_date,
                    line.unit_price,
                    line.customer_id,
                    line.country,
                ])
                .map_err(Error::database)?;
            insert_stockcode
                .execute(params![line.stock_code, line.description])
                .map_err(Error::database)?;

            lines += 1;
        }
    }
    tx.commit().map_err(Error::database)?;

    log::info!("loaded {lines} line(s)");
    Ok(LoadSummary { lines })
}

/// UTF-8 first, Windows-1252 for lines exported by older spreadsheet tools.
fn decode_text(raw: &[u8], line: u64) -> Cow<'_, str> {
    match std::str::from_utf8(raw) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            log::debug!("line {line}: not valid UTF-8, decoding as Windows-1252");
            encoding_rs::WINDOWS_1252.decode(raw).0
        }
    }
}
