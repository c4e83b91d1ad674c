// Report rendering: plain text (", "-joined columns) or JSON

use std::io::{self, Write};

use serde_json::json;

use invoicedb_core::model::DESCRIBED_LINE_COLUMNS;
use invoicedb_core::{InvoiceTotal, ReportOutput};

pub fn text<W: Write>(report: &ReportOutput, out: &mut W) -> io::Result<()> {
    match report {
        ReportOutput::Lines(rows) => {
            writeln!(out, "{}", DESCRIBED_LINE_COLUMNS.join(", "))?;
            for r in rows {
                writeln!(
                    out,
                    "{}, {}, {}, {}, {}, {}, {}, {}",
                    r.invoice_no,
                    r.stock_code,
                    r.description,
                    r.quantity,
                    r.invoice_date,
                    r.unit_price,
                    r.customer_id,
                    r.country
                )?;
            }
        }
        ReportOutput::InvoiceCount(n) => {
            writeln!(out, "Number of Invoices")?;
            writeln!(out, "{n}")?;
        }
        ReportOutput::Totals(rows) => {
            writeln!(out, "InvoiceNo, Total Price")?;
            for r in rows {
                total_line(r, out)?;
            }
        }
        ReportOutput::TopInvoice(row) => {
            writeln!(out, "InvoiceNo, Maximum Total Price")?;
            if let Some(r) = row {
                total_line(r, out)?;
            }
        }
    }
    Ok(())
}

fn total_line<W: Write>(row: &InvoiceTotal, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}, {}", row.invoice_no, row.total_price)
}

pub fn json<W: Write>(report: &ReportOutput, out: &mut W) -> io::Result<()> {
    let value = match report {
        ReportOutput::Lines(rows) => serde_json::to_value(rows)?,
        ReportOutput::InvoiceCount(n) => json!({ "invoices": n }),
        ReportOutput::Totals(rows) => serde_json::to_value(rows)?,
        ReportOutput::TopInvoice(row) => serde_json::to_value(row)?,
    };
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)
}
