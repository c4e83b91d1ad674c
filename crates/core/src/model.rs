use serde::Serialize;

// ---------------------------------------------------------------------------
// Input record
// ---------------------------------------------------------------------------

/// One decoded data line of the retail CSV.
///
/// Built by [`Layout::decode`](crate::Layout::decode) and handed straight to
/// the loader; nothing keeps it around afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceLine {
    pub invoice_no: String,
    pub stock_code: String,
    /// Only persisted in the stock-code table.
    pub description: String,
    pub quantity: i32,
    pub invoice_date: String,
    pub unit_price: f64,
    pub customer_id: String,
    pub country: String,
}

// ---------------------------------------------------------------------------
// Report rows
// ---------------------------------------------------------------------------

/// Invoice line joined back to its description (report 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribedLine {
    #[serde(rename = "InvoiceNo")]
    pub invoice_no: String,
    #[serde(rename = "StockCode")]
    pub stock_code: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "InvoiceDate")]
    pub invoice_date: String,
    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "Country")]
    pub country: String,
}

/// A row of the `totalprice` view (reports 3 and 4).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceTotal {
    #[serde(rename = "InvoiceNo")]
    pub invoice_no: String,
    #[serde(rename = "Total_Price")]
    pub total_price: f64,
}

/// Result of one of the four fixed reports.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutput {
    Lines(Vec<DescribedLine>),
    InvoiceCount(i64),
    Totals(Vec<InvoiceTotal>),
    /// `None` only when no invoices are loaded.
    TopInvoice(Option<InvoiceTotal>),
}

pub const DESCRIBED_LINE_COLUMNS: [&str; 8] = [
    "InvoiceNo",
    "StockCode",
    "Description",
    "Quantity",
    "InvoiceDate",
    "UnitPrice",
    "CustomerID",
    "Country",
];

impl ReportOutput {
    /// Number of data rows carried by the report.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Lines(rows) => rows.len(),
            Self::InvoiceCount(_) => 1,
            Self::Totals(rows) => rows.len(),
            Self::TopInvoice(row) => usize::from(row.is_some()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_column_names() {
        let total = InvoiceTotal { invoice_no: "536365".into(), total_price: 139.12 };
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.serialize(&total).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert_eq!(out, "InvoiceNo,Total_Price\n536365,139.12\n");
    }

    #[test]
    fn top_invoice_row_count() {
        assert_eq!(ReportOutput::TopInvoice(None).row_count(), 0);
        let row = InvoiceTotal { invoice_no: "A1".into(), total_price: 5.0 };
        assert_eq!(ReportOutput::TopInvoice(Some(row)).row_count(), 1);
        assert_eq!(ReportOutput::InvoiceCount(42).row_count(), 1);
    }
}
