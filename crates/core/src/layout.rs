//! Column layout of the retail CSV and the field-repair policy.
//!
//! The layout is a declarative table: each entry maps a position in the raw
//! line to a semantic field and the decoder that turns its text into a typed
//! value. Decoding walks the table; nothing branches on positions.

use csv::StringRecord;

use crate::error::Error;
use crate::model::InvoiceLine;

// ---------------------------------------------------------------------------
// Fields + decoders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InvoiceNo,
    StockCode,
    Description,
    Quantity,
    InvoiceDate,
    UnitPrice,
    CustomerId,
    Country,
}

impl Field {
    /// Column name as it appears in the database schema.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvoiceNo => "InvoiceNo",
            Self::StockCode => "StockCode",
            Self::Description => "Description",
            Self::Quantity => "Quantity",
            Self::InvoiceDate => "InvoiceDate",
            Self::UnitPrice => "UnitPrice",
            Self::CustomerId => "CustomerID",
            Self::Country => "Country",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Text,
    Integer,
    Float,
}

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Text(String),
    Integer(i32),
    Float(f64),
}

impl Decoder {
    fn decode(self, line: u64, field: Field, raw: &str) -> Result<Value, Error> {
        let bad = || Error::NumberParse { line, field: field.name(), value: raw.to_string() };
        match self {
            Self::Text => Ok(Value::Text(raw.to_string())),
            Self::Integer => raw.parse::<i32>().map(Value::Integer).map_err(|_| bad()),
            Self::Float => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Value::Float(v)),
                _ => Err(bad()),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Column table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub index: usize,
    pub field: Field,
    pub decoder: Decoder,
    /// Replacement for an empty field. `None` leaves empty text untouched.
    pub repair: Option<&'static str>,
}

const fn text(index: usize, field: Field) -> ColumnSpec {
    ColumnSpec { index, field, decoder: Decoder::Text, repair: None }
}

const RETAIL_COLUMNS: [ColumnSpec; 8] = [
    text(0, Field::InvoiceNo),
    text(1, Field::StockCode),
    text(2, Field::Description),
    ColumnSpec { index: 3, field: Field::Quantity, decoder: Decoder::Integer, repair: Some("0") },
    text(4, Field::InvoiceDate),
    ColumnSpec { index: 5, field: Field::UnitPrice, decoder: Decoder::Float, repair: Some("0") },
    text(6, Field::CustomerId),
    text(7, Field::Country),
];

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Immutable description of the input format, passed into the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    delimiter: u8,
    columns: &'static [ColumnSpec],
}

impl Default for Layout {
    fn default() -> Self {
        Self::retail()
    }
}

impl Layout {
    /// The eight-column, comma-separated retail export.
    pub fn retail() -> Self {
        Self { delimiter: b',', columns: &RETAIL_COLUMNS }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        self.columns
    }

    /// Split on the literal delimiter. No quoting rules apply.
    pub fn split_line(&self, line: &str) -> StringRecord {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let delimiter = char::from(self.delimiter);
        StringRecord::from(line.split(delimiter).collect::<Vec<_>>())
    }

    /// Substitute repair values for empty fields that have one.
    pub fn repair(&self, record: &StringRecord) -> StringRecord {
        record
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let repair = self
                    .columns
                    .iter()
                    .find(|spec| spec.index == idx)
                    .and_then(|spec| spec.repair);
                match repair {
                    Some(replacement) if value.is_empty() => replacement,
                    _ => value,
                }
            })
            .collect()
    }

    /// Check the field count, repair, and decode one record.
    ///
    /// `line` is the 1-based position in the input and is only used in
    /// error messages.
    pub fn decode(&self, line: u64, record: &StringRecord) -> Result<InvoiceLine, Error> {
        let expected = self.column_count();
        if record.len() < expected {
            return Err(Error::FieldCount { line, expected, found: record.len() });
        }
        if record.len() > expected {
            log::debug!(
                "line {line}: ignoring {} field(s) past column {expected}",
                record.len() - expected
            );
        }

        let repaired = self.repair(record);
        let mut out = InvoiceLine::default();
        for spec in self.columns {
            let raw = repaired.get(spec.index).unwrap_or("");
            let value = spec.decoder.decode(line, spec.field, raw)?;
            assign(&mut out, spec.field, value);
        }
        Ok(out)
    }

    pub fn parse_line(&self, line_no: u64, line: &str) -> Result<InvoiceLine, Error> {
        self.decode(line_no, &self.split_line(line))
    }
}

fn assign(line: &mut InvoiceLine, field: Field, value: Value) {
    match (field, value) {
        (Field::Quantity, Value::Integer(n)) => line.quantity = n,
        (Field::UnitPrice, Value::Float(v)) => line.unit_price = v,
        (Field::InvoiceNo, Value::Text(s)) => line.invoice_no = s,
        (Field::StockCode, Value::Text(s)) => line.stock_code = s,
        (Field::Description, Value::Text(s)) => line.description = s,
        (Field::InvoiceDate, Value::Text(s)) => line.invoice_date = s,
        (Field::CustomerId, Value::Text(s)) => line.customer_id = s,
        (Field::Country, Value::Text(s)) => line.country = s,
        (field, value) => log::warn!("column {field} cannot hold {value:?}"),
    }
}
