use std::fmt;

/// Coarse failure class reported to the top-level caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file or settings could not be read or are incomplete.
    Io,
    /// A numeric field could not be decoded after repair.
    Parse,
    /// A DDL or DML statement failed.
    Database,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "io"),
            Self::Parse => write!(f, "parse"),
            Self::Database => write!(f, "database"),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// File open/read failure.
    Io { path: String, message: String },
    /// Settings source is malformed or missing required keys.
    Settings(String),
    /// A data line has fewer fields than the layout requires.
    FieldCount { line: u64, expected: usize, found: usize },
    /// Quantity or UnitPrice is not numeric after repair.
    NumberParse { line: u64, field: &'static str, value: String },
    /// Statement failure reported by the database driver.
    Database(String),
}

impl Error {
    pub fn io(path: impl Into<String>, err: impl fmt::Display) -> Self {
        Self::Io { path: path.into(), message: err.to_string() }
    }

    pub fn database(err: impl fmt::Display) -> Self {
        Self::Database(err.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::Settings(_) => ErrorKind::Io,
            Self::FieldCount { .. } | Self::NumberParse { .. } => ErrorKind::Parse,
            Self::Database(_) => ErrorKind::Database,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "IO error: {path}: {message}"),
            Self::Settings(msg) => write!(f, "settings error: {msg}"),
            Self::FieldCount { line, expected, found } => {
                write!(f, "line {line}: expected {expected} fields, found {found}")
            }
            Self::NumberParse { line, field, value } => {
                write!(f, "line {line}: cannot parse {field} '{value}'")
            }
            Self::Database(msg) => write!(f, "database error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
