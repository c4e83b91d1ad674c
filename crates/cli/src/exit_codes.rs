//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract: scripts rely on them.
//!
//! | Code | Meaning                                                  |
//! |------|----------------------------------------------------------|
//! | 0    | Success                                                  |
//! | 2    | Usage error (bad action token, missing --input)          |
//! | 3    | Input/IO error (missing input, unreadable settings)      |
//! | 4    | Parse error (non-numeric Quantity/UnitPrice, short line) |
//! | 5    | Database error (DDL/DML failure, no loaded data)         |

use invoicedb_core::ErrorKind;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, missing required options.
/// Same code clap uses when it rejects the command line.
pub const EXIT_USAGE: u8 = 2;

/// Input file or settings missing, unreadable, or incomplete.
pub const EXIT_IO: u8 = 3;

/// A data line could not be decoded; nothing was committed.
pub const EXIT_PARSE: u8 = 4;

/// A statement failed or the schema is not in the expected state.
pub const EXIT_DATABASE: u8 = 5;

/// Map an error kind to its exit code.
pub fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Io => EXIT_IO,
        ErrorKind::Parse => EXIT_PARSE,
        ErrorKind::Database => EXIT_DATABASE,
    }
}
