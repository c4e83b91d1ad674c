// Opening the SQLite connection described by the settings file

use std::time::Duration;

use rusqlite::Connection;

use invoicedb_config::DatabaseSettings;
use invoicedb_core::Error;

pub fn open(settings: &DatabaseSettings) -> Result<Connection, Error> {
    let conn = if settings.is_memory() {
        Connection::open_in_memory()
    } else {
        Connection::open(settings.path()?)
    }
    .map_err(Error::database)?;

    conn.busy_timeout(Duration::from_millis(settings.busy_timeout_ms))
        .map_err(Error::database)?;

    log::debug!("opened database {}", settings.path()?);
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_in_memory() {
        let conn = open(&DatabaseSettings::in_memory()).unwrap();
        let one: i64 = conn.query_row("SELECT 1", [], |row| row.get(0)).unwrap();
        assert_eq!(one, 1);
    }

    #[test]
    fn missing_path_is_rejected_before_opening() {
        let err = open(&DatabaseSettings::default()).unwrap_err();
        assert_eq!(err.kind(), invoicedb_core::ErrorKind::Io);
    }

    #[test]
    fn unreachable_directory_is_a_database_error() {
        let settings = DatabaseSettings {
            path: Some("/nonexistent-dir/for/sure/retail.db".into()),
            ..DatabaseSettings::default()
        };
        let err = open(&settings).unwrap_err();
        assert_eq!(err.kind(), invoicedb_core::ErrorKind::Database);
    }
}
