// Connection settings
// Loaded from the TOML file named on the command line

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use invoicedb_core::{Error, Layout};

/// Database path that selects a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn default_delimiter() -> String {
    ",".to_string()
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite database file. Required.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseSettings {
    pub fn in_memory() -> Self {
        Self {
            path: Some(MEMORY_PATH.to_string()),
            ..Self::default()
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path.as_deref() == Some(MEMORY_PATH)
    }

    /// The validated database path. Errors if the key is missing or empty.
    pub fn path(&self) -> Result<&str, Error> {
        match self.path.as_deref() {
            Some(p) if !p.trim().is_empty() => Ok(p),
            _ => Err(Error::Settings("missing required key 'database.path'".into())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    /// Single ASCII field separator.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self { delimiter: default_delimiter() }
    }
}

impl InputSettings {
    pub fn delimiter_byte(&self) -> Result<u8, Error> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' => Ok(*b),
            _ => Err(Error::Settings(format!(
                "input.delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub input: InputSettings,
}

impl Settings {
    /// Read and validate a settings file.
    ///
    /// A relative `database.path` is resolved against the directory holding
    /// the settings file, so the file can be used from any working directory.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::io(path.display().to_string(), e))?;
        let mut settings = Self::from_toml(&contents)?;

        if !settings.database.is_memory() {
            let db_path = PathBuf::from(settings.database.path()?);
            if db_path.is_relative() {
                if let Some(dir) = path.parent() {
                    let resolved = dir.join(db_path);
                    settings.database.path = Some(resolved.to_string_lossy().into_owned());
                }
            }
        }

        log::debug!("settings loaded from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(input: &str) -> Result<Self, Error> {
        let settings: Settings =
            toml::from_str(input).map_err(|e| Error::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.database.path()?;
        self.input.delimiter_byte()?;
        Ok(())
    }

    /// Input layout with the configured delimiter.
    pub fn layout(&self) -> Result<Layout, Error> {
        Ok(Layout::retail().with_delimiter(self.input.delimiter_byte()?))
    }
}
