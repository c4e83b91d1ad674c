// Configuration loading

pub mod settings;

pub use settings::{DatabaseSettings, InputSettings, Settings, MEMORY_PATH};
