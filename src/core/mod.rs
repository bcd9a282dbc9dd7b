//! Transliteration core: script model, tables and converters

pub mod config;
pub mod converter;
pub mod forward;
pub mod reverse;
pub mod script;
pub mod tables;

pub use config::ConfidenceConfig;
pub use converter::{CrossScriptConverter, Method, Strategy, TransliterationResult};
pub use script::{Script, ScriptTag};
pub use tables::ScriptTables;
