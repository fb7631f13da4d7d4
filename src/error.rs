//! Error types for spell authoring and configuration.
//!
//! Resolution itself never fails: an effect-less phrase is a no-op, a
//! mailbox collision is reported through the return value, and degenerate
//! geometry yields empty sets. Errors only arise while building spells or
//! loading configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Effect already registered: {0}")]
    DuplicateEffect(String),

    #[error("Unknown effect: {0}")]
    UnknownEffect(String),
}

pub type Result<T> = std::result::Result<T, SpellError>;
