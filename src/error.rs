// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortstatError {
    #[error("failed to launch `{tool}`: {source}")]
    ToolLaunch {
        tool: String,
        source: std::io::Error,
    },

    #[error("statistics report is not valid JSON: {0}")]
    MalformedReport(serde_json::Error),

    #[error("language `{0}` missing from statistics report")]
    MissingLanguage(String),

    #[error("failed to encode summary: {0}")]
    Encode(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortstatError>;
