// ABOUTME: Error types for template loading and rendering
// ABOUTME: Distinguishes missing files, syntax errors and unresolved variables

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Template syntax error: {0}")]
    SyntaxError(String),

    #[error("Missing template variable: {0}")]
    MissingVariable(String),

    #[error("Template render error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<handlebars::RenderError> for TemplateError {
    fn from(err: handlebars::RenderError) -> Self {
        // Strict mode reports unresolved lookups through the description only
        if err.desc.contains("strict mode") {
            TemplateError::MissingVariable(err.desc)
        } else {
            TemplateError::RenderError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
