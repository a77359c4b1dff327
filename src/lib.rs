// ABOUTME: Main library module for cloud-init-gen
// ABOUTME: Exports the template, output and CLI modules shared by both binaries

pub mod cli;
pub mod output;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Config, GenerateArgs, InjectArgs};
pub use output::{FileWriter, OutputWriter};
pub use template::{LiteralRenderer, Renderer, TemplateContext, TemplateEngine, TemplateError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
