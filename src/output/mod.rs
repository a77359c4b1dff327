// ABOUTME: Output module for rendered cloud-init documents
// ABOUTME: Exposes atomic file writing and stdout output for dry runs

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{FileWriter, FileWriterConfig, OutputWriter, StdoutWriter};
