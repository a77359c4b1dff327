// ABOUTME: Template module for cloud-init generation
// ABOUTME: Provides engine and literal rendering, context management and file loading

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;
pub mod literal;
pub mod loader;

pub use context::{TemplateContext, SSH_KEY, VMNAME};
pub use engine::{Renderer, TemplateEngine};
pub use error::{Result, TemplateError};
pub use literal::LiteralRenderer;
