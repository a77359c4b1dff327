// ABOUTME: CLI module for the cloud-init-gen binaries
// ABOUTME: Exports argument definitions, configuration, commands and application logic

pub mod app;
pub mod args;
pub mod commands;
pub mod config;

pub use app::App;
pub use args::{GenerateArgs, GlobalArgs, InjectArgs, InjectPaths};
pub use config::Config;
