// ABOUTME: Command implementations for the cloud-init-gen binaries
// ABOUTME: Orchestrates read, render and write for engine and literal substitution

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::args::InjectPaths;
use super::config::Config;
use crate::output::{FileWriter, OutputWriter, StdoutWriter};
use crate::template::loader::{read_template, read_trimmed};
use crate::template::{LiteralRenderer, Renderer, TemplateContext, SSH_KEY};

/// Render a template with the engine and write the result
pub fn generate_cloud_init(
    template_path: &Path,
    output_path: &Path,
    variables: HashMap<String, String>,
    dry_run: bool,
    config: &Config,
) -> Result<()> {
    info!("Rendering template: {}", template_path.display());

    let mut context = TemplateContext::from_variables(&config.template_vars);
    context.extend_variables(variables);

    let engine = config.template_engine();

    if dry_run {
        let writer = StdoutWriter::new();
        render_and_write(&engine, template_path, &context, &writer)?;
        info!("Dry run - {} not written", output_path.display());
        return Ok(());
    }

    let writer = FileWriter::with_config(output_path, config.writer_config());
    render_and_write(&engine, template_path, &context, &writer)
}

/// Substitute the contents of a key file for the literal `{{ ssh_key }}` marker
pub fn inject_ssh_key(paths: &InjectPaths, config: &Config) -> Result<()> {
    info!(
        "Injecting key {} into {}",
        paths.key.display(),
        paths.template.display()
    );

    let key = read_trimmed(&paths.key)
        .with_context(|| format!("Failed to read key file {}", paths.key.display()))?;

    let mut context = TemplateContext::new();
    context.set_variable(SSH_KEY, key);

    let writer = FileWriter::with_config(&paths.output, config.writer_config());
    render_and_write(&LiteralRenderer::new(), &paths.template, &context, &writer)
}

/// Every input is read and rendered before the writer is touched
fn render_and_write(
    renderer: &dyn Renderer,
    template_path: &Path,
    context: &TemplateContext,
    writer: &dyn OutputWriter,
) -> Result<()> {
    let template = read_template(template_path).with_context(|| {
        format!("Failed to read template file {}", template_path.display())
    })?;

    let rendered = renderer
        .render(&template, context)
        .with_context(|| format!("Failed to render template {}", template_path.display()))?;

    writer.write(&rendered).context("Failed to write output")?;
    Ok(())
}
