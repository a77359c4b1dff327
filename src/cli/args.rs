// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the flag surfaces of the generate-cloud-init and inject-ssh-key binaries

use clap::{Args as ClapArgs, CommandFactory, Parser};
use std::collections::HashMap;
use std::path::PathBuf;

/// Flags shared by both binaries
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Parser, Debug)]
#[command(name = "generate-cloud-init")]
#[command(about = "Substitute variables in a cloud-init template")]
#[command(version)]
pub struct GenerateArgs {
    #[arg(long, value_name = "TEMPLATE", help = "The path to the template")]
    pub template: PathBuf,

    #[arg(long, value_name = "OUTPUT", help = "The path to the output file")]
    pub output: PathBuf,

    #[arg(
        long = "ssh_key",
        value_name = "SSH_KEY",
        help = "The value for the ssh_key variable"
    )]
    pub ssh_key: String,

    #[arg(long, value_name = "VMNAME", help = "The value for the vmname variable")]
    pub vmname: String,

    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        help = "Additional template variables (key=value)"
    )]
    pub vars: Vec<String>,

    #[arg(long, help = "Print the rendered template instead of writing the output file")]
    pub dry_run: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser, Debug)]
#[command(name = "inject-ssh-key")]
#[command(about = "Insert an SSH public key into a cloud-init template")]
#[command(version)]
pub struct InjectArgs {
    #[arg(long, value_name = "TEMPLATE", help = "Path to the cloud-init template")]
    pub template: Option<PathBuf>,

    #[arg(long, value_name = "KEY", help = "Path to the SSH public key file")]
    pub key: Option<PathBuf>,

    #[arg(long, value_name = "OUTPUT", help = "Path to write the resulting cloud-init file")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Paths for a key injection once every required flag is present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectPaths {
    pub template: PathBuf,
    pub key: PathBuf,
    pub output: PathBuf,
}

impl GenerateArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Template variables from `--var`, with the dedicated flags taking precedence
    pub fn variables(&self) -> anyhow::Result<HashMap<String, String>> {
        let mut variables = parse_variables(&self.vars)?;
        variables.insert(
            crate::template::SSH_KEY.to_string(),
            self.ssh_key.clone(),
        );
        variables.insert(crate::template::VMNAME.to_string(), self.vmname.clone());
        Ok(variables)
    }
}

impl InjectArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// All three paths, or `None` if any flag was left out
    pub fn paths(&self) -> Option<InjectPaths> {
        Some(InjectPaths {
            template: self.template.clone()?,
            key: self.key.clone()?,
            output: self.output.clone()?,
        })
    }

    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}

/// Parse variables from key=value format
pub fn parse_variables(vars: &[String]) -> anyhow::Result<HashMap<String, String>> {
    let mut variables = HashMap::new();

    for var in vars {
        match var.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                variables.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }
    }

    Ok(variables)
}
