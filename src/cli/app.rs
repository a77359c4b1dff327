// ABOUTME: Main application orchestration for the cloud-init-gen binaries
// ABOUTME: Coordinates CLI arguments, configuration, logging and command execution

use anyhow::{anyhow, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::args::{GenerateArgs, GlobalArgs, InjectArgs, InjectPaths};
use super::commands;
use super::config::Config;

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load configuration for the given global flags and start logging
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let app = Self::new(Config::load(global.config.clone())?);
        app.init_logging(global.verbose, global.no_color)?;
        debug!("Configuration loaded from: {:?}", global.config);
        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging based on configuration, always on stderr
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            self.config.logging.level.as_str()
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(!no_color)
            .with_target(false);

        let result = match self.config.logging.format.as_str() {
            "compact" => builder.compact().try_init(),
            _ => builder.try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Render a template with the engine using values from the command line
    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        info!("Starting generate-cloud-init v{}", crate::VERSION);

        let variables = args.variables()?;
        commands::generate_cloud_init(
            &args.template,
            &args.output,
            variables,
            args.dry_run,
            &self.config,
        )
    }

    /// Substitute a key file into a template
    pub fn inject(&self, paths: &InjectPaths) -> Result<()> {
        info!("Starting inject-ssh-key v{}", crate::VERSION);
        commands::inject_ssh_key(paths, &self.config)
    }

    /// Entry point of the generate-cloud-init binary
    pub fn run_generate(args: GenerateArgs) -> Result<()> {
        Self::load(&args.global)?.generate(args)
    }

    /// Entry point of the inject-ssh-key binary, printing help if a path is missing
    pub fn run_inject(args: InjectArgs) -> Result<()> {
        // Missing paths only need help text, not a valid configuration
        match args.paths() {
            Some(paths) => Self::load(&args.global)?.inject(&paths),
            None => {
                print!("{}", InjectArgs::help_text());
                Ok(())
            }
        }
    }
}
