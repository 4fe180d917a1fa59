//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    models::Config,
    error::{AppError, Result},
    config::env::EnvManager,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
    load_env_file: bool,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli, load_env_file: true }
    }

    /// Skip the `.env` file; the process environment is still read
    pub fn without_env_file(mut self) -> Self {
        self.load_env_file = false;
        self
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.cli.validate().map_err(AppError::config)?;

        let mut config = Config::default();

        if self.load_env_file {
            EnvManager::load_env_file()?;
        }

        // Environment overrides defaults, CLI overrides environment
        config.merge_from_env()?;
        self.apply_cli_overrides(&mut config);

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref input) = self.cli.input {
            config.input = input.clone();
        }

        if let Some(ref output) = self.cli.output {
            config.output = output.clone();
        }

        if let Some(width) = self.cli.width {
            config.width = width;
        }

        if let Some(height) = self.cli.height {
            config.height = height;
        }

        if let Some(ref title) = self.cli.title {
            config.title = title.clone();
        }

        if self.cli.open {
            config.open_viewer = true;
        }

        if self.cli.no_color {
            config.enable_color = false;
        }

        // CLI-only flags
        config.summary_only = self.cli.summary_only;
        config.json = self.cli.json;
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Input: {}", config.input.display()));
    if config.summary_only {
        summary.push("Output: none (summary only)".to_string());
    } else {
        summary.push(format!("Output: {}", config.output.display()));
        summary.push(format!("Size: {}x{}", config.width, config.height));
        summary.push(format!("Title: {}", config.title));
        summary.push(format!("Open Viewer: {}", config.open_viewer));
    }
    summary.push(format!("JSON Output: {}", config.json));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
