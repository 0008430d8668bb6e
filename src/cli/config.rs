//! Configuration management CLI commands.

use crate::branding::APP_DISPLAY_NAME;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{FontCatalog, LayoutMode, RgbColor};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Default preview layout (fullscreen or half)
    #[arg(long, value_name = "MODE")]
    layout: Option<LayoutMode>,

    /// Default question text
    #[arg(long, value_name = "TEXT")]
    question: Option<String>,

    /// Light neutral for the Grey slot as #RRGGBB
    #[arg(long, value_name = "HEX")]
    grey: Option<RgbColor>,

    /// JSON font catalog replacing the built-in one
    #[arg(long, value_name = "FILE")]
    font_catalog: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to resolve configuration path: {e:#}"))
                })?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.layout.is_none()
            && self.question.is_none()
            && self.grey.is_none()
            && self.font_catalog.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --layout, --question, --grey, or --font-catalog",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(layout) = self.layout {
            config.ui.layout = layout;
        }

        if let Some(question) = &self.question {
            if question.trim().is_empty() {
                return Err(CliError::validation("Question text must not be empty"));
            }
            config.ui.question_text.clone_from(question);
        }

        if let Some(grey) = self.grey {
            if !grey.is_light() {
                return Err(CliError::validation(format!(
                    "Grey neutral must be a light color: {grey}"
                )));
            }
            config.palette.grey = grey;
        }

        if let Some(path) = &self.font_catalog {
            FontCatalog::load(path).map_err(|e| {
                CliError::validation(format!(
                    "Invalid font catalog {}: {e:#}",
                    path.display()
                ))
            })?;
            config.fonts.catalog = Some(path.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_DISPLAY_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        let note = if Config::exists() { "" } else { " (not created yet)" };
        println!("File: {}{note}", path.display());
        println!();
    }

    println!("UI:");
    println!("  Layout: {}", config.ui.layout);
    println!("  Question Text: {}", config.ui.question_text);
    println!();

    println!("Palette:");
    println!("  Grey:     {}", config.palette.grey);
    println!("  Accent 1: {}", config.palette.accent1);
    println!("  Accent 2: {}", config.palette.accent2);
    println!("  Accent 3: {}", config.palette.accent3);
    println!();

    println!("Fonts:");
    if let Some(catalog) = &config.fonts.catalog {
        println!("  Catalog: {}", catalog.display());
    } else {
        println!("  Catalog: (built-in)");
    }
    println!();
}
