//! Shared CLI plumbing: error type, exit codes, config loading and output.

use clap::Args;
use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::engine::{ButtonStyle, ResolvedStyle};
use crate::error::StyleError;
use crate::models::{ColorRef, Configuration, FontCatalog, FontSubset, LayoutMode};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or configuration
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StyleError> for CliError {
    fn from(err: StyleError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Color slot overrides shared by several commands.
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Background color: a slot (White, Grey, Black, "Accent 1".."Accent 3") or #RRGGBB
    #[arg(long, value_name = "COLOR")]
    pub background: Option<ColorRef>,

    /// Option button color
    #[arg(long, value_name = "COLOR")]
    pub options: Option<ColorRef>,

    /// Check-answer button color
    #[arg(long, value_name = "COLOR")]
    pub check_answer: Option<ColorRef>,
}

impl ColorArgs {
    /// Applies the given overrides.
    pub fn apply(&self, configuration: &mut Configuration) {
        if let Some(color) = self.background {
            configuration.set_background(color);
        }
        if let Some(color) = self.options {
            configuration.set_options(color);
        }
        if let Some(color) = self.check_answer {
            configuration.set_check_answer(color);
        }
    }
}

/// Loads the application config, mapping failures to validation errors.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Loads the font catalog named by the config.
pub fn load_catalog(config: &Config) -> CliResult<FontCatalog> {
    config
        .font_catalog()
        .map_err(|e| CliError::io(format!("Failed to load font catalog: {e:#}")))
}

/// Builds the starting configuration: configured palette, whole catalog offered.
pub fn base_configuration(
    config: &Config,
    catalog: &FontCatalog,
    layout: Option<LayoutMode>,
) -> CliResult<Configuration> {
    let mut configuration = Configuration::new(config.palette(), FontSubset::full(catalog))?;
    configuration.set_layout(layout.unwrap_or(config.ui.layout));
    configuration.set_question_text(config.ui.question_text.clone());
    Ok(configuration)
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

fn print_button(label: &str, button: &ButtonStyle) {
    println!("{label}");
    println!("  Fill:   {}", button.background);
    println!("  Text:   {}", button.text);
    println!("  Hover:  {}", button.hover);
    println!("  Border: {}", button.border);
    println!(
        "  Font:   {} ({}, {})",
        button.font.name, button.font.weight, button.font.size
    );
}

/// Prints a resolved style in human-readable form.
pub fn print_style(style: &ResolvedStyle) {
    let metrics = &style.metrics;
    println!(
        "Layout:     {} ({}x{}, {} column(s), gap {}px)",
        style.layout,
        metrics.preview_width,
        metrics.preview_height,
        metrics.grid_columns,
        metrics.grid_gap
    );
    println!("Title margin: {}", metrics.title_margin);
    if let Some(padding) = metrics.option_padding {
        println!("Option padding: {padding}px");
    }
    println!("Background: {}", style.background);
    println!("Divider:    {}", style.divider);
    println!();
    println!("Title \"{}\"", style.title.text);
    println!("  Color:  {}", style.title.color);
    println!(
        "  Font:   {} ({}, {})",
        style.title.font.name, style.title.font.weight, style.title.font.size
    );
    println!();
    print_button("Option buttons", &style.option_button);
    println!();
    print_button("Check answer button", &style.check_answer_button);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorSlot;

    #[test]
    fn test_style_error_is_validation() {
        let err: CliError = StyleError::InvalidLayout("tiny".to_string()).into();
        assert_eq!(err.exit_code, ExitCode::ValidationError);
        assert!(err.message.contains("tiny"));
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::ValidationError as i32, 1);
        assert_eq!(ExitCode::IoError as i32, 2);
    }

    #[test]
    fn test_color_args_apply() {
        let config = Config::new();
        let catalog = FontCatalog::builtin().unwrap();
        let mut configuration =
            base_configuration(&config, &catalog, Some(LayoutMode::Half)).unwrap();

        let args = ColorArgs {
            background: Some(ColorSlot::Black.into()),
            options: None,
            check_answer: Some(ColorSlot::Accent2.into()),
        };
        args.apply(&mut configuration);

        assert_eq!(configuration.layout, LayoutMode::Half);
        assert_eq!(configuration.background, ColorRef::Slot(ColorSlot::Black));
        assert_eq!(configuration.options, ColorRef::Slot(ColorSlot::Grey));
        assert_eq!(configuration.check_answer, ColorRef::Slot(ColorSlot::Accent2));
    }
}
