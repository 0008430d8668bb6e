//! `resolve` command: derive the style for an explicit configuration.

use clap::Args;

use crate::cli::common::{
    base_configuration, load_catalog, load_config, print_json, print_style, CliResult, ColorArgs,
};
use crate::engine::resolve_style;
use crate::models::LayoutMode;

/// Resolve colors, fonts and borders for a configuration
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Background, options and check-answer color overrides
    #[command(flatten)]
    pub colors: ColorArgs,

    /// Preview layout (fullscreen or half); defaults to the configured layout
    #[arg(long, value_name = "MODE")]
    pub layout: Option<LayoutMode>,

    /// Title font family (as listed by `fonts`)
    #[arg(long, value_name = "FAMILY")]
    pub title_font: Option<String>,

    /// Body font family (as listed by `fonts`)
    #[arg(long, value_name = "FAMILY")]
    pub body_font: Option<String>,

    /// Question text
    #[arg(long, value_name = "TEXT")]
    pub question: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = load_catalog(&config)?;
        let mut configuration = base_configuration(&config, &catalog, self.layout)?;

        self.colors.apply(&mut configuration);
        if let Some(family) = &self.title_font {
            configuration.select_title_font(family)?;
        }
        if let Some(family) = &self.body_font {
            configuration.select_body_font(family)?;
        }
        if let Some(text) = &self.question {
            configuration.set_question_text(text.clone());
        }

        let style = resolve_style(&configuration);

        if self.json {
            print_json(&style)
        } else {
            print_style(&style);
            Ok(())
        }
    }
}
