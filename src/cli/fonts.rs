//! `fonts` command: list the font catalog in use.

use clap::Args;

use crate::cli::common::{load_catalog, load_config, print_json, CliResult};
use crate::models::FontRole;

/// List display and body fonts
#[derive(Debug, Clone, Args)]
pub struct FontsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl FontsArgs {
    /// Execute the fonts command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = load_catalog(&config)?;

        if self.json {
            return print_json(&catalog);
        }

        for role in [FontRole::Display, FontRole::Body] {
            println!("{role} fonts:");
            for font in catalog.role(role) {
                println!(
                    "  {:<20} {:<28} {:>4} {}",
                    font.name, font.family, font.weight, font.size
                );
            }
            println!();
        }

        Ok(())
    }
}
