//! `brand-kit` command: generate a palette, fonts and slots, then resolve them.

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::common::{
    base_configuration, load_catalog, load_config, print_json, print_style, CliResult,
};
use crate::engine::{new_brand_kit, resolve_style, BrandKit, ResolvedStyle};
use crate::models::{ColorSlot, LayoutMode};
use crate::random::seeded_or_entropy;

/// Generate a new brand kit and print its resolved style
#[derive(Debug, Clone, Args)]
pub struct BrandKitArgs {
    /// Seed for repeatable output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Preview layout (fullscreen or half); defaults to the configured layout
    #[arg(long, value_name = "MODE")]
    pub layout: Option<LayoutMode>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct BrandKitOutput {
    kit: BrandKit,
    style: ResolvedStyle,
}

impl BrandKitArgs {
    /// Execute the brand-kit command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = load_catalog(&config)?;
        let mut configuration = base_configuration(&config, &catalog, self.layout)?;

        let mut rng = seeded_or_entropy(self.seed);
        let mut kit = new_brand_kit(&catalog, &mut *rng)?;
        kit.palette = kit.palette.with_grey(configuration.palette.grey());
        info!(seed = ?self.seed, "generated brand kit");

        configuration.apply_brand_kit(kit.clone());
        let style = resolve_style(&configuration);

        if self.json {
            return print_json(&BrandKitOutput { kit, style });
        }

        println!("Palette");
        for slot in ColorSlot::ALL {
            println!("  {:<9} {}", slot.name(), kit.palette.resolve(slot));
        }
        println!("  Generated grey: {}", kit.palette.generated_grey());
        println!();
        println!("Fonts");
        println!(
            "  Display: {}",
            kit.fonts.display.iter().map(|f| f.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        println!(
            "  Body:    {}",
            kit.fonts.body.iter().map(|f| f.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        println!(
            "  Pair:    {} / {}",
            kit.font_pair.title.name, kit.font_pair.body.name
        );
        println!();
        println!(
            "Slots: background {}, options {}, check answer {}",
            kit.background, kit.options, kit.check_answer
        );
        println!();
        print_style(&style);

        Ok(())
    }
}
