//! `shuffle` command: run "randomize style" one or more times.

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::common::{
    base_configuration, load_catalog, load_config, print_json, print_style, CliError, CliResult,
    ColorArgs,
};
use crate::engine::{randomize_style, resolve_style, ResolvedStyle, StyleShuffle};
use crate::models::{LayoutMode, RgbColor};
use crate::random::seeded_or_entropy;

/// Randomize the color slots, alternating light and dark backgrounds
#[derive(Debug, Clone, Args)]
pub struct ShuffleArgs {
    /// Background, options and check-answer color overrides
    #[command(flatten)]
    pub colors: ColorArgs,

    /// Number of consecutive shuffles
    #[arg(long, default_value_t = 1)]
    pub steps: usize,

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
struct ShuffleStep {
    step: usize,
    #[serde(flatten)]
    slots: StyleShuffle,
    background_color: RgbColor,
    light_background: bool,
}

#[derive(Serialize, Debug)]
struct ShuffleOutput {
    steps: Vec<ShuffleStep>,
    style: ResolvedStyle,
}

impl ShuffleArgs {
    /// Execute the shuffle command
    pub fn execute(&self) -> CliResult<()> {
        if self.steps == 0 {
            return Err(CliError::validation("--steps must be at least 1"));
        }

        let config = load_config()?;
        let catalog = load_catalog(&config)?;
        let mut configuration = base_configuration(&config, &catalog, self.layout)?;
        self.colors.apply(&mut configuration);

        let mut rng = seeded_or_entropy(self.seed);
        let mut steps = Vec::with_capacity(self.steps);

        for step in 1..=self.steps {
            let shuffle = randomize_style(&configuration, &mut *rng);
            configuration.apply_shuffle(shuffle);

            let background_color = configuration.background.resolve(&configuration.palette);
            steps.push(ShuffleStep {
                step,
                slots: shuffle,
                background_color,
                light_background: background_color.is_light(),
            });
        }
        info!(steps = self.steps, seed = ?self.seed, "shuffled style");

        let style = resolve_style(&configuration);

        if self.json {
            return print_json(&ShuffleOutput { steps, style });
        }

        for step in &steps {
            println!(
                "{:>3}. background {:<6} ({}, {})  options {:<8} check answer {}",
                step.step,
                step.slots.background.name(),
                step.background_color,
                if step.light_background { "light" } else { "dark" },
                step.slots.options.name(),
                step.slots.check_answer.name()
            );
        }
        println!();
        print_style(&style);

        Ok(())
    }
}
