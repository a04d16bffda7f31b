use clap::Args;

use super::{open_tracker, OutputFormat};
use crate::config::Config;
use crate::view::TerminalView;

/// Show today's totals
#[derive(Args)]
pub struct StatusCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl StatusCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = TerminalView::default();
        let tracker = open_tracker(config, &mut view)?;
        let summary = tracker.summary();
        drop(tracker);

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => view.print_summary(),
        }

        Ok(())
    }
}

/// Clear all meals, workouts and the running total (the limit is kept)
#[derive(Args)]
pub struct ResetCommand {}

impl ResetCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = TerminalView::default();
        let mut tracker = open_tracker(config, &mut view)?;
        tracker.reset()?;
        drop(tracker);

        println!("Cleared all meals and workouts.");
        println!();
        view.print_summary();

        Ok(())
    }
}
