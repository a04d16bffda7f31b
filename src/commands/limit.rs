use clap::{Args, Subcommand};

use super::open_tracker;
use crate::config::Config;
use crate::view::TerminalView;

#[derive(Args)]
pub struct LimitCommand {
    #[command(subcommand)]
    pub command: LimitSubcommand,
}

#[derive(Subcommand)]
pub enum LimitSubcommand {
    /// Set the daily calorie limit
    Set {
        /// New limit in kcal
        #[arg(allow_hyphen_values = true)]
        limit: i64,
    },

    /// Show the daily calorie limit
    Show,
}

impl LimitCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = TerminalView::default();
        let mut tracker = open_tracker(config, &mut view)?;

        match &self.command {
            LimitSubcommand::Set { limit } => {
                tracker.set_limit(*limit)?;
                drop(tracker);

                println!("Daily limit set to {} kcal", limit);
                println!();
                view.print_summary();
            }
            LimitSubcommand::Show => {
                drop(tracker);
                println!("{}", view.limit);
            }
        }

        Ok(())
    }
}
