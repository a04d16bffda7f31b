use clap::{Args, Subcommand};

use caltrack_core::{EntryId, Meal};

use super::{open_tracker, OutputFormat};
use crate::config::Config;
use crate::view::TerminalView;

#[derive(Args)]
pub struct MealCommand {
    #[command(subcommand)]
    pub command: MealSubcommand,
}

#[derive(Subcommand)]
pub enum MealSubcommand {
    /// Log a meal
    Add {
        /// Meal name
        name: String,

        /// Calories eaten
        #[arg(allow_hyphen_values = true)]
        calories: i64,
    },

    /// Remove a logged meal by ID
    Remove {
        /// Meal ID (as shown by `caltrack meal list`)
        id: String,
    },

    /// List logged meals
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl MealCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = TerminalView::default();
        let mut tracker = open_tracker(config, &mut view)?;

        match &self.command {
            MealSubcommand::Add { name, calories } => {
                let meal = Meal::new(name.as_str(), *calories);
                let id = meal.id.clone();
                tracker.add_meal(meal)?;
                drop(tracker);

                println!("Logged meal '{}' ({} kcal)", name, calories);
                println!("ID: {}", id);
                println!();
                view.print_summary();
            }
            MealSubcommand::Remove { id } => {
                let removed = tracker.remove_meal(&EntryId::from(id.as_str()))?;
                drop(tracker);

                match removed {
                    Some(meal) => {
                        println!("Removed meal {}", meal);
                        println!();
                        view.print_summary();
                    }
                    None => println!("No meal found with ID {}", id),
                }
            }
            MealSubcommand::List { format } => {
                tracker.load_items();
                drop(tracker);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&view.meals)?);
                    }
                    OutputFormat::Text => {
                        if view.meals.is_empty() {
                            println!("No meals logged.");
                        } else {
                            println!("Meals");
                            println!("{}", "-".repeat(60));
                            print!("{}", view.format_meal_rows());
                            println!("\nConsumed: {} kcal", view.consumed);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
