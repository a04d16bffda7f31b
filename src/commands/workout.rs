use clap::{Args, Subcommand};

use caltrack_core::{EntryId, Workout};

use super::{open_tracker, OutputFormat};
use crate::config::Config;
use crate::view::TerminalView;

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// Log a workout
    Add {
        /// Workout name
        name: String,

        /// Calories burned
        #[arg(allow_hyphen_values = true)]
        calories: i64,
    },

    /// Remove a logged workout by ID
    Remove {
        /// Workout ID (as shown by `caltrack workout list`)
        id: String,
    },

    /// List logged workouts
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WorkoutCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = TerminalView::default();
        let mut tracker = open_tracker(config, &mut view)?;

        match &self.command {
            WorkoutSubcommand::Add { name, calories } => {
                let workout = Workout::new(name.as_str(), *calories);
                let id = workout.id.clone();
                tracker.add_workout(workout)?;
                drop(tracker);

                println!("Logged workout '{}' ({} kcal)", name, calories);
                println!("ID: {}", id);
                println!();
                view.print_summary();
            }
            WorkoutSubcommand::Remove { id } => {
                let removed = tracker.remove_workout(&EntryId::from(id.as_str()))?;
                drop(tracker);

                match removed {
                    Some(workout) => {
                        println!("Removed workout {}", workout);
                        println!();
                        view.print_summary();
                    }
                    None => println!("No workout found with ID {}", id),
                }
            }
            WorkoutSubcommand::List { format } => {
                tracker.load_items();
                drop(tracker);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&view.workouts)?);
                    }
                    OutputFormat::Text => {
                        if view.workouts.is_empty() {
                            println!("No workouts logged.");
                        } else {
                            println!("Workouts");
                            println!("{}", "-".repeat(60));
                            print!("{}", view.format_workout_rows());
                            println!("\nBurned: {} kcal", view.burned);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
