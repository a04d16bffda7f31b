mod config_cmd;
mod limit;
mod meal;
mod status;
mod workout;

pub use config_cmd::ConfigCommand;
pub use limit::LimitCommand;
pub use meal::MealCommand;
pub use status::{ResetCommand, StatusCommand};
pub use workout::WorkoutCommand;

use clap::ValueEnum;

use caltrack_core::{FileStore, RecordError, RecordStore, Tracker};

use crate::config::Config;
use crate::view::TerminalView;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Opens the tracker over the configured data directory, publishing to `view`.
pub fn open_tracker<'a>(
    config: &Config,
    view: &'a mut TerminalView,
) -> Result<Tracker<FileStore, &'a mut TerminalView>, RecordError> {
    let backend = FileStore::new(config.data_dir.value.clone());
    tracing::debug!(data_dir = %backend.data_dir().display(), "Opening tracker records");
    let store = RecordStore::new(backend);
    Tracker::with_default_limit(store, view, config.default_limit.value)
}
