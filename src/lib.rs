pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::roster::{ConfiguredRoster, CsvRoster};
pub use crate::config::toml_config::CensusConfig;
pub use crate::core::demo::{sample_roster, CensusEngine, DemoReport, DemoSettings};
pub use crate::domain::model::{Numeral, Person, PersonAggregate};
pub use crate::domain::ports::RosterSource;
pub use crate::utils::error::{CensusError, Result};
