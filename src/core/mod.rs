pub mod aggregate;
pub mod demo;
pub mod numeral;

pub use crate::domain::model::{Numeral, Person, PersonAggregate};
pub use crate::domain::ports::RosterSource;
pub use crate::utils::error::Result;
