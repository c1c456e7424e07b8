#[macro_use]
extern crate log;

mod error;
pub use error::FitnessError;

pub mod goal;
pub use goal::{Goal, WorkoutCategory};

pub mod profile;
pub use profile::{HistoryEntry, Profile};

pub mod outputs;
pub use outputs::{Advice, Forecast, WorkoutRecommendation};
