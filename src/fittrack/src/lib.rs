#[macro_use]
extern crate log;

pub mod cli;

mod tracker;
pub use tracker::FitnessTracker;

pub use fittrack_algos as algo;
pub use fittrack_db::ProfileStore;
pub use fittrack_types as types;
