#[macro_use]
extern crate log;

pub(crate) mod metric;
pub use metric::{BmiCalculator, bmi};

pub(crate) mod workout;
pub use workout::{Exercise, WorkoutRecommender, recommend, recommend_for_goal};

pub(crate) mod forecast;
pub use forecast::{TrendForecaster, TrendLine, predict_next};

pub(crate) mod advice;
pub use advice::{AdviceEngine, advise};

pub(crate) mod report;
pub use report::FitnessReport;

pub mod helpers;
