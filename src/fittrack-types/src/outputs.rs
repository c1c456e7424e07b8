use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::WorkoutCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    pub category: WorkoutCategory,
    pub exercise: String,
    pub calories: u32,
}

impl Display for WorkoutRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Recommended: {}\nCalories: {}",
            self.exercise, self.calories
        ))
    }
}

/// Next-period calorie forecast. Too little history is reported as
/// `InsufficientData`, never as a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "kcal", rename_all = "snake_case")]
pub enum Forecast {
    Predicted(f64),
    InsufficientData,
}

impl Forecast {
    pub fn value(self) -> Option<f64> {
        match self {
            Forecast::Predicted(kcal) => Some(kcal),
            Forecast::InsufficientData => None,
        }
    }
}

impl Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Forecast::Predicted(kcal) => write!(f, "Estimated Burn Tomorrow: {kcal:.2} kcal"),
            Forecast::InsufficientData => f.write_str("Not enough data for prediction."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    WalkingAndDiet,
    CardioAndStrength,
    MaintainRoutine,
    Underweight,
}

impl Advice {
    pub fn message(self) -> &'static str {
        match self {
            Advice::WalkingAndDiet => "Start with walking and diet control.",
            Advice::CardioAndStrength => "Mix cardio and strength training.",
            Advice::MaintainRoutine => "Maintain current routine.",
            Advice::Underweight => "Underweight. Consult a doctor.",
        }
    }
}

impl Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
