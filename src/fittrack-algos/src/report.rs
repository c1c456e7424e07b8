use fittrack_types::{Advice, FitnessError, Forecast, Profile, WorkoutRecommendation};

use crate::{AdviceEngine, BmiCalculator, TrendForecaster, WorkoutRecommender};

/// Everything the engine derives from one profile snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessReport {
    pub bmi: f64,
    pub recommendation: WorkoutRecommendation,
    pub forecast: Forecast,
    pub advice: Advice,
}

impl FitnessReport {
    pub fn for_profile(profile: &Profile) -> Result<Self, FitnessError> {
        let bmi = BmiCalculator::for_profile(profile)?;

        Ok(Self {
            bmi,
            recommendation: WorkoutRecommender::recommend(profile.goal(), bmi),
            forecast: TrendForecaster::from_history(profile.history()).forecast(),
            advice: AdviceEngine::evaluate(bmi),
        })
    }
}

impl std::fmt::Display for FitnessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "BMI: {}\n{}\n{}\nAdvice: {}",
            self.bmi, self.recommendation, self.forecast, self.advice
        ))
    }
}
