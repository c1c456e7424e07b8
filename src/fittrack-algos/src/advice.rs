use fittrack_types::Advice;

pub struct AdviceEngine;

impl AdviceEngine {
    /// Checked top-down, first match wins. Anything below the last
    /// threshold (NaN included) is underweight.
    const THRESHOLDS: [(f64, Advice); 3] = [
        (30.0, Advice::WalkingAndDiet),
        (25.0, Advice::CardioAndStrength),
        (18.5, Advice::MaintainRoutine),
    ];

    pub fn evaluate(bmi: f64) -> Advice {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| bmi >= *min)
            .map_or(Advice::Underweight, |(_, advice)| *advice)
    }
}

pub fn advise(bmi: f64) -> &'static str {
    AdviceEngine::evaluate(bmi).message()
}
