use fittrack_types::{FitnessError, Profile};

use crate::helpers::math::round_float;

pub struct BmiCalculator;

/// Body Mass Index: weight in kilograms over the square of height in
/// metres, rounded to two decimals.
impl BmiCalculator {
    const CM_PER_M: f64 = 100.0;

    pub fn calculate(weight_kg: f64, height_cm: f64) -> Result<f64, FitnessError> {
        let weight_kg = FitnessError::check_positive("weight", weight_kg)?;
        let height_m = FitnessError::check_positive("height", height_cm)? / Self::CM_PER_M;

        let raw = weight_kg / height_m.powi(2);
        if !raw.is_finite() {
            return Err(FitnessError::invalid(
                "height",
                format!("{height_cm} cm is too small to derive a BMI"),
            ));
        }

        let bmi = round_float(raw);
        debug!("bmi({weight_kg} kg, {height_cm} cm) = {bmi}");
        Ok(bmi)
    }

    pub fn for_profile(profile: &Profile) -> Result<f64, FitnessError> {
        Self::calculate(profile.weight_kg, profile.height_cm)
    }
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, FitnessError> {
    BmiCalculator::calculate(weight_kg, height_cm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value() {
        // 70 / 1.75^2 = 22.857... -> 22.86
        assert_eq!(bmi(70.0, 175.0).unwrap(), 22.86);
    }

    #[test]
    fn exact_values_stay_exact() {
        // 100 / 2^2 = 25
        assert_eq!(bmi(100.0, 200.0).unwrap(), 25.0);
        // 45 / 1.5^2 = 20
        assert_eq!(bmi(45.0, 150.0).unwrap(), 20.0);
    }

    #[test]
    fn non_positive_height_is_invalid() {
        for h in [0.0, -0.0, -175.0] {
            assert!(
                matches!(bmi(70.0, h), Err(FitnessError::InvalidInput { field: "height", .. })),
                "height {h} should be rejected"
            );
        }
    }

    #[test]
    fn non_positive_weight_is_invalid() {
        for w in [0.0, -70.0] {
            assert!(
                matches!(bmi(w, 175.0), Err(FitnessError::InvalidInput { field: "weight", .. })),
                "weight {w} should be rejected"
            );
        }
    }

    #[test]
    fn non_finite_input_is_invalid() {
        assert!(bmi(f64::NAN, 175.0).is_err());
        assert!(bmi(70.0, f64::INFINITY).is_err());
        assert!(bmi(f64::MAX, 1e-300).is_err());
    }

    #[test]
    fn profile_bmi_matches_free_function() {
        let profile = Profile::new("Alex", 30, 70.0, 175.0, "maintain").unwrap();
        assert_eq!(BmiCalculator::for_profile(&profile), bmi(70.0, 175.0));
    }
}
