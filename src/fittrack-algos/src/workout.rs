use fittrack_types::{Goal, WorkoutCategory, WorkoutRecommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub calories: u32,
}

const fn exercise(name: &'static str, calories: u32) -> Exercise {
    Exercise { name, calories }
}

pub const ENTRIES_PER_CATEGORY: usize = 3;

pub struct WorkoutRecommender;

/// Rule table over (goal, BMI). Only the weight-loss goal is gated on BMI;
/// muscle gain ignores it and everything else falls back to maintain.
impl WorkoutRecommender {
    /// BMI from which the weight-loss goal gets the weight-loss plan.
    pub const WEIGHT_LOSS_MIN_BMI: f64 = 25.0;

    const WEIGHT_LOSS: [Exercise; ENTRIES_PER_CATEGORY] = [
        exercise("Walk", 200),
        exercise("Jog", 300),
        exercise("HIIT", 400),
    ];

    const MUSCLE_GAIN: [Exercise; ENTRIES_PER_CATEGORY] = [
        exercise("Pushups", 150),
        exercise("Weight Lifting", 250),
        exercise("Pullups", 200),
    ];

    const MAINTAIN: [Exercise; ENTRIES_PER_CATEGORY] = [
        exercise("Yoga", 100),
        exercise("Cycling", 150),
        exercise("Light Cardio", 120),
    ];

    pub fn table(category: WorkoutCategory) -> &'static [Exercise; ENTRIES_PER_CATEGORY] {
        match category {
            WorkoutCategory::WeightLoss => &Self::WEIGHT_LOSS,
            WorkoutCategory::MuscleGain => &Self::MUSCLE_GAIN,
            WorkoutCategory::Maintain => &Self::MAINTAIN,
        }
    }

    pub fn category(goal: Goal, bmi: f64) -> WorkoutCategory {
        match goal {
            Goal::WeightLoss if bmi >= Self::WEIGHT_LOSS_MIN_BMI => WorkoutCategory::WeightLoss,
            Goal::MuscleGain => WorkoutCategory::MuscleGain,
            _ => WorkoutCategory::Maintain,
        }
    }

    pub fn recommend(goal: Goal, bmi: f64) -> WorkoutRecommendation {
        let category = Self::category(goal, bmi);
        let best = Self::highest_burn(Self::table(category));
        debug!("{goal:?} at bmi {bmi} -> {category}: {} ({} kcal)", best.name, best.calories);

        WorkoutRecommendation {
            category,
            exercise: best.name.to_owned(),
            calories: best.calories,
        }
    }

    /// Largest calorie value wins; on a tie the earlier entry is kept.
    fn highest_burn(entries: &[Exercise; ENTRIES_PER_CATEGORY]) -> Exercise {
        let [first, rest @ ..] = entries;
        rest.iter()
            .fold(*first, |best, e| if e.calories > best.calories { *e } else { best })
    }
}

pub fn recommend(goal: &str, bmi: f64) -> WorkoutRecommendation {
    WorkoutRecommender::recommend(Goal::from_label(goal), bmi)
}

pub fn recommend_for_goal(goal: Goal, bmi: f64) -> WorkoutRecommendation {
    WorkoutRecommender::recommend(goal, bmi)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn triple(rec: &WorkoutRecommendation) -> (WorkoutCategory, &str, u32) {
        (rec.category, rec.exercise.as_str(), rec.calories)
    }

    #[test]
    fn weight_loss_with_high_bmi() {
        let rec = recommend("weight loss", 26.0);
        assert_eq!(triple(&rec), (WorkoutCategory::WeightLoss, "HIIT", 400));
    }

    #[test]
    fn weight_loss_with_normal_bmi_falls_back_to_maintain() {
        let rec = recommend("weight loss", 20.0);
        assert_eq!(triple(&rec), (WorkoutCategory::Maintain, "Light Cardio", 120));
    }

    #[test]
    fn weight_loss_gate_is_inclusive() {
        assert_eq!(recommend("weight loss", 25.0).category, WorkoutCategory::WeightLoss);
        assert_eq!(recommend("weight loss", 24.99).category, WorkoutCategory::Maintain);
    }

    #[test]
    fn muscle_gain_ignores_bmi() {
        for bmi in [15.0, 22.0, 40.0] {
            let rec = recommend("muscle gain", bmi);
            assert_eq!(
                triple(&rec),
                (WorkoutCategory::MuscleGain, "Weight Lifting", 250)
            );
        }
    }

    #[test]
    fn unknown_goal_falls_back_to_maintain() {
        let rec = recommend("anything else", 40.0);
        assert_eq!(triple(&rec), (WorkoutCategory::Maintain, "Light Cardio", 120));
        assert_eq!(recommend("maintain", 40.0), rec);
    }

    #[test]
    fn goal_label_is_normalized() {
        let rec = recommend("  Weight LOSS ", 31.0);
        assert_eq!(rec.category, WorkoutCategory::WeightLoss);
        assert_eq!(recommend_for_goal(Goal::WeightLoss, 31.0), rec);
    }

    #[test]
    fn pick_is_the_table_maximum() {
        for category in WorkoutCategory::iter() {
            let table = WorkoutRecommender::table(category);
            let max = table.iter().map(|e| e.calories).max().unwrap();
            let best = WorkoutRecommender::highest_burn(table);
            assert_eq!(best.calories, max, "{category}");
        }
    }

    #[test]
    fn ties_keep_the_first_entry() {
        let table = [exercise("A", 100), exercise("B", 300), exercise("C", 300)];
        assert_eq!(WorkoutRecommender::highest_burn(&table).name, "B");

        let flat = [exercise("X", 50), exercise("Y", 50), exercise("Z", 50)];
        assert_eq!(WorkoutRecommender::highest_burn(&flat).name, "X");
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(recommend("muscle gain", 19.0), recommend("muscle gain", 19.0));
    }
}
