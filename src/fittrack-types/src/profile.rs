use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{FitnessError, Goal};

/// One logged day. Stored as a `[date, calories]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(NaiveDate, f64)", into = "(NaiveDate, f64)")]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub calories: f64,
}

impl From<(NaiveDate, f64)> for HistoryEntry {
    fn from((date, calories): (NaiveDate, f64)) -> Self {
        Self { date, calories }
    }
}

impl From<HistoryEntry> for (NaiveDate, f64) {
    fn from(value: HistoryEntry) -> Self {
        (value.date, value.calories)
    }
}

/// A user's physical attributes and calorie history.
///
/// `history` is append-only and kept in insertion order, which is treated
/// as chronological order. Entries with the same date are kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    #[serde(rename = "height")]
    pub height_cm: f64,
    pub goal: String,
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        goal: impl Into<String>,
    ) -> Result<Self, FitnessError> {
        if age == 0 {
            return Err(FitnessError::invalid("age", "0 must be greater than zero"));
        }

        Ok(Self {
            name: name.into(),
            age,
            weight_kg: FitnessError::check_positive("weight", weight_kg)?,
            height_cm: FitnessError::check_positive("height", height_cm)?,
            goal: goal.into(),
            history: Vec::new(),
        })
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn goal(&self) -> Goal {
        Goal::from_label(&self.goal)
    }

    /// Appends an entry dated with today's local calendar date.
    pub fn log_progress(&mut self, calories: f64) -> Result<HistoryEntry, FitnessError> {
        self.log_progress_on(Local::now().date_naive(), calories)
    }

    pub fn log_progress_on(
        &mut self,
        date: NaiveDate,
        calories: f64,
    ) -> Result<HistoryEntry, FitnessError> {
        let calories = FitnessError::check_non_negative("calories", calories).inspect_err(|e| {
            warn!("{}: rejected history entry: {}", self.name, e);
        })?;

        let entry = HistoryEntry { date, calories };
        self.history.push(entry);
        Ok(entry)
    }

    /// Both values are validated before either is replaced.
    pub fn update_weight_height(
        &mut self,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<(), FitnessError> {
        let weight_kg = FitnessError::check_positive("weight", weight_kg)?;
        let height_cm = FitnessError::check_positive("height", height_cm)?;

        self.weight_kg = weight_kg;
        self.height_cm = height_cm;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn profile() -> Profile {
        Profile::new("Alex", 30, 70.0, 175.0, "Weight Loss").unwrap()
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        assert!(Profile::new("a", 0, 70.0, 175.0, "maintain").is_err());
        assert!(Profile::new("a", 30, 0.0, 175.0, "maintain").is_err());
        assert!(Profile::new("a", 30, 70.0, -1.0, "maintain").is_err());
        assert!(Profile::new("a", 30, f64::NAN, 175.0, "maintain").is_err());
    }

    #[test]
    fn new_profile_has_empty_history() {
        let p = profile();
        assert!(p.history().is_empty());
        assert_eq!(p.goal(), Goal::WeightLoss);
    }

    #[test]
    fn history_keeps_insertion_order_and_duplicates() {
        let mut p = profile();
        p.log_progress_on(day(2), 300.0).unwrap();
        p.log_progress_on(day(1), 150.0).unwrap();
        p.log_progress_on(day(1), 150.0).unwrap();

        let calories: Vec<f64> = p.history().iter().map(|e| e.calories).collect();
        assert_eq!(calories, vec![300.0, 150.0, 150.0]);
        assert_eq!(p.history()[0].date, day(2));
    }

    #[test]
    fn negative_calories_are_rejected_without_appending() {
        let mut p = profile();
        assert!(p.log_progress_on(day(1), -10.0).is_err());
        assert!(p.log_progress_on(day(1), f64::INFINITY).is_err());
        assert!(p.history().is_empty());
    }

    #[test]
    fn negative_zero_calories_are_stored_as_zero() {
        let mut p = profile();
        let entry = p.log_progress_on(day(1), -0.0).unwrap();
        assert!(entry.calories.is_sign_positive());
        assert_eq!(entry.calories.to_string(), "0");
    }

    #[test]
    fn log_progress_uses_today() {
        let mut p = profile();
        let entry = p.log_progress(0.0).unwrap();
        assert_eq!(entry.date, Local::now().date_naive());
    }

    #[test]
    fn failed_update_leaves_both_values() {
        let mut p = profile();
        assert!(p.update_weight_height(80.0, 0.0).is_err());
        assert_eq!(p.weight_kg, 70.0);
        assert_eq!(p.height_cm, 175.0);

        p.update_weight_height(80.0, 180.0).unwrap();
        assert_eq!(p.weight_kg, 80.0);
        assert_eq!(p.height_cm, 180.0);
    }

    #[test]
    fn serialized_layout_uses_short_keys_and_pairs() {
        let mut p = profile();
        p.log_progress_on(day(4), 250.5).unwrap();

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Alex",
                "age": 30,
                "weight": 70.0,
                "height": 175.0,
                "goal": "Weight Loss",
                "history": [["2025-03-04", 250.5]],
            })
        );
    }

    #[test]
    fn deserializes_integer_calories_and_missing_history() {
        let p: Profile = serde_json::from_value(json!({
            "name": "Sam",
            "age": 41,
            "weight": 92,
            "height": 181.5,
            "goal": "muscle gain",
            "history": [["2025-03-01", 200], ["2025-03-01", 220.0]],
        }))
        .unwrap();
        assert_eq!(p.weight_kg, 92.0);
        assert_eq!(p.history().len(), 2);
        assert_eq!(p.history()[0].calories, 200.0);

        let bare: Profile = serde_json::from_value(json!({
            "name": "Kim",
            "age": 22,
            "weight": 55.0,
            "height": 160.0,
            "goal": "maintain",
        }))
        .unwrap();
        assert!(bare.history().is_empty());
    }
}
