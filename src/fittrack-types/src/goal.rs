use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Training goal resolved from the free-text label stored on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintain,
    /// Any label the default resolution rule does not know about.
    Unrecognized,
}

impl Goal {
    /// Default resolution rule: trim, lowercase, then match the fixed
    /// English phrases.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "weight loss" => Self::WeightLoss,
            "muscle gain" => Self::MuscleGain,
            "maintain" => Self::Maintain,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkoutCategory {
    WeightLoss,
    MuscleGain,
    Maintain,
}
