use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitnessError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl FitnessError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Accepts finite values strictly greater than zero.
    pub fn check_positive(field: &'static str, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::invalid(field, format!("{value} is not a finite number")));
        }
        if value <= 0.0 {
            return Err(Self::invalid(field, format!("{value} must be greater than zero")));
        }
        Ok(value)
    }

    /// Accepts finite values greater than or equal to zero. `-0.0` comes
    /// back as `0.0`.
    pub fn check_non_negative(field: &'static str, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::invalid(field, format!("{value} is not a finite number")));
        }
        if value < 0.0 {
            return Err(Self::invalid(field, format!("{value} must not be negative")));
        }
        Ok(value + 0.0)
    }
}
