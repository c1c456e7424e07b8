use fittrack_types::{Forecast, HistoryEntry};

use crate::helpers::math::round_float;

/// Fitted `calories = slope * index + intercept`, full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn at(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }
}

/// Ordinary least squares over (entry index, calories), kept as running
/// sums so an extra entry costs O(1) and the fit matches a batch solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendForecaster {
    count: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_xy: f64,
}

impl TrendForecaster {
    /// A line needs two points.
    pub const MIN_POINTS: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_history(history: &[HistoryEntry]) -> Self {
        let mut forecaster = Self::new();
        for entry in history {
            forecaster.push(entry.calories);
        }
        forecaster
    }

    pub fn push(&mut self, calories: f64) {
        let x = self.count as f64;
        self.count += 1;
        self.sum_x += x;
        self.sum_y += calories;
        self.sum_xx += x * x;
        self.sum_xy += x * calories;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn fit(&self) -> Option<TrendLine> {
        if self.count < Self::MIN_POINTS {
            return None;
        }

        let n = self.count as f64;
        // Indices are distinct, so this is positive for two or more points.
        let denominator = n * self.sum_xx - self.sum_x * self.sum_x;
        let slope = (n * self.sum_xy - self.sum_x * self.sum_y) / denominator;
        let intercept = (self.sum_y - slope * self.sum_x) / n;

        Some(TrendLine { slope, intercept })
    }

    /// Evaluates the fit at the next index, rounded to two decimals.
    pub fn forecast(&self) -> Forecast {
        let Some(line) = self.fit() else {
            debug!("forecast skipped: {} point(s)", self.count);
            return Forecast::InsufficientData;
        };

        let next = line.at(self.count as f64);
        debug!(
            "trend over {} points: slope {}, intercept {}, next {}",
            self.count, line.slope, line.intercept, next
        );
        Forecast::Predicted(round_float(next))
    }
}

pub fn predict_next(history: &[HistoryEntry]) -> Forecast {
    TrendForecaster::from_history(history).forecast()
}
