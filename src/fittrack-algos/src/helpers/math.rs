/// Rounds to two decimals. Halves go away from zero, as `f64::round` does.
pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
