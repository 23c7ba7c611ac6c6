/// Percentage of correct outcomes, or None when nothing was recorded.
pub fn accuracy(correct: u64, incorrect: u64) -> Option<f64> {
    let attempts = correct + incorrect;

    match attempts {
        positive if positive > 0 => Some(correct as f64 / attempts as f64 * 100.0),
        _ => None,
    }
}
