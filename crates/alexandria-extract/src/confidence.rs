use alexandria_core::models::record::CONFIDENCE_CEILING;

/// Score every extraction starts from.
pub const BASE_SCORE: f64 = 0.5;

/// Added when at least one symptom matched.
pub const SYMPTOM_BONUS: f64 = 0.25;

/// Added when a severity value was found.
pub const SEVERITY_BONUS: f64 = 0.15;

/// Mock confidence for an extraction, clamped to `[0.0, 0.99]` and rounded
/// to two decimals.
pub fn compute_confidence(num_symptoms: usize, has_severity: bool) -> f64 {
    let mut score = BASE_SCORE;
    if num_symptoms > 0 {
        score += SYMPTOM_BONUS;
    }
    if has_severity {
        score += SEVERITY_BONUS;
    }
    round2(score.clamp(0.0, CONFIDENCE_CEILING))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
