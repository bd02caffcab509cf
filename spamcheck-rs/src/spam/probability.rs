//! Numeric helpers for log-space probability arithmetic

/// Value returned by [`safe_log`] for non-positive input
pub const LOG_FLOOR: f64 = -1000.0;

/// Natural logarithm that never yields `-inf` or `NaN`.
///
/// Returns `ln(x)` for `x > 0` and [`LOG_FLOOR`] otherwise, so sums of
/// logarithms stay finite when a probability reaches zero.
pub fn safe_log(x: f64) -> f64 {
    if x > 0.0 {
        x.ln()
    } else {
        LOG_FLOOR
    }
}

/// Turn two log-scores into P(spam).
///
/// Subtracts the larger score from both before exponentiating so that very
/// negative sums do not underflow to `0 / 0`.
pub fn normalize_log_scores(spam_score: f64, not_spam_score: f64) -> f64 {
    let max_score = spam_score.max(not_spam_score);
    let exp_spam = (spam_score - max_score).exp();
    let exp_not_spam = (not_spam_score - max_score).exp();

    exp_spam / (exp_spam + exp_not_spam)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_log_positive() {
        assert_eq!(safe_log(1.0), 0.0);
        assert!((safe_log(std::f64::consts::E) - 1.0).abs() < 1e-12);
        assert!((safe_log(0.5) - 0.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_safe_log_non_positive() {
        assert_eq!(safe_log(0.0), LOG_FLOOR);
        assert_eq!(safe_log(-3.0), LOG_FLOOR);
        assert_eq!(safe_log(f64::NAN), LOG_FLOOR);
    }

    #[test]
    fn test_safe_log_tiny_value_is_finite() {
        let value = safe_log(f64::MIN_POSITIVE);
        assert!(value.is_finite());
        assert!(value > LOG_FLOOR);
    }

    #[test]
    fn test_normalize_equal_scores() {
        assert_eq!(normalize_log_scores(-12.5, -12.5), 0.5);
        assert_eq!(normalize_log_scores(LOG_FLOOR, LOG_FLOOR), 0.5);
    }

    #[test]
    fn test_normalize_matches_ratio() {
        // log-scores differing by ln(8) -> 8 / 9
        let p = normalize_log_scores(8.0f64.ln() - 20.0, -20.0);
        assert!((p - 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_extreme_scores() {
        let p = normalize_log_scores(-5000.0, -10.0);
        assert!((0.0..=1.0).contains(&p));
        assert!(p < 1e-100);

        let p = normalize_log_scores(-10.0, -5000.0);
        assert_eq!(p, 1.0);
    }
}
