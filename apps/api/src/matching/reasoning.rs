pub const EXCELLENT_THRESHOLD: f64 = 0.8;
pub const GOOD_THRESHOLD: f64 = 0.6;

/// Builds the human-readable explanation attached to a match result.
pub fn build_reasoning(
    candidate_name: &str,
    matched_count: usize,
    missing_count: usize,
    overall_score: f64,
) -> String {
    let required_count = matched_count + missing_count;

    if overall_score >= EXCELLENT_THRESHOLD {
        format!(
            "Excellent match! {candidate_name} has {matched_count} out of {required_count} required skills and strong relevant experience."
        )
    } else if overall_score >= GOOD_THRESHOLD {
        format!(
            "Good match. {candidate_name} possesses most key skills ({matched_count} matched) but may need training in {missing_count} areas."
        )
    } else {
        format!(
            "Moderate match. {candidate_name} has some relevant skills but is missing several key requirements. Consider for roles with training opportunities."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excellent_cites_matched_out_of_total() {
        let r = build_reasoning("Jane", 4, 1, 0.85);
        assert!(r.starts_with("Excellent match!"));
        assert!(r.contains("Jane has 4 out of 5 required skills"));
    }

    #[test]
    fn test_excellent_threshold_is_inclusive() {
        assert!(build_reasoning("Jane", 1, 0, 0.8).starts_with("Excellent"));
    }

    #[test]
    fn test_good_cites_matched_and_missing() {
        let r = build_reasoning("Omar", 3, 2, 0.7);
        assert!(r.starts_with("Good match."));
        assert!(r.contains("(3 matched)"));
        assert!(r.contains("training in 2 areas"));
    }

    #[test]
    fn test_good_threshold_is_inclusive() {
        assert!(build_reasoning("Omar", 1, 1, 0.6).starts_with("Good"));
        assert!(build_reasoning("Omar", 1, 1, 0.7999).starts_with("Good"));
    }

    #[test]
    fn test_moderate_below_good_threshold() {
        let r = build_reasoning("Li", 0, 3, 0.59);
        assert!(r.starts_with("Moderate match."));
        assert!(r.contains("Li"));
        assert!(r.contains("training opportunities"));
    }
}
