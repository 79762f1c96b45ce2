use chrono::{DateTime, Duration, Utc};

use crate::models::candidate::{CandidateRecord, CandidateStats};

/// Counts uploads in the last 7 and 30 days relative to `now` and averages
/// whatever match scores are present on the records.
pub fn compute_stats(candidates: &[CandidateRecord], now: DateTime<Utc>) -> CandidateStats {
    let week_ago = now - Duration::days(7);
    let month_ago = now - Duration::days(30);

    let this_week = candidates
        .iter()
        .filter(|c| c.uploaded_at >= week_ago)
        .count();
    let this_month = candidates
        .iter()
        .filter(|c| c.uploaded_at >= month_ago)
        .count();

    let scores: Vec<f64> = candidates.iter().filter_map(|c| c.match_score).collect();
    let avg_match_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    CandidateStats {
        total: candidates.len(),
        this_week,
        this_month,
        avg_match_score,
    }
}
