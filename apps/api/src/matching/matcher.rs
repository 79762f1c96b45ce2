//! Rule-based candidate ranking.
//!
//! Algorithm, per candidate:
//! 1. skill score from the required-skill partition (see `scoring`)
//! 2. experience score from entry count vs the first number in the requirement
//! 3. overall = 0.7 × skill + 0.3 × experience + noise, clamped to [0, 1]
//! 4. reasoning from the overall score (≥0.8 excellent, ≥0.6 good, else moderate)
//!
//! Results are stably sorted by the clamped, unrounded overall score, so equal
//! scores keep input order. The reported `match_score` is rounded to 2 decimals.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::matching::noise::{NoiseSource, UniformNoise};
use crate::matching::reasoning::build_reasoning;
use crate::matching::scoring::{
    combine_scores, compute_experience_score, compute_skill_match, round2,
};
use crate::models::candidate::CandidateRecord;
use crate::models::job::{JobDescription, MatchResult};

pub const DEFAULT_TOP_N: i64 = 10;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("topN must be zero or greater, got {0}")]
    InvalidTopN(i64),
}

/// Validates a client-supplied result limit. Zero is allowed and yields no results.
pub fn parse_top_n(top_n: i64) -> Result<usize, MatchError> {
    usize::try_from(top_n).map_err(|_| MatchError::InvalidTopN(top_n))
}

pub struct Matcher {
    noise: Arc<dyn NoiseSource>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Arc::new(UniformNoise))
    }
}

impl Matcher {
    pub fn new(noise: Arc<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    /// Scores every candidate against `job` and returns at most `top_n` results,
    /// best first. Stored records are not touched; each result carries a copy.
    pub fn rank(
        &self,
        job: &JobDescription,
        candidates: &[CandidateRecord],
        top_n: usize,
    ) -> Vec<MatchResult> {
        let mut scored: Vec<(f64, MatchResult)> = candidates
            .iter()
            .map(|candidate| self.score_candidate(job, candidate))
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(top_n);

        debug!(
            "Ranked {} candidates for '{}', returning {}",
            candidates.len(),
            job.title,
            scored.len()
        );

        scored.into_iter().map(|(_, result)| result).collect()
    }

    /// Returns the unrounded overall score alongside the finished result.
    fn score_candidate(&self, job: &JobDescription, candidate: &CandidateRecord) -> (f64, MatchResult) {
        let skills = compute_skill_match(&candidate.skills, &job.skills);
        let experience = compute_experience_score(candidate, &job.experience);

        let overall = (combine_scores(skills.score, experience) + self.noise.sample()).clamp(0.0, 1.0);
        let match_score = round2(overall);

        let reasoning = build_reasoning(
            &candidate.name,
            skills.matched.len(),
            skills.missing.len(),
            overall,
        );

        let mut candidate = candidate.clone();
        candidate.match_score = Some(match_score);

        let result = MatchResult {
            candidate,
            match_score,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            reasoning,
        };
        (overall, result)
    }
}
