//! Component scores for candidate/job matching.
//!
//! overall = 0.7 × skill + 0.3 × experience (+ noise, applied by the matcher).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::candidate::CandidateRecord;

pub const SKILL_WEIGHT: f64 = 0.7;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;

/// Skill score when the job lists no required skills.
pub const NEUTRAL_SKILL_SCORE: f64 = 0.5;
/// Experience score when the requirement text carries no number.
pub const DEFAULT_EXPERIENCE_SCORE: f64 = 0.7;
/// Each experience entry is counted as this many years.
const YEARS_PER_ENTRY: f64 = 2.0;

lazy_static! {
    static ref FIRST_INTEGER: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Partition of the job's required skills against one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// A required skill is met when it and some candidate skill contain one another,
/// ignoring case. Containment runs both ways, so "Java" and "JavaScript" match.
pub fn compute_skill_match(candidate_skills: &[String], required_skills: &[String]) -> SkillMatch {
    let candidate_lower: Vec<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for required in required_skills {
        let required_lower = required.to_lowercase();
        let found = candidate_lower
            .iter()
            .any(|c| c.contains(&required_lower) || required_lower.contains(c.as_str()));

        if found {
            matched.push(required.clone());
        } else {
            missing.push(required.clone());
        }
    }

    let score = if required_skills.is_empty() {
        NEUTRAL_SKILL_SCORE
    } else {
        matched.len() as f64 / required_skills.len() as f64
    };

    SkillMatch {
        score,
        matched,
        missing,
    }
}

/// Years implied by the number of experience entries.
pub fn estimated_years(candidate: &CandidateRecord) -> f64 {
    candidate.experience.len() as f64 * YEARS_PER_ENTRY
}

/// First ASCII integer in free text such as "3-5 years" -> 3.
/// Values too large for `u64` saturate.
pub fn required_years(requirement: &str) -> Option<u64> {
    FIRST_INTEGER
        .find(requirement)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

pub fn compute_experience_score(candidate: &CandidateRecord, requirement: &str) -> f64 {
    let Some(required) = required_years(requirement) else {
        return DEFAULT_EXPERIENCE_SCORE;
    };
    let required = required as f64;
    let years = estimated_years(candidate);

    if years >= required {
        1.0
    } else if years >= required * 0.7 {
        0.8
    } else {
        0.5
    }
}

/// Weighted combination of the two component scores, before noise.
pub fn combine_scores(skill: f64, experience: f64) -> f64 {
    SKILL_WEIGHT * skill + EXPERIENCE_WEIGHT * experience
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
