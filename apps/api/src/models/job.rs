use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Required skills, matched against candidate skills.
    pub skills: Vec<String>,
    /// Free text such as "3-5 years".
    pub experience: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A scored pairing of one candidate against a job. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate: CandidateRecord,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reasoning: String,
}
