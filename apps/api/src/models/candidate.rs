use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder stored when no usable email address is found in a resume.
pub const SENTINEL_EMAIL: &str = "noemail@example.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    pub year: String,
}

/// Structured profile extracted from a resume document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    /// Only ever set on copies handed out inside match results.
    #[serde(default)]
    pub match_score: Option<f64>,
}

impl CandidateRecord {
    /// Creates an empty record with a fresh time-ordered id, stamped with the current time.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            email: email.into(),
            phone: None,
            location: None,
            skills: vec![],
            experience: vec![],
            education: vec![],
            summary: None,
            resume_url: None,
            uploaded_at: Utc::now(),
            match_score: None,
        }
    }

    /// Case-insensitive substring search over the name and every skill.
    pub fn matches_query(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.name.to_lowercase().contains(&query_lower)
            || self
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&query_lower))
    }
}

/// Upload counters and average score across the stored collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStats {
    pub total: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub avg_match_score: f64,
}
