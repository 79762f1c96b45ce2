//! Line-oriented heuristics for the contact and profile fields of a resume.
//!
//! Every extractor works on plain text and falls back to a fixed value, so a
//! sparse or empty document still yields a complete record.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::candidate::SENTINEL_EMAIL;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const DEFAULT_SUMMARY: &str = "Professional with experience in software development";

const MAX_SKILLS: usize = 15;
const NAME_SCAN_LINES: usize = 3;
const NAME_MAX_CHARS: usize = 50;
const NAME_MAX_WORDS: usize = 4;
const SUMMARY_MIN_CHARS: usize = 50;

/// Known skills and technologies, in output order.
pub const SKILL_CATALOG: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "FastAPI",
    "Django",
    "Flask",
    "Spring Boot",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "CI/CD",
    "Agile",
    "Scrum",
    "HTML",
    "CSS",
    "Tailwind",
    "Bootstrap",
    "REST",
    "GraphQL",
    "Microservices",
    "Machine Learning",
    "AI",
    "Deep Learning",
    "NLP",
    "Data Analysis",
    "Pandas",
    "NumPy",
    "TensorFlow",
    "Leadership",
    "Communication",
    "Problem Solving",
];

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref PHONE_RE: Regex =
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
}

/// Trimmed, non-blank lines in document order.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn extract_name(text: &str) -> String {
    let lines = non_blank_lines(text);

    let candidate = lines.iter().take(NAME_SCAN_LINES).find(|line| {
        !line.contains('@')
            && !PHONE_RE.is_match(line)
            && line.chars().count() < NAME_MAX_CHARS
            && line.split_whitespace().count() <= NAME_MAX_WORDS
    });

    candidate
        .or_else(|| lines.first())
        .map(|l| l.to_string())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(SENTINEL_EMAIL)
        .to_string()
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    SKILL_CATALOG
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .take(MAX_SKILLS)
        .map(|s| s.to_string())
        .collect()
}

/// First sufficiently long line among the four after the name line.
pub fn extract_summary(text: &str) -> String {
    non_blank_lines(text)
        .into_iter()
        .skip(1)
        .take(4)
        .find(|line| line.chars().count() > SUMMARY_MIN_CHARS && !line.contains('@'))
        .unwrap_or(DEFAULT_SUMMARY)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "
        Jane Doe
        jane.doe@example.com | (555) 123-4567
        Backend developer with eight years of experience building Python and SQL services.

        Senior Software Engineer
        Acme Corp
        Skills: Python, React, Docker, PostgreSQL
    ";

    #[test]
    fn test_name_is_first_short_line() {
        assert_eq!(extract_name(RESUME), "Jane Doe");
    }

    #[test]
    fn test_name_skips_contact_lines() {
        let text = "jane@example.com\n+1 555.123.4567\nJane Doe\n";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_name_skips_long_lines() {
        let text = "Curriculum vitae of a senior engineer\nJane Doe\n";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_name_falls_back_to_first_line() {
        let text = "jane@example.com\n555-123-4567\nA very long line that has far too many words in it\nJane";
        assert_eq!(extract_name(text), "jane@example.com");
    }

    #[test]
    fn test_name_unknown_for_blank_text() {
        assert_eq!(extract_name(""), UNKNOWN_NAME);
        assert_eq!(extract_name("   \n\t\n"), UNKNOWN_NAME);
    }

    #[test]
    fn test_email_first_match() {
        let text = "contact: first@example.com, second@example.org";
        assert_eq!(extract_email(text), "first@example.com");
    }

    #[test]
    fn test_email_inside_punctuation() {
        assert_eq!(
            extract_email("Email: <jane.doe+cv@mail.example.org>."),
            "jane.doe+cv@mail.example.org"
        );
    }

    #[test]
    fn test_email_needs_two_letter_tld() {
        assert_eq!(extract_email("reach a@b.c"), SENTINEL_EMAIL);
        assert_eq!(extract_email("jane.doe@ nowhere"), SENTINEL_EMAIL);
    }

    #[test]
    fn test_email_sentinel_when_absent() {
        assert_eq!(extract_email("no contact details"), SENTINEL_EMAIL);
    }

    #[test]
    fn test_phone_with_parenthesised_area_code() {
        assert_eq!(extract_phone(RESUME).as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(
            extract_phone("Call +1 555.123.4567 anytime").as_deref(),
            Some("+1 555.123.4567")
        );
    }

    #[test]
    fn test_phone_absent() {
        assert_eq!(extract_phone("no digits here"), None);
    }

    #[test]
    fn test_skills_preserve_catalog_order() {
        let skills = extract_skills("docker, python and REACT");
        assert_eq!(skills, vec!["Python", "React", "Docker"]);
    }

    #[test]
    fn test_skills_substring_overmatch_is_kept() {
        // "JavaScript" contains "Java"; both catalog terms are reported.
        let skills = extract_skills("JavaScript");
        assert!(skills.contains(&"Java".to_string()));
        assert!(skills.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_skills_capped_at_fifteen() {
        let everything = SKILL_CATALOG.join(" ");
        let skills = extract_skills(&everything);
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], "Python");
    }

    #[test]
    fn test_summary_picks_long_line() {
        assert_eq!(
            extract_summary(RESUME),
            "Backend developer with eight years of experience building Python and SQL services."
        );
    }

    #[test]
    fn test_summary_ignores_first_line_and_email_lines() {
        let long = "x".repeat(60);
        let text = format!("{long}\nreach me at someone@example.com with anything at all, any time\nShort");
        assert_eq!(extract_summary(&text), DEFAULT_SUMMARY);
    }

    #[test]
    fn test_summary_only_scans_four_lines_after_name() {
        let long = "y".repeat(60);
        let text = format!("Name\na\nb\nc\nd\n{long}");
        assert_eq!(extract_summary(&text), DEFAULT_SUMMARY);
    }
}
