//! Keyword-driven extraction of work history and education entries.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::candidate::{EducationEntry, ExperienceEntry};

const ROLE_KEYWORDS: &[&str] = &["engineer", "developer", "manager", "lead", "architect"];
const DEGREE_KEYWORDS: &[&str] = &["Bachelor", "Master", "PhD", "B.S.", "M.S.", "B.Tech", "M.Tech"];

const MAX_EXPERIENCE: usize = 3;
const MAX_EDUCATION: usize = 2;
const COMPANY_MAX_CHARS: usize = 50;

const PLACEHOLDER_COMPANY: &str = "Company Name";
const PLACEHOLDER_DURATION: &str = "2020 - Present";
const PLACEHOLDER_DESCRIPTION: &str = "Experience description";
const PLACEHOLDER_INSTITUTION: &str = "University";
const PLACEHOLDER_YEAR: &str = "2020";

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"(19|20)\d{2}").unwrap();
    static ref FIELD_RE: Regex =
        Regex::new(r"\bin\s+([A-Z][A-Za-z&]*(?:\s+[A-Z&][A-Za-z&]*)*)").unwrap();
}

/// Entry used when no role line is found.
pub fn default_experience() -> ExperienceEntry {
    ExperienceEntry {
        company: "Tech Company".to_string(),
        position: "Software Engineer".to_string(),
        duration: PLACEHOLDER_DURATION.to_string(),
        description: Some("Software development experience".to_string()),
        start_date: None,
        end_date: None,
    }
}

/// Entry used when no degree line is found.
pub fn default_education() -> EducationEntry {
    EducationEntry {
        institution: PLACEHOLDER_INSTITUTION.to_string(),
        degree: "Bachelor's Degree".to_string(),
        field: None,
        year: PLACEHOLDER_YEAR.to_string(),
    }
}

/// Each line mentioning a role keyword becomes an entry; the following line,
/// when short, is taken as the company. Never returns an empty list.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut experiences = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line_lower = line.to_lowercase();
        if !ROLE_KEYWORDS.iter().any(|kw| line_lower.contains(kw)) {
            continue;
        }

        let company = lines
            .get(i + 1)
            .map(|next| next.trim())
            .filter(|next| next.chars().count() < COMPANY_MAX_CHARS)
            .unwrap_or(PLACEHOLDER_COMPANY);

        experiences.push(ExperienceEntry {
            company: company.to_string(),
            position: line.trim().to_string(),
            duration: PLACEHOLDER_DURATION.to_string(),
            description: Some(PLACEHOLDER_DESCRIPTION.to_string()),
            start_date: None,
            end_date: None,
        });

        if experiences.len() >= MAX_EXPERIENCE {
            break;
        }
    }

    if experiences.is_empty() {
        experiences.push(default_experience());
    }
    experiences
}

/// Each line naming a degree becomes an entry. Never returns an empty list.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let mut education = Vec::new();

    for line in text.lines() {
        if !DEGREE_KEYWORDS.iter().any(|kw| line.contains(kw)) {
            continue;
        }

        let year = YEAR_RE
            .find(line)
            .map(|m| m.as_str())
            .unwrap_or(PLACEHOLDER_YEAR);

        education.push(EducationEntry {
            institution: PLACEHOLDER_INSTITUTION.to_string(),
            degree: line.trim().to_string(),
            field: field_of_study(line),
            year: year.to_string(),
        });

        if education.len() >= MAX_EDUCATION {
            break;
        }
    }

    if education.is_empty() {
        education.push(default_education());
    }
    education
}

/// Capitalised phrase after "in", e.g. "B.S. in Computer Science, 2018" -> "Computer Science".
fn field_of_study(line: &str) -> Option<String> {
    FIELD_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_line_with_company_on_next_line() {
        let text = "Jane Doe\nSenior Backend Engineer\nAcme Corp\n2019 - 2023";
        let exp = extract_experience(text);
        assert_eq!(exp.len(), 1);
        assert_eq!(exp[0].position, "Senior Backend Engineer");
        assert_eq!(exp[0].company, "Acme Corp");
        assert_eq!(exp[0].duration, PLACEHOLDER_DURATION);
        assert_eq!(exp[0].description.as_deref(), Some(PLACEHOLDER_DESCRIPTION));
    }

    #[test]
    fn test_long_next_line_is_not_a_company() {
        let text = "Engineering Manager\nResponsible for a platform team of twelve people across three time zones";
        let exp = extract_experience(text);
        assert_eq!(exp[0].company, PLACEHOLDER_COMPANY);
    }

    #[test]
    fn test_role_line_at_end_uses_placeholder_company() {
        let exp = extract_experience("Tech Lead");
        assert_eq!(exp[0].company, PLACEHOLDER_COMPANY);
    }

    #[test]
    fn test_role_keywords_are_case_insensitive() {
        let exp = extract_experience("SOFTWARE ARCHITECT\nInitech");
        assert_eq!(exp[0].position, "SOFTWARE ARCHITECT");
    }

    #[test]
    fn test_experience_capped_at_three() {
        let text = "Engineer\nA\nDeveloper\nB\nManager\nC\nArchitect\nD";
        let exp = extract_experience(text);
        assert_eq!(exp.len(), MAX_EXPERIENCE);
        assert_eq!(exp[2].position, "Manager");
    }

    #[test]
    fn test_no_role_lines_yields_default_entry() {
        let exp = extract_experience("Barista\nCoffee shop");
        assert_eq!(exp, vec![default_experience()]);
        assert_eq!(extract_experience(""), vec![default_experience()]);
    }

    #[test]
    fn test_degree_line_with_year_and_field() {
        let edu = extract_education("Bachelor of Science in Computer Science, 2016");
        assert_eq!(edu.len(), 1);
        assert_eq!(edu[0].degree, "Bachelor of Science in Computer Science, 2016");
        assert_eq!(edu[0].institution, PLACEHOLDER_INSTITUTION);
        assert_eq!(edu[0].year, "2016");
        assert_eq!(edu[0].field.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_degree_without_year_uses_placeholder() {
        let edu = extract_education("PhD, Stanford");
        assert_eq!(edu[0].year, PLACEHOLDER_YEAR);
        assert_eq!(edu[0].field, None);
    }

    #[test]
    fn test_degree_keywords_are_case_sensitive() {
        assert_eq!(extract_education("bachelor of arts"), vec![default_education()]);
    }

    #[test]
    fn test_education_capped_at_two() {
        let text = "B.S. Physics 2010\nM.S. Physics 2012\nPhD Physics 2016";
        let edu = extract_education(text);
        assert_eq!(edu.len(), MAX_EDUCATION);
        assert_eq!(edu[1].year, "2012");
    }

    #[test]
    fn test_no_degree_lines_yields_default_entry() {
        assert_eq!(extract_education(""), vec![default_education()]);
    }
}
