//! Resume parser: turns an uploaded document into a `CandidateRecord`.
//!
//! Decoding is the only step that can fail, and only on an unsupported extension.
//! A document that cannot be decoded is logged and parsed as empty text; every
//! field extractor has a fallback, so the pipeline always produces a full record.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extraction::document::{decode_text, DocumentFormat};
use crate::extraction::fields::{
    extract_email, extract_name, extract_phone, extract_skills, extract_summary,
};
use crate::extraction::sections::{extract_education, extract_experience};
use crate::models::candidate::CandidateRecord;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}. Only PDF and DOCX files are allowed.")]
    UnsupportedFormat(String),

    #[error("Failed to decode document: {0}")]
    Decode(String),
}

/// Parses raw document bytes. The extension of `filename` selects the decoder.
pub fn extract_candidate(data: &[u8], filename: &str) -> Result<CandidateRecord, ExtractError> {
    let format = DocumentFormat::from_filename(filename)
        .ok_or_else(|| ExtractError::UnsupportedFormat(filename.to_string()))?;

    let text = match decode_text(data, format) {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not read {filename} as {format:?}, parsing empty text: {e}");
            String::new()
        }
    };
    debug!("Decoded {} characters from {filename}", text.len());

    let record = build_record(&text, Some(filename));
    info!(
        "Parsed resume {filename}: name={:?}, {} skills, {} experience, {} education",
        record.name,
        record.skills.len(),
        record.experience.len(),
        record.education.len()
    );
    Ok(record)
}

/// Assembles a record from already-decoded text.
pub fn build_record(text: &str, source: Option<&str>) -> CandidateRecord {
    let mut record = CandidateRecord::new(extract_name(text), extract_email(text));
    record.phone = extract_phone(text);
    record.skills = extract_skills(text);
    record.experience = extract_experience(text);
    record.education = extract_education(text);
    record.summary = Some(extract_summary(text));
    record.resume_url = source.map(str::to_string);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::document::tests::build_pdf;
    use crate::extraction::fields::{DEFAULT_SUMMARY, UNKNOWN_NAME};
    use crate::extraction::sections::{default_education, default_experience};
    use crate::models::candidate::SENTINEL_EMAIL;

    const RESUME: &str = "Priya Raman
priya.raman@example.com
+1 415-555-0134
Platform engineer with a decade of experience across Kubernetes, Go and Python.
Staff Platform Engineer
Globex
Engineering Manager
Initech
M.S. in Computer Science 2012
Skills: Python, Kubernetes, Docker, AWS, Leadership
";

    #[test]
    fn test_empty_text_yields_all_fallbacks() {
        let record = build_record("", None);
        assert_eq!(record.name, UNKNOWN_NAME);
        assert_eq!(record.email, SENTINEL_EMAIL);
        assert!(record.phone.is_none());
        assert!(record.skills.is_empty());
        assert_eq!(record.experience, vec![default_experience()]);
        assert_eq!(record.education, vec![default_education()]);
        assert_eq!(record.summary.as_deref(), Some(DEFAULT_SUMMARY));
        assert!(record.match_score.is_none());
    }

    #[test]
    fn test_full_resume_text() {
        let record = build_record(RESUME, Some("priya.pdf"));
        assert_eq!(record.name, "Priya Raman");
        assert_eq!(record.email, "priya.raman@example.com");
        assert_eq!(record.phone.as_deref(), Some("+1 415-555-0134"));
        assert_eq!(
            record.skills,
            vec!["Python", "AWS", "Docker", "Kubernetes", "Leadership"]
        );
        assert_eq!(record.experience.len(), 3);
        assert_eq!(record.experience[1].position, "Staff Platform Engineer");
        assert_eq!(record.experience[1].company, "Globex");
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].year, "2012");
        assert_eq!(record.education[0].field.as_deref(), Some("Computer Science"));
        assert_eq!(
            record.summary.as_deref(),
            Some("Platform engineer with a decade of experience across Kubernetes, Go and Python.")
        );
        assert_eq!(record.resume_url.as_deref(), Some("priya.pdf"));
    }

    #[test]
    fn test_skills_never_exceed_cap() {
        let text = crate::extraction::fields::SKILL_CATALOG.join("\n");
        assert!(build_record(&text, None).skills.len() <= 15);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = extract_candidate(b"hello", "resume.txt").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ref f) if f == "resume.txt"));
    }

    #[test]
    fn test_pdf_that_trips_the_decoder_still_yields_a_record() {
        let bytes = build_pdf("BT Tf Td Tj ET");
        let record = extract_candidate(&bytes, "cv.pdf").unwrap();
        assert_eq!(record.name, UNKNOWN_NAME);
        assert_eq!(record.email, SENTINEL_EMAIL);
        assert_eq!(record.experience, vec![default_experience()]);
        assert_eq!(record.resume_url.as_deref(), Some("cv.pdf"));
    }

    #[test]
    fn test_undecodable_document_degrades_to_empty_text() {
        let record = extract_candidate(b"not a docx", "broken.docx").unwrap();
        assert_eq!(record.name, UNKNOWN_NAME);
        assert_eq!(record.email, SENTINEL_EMAIL);
        assert_eq!(record.resume_url.as_deref(), Some("broken.docx"));
    }
}
