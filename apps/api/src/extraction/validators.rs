const PATH_SEPARATORS: &[char] = &['/', '\\'];

/// Extensions accepted for resume uploads, lowercase with leading dot.
pub const RESUME_EXTENSIONS: &[&str] = &[".pdf", ".docx"];

/// Returns the lowercase extension including the dot, or an empty string.
pub fn file_extension(filename: &str) -> String {
    let base = filename.rsplit(PATH_SEPARATORS).next().unwrap_or(filename);
    match base.rfind('.') {
        Some(idx) if idx > 0 => base[idx..].to_lowercase(),
        _ => String::new(),
    }
}

pub fn is_valid_resume_file(filename: &str) -> bool {
    RESUME_EXTENSIONS.contains(&file_extension(filename).as_str())
}

/// Strips any directory component and path-traversal characters from an uploaded filename.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(PATH_SEPARATORS).next().unwrap_or(filename);
    base.replace("..", "").replace('\0', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension_is_lowercased() {
        assert_eq!(file_extension("Resume.PDF"), ".pdf");
        assert_eq!(file_extension("cv.final.docx"), ".docx");
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(".bashrc"), "");
    }

    #[test]
    fn test_is_valid_resume_file() {
        assert!(is_valid_resume_file("jane.pdf"));
        assert!(is_valid_resume_file("jane.DOCX"));
        assert!(!is_valid_resume_file("jane.doc"));
        assert!(!is_valid_resume_file("jane.txt"));
    }

    #[test]
    fn test_sanitize_filename_strips_paths() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\jane\\cv.pdf"), "cv.pdf");
        assert_eq!(sanitize_filename("my..cv.pdf"), "mycv.pdf");
        assert_eq!(sanitize_filename("resume.docx"), "resume.docx");
    }
}
