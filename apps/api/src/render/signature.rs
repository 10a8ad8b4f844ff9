//! Signature policy: which teacher gets a pre-scanned signature image.

/// Exact name (after trimming) whose signature image is on file.
pub const SIGNATURE_OWNER: &str = "Teguh Firmansyah Apriliana, S.Pd";
pub const SIGNATURE_IMAGE_URL: &str = "https://i.ibb.co.com/KctJSrRC/ttd-gue.png";

/// Case-sensitive; only leading and trailing whitespace is ignored.
pub fn shows_signature(teacher_name: &str) -> bool {
    teacher_name.trim() == SIGNATURE_OWNER
}

pub fn signature_image_for(teacher_name: &str) -> Option<&'static str> {
    shows_signature(teacher_name).then_some(SIGNATURE_IMAGE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_shows_signature() {
        assert!(shows_signature("Teguh Firmansyah Apriliana, S.Pd"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(shows_signature("  Teguh Firmansyah Apriliana, S.Pd\n"));
    }

    #[test]
    fn test_case_and_inner_spacing_matter() {
        assert!(!shows_signature("teguh firmansyah apriliana, s.pd"));
        assert!(!shows_signature("Teguh  Firmansyah Apriliana, S.Pd"));
        assert!(!shows_signature("Teguh Firmansyah Apriliana"));
        assert!(!shows_signature(""));
    }

    #[test]
    fn test_image_only_for_owner() {
        assert_eq!(
            signature_image_for("Teguh Firmansyah Apriliana, S.Pd"),
            Some(SIGNATURE_IMAGE_URL)
        );
        assert_eq!(signature_image_for("Siti Aminah, S.Pd"), None);
    }
}
