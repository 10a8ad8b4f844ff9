use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::curriculum::models::FormData;
use crate::generation::content::GeneratedContent;

/// Form input merged with model output: the one record the document is rendered from.
///
/// Built once per successful generation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpmResult {
    #[serde(flatten)]
    pub form: FormData,
    #[serde(flatten)]
    pub content: GeneratedContent,
    /// Date printed above the teacher's signature.
    pub issued_on: NaiveDate,
}

/// Structural merge; both inputs already satisfy their own schemas.
pub fn assemble(form: FormData, content: GeneratedContent, issued_on: NaiveDate) -> RpmResult {
    RpmResult {
        form,
        content,
        issued_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::content::parse_generated_content;
    use crate::generation::testing::sample_content_json;

    fn sample_result() -> RpmResult {
        let content = parse_generated_content(&sample_content_json(2).to_string()).unwrap();
        assemble(
            FormData::default(),
            content,
            NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
        )
    }

    #[test]
    fn test_result_serializes_flat() {
        let value = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(value["subject"], "Bahasa Indonesia");
        assert_eq!(value["teacherNIP"], "");
        assert_eq!(value["rubric"]["rows"].as_array().unwrap().len(), 2);
        assert_eq!(value["assessments"]["final"], "<ul><li>Portofolio</li></ul>");
        assert_eq!(value["issuedOn"], "2026-10-14");
        assert!(value.get("form").is_none());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_result_deserializes_from_flat_json() {
        let original = sample_result();
        let value = serde_json::to_value(&original).unwrap();
        let recovered: RpmResult = serde_json::from_value(value).unwrap();
        assert_eq!(recovered, original);
    }
}
