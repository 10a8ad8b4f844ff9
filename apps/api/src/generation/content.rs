//! Content Requester: fills the pedagogical prose of an RPM in one structured call.
//!
//! Flow: credential check → build prompt → provider call with `content_schema()` →
//! JSON parse into `GeneratedContent`.
//!
//! All-or-nothing: any failure surfaces as `GenerationError`, there is no partial
//! result and no retry. HTML fragments are accepted as-is.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::curriculum::models::{FormData, SCHOOL_NAME};
use crate::generation::prompts::{fill_template, CONTENT_PROMPT_TEMPLATE};
use crate::generation::schema::content_schema;
use crate::llm_client::{ContentProvider, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Ordered-list HTML fragments for the three learning phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningExperiences {
    pub memahami: String,
    pub mengaplikasi: String,
    pub refleksi: String,
}

/// Unordered-list HTML fragments for the three assessment moments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessments {
    pub initial: String,
    pub process: String,
    #[serde(rename = "final")]
    pub final_: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricRow {
    pub aspect: String,
    pub score4: String,
    pub score3: String,
    pub score2: String,
    pub score1: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub title: String,
    pub rows: Vec<RubricRow>,
}

/// Model output for one RPM. Every field is required; a response missing any of
/// them fails deserialization and is treated as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub student_characteristics: String,
    pub cross_disciplinary: String,
    pub topics: String,
    pub partnerships: String,
    pub environment: String,
    pub digital_tools: String,
    pub learning_experiences: LearningExperiences,
    pub assessments: Assessments,
    pub rubric: Rubric,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API Key wajib diisi.")]
    MissingCredential,

    #[error("provider call failed: {0}")]
    Provider(#[from] LlmError),

    #[error("response does not match the content schema: {0}")]
    Malformed(#[source] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Requester
// ────────────────────────────────────────────────────────────────────────────

/// Generates the prose fields for `form` with the caller's credential.
pub async fn generate_content(
    provider: &dyn ContentProvider,
    form: &FormData,
    api_key: &str,
) -> Result<GeneratedContent, GenerationError> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(GenerationError::MissingCredential);
    }

    let prompt = build_content_prompt(form);
    info!(
        "Requesting RPM content via {} backend: subject={}, class={}, meetings={}",
        provider.backend(),
        form.subject,
        form.class_level,
        form.meetings.len()
    );

    let raw = provider
        .complete_json(api_key, &prompt, &content_schema())
        .await?;

    let content = parse_generated_content(&raw)?;
    info!(
        "RPM content received: {} rubric rows",
        content.rubric.rows.len()
    );
    Ok(content)
}

/// Parses raw provider text into `GeneratedContent`.
pub fn parse_generated_content(raw: &str) -> Result<GeneratedContent, GenerationError> {
    serde_json::from_str(raw).map_err(|e| {
        warn!("Malformed RPM content response: {e}");
        GenerationError::Malformed(e)
    })
}

/// Fills the content prompt template from the form.
pub fn build_content_prompt(form: &FormData) -> String {
    let class_level = form.class_level.to_string();
    let dimensions = form.dimension_labels();
    let pedagogies = form.pedagogy_prompt_labels();
    fill_template(
        CONTENT_PROMPT_TEMPLATE,
        &[
            ("school", SCHOOL_NAME),
            ("class_level", class_level.as_str()),
            ("subject", form.subject.label()),
            ("materi", form.materi.as_str()),
            ("cp", form.cp.as_str()),
            ("tp", form.tp.as_str()),
            ("dimensions", dimensions.as_str()),
            ("pedagogies", pedagogies.as_str()),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::models::{GraduateDimension, Meeting, PedagogicalPractice, Subject};
    use crate::generation::testing::{sample_content_json, StubProvider};

    fn two_meeting_form() -> FormData {
        let mut form = FormData::default();
        form.subject = Subject::Matematika;
        form.cp = "Memahami pecahan".to_string();
        form.tp = "Membandingkan pecahan".to_string();
        form.materi = "Pecahan senilai".to_string();
        form.meeting_count = 2;
        form.meetings = vec![
            Meeting {
                meeting_number: 1,
                pedagogy: PedagogicalPractice::InkuiriDiscovery,
            },
            Meeting {
                meeting_number: 2,
                pedagogy: PedagogicalPractice::GameBased,
            },
        ];
        form.dimensions.insert(GraduateDimension::PenalaranKritis);
        form.dimensions.insert(GraduateDimension::Kolaborasi);
        form
    }

    #[test]
    fn test_prompt_embeds_all_form_fields() {
        let prompt = build_content_prompt(&two_meeting_form());
        assert!(prompt.contains("SDN Pekayon 09"));
        assert!(prompt.contains("- Kelas: 1"));
        assert!(prompt.contains("- Mapel: Matematika"));
        assert!(prompt.contains("- Materi: Pecahan senilai"));
        assert!(prompt.contains("- CP: Memahami pecahan"));
        assert!(prompt.contains("- TP: Membandingkan pecahan"));
        assert!(prompt.contains("Penalaran Kritis, Kolaborasi"));
        assert!(prompt.contains(
            "Pertemuan 1: Inkuiri-Discovery Learning, Pertemuan 2: Game Based Learning"
        ));
        assert!(!prompt.contains("{cp}") && !prompt.contains("{pedagogies}"));
    }

    #[test]
    fn test_prompt_keeps_braces_typed_by_teacher() {
        let mut form = two_meeting_form();
        form.materi = "Kurung kurawal {tp} dalam teks".to_string();
        form.tp = "TUJUAN".to_string();
        let prompt = build_content_prompt(&form);
        assert!(prompt.contains("- Materi: Kurung kurawal {tp} dalam teks"));
        assert!(prompt.contains("- TP: TUJUAN"));
    }

    #[test]
    fn test_parse_full_response() {
        let content = parse_generated_content(&sample_content_json(3).to_string()).unwrap();
        assert_eq!(content.rubric.rows.len(), 3);
        assert!(content.learning_experiences.memahami.starts_with("<ol>"));
        assert!(content.assessments.final_.contains("Portofolio"));
    }

    #[test]
    fn test_response_missing_rubric_is_malformed() {
        let mut value = sample_content_json(2);
        value.as_object_mut().unwrap().remove("rubric");
        let result = parse_generated_content(&value.to_string());
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn test_rubric_row_missing_band_is_malformed() {
        let mut value = sample_content_json(1);
        value["rubric"]["rows"][0]
            .as_object_mut()
            .unwrap()
            .remove("score1");
        assert!(matches!(
            parse_generated_content(&value.to_string()),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_json_response_is_malformed() {
        assert!(matches!(
            parse_generated_content("maaf, saya tidak bisa"),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_credential_makes_no_call() {
        let provider = StubProvider::replying(sample_content_json(1).to_string());
        let result = generate_content(&provider, &two_meeting_form(), "   ").await;
        assert!(matches!(result, Err(GenerationError::MissingCredential)));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_schema() {
        let provider = StubProvider::replying(sample_content_json(2).to_string());
        let content = generate_content(&provider, &two_meeting_form(), "key-123")
            .await
            .unwrap();
        assert_eq!(content.rubric.rows.len(), 2);

        let call = provider.last_call().unwrap();
        assert_eq!(call.api_key, "key-123");
        assert!(call.prompt.contains("Pertemuan 2: Game Based Learning"));
        assert_eq!(call.schema["required"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_provider_failure_is_propagated() {
        let provider = StubProvider::failing();
        let result = generate_content(&provider, &two_meeting_form(), "key").await;
        assert!(matches!(result, Err(GenerationError::Provider(_))));
    }
}
