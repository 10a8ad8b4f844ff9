//! Suggestion Requester: up to five short options for the CP, TP, or materi field.
//!
//! Unlike content generation this never fails towards the caller: every failure
//! degrades to a single placeholder option so the form stays usable.

use serde::Deserialize;
use tracing::warn;

use crate::curriculum::cp_reference::reference_cp;
use crate::curriculum::form::SuggestionField;
use crate::curriculum::models::{ClassLevel, Subject};
use crate::curriculum::phase::phase_for;
use crate::generation::prompts::{
    fill_template, CP_WITHOUT_REFERENCE, CP_WITH_REFERENCE, MATERI_FROM_CONTEXT,
    SUGGESTION_PROMPT_TEMPLATE, TP_FROM_CONTEXT, TP_FROM_REFERENCE,
};
use crate::generation::schema::suggestion_schema;
use crate::llm_client::ContentProvider;

pub const MAX_SUGGESTIONS: usize = 5;
pub const MISSING_KEY_PLACEHOLDER: &str = "Harap masukkan Kunci API terlebih dahulu.";
pub const FAILURE_PLACEHOLDER: &str = "Gagal mengambil saran. Periksa Kunci API Anda.";

/// TP context must be longer than this many characters to be used instead of the reference.
const MIN_TP_CONTEXT_CHARS: usize = 5;

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    options: Vec<String>,
}

pub fn field_display_name(field: SuggestionField) -> &'static str {
    match field {
        SuggestionField::Cp => "Capaian Pembelajaran (CP)",
        SuggestionField::Tp => "Tujuan Pembelajaran (TP)",
        SuggestionField::Materi => "Materi Pelajaran",
    }
}

/// Fetches suggestions for `field`. Returns at most `MAX_SUGGESTIONS` options.
pub async fn suggest(
    provider: &dyn ContentProvider,
    field: SuggestionField,
    subject: Subject,
    class_level: ClassLevel,
    api_key: &str,
    context: &str,
) -> Vec<String> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return vec![MISSING_KEY_PLACEHOLDER.to_string()];
    }

    let prompt = build_suggestion_prompt(field, subject, class_level, context);

    let raw = match provider
        .complete_json(api_key, &prompt, &suggestion_schema())
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Suggestion call failed for field {}: {e}", field.as_str());
            return vec![FAILURE_PLACEHOLDER.to_string()];
        }
    };

    match serde_json::from_str::<SuggestionResponse>(&raw) {
        Ok(response) => response
            .options
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .collect(),
        Err(e) => {
            warn!("Malformed suggestion response for field {}: {e}", field.as_str());
            vec![FAILURE_PLACEHOLDER.to_string()]
        }
    }
}

/// Builds the suggestion prompt, enriched by the reference CP when one exists.
pub fn build_suggestion_prompt(
    field: SuggestionField,
    subject: Subject,
    class_level: ClassLevel,
    context: &str,
) -> String {
    let phase = phase_for(class_level);
    let reference = reference_cp(subject, phase);

    let field_context = match field {
        SuggestionField::Cp => match reference {
            Some(reference) => fill_template(CP_WITH_REFERENCE, &[("reference", reference)]),
            None => CP_WITHOUT_REFERENCE.to_string(),
        },
        SuggestionField::Tp => {
            if context.chars().count() > MIN_TP_CONTEXT_CHARS {
                fill_template(TP_FROM_CONTEXT, &[("context", context)])
            } else if let Some(reference) = reference {
                fill_template(TP_FROM_REFERENCE, &[("reference", reference)])
            } else {
                String::new()
            }
        }
        SuggestionField::Materi => {
            if context.is_empty() {
                String::new()
            } else {
                fill_template(MATERI_FROM_CONTEXT, &[("context", context)])
            }
        }
    };

    let class_level = class_level.to_string();
    fill_template(
        SUGGESTION_PROMPT_TEMPLATE,
        &[
            ("field_name", field_display_name(field)),
            ("subject", subject.label()),
            ("class_level", class_level.as_str()),
            ("phase", phase.label()),
            ("context", field_context.as_str()),
        ],
    )
}
