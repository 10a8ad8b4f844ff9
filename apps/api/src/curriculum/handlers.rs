//! Axum route handlers for the catalog and the form edits.
//!
//! The form lives in the browser; every edit endpoint takes the current form,
//! applies one operation, and returns the updated form.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::curriculum::form::{
    apply_suggestion, check_invariants, set_meeting_count, set_pedagogy, toggle_dimension, SuggestionField,
    SuggestionSelection,
};
use crate::curriculum::models::{
    ClassLevel, FormData, GraduateDimension, PedagogicalPractice, Semester, Subject, MAX_MEETINGS,
};
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub class_levels: Vec<ClassLevel>,
    pub semesters: Vec<Semester>,
    pub subjects: Vec<Subject>,
    pub pedagogical_practices: Vec<PedagogicalPractice>,
    pub dimensions: Vec<GraduateDimension>,
    pub max_meetings: u8,
    pub default_form: FormData,
}

#[derive(Debug, Deserialize)]
pub struct MeetingCountRequest {
    pub form: FormData,
    pub count: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedagogyRequest {
    pub form: FormData,
    pub meeting_number: u8,
    pub pedagogy: PedagogicalPractice,
}

#[derive(Debug, Deserialize)]
pub struct DimensionRequest {
    pub form: FormData,
    pub dimension: GraduateDimension,
}

#[derive(Debug, Deserialize)]
pub struct ApplySuggestionRequest {
    pub form: FormData,
    pub field: SuggestionField,
    pub selection: SuggestionSelection,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        class_levels: ClassLevel::ALL.to_vec(),
        semesters: Semester::ALL.to_vec(),
        subjects: Subject::ALL.to_vec(),
        pedagogical_practices: PedagogicalPractice::ALL.to_vec(),
        dimensions: GraduateDimension::ALL.to_vec(),
        max_meetings: MAX_MEETINGS,
        default_form: FormData::default(),
    })
}

/// POST /api/v1/form/meetings
pub async fn handle_set_meeting_count(
    Json(request): Json<MeetingCountRequest>,
) -> Result<Json<FormData>, AppError> {
    let mut form = request.form;
    set_meeting_count(&mut form, request.count)?;
    Ok(Json(form))
}

/// POST /api/v1/form/pedagogy
pub async fn handle_set_pedagogy(
    Json(request): Json<PedagogyRequest>,
) -> Result<Json<FormData>, AppError> {
    let mut form = request.form;
    check_invariants(&form)?;
    set_pedagogy(&mut form, request.meeting_number, request.pedagogy)?;
    Ok(Json(form))
}

/// POST /api/v1/form/dimensions
pub async fn handle_toggle_dimension(
    Json(request): Json<DimensionRequest>,
) -> Result<Json<FormData>, AppError> {
    let mut form = request.form;
    check_invariants(&form)?;
    toggle_dimension(&mut form, request.dimension);
    Ok(Json(form))
}

/// POST /api/v1/form/suggestion
pub async fn handle_apply_suggestion(
    Json(request): Json<ApplySuggestionRequest>,
) -> Result<Json<FormData>, AppError> {
    let mut form = request.form;
    check_invariants(&form)?;
    apply_suggestion(&mut form, request.field, request.selection)?;
    Ok(Json(form))
}
