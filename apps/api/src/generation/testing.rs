//! Test doubles shared by generation, render, export, and route tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::curriculum::models::{FormData, Subject};
use crate::generation::assembler::{assemble, RpmResult};
use crate::generation::content::parse_generated_content;
use crate::llm_client::{ContentProvider, LlmError};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub prompt: String,
    pub schema: Value,
}

/// Provider that answers every call with a canned reply (or a canned failure).
pub struct StubProvider {
    reply: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProvider {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContentProvider for StubProvider {
    async fn complete_json(
        &self,
        api_key: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            prompt: prompt.to_string(),
            schema: schema.clone(),
        });
        self.reply.clone().ok_or(LlmError::Api {
            status: 429,
            message: "Resource has been exhausted (e.g. check quota).".to_string(),
        })
    }

    fn backend(&self) -> &'static str {
        "stub"
    }
}

/// A schema-complete content response with `rubric_rows` rubric rows.
pub fn sample_content_json(rubric_rows: usize) -> Value {
    let rows: Vec<Value> = (1..=rubric_rows)
        .map(|i| {
            json!({
                "aspect": format!("Aspek {i}"),
                "score4": format!("Sangat baik pada aspek {i}"),
                "score3": format!("Baik pada aspek {i}"),
                "score2": format!("Cukup pada aspek {i}"),
                "score1": format!("Perlu bimbingan pada aspek {i}"),
            })
        })
        .collect();

    json!({
        "studentCharacteristics": "<ul><li>Senang bermain sambil belajar</li><li>Rasa ingin tahu tinggi</li></ul>",
        "crossDisciplinary": "<ul><li>Seni Rupa: menggambar pecahan</li></ul>",
        "topics": "<ul><li>Pecahan senilai</li></ul>",
        "partnerships": "<ul><li>Orang tua</li></ul>",
        "environment": "<ul><li>Kelas berkelompok</li></ul>",
        "digitalTools": "<ul><li>Quizizz</li></ul>",
        "learningExperiences": {
            "memahami": "<ol><li>Salam dan doa</li><li>Apersepsi</li></ol>",
            "mengaplikasi": "<ol><li>Eksplorasi kelompok</li><li>Presentasi</li></ol>",
            "refleksi": "<ol><li>Refleksi bersama</li></ol>",
        },
        "assessments": {
            "initial": "<ul><li>Tanya jawab</li></ul>",
            "process": "<ul><li>Observasi</li></ul>",
            "final": "<ul><li>Portofolio</li></ul>",
        },
        "rubric": {
            "title": "Rubrik Pemahaman Pecahan",
            "rows": rows,
        },
    })
}

/// A Matematika class-1 result issued on 14 Oktober 2026.
pub fn sample_result(teacher_name: &str, rubric_rows: usize) -> RpmResult {
    let mut form = FormData::default();
    form.teacher_name = teacher_name.to_string();
    form.subject = Subject::Matematika;
    form.materi = "Pecahan\nPecahan senilai".to_string();
    form.tp = "TP <1>".to_string();
    let content = parse_generated_content(&sample_content_json(rubric_rows).to_string())
        .expect("sample content parses");
    assemble(
        form,
        content,
        NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date"),
    )
}
