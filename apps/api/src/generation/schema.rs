//! Response schemas handed to the provider (OpenAPI subset, upper-case type names).
//!
//! The provider enforces these; locally we only rely on serde to reject a
//! response that lacks a required field.

use serde_json::{json, Value};

/// Top-level fields the content schema marks as required.
pub const CONTENT_REQUIRED_FIELDS: [&str; 9] = [
    "studentCharacteristics",
    "crossDisciplinary",
    "topics",
    "partnerships",
    "environment",
    "digitalTools",
    "learningExperiences",
    "assessments",
    "rubric",
];

pub const RUBRIC_ROW_FIELDS: [&str; 5] = ["aspect", "score4", "score3", "score2", "score1"];

fn html_string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

/// Schema for the full lesson-plan content fill.
pub fn content_schema() -> Value {
    const UL: &str = "Kembalikan sebagai Daftar Tidak Terurut HTML (<ul><li>...</li></ul>).";
    const OL: &str = "Kembalikan sebagai Daftar Terurut HTML (<ol><li>...</li></ol>).";

    json!({
        "type": "OBJECT",
        "properties": {
            "studentCharacteristics": html_string(&format!("Deskripsi karakteristik siswa berdasarkan usia/kelas. {UL}")),
            "crossDisciplinary": html_string(&format!("Kaitan dengan mata pelajaran lain. {UL}")),
            "topics": html_string(&format!("Topik pembelajaran spesifik yang diturunkan dari materi. {UL}")),
            "partnerships": html_string(&format!("Kemitraan pembelajaran (orang tua, pakar, komunitas). {UL}")),
            "environment": html_string(&format!("Pengaturan lingkungan belajar. {UL}")),
            "digitalTools": html_string(&format!("Rekomendasi alat digital dan cara menggunakannya. {UL}")),
            "learningExperiences": {
                "type": "OBJECT",
                "properties": {
                    "memahami": html_string(&format!("Kegiatan untuk fase 'Memahami' (Pembukaan). {OL}")),
                    "mengaplikasi": html_string(&format!("Kegiatan untuk fase 'Mengaplikasi' (Inti) yang sesuai dengan sintaks pedagogi. {OL}")),
                    "refleksi": html_string(&format!("Kegiatan untuk fase 'Refleksi' (Penutup). {OL}")),
                },
                "required": ["memahami", "mengaplikasi", "refleksi"],
            },
            "assessments": {
                "type": "OBJECT",
                "properties": {
                    "initial": html_string(&format!("Ide asesmen diagnostik. {UL}")),
                    "process": html_string(&format!("Asesmen formatif (rubrik, observasi). {UL}")),
                    "final": html_string(&format!("Asesmen sumatif (produk, portofolio). {UL}")),
                },
                "required": ["initial", "process", "final"],
            },
            "rubric": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING", "description": "Judul rubrik penilaian." },
                    "rows": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "aspect": { "type": "STRING", "description": "Kriteria/aspek penilaian." },
                                "score4": { "type": "STRING", "description": "Deskripsi untuk skor 4 (Sangat Baik)." },
                                "score3": { "type": "STRING", "description": "Deskripsi untuk skor 3 (Baik)." },
                                "score2": { "type": "STRING", "description": "Deskripsi untuk skor 2 (Cukup)." },
                                "score1": { "type": "STRING", "description": "Deskripsi untuk skor 1 (Perlu Bimbingan)." },
                            },
                            "required": RUBRIC_ROW_FIELDS,
                        },
                    },
                },
                "required": ["title", "rows"],
            },
        },
        "required": CONTENT_REQUIRED_FIELDS,
    })
}

/// Schema for suggestions: exactly one array-of-strings field.
pub fn suggestion_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "options": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
            },
        },
        "required": ["options"],
    })
}
