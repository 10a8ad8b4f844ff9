//! Document Renderer: pure projection of an `RpmResult` into a printable view.
//!
//! The view is format-neutral. `html.rs` serializes it for the clipboard and
//! preview; `layout` paginates it for the PDF export.

use serde::Serialize;

use crate::curriculum::models::SCHOOL_NAME;
use crate::generation::assembler::RpmResult;
use crate::render::date::format_indonesian_date;
use crate::render::markup::CellContent;
use crate::render::signature::signature_image_for;

pub const DOCUMENT_TITLE: &str = "RENCANA PEMBELAJARAN MENDALAM (RPM)";
pub const SCHOOL_HEADING: &str = "SDN PEKAYON 09 JAKARTA TIMUR";
pub const SCHOOL_ADDRESS: &str = "Jl. Pendidikan Rt 04 Rw 09 Kel. Pekayon Kec. Pasar Rebo";
pub const SIGNATURE_CITY: &str = "Jakarta";
pub const SCHOOL_LOGO_URL: &str = "https://i.ibb.co.com/1fQ81J6v/LOGO-PEKAYON-09.jpg";
pub const MINISTRY_LOGO_URL: &str = "https://i.ibb.co.com/fz9ttjq6/Logo-of-Ministry-of-Education-and-Culture-of-Republic-of-Indonesia-svg.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellRole {
    /// Bold row label on a shaded background.
    Label,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub role: CellRole,
    pub content: CellContent,
    /// Keep the teacher's line breaks (TP and materi).
    pub preserve_breaks: bool,
}

impl Cell {
    pub fn label(text: &str) -> Self {
        Self {
            role: CellRole::Label,
            content: CellContent::PlainText(text.to_string()),
            preserve_breaks: false,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: CellRole::Value,
            content: CellContent::PlainText(text.into()),
            preserve_breaks: false,
        }
    }

    pub fn multiline(text: impl Into<String>) -> Self {
        Self {
            preserve_breaks: true,
            ..Self::text(text)
        }
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Self {
            role: CellRole::Value,
            content: CellContent::TrustedMarkup(markup.into()),
            preserve_breaks: false,
        }
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.content.to_lines(self.preserve_breaks)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub number: u8,
    pub title: &'static str,
    /// Line above the table (rubric title).
    pub caption: Option<String>,
    pub headers: Vec<&'static str>,
    /// Relative column widths; they sum to 1.
    pub column_widths: Vec<f32>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signatory {
    pub heading: Vec<String>,
    pub name: String,
    pub nip: String,
    pub signature_image: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub title: &'static str,
    pub school: &'static str,
    pub address: &'static str,
    pub sections: Vec<Section>,
    pub principal: Signatory,
    pub teacher: Signatory,
    /// Left footer label stamped on every PDF page.
    pub footer_label: String,
}

const LABEL_VALUE: [f32; 2] = [0.25, 0.75];

fn label_value_section(number: u8, title: &'static str, rows: Vec<Vec<Cell>>) -> Section {
    Section {
        number,
        title,
        caption: None,
        headers: Vec::new(),
        column_widths: LABEL_VALUE.to_vec(),
        rows,
    }
}

/// Builds the six-section document for `result`.
pub fn render(result: &RpmResult) -> DocumentView {
    let form = &result.form;
    let content = &result.content;

    let identitas = Section {
        number: 1,
        title: "Identitas",
        caption: None,
        headers: Vec::new(),
        column_widths: vec![0.2, 0.3, 0.2, 0.3],
        rows: vec![
            vec![
                Cell::label("Satuan Pendidikan"),
                Cell::text(SCHOOL_NAME),
                Cell::label("Mata Pelajaran"),
                Cell::text(form.subject.label()),
            ],
            vec![
                Cell::label("Kelas / Semester"),
                Cell::text(format!("{} / {}", form.class_level, form.semester.label())),
                Cell::label("Alokasi Waktu"),
                Cell::text(format!(
                    "{} ({} Pertemuan)",
                    form.duration, form.meeting_count
                )),
            ],
        ],
    };

    let identifikasi = label_value_section(
        2,
        "Identifikasi",
        vec![
            vec![
                Cell::label("Karakteristik Siswa"),
                Cell::markup(&content.student_characteristics),
            ],
            vec![Cell::label("Materi Pokok"), Cell::multiline(&form.materi)],
            vec![
                Cell::label("Profil Lulusan"),
                Cell::text(form.dimension_labels()),
            ],
        ],
    );

    let desain = label_value_section(
        3,
        "Desain Pembelajaran",
        vec![
            vec![Cell::label("CP"), Cell::text(&form.cp)],
            vec![Cell::label("TP"), Cell::multiline(&form.tp)],
            vec![
                Cell::label("Lintas Disiplin"),
                Cell::markup(&content.cross_disciplinary),
            ],
            vec![Cell::label("Topik Pembelajaran"), Cell::markup(&content.topics)],
            vec![Cell::label("Kemitraan"), Cell::markup(&content.partnerships)],
            vec![
                Cell::label("Lingkungan Belajar"),
                Cell::markup(&content.environment),
            ],
            vec![
                Cell::label("Pemanfaatan Digital"),
                Cell::markup(&content.digital_tools),
            ],
            vec![
                Cell::label("Pedagogi"),
                Cell::text(form.pedagogy_document_labels()),
            ],
        ],
    );

    let experiences = &content.learning_experiences;
    let pengalaman = Section {
        headers: vec!["Tahapan", "Deskripsi Kegiatan"],
        ..label_value_section(
            4,
            "Pengalaman Belajar",
            vec![
                vec![
                    Cell::label("Awal (Memahami)"),
                    Cell::markup(&experiences.memahami),
                ],
                vec![
                    Cell::label("Inti (Mengaplikasi)"),
                    Cell::markup(&experiences.mengaplikasi),
                ],
                vec![
                    Cell::label("Penutup (Refleksi)"),
                    Cell::markup(&experiences.refleksi),
                ],
            ],
        )
    };

    let assessments = &content.assessments;
    let asesmen = Section {
        number: 5,
        title: "Asesmen",
        caption: None,
        headers: vec!["Asesmen Awal", "Asesmen Proses", "Asesmen Akhir"],
        column_widths: vec![1.0 / 3.0; 3],
        rows: vec![vec![
            Cell::markup(&assessments.initial),
            Cell::markup(&assessments.process),
            Cell::markup(&assessments.final_),
        ]],
    };

    let rubrik = Section {
        number: 6,
        title: "Rubrik Penilaian",
        caption: Some(content.rubric.title.clone()),
        headers: vec![
            "Aspek",
            "Sangat Baik (4)",
            "Baik (3)",
            "Cukup (2)",
            "Perlu Bimbingan (1)",
        ],
        column_widths: vec![0.2; 5],
        rows: content
            .rubric
            .rows
            .iter()
            .map(|row| {
                vec![
                    Cell::text(&row.aspect),
                    Cell::text(&row.score4),
                    Cell::text(&row.score3),
                    Cell::text(&row.score2),
                    Cell::text(&row.score1),
                ]
            })
            .collect(),
    };

    DocumentView {
        title: DOCUMENT_TITLE,
        school: SCHOOL_HEADING,
        address: SCHOOL_ADDRESS,
        sections: vec![identitas, identifikasi, desain, pengalaman, asesmen, rubrik],
        principal: Signatory {
            heading: vec![
                "Mengetahui,".to_string(),
                format!("Kepala {SCHOOL_NAME}"),
            ],
            name: form.principal_name.clone(),
            nip: form.principal_nip.clone(),
            signature_image: None,
        },
        teacher: Signatory {
            heading: vec![
                format!(
                    "{SIGNATURE_CITY}, {}",
                    format_indonesian_date(result.issued_on)
                ),
                "Guru Kelas / Mapel".to_string(),
            ],
            name: form.teacher_name.clone(),
            nip: form.teacher_nip.clone(),
            signature_image: signature_image_for(&form.teacher_name),
        },
        footer_label: format!("RPM Kelas {} | {}", form.class_level, form.subject.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::models::{Meeting, PedagogicalPractice};
    use crate::generation::testing::sample_result;

    fn row_value<'a>(view: &'a DocumentView, section: usize, label: &str) -> &'a Cell {
        view.sections[section]
            .rows
            .iter()
            .find(|row| row[0].content == CellContent::PlainText(label.to_string()))
            .map(|row| &row[1])
            .unwrap()
    }

    #[test]
    fn test_six_sections_in_order() {
        let view = render(&sample_result("Siti", 2));
        let titles: Vec<_> = view.sections.iter().map(|s| (s.number, s.title)).collect();
        assert_eq!(
            titles,
            vec![
                (1, "Identitas"),
                (2, "Identifikasi"),
                (3, "Desain Pembelajaran"),
                (4, "Pengalaman Belajar"),
                (5, "Asesmen"),
                (6, "Rubrik Penilaian"),
            ]
        );
        for section in &view.sections {
            let widths: f32 = section.column_widths.iter().sum();
            assert!((widths - 1.0).abs() < 1e-4);
            for row in &section.rows {
                assert_eq!(row.len(), section.column_widths.len());
            }
        }
    }

    #[test]
    fn test_rubric_has_one_row_per_generated_row() {
        for rows in [0, 1, 4] {
            let view = render(&sample_result("Siti", rows));
            assert_eq!(view.sections[5].rows.len(), rows);
        }
        let view = render(&sample_result("Siti", 2));
        assert_eq!(
            view.sections[5].caption.as_deref(),
            Some("Rubrik Pemahaman Pecahan")
        );
        assert_eq!(
            view.sections[5].rows[1][0].content,
            CellContent::PlainText("Aspek 2".to_string())
        );
    }

    #[test]
    fn test_identity_rows() {
        let view = render(&sample_result("Siti", 1));
        let identitas = &view.sections[0];
        assert_eq!(
            identitas.rows[0][3].content,
            CellContent::PlainText("Matematika".to_string())
        );
        assert_eq!(
            identitas.rows[1][1].content,
            CellContent::PlainText("1 / Ganjil".to_string())
        );
        assert_eq!(
            identitas.rows[1][3].content,
            CellContent::PlainText("2 x 35 menit (1 Pertemuan)".to_string())
        );
    }

    #[test]
    fn test_teacher_text_is_plain_and_model_text_is_markup() {
        let view = render(&sample_result("Siti", 1));
        let tp = row_value(&view, 2, "TP");
        assert_eq!(tp.content, CellContent::PlainText("TP <1>".to_string()));
        assert!(tp.preserve_breaks);
        assert!(row_value(&view, 1, "Materi Pokok").preserve_breaks);
        assert!(matches!(
            row_value(&view, 1, "Karakteristik Siswa").content,
            CellContent::TrustedMarkup(_)
        ));
    }

    #[test]
    fn test_two_meetings_pedagogy_row() {
        let mut result = sample_result("Siti", 1);
        result.form.meeting_count = 2;
        result.form.meetings = vec![
            Meeting {
                meeting_number: 1,
                pedagogy: PedagogicalPractice::ProjectBased,
            },
            Meeting {
                meeting_number: 2,
                pedagogy: PedagogicalPractice::Kooperatif,
            },
        ];
        let view = render(&result);
        assert_eq!(
            row_value(&view, 2, "Pedagogi").content,
            CellContent::PlainText(
                "P1: Project Based Learning (PjBL) | P2: Pembelajaran Kooperatif".to_string()
            )
        );
        assert_eq!(view.sections[0].rows[1][3].to_lines(), vec!["2 x 35 menit (2 Pertemuan)"]);
    }

    #[test]
    fn test_signature_block() {
        let view = render(&sample_result("  Teguh Firmansyah Apriliana, S.Pd ", 1));
        assert!(view.teacher.signature_image.is_some());
        assert_eq!(view.teacher.heading[0], "Jakarta, 14 Oktober 2026");
        assert_eq!(view.principal.name, "Veria Wulandari, S.Pd");
        assert_eq!(view.principal.heading[1], "Kepala SDN Pekayon 09");

        let view = render(&sample_result("Siti Aminah, S.Pd", 1));
        assert!(view.teacher.signature_image.is_none());
    }

    #[test]
    fn test_footer_label() {
        let view = render(&sample_result("Siti", 1));
        assert_eq!(view.footer_label, "RPM Kelas 1 | Matematika");
    }
}
