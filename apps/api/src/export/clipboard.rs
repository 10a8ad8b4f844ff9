//! Clipboard export: the rich-text payload the browser writes to the clipboard,
//! plus the follow-up step of opening a blank document to paste into.

use serde::Serialize;

use crate::render::document::{CellRole, DocumentView};

pub const HTML_MIME_TYPE: &str = "text/html";
pub const BLANK_DOCUMENT_URL: &str = "https://docs.google.com/document/create";
pub const NEXT_STEP_MESSAGE: &str = "Konten RPM telah disalin ke Clipboard! Sekarang kami akan \
    membuka Google Docs baru. Silakan tekan 'Ctrl+V' (Tempel) di halaman Google Docs untuk \
    melihat hasilnya.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextStep {
    pub message: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardPayload {
    pub mime_type: &'static str,
    pub html: String,
    /// Fallback for targets that reject `text/html`.
    pub plain_text: String,
    pub next_step: NextStep,
}

pub fn clipboard_payload(view: &DocumentView) -> ClipboardPayload {
    ClipboardPayload {
        mime_type: HTML_MIME_TYPE,
        html: view.to_html(),
        plain_text: plain_text(view),
        next_step: NextStep {
            message: NEXT_STEP_MESSAGE,
            url: BLANK_DOCUMENT_URL,
        },
    }
}

/// Text rendition: `Label: value` rows, list items on their own lines.
pub fn plain_text(view: &DocumentView) -> String {
    let mut lines: Vec<String> = vec![
        view.title.to_string(),
        view.school.to_string(),
        view.address.to_string(),
    ];

    for section in &view.sections {
        lines.push(String::new());
        lines.push(format!("{}. {}", section.number, section.title.to_uppercase()));
        if let Some(caption) = &section.caption {
            lines.push(caption.clone());
        }
        if !section.headers.is_empty() {
            lines.push(section.headers.join(" | "));
        }
        for row in &section.rows {
            let mut pending_label: Option<String> = None;
            let mut values: Vec<String> = Vec::new();
            for cell in row {
                let cell_lines = cell.to_lines();
                match cell.role {
                    CellRole::Label => pending_label = Some(cell_lines.join(" ")),
                    CellRole::Value => {
                        let text = cell_lines.join("\n");
                        match pending_label.take() {
                            Some(label) if text.contains('\n') => {
                                values.push(format!("{label}:\n{text}"))
                            }
                            Some(label) => values.push(format!("{label}: {text}")),
                            None => values.push(text),
                        }
                    }
                }
            }
            if row.iter().all(|c| c.role == CellRole::Value) && row.len() > 1 {
                lines.push(values.join(" | "));
            } else {
                lines.extend(values);
            }
        }
    }

    lines.push(String::new());
    for signatory in [&view.principal, &view.teacher] {
        lines.extend(signatory.heading.iter().cloned());
        lines.push(signatory.name.clone());
        lines.push(format!("NIP. {}", signatory.nip));
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::sample_result;
    use crate::render::render;

    #[test]
    fn test_payload_shape() {
        let payload = clipboard_payload(&render(&sample_result("Siti", 1)));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["mimeType"], "text/html");
        assert_eq!(value["nextStep"]["url"], "https://docs.google.com/document/create");
        assert!(value["html"].as_str().unwrap().starts_with("<div id=\"rpm-content\">"));
        assert!(value["plainText"].as_str().unwrap().contains("RENCANA PEMBELAJARAN MENDALAM"));
    }

    #[test]
    fn test_plain_text_rows() {
        let text = plain_text(&render(&sample_result("Siti", 2)));
        assert!(text.contains("Satuan Pendidikan: SDN Pekayon 09"));
        assert!(text.contains("Materi Pokok:\nPecahan\nPecahan senilai"));
        assert!(text.contains("Awal (Memahami):\n1. Salam dan doa\n2. Apersepsi"));
        assert!(text.contains("TP: TP <1>"));
        assert!(text.contains("6. RUBRIK PENILAIAN"));
        assert!(text.contains("Aspek 2 | Sangat baik pada aspek 2"));
        assert!(text.ends_with("NIP."));
    }
}
