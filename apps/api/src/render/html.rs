//! HTML serialization of a `DocumentView`, for the preview and the clipboard.
//!
//! Styles are inlined in a `<style>` block so a paste into a word processor keeps
//! the table borders and the section badges.

use std::fmt::Write;

use crate::render::document::{
    Cell, CellRole, DocumentView, Section, Signatory, MINISTRY_LOGO_URL, SCHOOL_LOGO_URL,
};
use crate::render::markup::escape_html;

const STYLES: &str = "\
#rpm-content { font-family: 'Inter', sans-serif; font-size: 10pt; line-height: 1.5; color: #000; }
table { width: 100%; border-collapse: collapse; margin-bottom: 25px; border: 2px solid #000; }
th { background-color: #000; color: #fff; font-weight: 700; text-transform: uppercase; font-size: 9pt; padding: 10px; text-align: left; }
td { padding: 10px; border-bottom: 1px solid #000; vertical-align: top; font-size: 10pt; }
.section-header { display: flex; align-items: center; gap: 10px; margin-top: 25px; margin-bottom: 15px; border-bottom: 3px solid #000; padding-bottom: 5px; }
.section-number { background-color: #000; color: #fff; font-weight: 800; width: 30px; height: 30px; display: flex; align-items: center; justify-content: center; border-radius: 4px; }
.section-title-text { font-weight: 800; font-size: 12pt; text-transform: uppercase; }
.label-cell { font-weight: 700; background-color: #f1f5f9; width: 25%; border-right: 1px solid #000; }
.header-container { display: flex; justify-content: space-between; align-items: center; margin-bottom: 30px; border-bottom: 4px solid #000; padding-bottom: 20px; }
.rubric-title { font-weight: 700; margin: 0 0 8px 0; }
";

impl DocumentView {
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<div id=\"rpm-content\">");
        let _ = write!(html, "<style>{STYLES}</style>");
        self.write_header(&mut html);
        for section in &self.sections {
            write_section(&mut html, section);
        }
        html.push_str(
            "<div class=\"signature-box\" style=\"display: flex; justify-content: space-between; margin-top: 50px;\">",
        );
        write_signatory(&mut html, &self.principal);
        write_signatory(&mut html, &self.teacher);
        html.push_str("</div></div>");
        html
    }

    fn write_header(&self, html: &mut String) {
        let _ = write!(
            html,
            "<div class=\"header-container\">\
             <div style=\"width: 15%;\"><img src=\"{SCHOOL_LOGO_URL}\" style=\"height: 70px;\"></div>\
             <div style=\"width: 70%; text-align: center;\">\
             <h1 style=\"font-weight: 900; font-size: 15pt; margin: 0;\">{}</h1>\
             <p style=\"font-size: 10pt; margin: 5px 0;\">{}</p>\
             <p style=\"font-size: 8pt; margin: 0;\">{}</p>\
             </div>\
             <div style=\"width: 15%; text-align: right;\"><img src=\"{MINISTRY_LOGO_URL}\" style=\"height: 70px;\"></div>\
             </div>",
            escape_html(self.title),
            escape_html(self.school),
            escape_html(self.address),
        );
    }
}

fn write_section(html: &mut String, section: &Section) {
    let _ = write!(
        html,
        "<div class=\"section-header\"><div class=\"section-number\">{}</div>\
         <div class=\"section-title-text\">{}</div></div>",
        section.number,
        escape_html(section.title)
    );
    if let Some(caption) = &section.caption {
        let _ = write!(html, "<p class=\"rubric-title\">{}</p>", escape_html(caption));
    }

    html.push_str("<table>");
    if !section.headers.is_empty() {
        html.push_str("<thead><tr>");
        for header in &section.headers {
            let _ = write!(html, "<th>{}</th>", escape_html(header));
        }
        html.push_str("</tr></thead>");
    }
    html.push_str("<tbody>");
    for row in &section.rows {
        html.push_str("<tr>");
        for cell in row {
            write_cell(html, cell);
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
}

fn write_cell(html: &mut String, cell: &Cell) {
    match (cell.role, cell.preserve_breaks) {
        (CellRole::Label, _) => html.push_str("<td class=\"label-cell\">"),
        (CellRole::Value, true) => html.push_str("<td style=\"white-space: pre-line;\">"),
        (CellRole::Value, false) => html.push_str("<td>"),
    }
    html.push_str(&cell.content.to_html());
    html.push_str("</td>");
}

fn write_signatory(html: &mut String, signatory: &Signatory) {
    html.push_str("<div style=\"text-align: center; width: 40%;\">");
    for line in &signatory.heading {
        let _ = write!(html, "<p>{}</p>", escape_html(line));
    }
    html.push_str(
        "<div style=\"height: 120px; display: flex; align-items: center; justify-content: center;\">",
    );
    if let Some(url) = signatory.signature_image {
        let _ = write!(html, "<img src=\"{url}\" style=\"height: 100px;\">");
    }
    html.push_str("</div>");
    let _ = write!(
        html,
        "<p><strong><u>{}</u></strong></p><p>NIP. {}</p></div>",
        escape_html(&signatory.name),
        escape_html(&signatory.nip)
    );
}

#[cfg(test)]
mod tests {
    use crate::generation::testing::sample_result;
    use crate::render::document::render;
    use crate::render::signature::SIGNATURE_IMAGE_URL;

    #[test]
    fn test_sections_appear_in_order() {
        let html = render(&sample_result("Siti", 2)).to_html();
        let positions: Vec<usize> = [
            "Identitas",
            "Identifikasi",
            "Desain Pembelajaran",
            "Pengalaman Belajar",
            "Asesmen",
            "Rubrik Penilaian",
        ]
        .iter()
        .map(|title| html.find(&format!(">{title}</div>")).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("RENCANA PEMBELAJARAN MENDALAM (RPM)"));
    }

    #[test]
    fn test_markup_is_injected_and_plain_text_escaped() {
        let html = render(&sample_result("Siti", 1)).to_html();
        assert!(html.contains("<ul><li>Senang bermain sambil belajar</li>"));
        assert!(html.contains("TP &lt;1&gt;"));
        assert!(!html.contains("TP <1>"));
    }

    #[test]
    fn test_multiline_cells_keep_breaks() {
        let html = render(&sample_result("Siti", 1)).to_html();
        assert!(html.contains("<td style=\"white-space: pre-line;\">Pecahan\nPecahan senilai</td>"));
    }

    #[test]
    fn test_rubric_rows_rendered() {
        let html = render(&sample_result("Siti", 3)).to_html();
        assert!(html.contains("<td>Aspek 3</td>"));
        assert!(html.contains("<p class=\"rubric-title\">Rubrik Pemahaman Pecahan</p>"));
    }

    #[test]
    fn test_signature_image_only_for_owner() {
        let html = render(&sample_result("Teguh Firmansyah Apriliana, S.Pd", 1)).to_html();
        assert!(html.contains(SIGNATURE_IMAGE_URL));
        let html = render(&sample_result("Teguh Firmansyah", 1)).to_html();
        assert!(!html.contains(SIGNATURE_IMAGE_URL));
        assert!(html.contains("Jakarta, 14 Oktober 2026"));
    }
}
