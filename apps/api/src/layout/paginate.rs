//! Pass 1: lays a `DocumentView` out on A4 pages.
//!
//! A page holds positioned text lines, shaded boxes, table rules, and image
//! slots. Coordinates are millimetres with the origin at the bottom-left corner,
//! matching the PDF writer. After this pass the page count is final; `footer`
//! stamps page numbers in pass 2.

use crate::layout::font_metrics::{get_metrics, sanitize, FontStyle, PT_TO_MM};
use crate::layout::PageSpec;
use crate::render::document::{
    Cell, CellRole, DocumentView, Section, Signatory, MINISTRY_LOGO_URL, SCHOOL_LOGO_URL,
};

const TITLE_PT: f32 = 14.0;
const SCHOOL_PT: f32 = 10.0;
const ADDRESS_PT: f32 = 8.0;
const SECTION_PT: f32 = 11.0;
const HEADER_CELL_PT: f32 = 9.0;
const BODY_PT: f32 = 9.5;
/// Line pitch as a multiple of the font size.
const LINE_SPACING: f32 = 1.3;
const CELL_PADDING_MM: f32 = 1.5;
const ROW_GAP_MM: f32 = 1.5;
const SECTION_GAP_MM: f32 = 5.0;
const CELL_RULE_PT: f32 = 0.5;
const HEADER_RULE_PT: f32 = 1.5;
/// Space between the signatory heading and name.
const SIGNATURE_SPACE_MM: f32 = 22.0;
const SIGNATURE_IMAGE_W_MM: f32 = 40.0;
const SIGNATURE_IMAGE_H_MM: f32 = 20.0;
const LOGO_MM: f32 = 18.0;
/// Extra height of a section heading bar around its text line.
const HEADING_BAR_PAD_MM: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x_mm: f32,
    /// Baseline, measured from the bottom edge.
    pub y_mm: f32,
    pub size_pt: f32,
    pub style: FontStyle,
}

/// Background tone of a filled box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    SectionBar,
    HeaderRow,
    LabelCell,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFill {
    pub x_mm: f32,
    /// Bottom edge.
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
    pub shade: Shade,
}

/// Straight stroke between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRule {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub thickness_pt: f32,
}

/// Which picture a slot holds. The writer draws it if the asset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    SchoolLogo,
    MinistryLogo,
    Signature,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 3] = [
        ImageSlot::SchoolLogo,
        ImageSlot::MinistryLogo,
        ImageSlot::Signature,
    ];

    pub fn source_url(self) -> &'static str {
        match self {
            ImageSlot::SchoolLogo => SCHOOL_LOGO_URL,
            ImageSlot::MinistryLogo => MINISTRY_LOGO_URL,
            ImageSlot::Signature => crate::render::signature::SIGNATURE_IMAGE_URL,
        }
    }

    /// File name looked up in `PDF_ASSET_DIR`.
    pub fn file_name(self) -> &'static str {
        match self {
            ImageSlot::SchoolLogo => "school-logo.jpg",
            ImageSlot::MinistryLogo => "ministry-logo.png",
            ImageSlot::Signature => "signature.png",
        }
    }
}

/// A box the image is fitted into, aspect preserved and centred.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    pub slot: ImageSlot,
    pub x_mm: f32,
    /// Bottom edge.
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub items: Vec<PlacedText>,
    pub fills: Vec<PlacedFill>,
    pub rules: Vec<PlacedRule>,
    pub images: Vec<PlacedImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub spec: PageSpec,
    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn line_height_mm(size_pt: f32) -> f32 {
    size_pt * LINE_SPACING * PT_TO_MM
}

/// Top-down cursor over a growing list of pages.
struct Paginator {
    spec: PageSpec,
    pages: Vec<PageLayout>,
    /// Distance from the top edge already consumed on the current page.
    cursor_mm: f32,
}

impl Paginator {
    fn new(spec: PageSpec) -> Self {
        Self {
            spec,
            pages: vec![PageLayout::default()],
            cursor_mm: spec.margins.top,
        }
    }

    fn content_left(&self) -> f32 {
        self.spec.margins.left
    }

    fn content_width(&self) -> f32 {
        self.spec.content_width_mm()
    }

    fn bottom_limit(&self) -> f32 {
        self.spec.height_mm - self.spec.body_floor_mm()
    }

    fn remaining(&self) -> f32 {
        self.bottom_limit() - self.cursor_mm
    }

    fn full_page_height(&self) -> f32 {
        self.bottom_limit() - self.spec.margins.top
    }

    fn at_page_top(&self) -> bool {
        (self.cursor_mm - self.spec.margins.top).abs() < f32::EPSILON
    }

    fn new_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.cursor_mm = self.spec.margins.top;
    }

    /// Starts a new page unless `height` still fits. Blocks taller than a page
    /// are not moved, they split wherever they reach the bottom.
    fn ensure_space(&mut self, height: f32) {
        if height > self.remaining() && !self.at_page_top() && height <= self.full_page_height() {
            self.new_page();
        }
    }

    fn advance(&mut self, height: f32) {
        self.cursor_mm += height;
    }

    /// Places one line whose top sits at the cursor, breaking the page first if
    /// the line would cross the bottom margin.
    fn place_line(&mut self, text: &str, x_mm: f32, size_pt: f32, style: FontStyle) {
        let height = line_height_mm(size_pt);
        if height > self.remaining() && !self.at_page_top() {
            self.new_page();
        }
        self.place_at(text, x_mm, self.cursor_mm, size_pt, style);
        self.advance(height);
    }

    /// Places a line whose top sits `top_mm` from the top edge, without moving the cursor.
    fn place_at(&mut self, text: &str, x_mm: f32, top_mm: f32, size_pt: f32, style: FontStyle) {
        if text.is_empty() {
            return;
        }
        let baseline_from_top = top_mm + size_pt * PT_TO_MM;
        let y_mm = self.spec.height_mm - baseline_from_top;
        self.current_page().items.push(PlacedText {
            text: text.to_string(),
            x_mm,
            y_mm,
            size_pt,
            style,
        });
    }

    fn current_page(&mut self) -> &mut PageLayout {
        if self.pages.is_empty() {
            self.pages.push(PageLayout::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Shaded box spanning `top_mm..bottom_mm` from the top edge.
    fn fill(&mut self, x_mm: f32, width_mm: f32, top_mm: f32, bottom_mm: f32, shade: Shade) {
        let y_mm = self.spec.height_mm - bottom_mm;
        self.current_page().fills.push(PlacedFill {
            x_mm,
            y_mm,
            width_mm,
            height_mm: bottom_mm - top_mm,
            shade,
        });
    }

    /// Horizontal rule `top_mm` below the top edge.
    fn hrule(&mut self, x1_mm: f32, x2_mm: f32, top_mm: f32, thickness_pt: f32) {
        let y = self.spec.height_mm - top_mm;
        self.current_page().rules.push(PlacedRule {
            from: (x1_mm, y),
            to: (x2_mm, y),
            thickness_pt,
        });
    }

    fn vrule(&mut self, x_mm: f32, top_mm: f32, bottom_mm: f32) {
        let height = self.spec.height_mm;
        self.current_page().rules.push(PlacedRule {
            from: (x_mm, height - top_mm),
            to: (x_mm, height - bottom_mm),
            thickness_pt: CELL_RULE_PT,
        });
    }

    fn image(&mut self, slot: ImageSlot, x_mm: f32, top_mm: f32, width_mm: f32, height_mm: f32) {
        let y_mm = self.spec.height_mm - top_mm - height_mm;
        self.current_page().images.push(PlacedImage {
            slot,
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        });
    }

    fn place_centered(&mut self, text: &str, center_mm: f32, size_pt: f32, style: FontStyle) {
        let text = sanitize(text);
        let width = get_metrics(style).width_mm(&text, size_pt);
        self.place_line(&text, center_mm - width / 2.0, size_pt, style);
    }

    fn finish(self) -> DocumentLayout {
        DocumentLayout {
            spec: self.spec,
            pages: self.pages,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document blocks
// ────────────────────────────────────────────────────────────────────────────

/// Lays out header, sections, and signature block. Always yields at least one page.
pub fn paginate(view: &DocumentView, spec: PageSpec) -> DocumentLayout {
    let mut p = Paginator::new(spec);
    layout_header(&mut p, view);

    for section in &view.sections {
        layout_section(&mut p, section);
    }

    layout_signatures(&mut p, &view.principal, &view.teacher);
    p.finish()
}

/// Logos flank the centred title block; a heavy rule closes the header.
fn layout_header(p: &mut Paginator, view: &DocumentView) {
    let left = p.content_left();
    let right = left + p.content_width();
    let center = left + p.content_width() / 2.0;
    let top = p.cursor_mm;

    p.image(ImageSlot::SchoolLogo, left, top, LOGO_MM, LOGO_MM);
    p.image(ImageSlot::MinistryLogo, right - LOGO_MM, top, LOGO_MM, LOGO_MM);

    p.advance(1.0);
    p.place_centered(view.title, center, TITLE_PT, FontStyle::Bold);
    p.place_centered(view.school, center, SCHOOL_PT, FontStyle::Regular);
    p.place_centered(view.address, center, ADDRESS_PT, FontStyle::Regular);

    p.cursor_mm = p.cursor_mm.max(top + LOGO_MM) + 1.0;
    let rule_top = p.cursor_mm;
    p.hrule(left, right, rule_top, HEADER_RULE_PT);
    p.advance(SECTION_GAP_MM);
}

fn layout_section(p: &mut Paginator, section: &Section) {
    let heading = sanitize(&format!("{}. {}", section.number, section.title.to_uppercase()));
    let bar_h = line_height_mm(SECTION_PT) + 2.0 * HEADING_BAR_PAD_MM;
    // Keep the heading with at least the first body line.
    p.ensure_space(bar_h + ROW_GAP_MM + line_height_mm(BODY_PT) + 2.0 * CELL_PADDING_MM);
    let left = p.content_left();
    let width = p.content_width();
    let bar_top = p.cursor_mm;
    p.fill(left, width, bar_top, bar_top + bar_h, Shade::SectionBar);
    p.advance(HEADING_BAR_PAD_MM);
    p.place_line(&heading, left + CELL_PADDING_MM, SECTION_PT, FontStyle::Bold);
    p.advance(HEADING_BAR_PAD_MM + ROW_GAP_MM);

    if let Some(caption) = &section.caption {
        p.place_line(&sanitize(caption), left, BODY_PT, FontStyle::Bold);
    }

    let columns = column_geometry(p, &section.column_widths);

    if !section.headers.is_empty() {
        let header_cells: Vec<Vec<String>> = section
            .headers
            .iter()
            .zip(&columns)
            .map(|(header, (_, width))| {
                get_metrics(FontStyle::Bold).wrap_text(
                    &sanitize(&header.to_uppercase()),
                    width - 2.0 * CELL_PADDING_MM,
                    HEADER_CELL_PT,
                )
            })
            .collect();
        let styles = vec![FontStyle::Bold; header_cells.len()];
        let shades = vec![Some(Shade::HeaderRow); header_cells.len()];
        layout_row(p, &columns, &header_cells, &styles, &shades, HEADER_CELL_PT);
    }

    for row in &section.rows {
        let cells: Vec<Vec<String>> = row
            .iter()
            .zip(&columns)
            .map(|(cell, (_, width))| wrap_cell(cell, width - 2.0 * CELL_PADDING_MM))
            .collect();
        let styles: Vec<FontStyle> = row.iter().map(cell_style).collect();
        let shades: Vec<Option<Shade>> = row.iter().map(cell_shade).collect();
        layout_row(p, &columns, &cells, &styles, &shades, BODY_PT);
    }

    p.advance(SECTION_GAP_MM);
}

/// `(x, width)` per column, in millimetres.
fn column_geometry(p: &Paginator, fractions: &[f32]) -> Vec<(f32, f32)> {
    let mut x = p.content_left();
    fractions
        .iter()
        .map(|fraction| {
            let width = fraction * p.content_width();
            let column = (x, width);
            x += width;
            column
        })
        .collect()
}

fn cell_style(cell: &Cell) -> FontStyle {
    match cell.role {
        CellRole::Label => FontStyle::Bold,
        CellRole::Value => FontStyle::Regular,
    }
}

fn cell_shade(cell: &Cell) -> Option<Shade> {
    match cell.role {
        CellRole::Label => Some(Shade::LabelCell),
        CellRole::Value => None,
    }
}

fn wrap_cell(cell: &Cell, width_mm: f32) -> Vec<String> {
    let metrics = get_metrics(cell_style(cell));
    cell.to_lines()
        .iter()
        .flat_map(|line| {
            let line = sanitize(line);
            if line.trim().is_empty() {
                // Blank line kept by pre-line text.
                vec![String::new()]
            } else {
                metrics.wrap_text(&line, width_mm, BODY_PT)
            }
        })
        .collect()
}

/// Places one table row. A row that fits on a fresh page is never split; a taller
/// row continues line by line on the following pages, framed on each page.
fn layout_row(
    p: &mut Paginator,
    columns: &[(f32, f32)],
    cells: &[Vec<String>],
    styles: &[FontStyle],
    shades: &[Option<Shade>],
    size_pt: f32,
) {
    let line_h = line_height_mm(size_pt);
    let line_count = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let row_h = line_count as f32 * line_h + 2.0 * CELL_PADDING_MM;

    p.ensure_space(row_h);
    let mut segment_top = p.cursor_mm;
    p.advance(CELL_PADDING_MM);

    for i in 0..line_count {
        if line_h > p.remaining() && !p.at_page_top() {
            let segment_bottom = p.cursor_mm.min(p.bottom_limit());
            frame_cells(p, columns, shades, segment_top, segment_bottom);
            p.new_page();
            segment_top = p.cursor_mm;
        }
        let top = p.cursor_mm;
        for ((lines, (x, _)), style) in cells.iter().zip(columns).zip(styles) {
            if let Some(text) = lines.get(i) {
                p.place_at(text, x + CELL_PADDING_MM, top, size_pt, *style);
            }
        }
        p.advance(line_h);
    }

    p.advance(CELL_PADDING_MM);
    let segment_bottom = p.cursor_mm.min(p.bottom_limit());
    frame_cells(p, columns, shades, segment_top, segment_bottom);
}

/// Shading and borders for one page's share of a row.
fn frame_cells(
    p: &mut Paginator,
    columns: &[(f32, f32)],
    shades: &[Option<Shade>],
    top_mm: f32,
    bottom_mm: f32,
) {
    let (Some(first), Some(last)) = (columns.first(), columns.last()) else {
        return;
    };
    for ((x, width), shade) in columns.iter().zip(shades) {
        if let Some(shade) = shade {
            p.fill(*x, *width, top_mm, bottom_mm, *shade);
        }
    }
    let left = first.0;
    let right = last.0 + last.1;
    p.hrule(left, right, top_mm, CELL_RULE_PT);
    p.hrule(left, right, bottom_mm, CELL_RULE_PT);
    for (x, _) in columns {
        p.vrule(*x, top_mm, bottom_mm);
    }
    p.vrule(right, top_mm, bottom_mm);
}

/// Principal on the left, teacher on the right; the whole block stays on one page.
fn layout_signatures(p: &mut Paginator, principal: &Signatory, teacher: &Signatory) {
    let line_h = line_height_mm(BODY_PT);
    let block_lines = principal.heading.len().max(teacher.heading.len()) + 2;
    let block_h = block_lines as f32 * line_h + SIGNATURE_SPACE_MM;
    p.advance(SECTION_GAP_MM);
    p.ensure_space(block_h);

    let quarter = p.content_width() / 4.0;
    let left_center = p.content_left() + quarter;
    let right_center = p.content_left() + 3.0 * quarter;

    let top = p.cursor_mm;
    let left_end = layout_signatory(p, principal, left_center, top);
    let right_end = layout_signatory(p, teacher, right_center, top);
    p.cursor_mm = left_end.max(right_end);
}

/// Returns the cursor position below the signatory's last line.
fn layout_signatory(p: &mut Paginator, signatory: &Signatory, center_mm: f32, top_mm: f32) -> f32 {
    let line_h = line_height_mm(BODY_PT);
    let mut cursor = top_mm;
    let centered = |p: &mut Paginator, text: &str, style: FontStyle, cursor: f32| {
        let text = sanitize(text);
        let width = get_metrics(style).width_mm(&text, BODY_PT);
        p.place_at(&text, center_mm - width / 2.0, cursor, BODY_PT, style);
    };

    for line in &signatory.heading {
        centered(p, line, FontStyle::Regular, cursor);
        cursor += line_h;
    }
    if signatory.signature_image.is_some() {
        let image_top = cursor + (SIGNATURE_SPACE_MM - SIGNATURE_IMAGE_H_MM) / 2.0;
        p.image(
            ImageSlot::Signature,
            center_mm - SIGNATURE_IMAGE_W_MM / 2.0,
            image_top,
            SIGNATURE_IMAGE_W_MM,
            SIGNATURE_IMAGE_H_MM,
        );
    }
    cursor += SIGNATURE_SPACE_MM;
    centered(p, &signatory.name, FontStyle::Bold, cursor);
    cursor += line_h;
    centered(p, &format!("NIP. {}", signatory.nip), FontStyle::Regular, cursor);
    cursor + line_h
}
