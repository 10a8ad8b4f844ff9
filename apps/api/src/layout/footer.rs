//! Pass 2: stamps the footer on every page once the page count is known.

use crate::layout::font_metrics::{get_metrics, sanitize, FontStyle, PT_TO_MM};
use crate::layout::paginate::{DocumentLayout, PlacedText};
use crate::layout::PageSpec;

pub const FOOTER_SIZE_PT: f32 = 8.0;
/// Footer baseline height above the bottom edge.
pub const FOOTER_BASELINE_MM: f32 = 5.0;
/// Band above the bottom edge kept free of body content: baseline, cap height, a small gap.
pub const FOOTER_CLEARANCE_MM: f32 = FOOTER_BASELINE_MM + FOOTER_SIZE_PT * PT_TO_MM + 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FooterPlacement {
    pub left: PlacedText,
    pub right: PlacedText,
}

/// Footer for page `page_number` (1-based) of `total`.
///
/// The left label starts at the left margin; the page counter ends exactly at
/// the right margin.
pub fn footer_for(spec: &PageSpec, label: &str, page_number: usize, total: usize) -> FooterPlacement {
    let metrics = get_metrics(FontStyle::Regular);
    let counter = format!("Hal. {page_number} dari {total}");
    let counter_width = metrics.width_mm(&counter, FOOTER_SIZE_PT);

    FooterPlacement {
        left: PlacedText {
            text: sanitize(label),
            x_mm: spec.margins.left,
            y_mm: FOOTER_BASELINE_MM,
            size_pt: FOOTER_SIZE_PT,
            style: FontStyle::Regular,
        },
        right: PlacedText {
            text: counter,
            x_mm: spec.width_mm - spec.margins.right - counter_width,
            y_mm: FOOTER_BASELINE_MM,
            size_pt: FOOTER_SIZE_PT,
            style: FontStyle::Regular,
        },
    }
}

/// Appends both footer labels to every page and returns the placements.
pub fn stamp_footers(layout: &mut DocumentLayout, label: &str) -> Vec<FooterPlacement> {
    let total = layout.page_count();
    let spec = layout.spec;
    layout
        .pages
        .iter_mut()
        .enumerate()
        .map(|(i, page)| {
            let footer = footer_for(&spec, label, i + 1, total);
            page.items.push(footer.left.clone());
            page.items.push(footer.right.clone());
            footer
        })
        .collect()
}
