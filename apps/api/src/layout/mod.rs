// PDF page layout: Helvetica metrics, word-wrap, two-pass pagination.
// CPU-bound; callers on the async runtime must run it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod footer;
pub mod paginate;

use serde::{Deserialize, Serialize};

pub use footer::stamp_footers;
pub use paginate::{paginate, DocumentLayout, ImageSlot};

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Page margins in millimetres. Sides missing on the wire take the 10 mm default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Margins {
    pub fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            bottom: mm,
            left: mm,
            right: mm,
        }
    }

    /// Margins must be non-negative and leave room for text.
    pub fn is_valid(&self) -> bool {
        let sides = [self.top, self.bottom, self.left, self.right];
        sides.iter().all(|m| m.is_finite() && *m >= 0.0)
            && self.left + self.right < A4_WIDTH_MM / 2.0
            && self.top + self.bottom < A4_HEIGHT_MM / 2.0
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Per-request margin overrides; sides left out keep the configured margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct MarginOverrides {
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
}

impl MarginOverrides {
    pub fn over(self, base: Margins) -> Margins {
        Margins {
            top: self.top.unwrap_or(base.top),
            bottom: self.bottom.unwrap_or(base.bottom),
            left: self.left.unwrap_or(base.left),
            right: self.right.unwrap_or(base.right),
        }
    }
}

/// Portrait page geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margins: Margins,
}

impl PageSpec {
    pub fn a4(margins: Margins) -> Self {
        Self {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
            margins,
        }
    }

    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - self.margins.left - self.margins.right
    }

    /// Lowest point body content may reach, measured from the bottom edge.
    /// Never closer to the edge than the footer band.
    pub fn body_floor_mm(&self) -> f32 {
        self.margins.bottom.max(footer::FOOTER_CLEARANCE_MM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margins_are_ten_mm() {
        assert_eq!(Margins::default(), Margins::uniform(10.0));
        assert!((PageSpec::a4(Margins::default()).content_width_mm() - 190.0).abs() < 1e-4);
    }

    #[test]
    fn test_margin_validation() {
        assert!(Margins::uniform(25.0).is_valid());
        assert!(!Margins::uniform(-1.0).is_valid());
        assert!(!Margins {
            left: 60.0,
            right: 60.0,
            ..Margins::default()
        }
        .is_valid());
        assert!(!Margins::uniform(f32::NAN).is_valid());
    }

    #[test]
    fn test_partial_margins_deserialize() {
        let margins: Margins = serde_json::from_str(r#"{"top": 20}"#).unwrap();
        assert_eq!(
            margins,
            Margins {
                top: 20.0,
                ..Margins::default()
            }
        );
    }

    #[test]
    fn test_overrides_fall_back_to_configured_margins() {
        let overrides: MarginOverrides = serde_json::from_str(r#"{"left": 30}"#).unwrap();
        let margins = overrides.over(Margins::uniform(15.0));
        assert_eq!(margins.left, 30.0);
        assert_eq!(margins.top, 15.0);
        assert_eq!(margins.right, 15.0);
    }

    #[test]
    fn test_body_floor_clears_footer() {
        let spec = PageSpec::a4(Margins::uniform(0.0));
        assert_eq!(spec.body_floor_mm(), footer::FOOTER_CLEARANCE_MM);
        assert!(spec.body_floor_mm() > footer::FOOTER_BASELINE_MM + 2.0);
        let spec = PageSpec::a4(Margins::uniform(20.0));
        assert_eq!(spec.body_floor_mm(), 20.0);
    }
}
