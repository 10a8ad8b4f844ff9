//! PDF export: paginate, stamp footers, write with printpdf's built-in Helvetica.
//!
//! Draw order per page: shaded boxes, rules, images, text.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Greyscale, Image, ImageTransform, ImageXObject,
    Line, Mm, PdfDocument, PdfLayerReference, Point, Px, Rect,
};
use serde::Deserialize;
use tracing::debug;

use crate::export::assets::{PdfAssets, RasterImage};
use crate::export::ExportError;
use crate::generation::assembler::RpmResult;
use crate::layout::font_metrics::FontStyle;
use crate::layout::paginate::{PageLayout, PlacedImage, Shade};
use crate::layout::{paginate, stamp_footers, DocumentLayout, Margins, PageSpec};
use crate::render::render;

/// Resolution an image is assumed to have before scaling into its slot.
const IMAGE_DPI: f32 = 300.0;
const MM_PER_INCH: f32 = 25.4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PdfOptions {
    #[serde(default)]
    pub margins: Margins,
}

#[derive(Debug, Clone)]
pub struct PdfExport {
    pub filename: String,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

/// `RPM_{subject}_Kelas{n}.pdf`
pub fn pdf_filename(result: &RpmResult) -> String {
    format!(
        "RPM_{}_Kelas{}.pdf",
        result.form.subject.label(),
        result.form.class_level
    )
}

/// Lays out and writes the whole document. CPU-bound.
pub fn export_pdf(
    result: &RpmResult,
    options: &PdfOptions,
    assets: &PdfAssets,
) -> Result<PdfExport, ExportError> {
    if !options.margins.is_valid() {
        return Err(ExportError::InvalidMargins(options.margins));
    }

    let view = render(result);
    let mut layout = paginate(&view, PageSpec::a4(options.margins));
    stamp_footers(&mut layout, &view.footer_label);

    let filename = pdf_filename(result);
    let bytes = write_pdf(&layout, &filename, assets)?;
    debug!(
        "PDF written: {filename}, {} pages, {} bytes",
        layout.page_count(),
        bytes.len()
    );

    Ok(PdfExport {
        filename,
        page_count: layout.page_count(),
        bytes,
    })
}

fn write_pdf(
    layout: &DocumentLayout,
    title: &str,
    assets: &PdfAssets,
) -> Result<Vec<u8>, ExportError> {
    let width = Mm(layout.spec.width_mm);
    let height = Mm(layout.spec.height_mm);
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Layer 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (i, page) in layout.pages.iter().enumerate() {
        let (page_index, layer_index) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        draw_shapes(&layer, page);
        for placed in &page.images {
            if let Some(image) = assets.get(placed.slot) {
                draw_image(&layer, placed, image);
            }
        }

        layer.set_fill_color(grey(0.0));
        for item in &page.items {
            let font = match item.style {
                FontStyle::Regular => &regular,
                FontStyle::Bold => &bold,
            };
            layer.use_text(item.text.as_str(), item.size_pt, Mm(item.x_mm), Mm(item.y_mm), font);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn grey(level: f32) -> Color {
    Color::Greyscale(Greyscale::new(level, None))
}

fn shade_level(shade: Shade) -> f32 {
    match shade {
        Shade::SectionBar => 0.82,
        Shade::HeaderRow => 0.88,
        Shade::LabelCell => 0.94,
    }
}

fn draw_shapes(layer: &PdfLayerReference, page: &PageLayout) {
    for fill in &page.fills {
        layer.set_fill_color(grey(shade_level(fill.shade)));
        layer.add_rect(
            Rect::new(
                Mm(fill.x_mm),
                Mm(fill.y_mm),
                Mm(fill.x_mm + fill.width_mm),
                Mm(fill.y_mm + fill.height_mm),
            )
            .with_mode(PaintMode::Fill),
        );
    }

    layer.set_outline_color(grey(0.0));
    for rule in &page.rules {
        layer.set_outline_thickness(rule.thickness_pt);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(rule.from.0), Mm(rule.from.1)), false),
                (Point::new(Mm(rule.to.0), Mm(rule.to.1)), false),
            ],
            is_closed: false,
        });
    }
}

/// Fits the image into its slot, aspect preserved and centred.
fn draw_image(layer: &PdfLayerReference, placed: &PlacedImage, image: &RasterImage) {
    let native_w = image.width as f32 * MM_PER_INCH / IMAGE_DPI;
    let native_h = image.height as f32 * MM_PER_INCH / IMAGE_DPI;
    let scale = (placed.width_mm / native_w).min(placed.height_mm / native_h);
    let drawn_w = native_w * scale;
    let drawn_h = native_h * scale;

    let xobject = ImageXObject {
        width: Px(image.width as usize),
        height: Px(image.height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: image.rgb.clone(),
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    };
    Image::from(xobject).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(placed.x_mm + (placed.width_mm - drawn_w) / 2.0)),
            translate_y: Some(Mm(placed.y_mm + (placed.height_mm - drawn_h) / 2.0)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
}
