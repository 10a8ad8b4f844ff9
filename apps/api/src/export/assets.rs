//! Raster assets drawn into the PDF: both header logos and the signature.
//!
//! Loaded once at startup, from `PDF_ASSET_DIR` when set, otherwise from the
//! hosted URLs the HTML view links to. A missing asset leaves its slot blank.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use printpdf::image_crate::{self, GenericImageView};
use reqwest::Client;
use tracing::{info, warn};

use crate::export::ExportError;
use crate::layout::ImageSlot;

/// Decoded RGB8 pixels, alpha already flattened onto white.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl RasterImage {
    /// Decodes PNG, JPEG, or any other format the image crate recognises.
    pub fn decode(bytes: &[u8]) -> Result<Self, ExportError> {
        let image = image_crate::load_from_memory(bytes)
            .map_err(|e| ExportError::Asset(e.to_string()))?;
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ExportError::Asset("image has no pixels".to_string()));
        }

        let rgba = image.to_rgba8();
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            for channel in [r, g, b] {
                rgb.push(over_white(channel, a));
            }
        }
        Ok(Self { width, height, rgb })
    }
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u32::from(channel), u32::from(alpha));
    ((c * a + 255 * (255 - a)) / 255) as u8
}

/// Images by slot. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct PdfAssets {
    images: HashMap<ImageSlot, Arc<RasterImage>>,
}

impl PdfAssets {
    pub fn with(mut self, slot: ImageSlot, image: RasterImage) -> Self {
        self.images.insert(slot, Arc::new(image));
        self
    }

    pub fn get(&self, slot: ImageSlot) -> Option<&RasterImage> {
        self.images.get(&slot).map(Arc::as_ref)
    }

    pub fn loaded_count(&self) -> usize {
        self.images.len()
    }

    /// Loads every slot; failures are logged and skipped.
    pub async fn load(client: &Client, asset_dir: Option<&Path>) -> Self {
        let mut assets = PdfAssets::default();
        for slot in ImageSlot::ALL {
            let bytes = match asset_dir {
                Some(dir) => read_file(&dir.join(slot.file_name())).await,
                None => fetch(client, slot.source_url()).await,
            };
            match bytes.and_then(|b| RasterImage::decode(&b)) {
                Ok(image) => assets = assets.with(slot, image),
                Err(e) => warn!("PDF asset {slot:?} unavailable, slot stays blank: {e}"),
            }
        }
        info!("PDF assets loaded: {} of {}", assets.loaded_count(), ImageSlot::ALL.len());
        assets
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, ExportError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| ExportError::Asset(format!("{}: {e}", path.display())))
}

async fn fetch(client: &Client, url: &str) -> Result<Vec<u8>, ExportError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| ExportError::Asset(e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ExportError::Asset(e.to_string()))?;
    Ok(bytes.to_vec())
}
