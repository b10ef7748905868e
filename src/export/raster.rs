//! SVG rasterization through `resvg`.
//!
//! The rasterizer owns a shared font database, loaded once from the system,
//! and turns a rendered SVG document into an opaque PNG at a fixed scale
//! factor. Pixels come out of `tiny-skia` premultiplied; they are
//! demultiplied before encoding.

use crate::error::ExportError;
use crate::render::RenderedDocument;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use resvg::{tiny_skia, usvg};
use std::sync::Arc;

/// Rasterization parameters. The pixel width is fixed by the renderer's
/// content width; only the output scale varies.
#[derive(Debug, Clone, Copy)]
pub struct RasterOptions {
    /// Output scale factor. Two gives a crisp print-density bitmap.
    pub scale: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 2.0 }
    }
}

/// A finished raster: PNG bytes plus pixel dimensions.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl RasterImage {
    /// The raster as a `data:image/png;base64,` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Converts rendered SVG documents into raster images.
pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl Rasterizer {
    /// Builds the rasterizer and loads the system font collection once.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("font database loaded with {} faces", db.len());
        Self {
            fontdb: Arc::new(db),
        }
    }

    pub fn rasterize(
        &self,
        document: &RenderedDocument,
        options: &RasterOptions,
    ) -> Result<RasterImage, ExportError> {
        let mut opt = usvg::Options::default();
        opt.fontdb = self.fontdb.clone();
        let tree = usvg::Tree::from_str(&document.svg, &opt)
            .map_err(|e| ExportError::Render(e.to_string()))?;

        let scale = options.scale;
        let width = ((document.width as f32 * scale).round() as u32).max(1);
        let height = ((document.height as f32 * scale).round() as u32).max(1);
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ExportError::Raster(format!("cannot allocate {width}x{height} pixmap")))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let buffer = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| ExportError::Raster("pixel buffer size mismatch".into()))?;
        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(buffer)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)?;

        Ok(RasterImage { width, height, png })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
