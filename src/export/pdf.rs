//! Multi-page PDF assembly from a single tall raster.
//!
//! The raster is embedded once as an image XObject and drawn on every page,
//! shifted up by one page height per page; each A4 viewport then shows its
//! own vertical slice of the same image.

use super::raster::RasterImage;
use crate::error::ExportError;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Target image width on the page, A4 portrait.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// Working page height: the 297 mm of an A4 page minus slack for the
/// printer-unfriendly edge.
pub const PAGE_HEIGHT_MM: f32 = 295.0;

const A4_WIDTH_PT: f32 = 595.276;
const A4_HEIGHT_PT: f32 = 841.89;
const MM_TO_PT: f32 = 72.0 / 25.4;

/// Pages needed to show an image of `image_height_mm` at `page_height_mm`
/// per page: `ceil(H / P)`, never less than one. An exact multiple fills
/// its last page without spilling onto an empty one.
pub fn page_count(image_height_mm: f32, page_height_mm: f32) -> usize {
    if image_height_mm <= page_height_mm {
        return 1;
    }
    (image_height_mm / page_height_mm).ceil() as usize
}

/// Assembles the paginated document and returns its bytes.
pub fn assemble(raster: &RasterImage, title: &str) -> Result<Vec<u8>, ExportError> {
    let decoded = image::load_from_memory(&raster.png)?;
    let rgb = decoded.to_rgb8();
    let (px_width, px_height) = rgb.dimensions();
    if px_width == 0 || px_height == 0 {
        return Err(ExportError::Pdf("raster image is empty".into()));
    }

    let image_height_mm = px_height as f32 * PAGE_WIDTH_MM / px_width as f32;
    let pages = page_count(image_height_mm, PAGE_HEIGHT_MM);
    log::debug!(
        "assembling {pages} page(s) for a {image_height_mm:.0} mm image strip"
    );

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => px_width as i64,
            "Height" => px_height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb.into_raw(),
    ));
    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! { "Im0" => image_id },
    });

    let image_width_pt = PAGE_WIDTH_MM * MM_TO_PT;
    let image_height_pt = image_height_mm * MM_TO_PT;
    let mut page_ids: Vec<Object> = Vec::with_capacity(pages);
    for page in 0..pages {
        // Page k sees the slice [k*P, (k+1)*P) of the strip: the image
        // bottom sits (H - k*P) below the page top.
        let shift_mm = page as f32 * PAGE_HEIGHT_MM;
        let bottom_pt = A4_HEIGHT_PT - (image_height_mm - shift_mm) * MM_TO_PT;
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        image_width_pt.into(),
                        0.into(),
                        0.into(),
                        image_height_pt.into(),
                        0.into(),
                        bottom_pt.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), A4_WIDTH_PT.into(), A4_HEIGHT_PT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }
        .into(),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Producer" => Object::string_literal("vitae"),
        "CreationDate" => Object::string_literal(
            chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string(),
        ),
    });
    doc.trailer.set("Info", info_id);

    doc.compress();
    let mut cursor = std::io::Cursor::new(Vec::new());
    doc.save_to(&mut cursor)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_raster(px_width: u32, px_height: u32) -> RasterImage {
        let buffer = image::RgbImage::from_pixel(px_width, px_height, image::Rgb([255, 255, 255]));
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(buffer)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        RasterImage {
            width: px_width,
            height: px_height,
            png,
        }
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(900.0, 295.0), 4);
        assert_eq!(page_count(296.0, 295.0), 2);
        assert_eq!(page_count(100.0, 295.0), 1);
    }

    #[test]
    fn page_count_at_exact_multiples_does_not_spill() {
        assert_eq!(page_count(295.0, 295.0), 1);
        assert_eq!(page_count(590.0, 295.0), 2);
    }

    #[test]
    fn short_image_assembles_to_a_single_page() {
        // 210 px wide, 100 px tall: 100 mm of strip.
        let bytes = assemble(&white_raster(210, 100), "cv").unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn tall_image_tiles_across_pages() {
        // 210 px wide, 900 px tall: a 900 mm strip, four pages at 295 mm.
        let bytes = assemble(&white_raster(210, 900), "cv").unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }

    #[test]
    fn pages_are_a4_portrait() {
        let bytes = assemble(&white_raster(210, 600), "cv").unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let (_, first_page) = doc.get_pages().into_iter().next().unwrap();
        let media_box = doc
            .get_object(first_page)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .clone();
        assert_eq!(media_box.len(), 4);
        let width = media_box[2].as_f32().unwrap();
        let height = media_box[3].as_f32().unwrap();
        assert!((width - 595.276).abs() < 0.01);
        assert!((height - 841.89).abs() < 0.01);
    }

    #[test]
    fn title_lands_in_the_info_dictionary() {
        let bytes = assemble(&white_raster(210, 100), "Ada Lovelace").unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_object(info_id).unwrap().as_dict().unwrap();
        match info.get(b"Title").unwrap() {
            Object::String(bytes, _) => assert_eq!(bytes.as_slice(), b"Ada Lovelace"),
            other => panic!("unexpected Title object: {other:?}"),
        }
    }
}
