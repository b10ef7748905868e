//! vitae: a curriculum-vitae document store and export pipeline.
//!
//! The crate keeps a CV document in memory, mirrors every mutation to a
//! durable key-value store (one JSON entry per logical field), and exports
//! the rendered document either as a PNG raster or as a multi-page A4 PDF
//! in which the single tall raster strip is tiled across `ceil(H / P)`
//! pages.
//!
//! ```no_run
//! use vitae::{CvStore, ExportPipeline};
//!
//! fn main() -> Result<(), vitae::VitaeError> {
//!     let store = CvStore::open(".vitae");
//!     let pipeline = ExportPipeline::new();
//!     pipeline.export_pdf(&store.snapshot(), std::path::Path::new("."))?;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod render;
pub mod store;

pub use document::{
    CvSnapshot, EducationItem, ExperienceItem, PersonalInfo, Project, Section, SectionVisibility,
    SkillCategory, parse_comma_list,
};
pub use editor::EditSession;
pub use error::{EditError, ExportError, ExportStage, StoreError, VitaeError};
pub use export::{
    ExportPipeline, IMAGE_FILENAME, Notifier, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PDF_FILENAME,
    RasterImage, RasterOptions, Rasterizer, StderrNotifier, page_count,
};
pub use render::{RenderedDocument, Theme, render};
pub use store::{CvStore, FileBackend, MemoryBackend, Persistence, StorageBackend};
