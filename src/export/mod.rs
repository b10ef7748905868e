//! The export pipeline: snapshot → rendered SVG → raster → artifact.
//!
//! Both export operations run the same stages: `Rendering` builds a
//! detached copy with a flattened theme, `Rasterizing` produces the PNG,
//! and the PDF path adds `Assembling` before `Writing` the artifact. Every
//! export owns a scratch directory for its intermediates; the directory is
//! removed on success and failure alike, because its removal rides on
//! ownership rather than on reaching a cleanup statement. Failures are
//! reported through the pipeline's [`Notifier`] and returned to the
//! caller; stored state is never touched.

mod pdf;
mod raster;

pub use pdf::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM, page_count};
pub use raster::{RasterImage, RasterOptions, Rasterizer};

use crate::document::CvSnapshot;
use crate::error::{ExportError, ExportStage};
use crate::render::{Theme, render};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const IMAGE_FILENAME: &str = "curriculum-vitae.png";
pub const PDF_FILENAME: &str = "curriculum-vitae.pdf";

/// Synchronous user-facing failure notification, the environment-neutral
/// replacement for a blocking dialog.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Writes the notice to stderr; the CLI's notifier.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

enum Format {
    Png,
    Pdf,
}

/// Drives exports end to end. Construction is builder-style; the defaults
/// give the standard theme, scale-2 rasterization and stderr notification.
pub struct ExportPipeline {
    rasterizer: Rasterizer,
    options: RasterOptions,
    theme: Theme,
    notifier: Box<dyn Notifier>,
    scratch_root: Option<PathBuf>,
}

impl ExportPipeline {
    pub fn new() -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            options: RasterOptions::default(),
            theme: Theme::default(),
            notifier: Box::new(StderrNotifier),
            scratch_root: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Places scratch directories under `root` instead of the system
    /// temporary directory.
    pub fn with_scratch_root(mut self, root: PathBuf) -> Self {
        self.scratch_root = Some(root);
        self
    }

    /// Renders a detached copy of the snapshot and rasterizes it to a PNG.
    pub fn export_raster(&self, snapshot: &CvSnapshot) -> Result<RasterImage, ExportError> {
        self.notified(|| {
            let scratch = self.scratch()?;
            self.raster_detached(snapshot, &scratch)
        })
    }

    /// Writes the raster as `curriculum-vitae.png` into `out_dir` and
    /// returns the artifact path.
    pub fn export_image(
        &self,
        snapshot: &CvSnapshot,
        out_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        self.notified(|| self.produce(snapshot, out_dir, Format::Png))
    }

    /// Assembles the paginated PDF and writes it as `curriculum-vitae.pdf`
    /// into `out_dir`.
    pub fn export_pdf(
        &self,
        snapshot: &CvSnapshot,
        out_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        self.notified(|| self.produce(snapshot, out_dir, Format::Pdf))
    }

    fn produce(
        &self,
        snapshot: &CvSnapshot,
        out_dir: &Path,
        format: Format,
    ) -> Result<PathBuf, ExportError> {
        // The scratch directory lives exactly as long as this call.
        let scratch = self.scratch()?;
        let raster = self.raster_detached(snapshot, &scratch)?;

        let (filename, bytes) = match format {
            Format::Png => (IMAGE_FILENAME, raster.png),
            Format::Pdf => {
                log::debug!("export stage: {}", ExportStage::Assembling);
                (PDF_FILENAME, pdf::assemble(&raster, &snapshot.personal.name)?)
            }
        };

        log::debug!("export stage: {}", ExportStage::Writing);
        let path = out_dir.join(filename);
        fs::write(&path, &bytes).map_err(|e| ExportError::Artifact {
            path: path.clone(),
            message: e.to_string(),
        })?;
        log::info!("exported {}", path.display());
        Ok(path)
    }

    fn raster_detached(
        &self,
        snapshot: &CvSnapshot,
        scratch: &TempDir,
    ) -> Result<RasterImage, ExportError> {
        log::debug!("export stage: {}", ExportStage::Rendering);
        let rendered = render(snapshot, &self.theme.flattened());
        // The detached copy is kept on disk while the export runs; it is
        // the only place the off-screen document ever materializes.
        fs::write(scratch.path().join("curriculum-export.svg"), &rendered.svg)?;

        log::debug!("export stage: {}", ExportStage::Rasterizing);
        self.rasterizer.rasterize(&rendered, &self.options)
    }

    fn scratch(&self) -> Result<TempDir, ExportError> {
        match &self.scratch_root {
            Some(root) => {
                fs::create_dir_all(root)?;
                Ok(TempDir::new_in(root)?)
            }
            None => Ok(TempDir::new()?),
        }
    }

    fn notified<T>(&self, run: impl FnOnce() -> Result<T, ExportError>) -> Result<T, ExportError> {
        let result = run();
        if let Err(e) = &result {
            log::error!("export failed: {e}");
            self.notifier
                .notify(&format!("Export failed: {e}. Please try again."));
        }
        result
    }
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new()
    }
}
