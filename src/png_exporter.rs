use crate::error::ExportError;
use crate::frame::Frame;
use crate::layout::ConvectionLayout;
use crate::phase::Phase;
use crate::raster::DiagramRenderer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct PngExporter {
    renderer: DiagramRenderer,
    layout: ConvectionLayout,
}

impl PngExporter {
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        Ok(Self {
            renderer: DiagramRenderer::new(width, height)?,
            layout: ConvectionLayout::default(),
        })
    }

    /// Renders the diagram at `phase` into a single PNG.
    pub fn export_frame<P: AsRef<Path>>(&self, phase: Phase, output_path: P) -> Result<(), ExportError> {
        let frame = Frame::generate_with(phase, &self.layout);
        let image = self.renderer.render(&frame);
        image.save(output_path.as_ref())?;
        debug!(phase = phase.degrees(), path = %output_path.as_ref().display(), "png written");
        Ok(())
    }

    /// Writes one PNG every `step` degrees over a full cycle, named
    /// `convection_phase_XXX.png`. Returns the files in phase order.
    pub fn export_sweep<P: AsRef<Path>>(&self, step: u16, output_dir: P) -> Result<Vec<PathBuf>, ExportError> {
        std::fs::create_dir_all(&output_dir)?;
        info!(step, dir = %output_dir.as_ref().display(), "exporting png sweep");

        let mut written = Vec::new();
        for phase in Phase::sweep(step) {
            let filename = format!("convection_phase_{:03}.png", phase.degrees());
            let filepath = output_dir.as_ref().join(filename);
            self.export_frame(phase, &filepath)?;
            written.push(filepath);
        }

        info!(frames = written.len(), "png sweep complete");
        Ok(written)
    }
}
