use crate::constants::GIF_FRAME_DELAY_CS;
use crate::error::ExportError;
use crate::frame::Frame;
use crate::layout::ConvectionLayout;
use crate::phase::Phase;
use crate::raster::DiagramRenderer;
use gif::{Encoder, Frame as GifFrame, Repeat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// NeuQuant sampling factor handed to the gif crate (1 = best, 30 = fastest).
const QUANTIZE_SPEED: i32 = 10;

pub struct GifExporter {
    width: u16,
    height: u16,
    renderer: DiagramRenderer,
    layout: ConvectionLayout,
}

impl GifExporter {
    pub fn new(width: u16, height: u16) -> Result<Self, ExportError> {
        Ok(Self {
            width,
            height,
            renderer: DiagramRenderer::new(width as u32, height as u32)?,
            layout: ConvectionLayout::default(),
        })
    }

    /// Export one full rotation as a looping animated GIF, sampling every
    /// `step` degrees. Frame delay keeps real-time speed: `step` ticks of
    /// 50 ms each. Returns the number of frames written.
    pub fn export_cycle<P: AsRef<Path>>(&self, step: u16, output_path: P) -> Result<usize, ExportError> {
        let file = File::create(output_path.as_ref())?;
        let mut writer = BufWriter::new(file);
        let mut encoder = Encoder::new(&mut writer, self.width, self.height, &[])?;
        encoder.set_repeat(Repeat::Infinite)?;

        let step = step.max(1);
        let delay = GIF_FRAME_DELAY_CS.saturating_mul(step);
        info!(step, delay_cs = delay, path = %output_path.as_ref().display(), "exporting gif cycle");

        let mut frames = 0;
        for phase in Phase::sweep(step) {
            debug!(phase = phase.degrees(), "rendering gif frame");
            let frame = Frame::generate_with(phase, &self.layout);
            let mut rgba = self.renderer.render(&frame).into_raw();

            let mut gif_frame =
                GifFrame::from_rgba_speed(self.width, self.height, &mut rgba, QUANTIZE_SPEED);
            gif_frame.delay = delay;
            encoder.write_frame(&gif_frame)?;
            frames += 1;
        }

        // the encoder writes the trailer on drop
        drop(encoder);
        writer.flush()?;
        info!(frames, "gif cycle complete");
        Ok(frames)
    }
}
