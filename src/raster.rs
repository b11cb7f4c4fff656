use crate::backdrop::{
    Canvas, PixelRect, STRATA, TEMPERATURE_SCALE, sample_gradient,
};
use crate::color::Rgba;
use crate::constants::{
    ARROW_LENGTH_PX, ARROW_WIDTH_PX, GRAY_900, RED_500, RIDGE_LINE_PX, STONE_500, STONE_600,
    STONE_700,
};
use crate::error::ExportError;
use crate::frame::Frame;
use glam::DVec2;
use image::{ImageBuffer, Rgba as Pixel, RgbaImage};

const RIDGE_OPACITY: f64 = 0.5;
const SUBDUCTION_OPACITY: f64 = 0.8;

/// Paints frames onto an RGBA canvas: backdrop first, then arrows, then particles.
#[derive(Clone, Copy, Debug)]
pub struct DiagramRenderer {
    canvas: Canvas,
}

impl DiagramRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        if width == 0 || height == 0 {
            return Err(ExportError::InvalidDimensions { width, height });
        }
        Ok(Self {
            canvas: Canvas::new(width, height),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn render(&self, frame: &Frame) -> RgbaImage {
        let mut img = ImageBuffer::from_pixel(
            self.canvas.width,
            self.canvas.height,
            Pixel([GRAY_900[0], GRAY_900[1], GRAY_900[2], 255]),
        );

        self.paint_strata(&mut img);
        self.paint_crust(&mut img, frame);

        let scale = self.canvas.scale();
        for arrow in &frame.flow_indicators {
            let center = self.canvas.core_to_pixel(arrow.position);
            self.draw_arrow(&mut img, center, arrow.rotation_deg as f64, scale, &arrow.color);
        }
        for particle in &frame.particles {
            let center = self.canvas.core_to_pixel(particle.position);
            let radius = particle.size as f64 * scale / 2.0;
            self.draw_spot(&mut img, center, radius, &particle.color);
        }

        self.clip_rounded_bottom(&mut img);
        self.paint_temperature_bar(&mut img);
        img
    }

    fn paint_strata(&self, img: &mut RgbaImage) {
        for stratum in STRATA.iter() {
            let rect = self.canvas.band(stratum.top, stratum.bottom);
            self.fill_gradient(img, &rect, stratum.gradient);
        }
    }

    fn paint_crust(&self, img: &mut RgbaImage, frame: &Frame) {
        let scale = self.canvas.scale();
        let ridge = Rgba::new(
            RED_500[0] as f64,
            RED_500[1] as f64,
            RED_500[2] as f64,
            RIDGE_OPACITY,
        );
        let ridge_width = RIDGE_LINE_PX as f64 * scale;

        let [left, right] = self.canvas.spreading_halves(frame.plate_offset);
        self.fill_rect(img, &left, &Rgba::from_rgb8(STONE_600));
        self.fill_rect(img, &right, &Rgba::from_rgb8(STONE_600));
        // ridge lines mark the inner edge of each half
        let left_ridge = PixelRect {
            x0: left.x1 - ridge_width,
            ..left
        };
        let right_ridge = PixelRect {
            x1: right.x0 + ridge_width,
            ..right
        };
        self.fill_rect(img, &left_ridge, &ridge);
        self.fill_rect(img, &right_ridge, &ridge);

        for plate in self.canvas.continental_plates() {
            self.fill_rect(img, &plate, &Rgba::from_rgb8(STONE_500));
        }

        // slabs go over the plates so they stay visible
        let shift = frame.subduction_shift as f64 * scale;
        for (zone, lean) in self.canvas.subduction_zones() {
            self.draw_slab(img, &zone, lean, shift);
        }
    }

    /// Skewed 45 degrees about the box center; the top half is the moving slab.
    fn draw_slab(&self, img: &mut RgbaImage, zone: &PixelRect, lean: f64, shift: f64) {
        let mid_y = (zone.y0 + zone.y1) / 2.0;
        let slab = PixelRect {
            y1: zone.y0 + zone.height() / 2.0,
            ..*zone
        }
        .shifted(0.0, shift);
        let reach = zone.height() / 2.0;

        let (y_start, y_end) = self.rows(zone.y0, zone.y1);
        let (x_start, x_end) = self.columns(zone.x0 - reach, zone.x1 + reach);
        for py in y_start..y_end {
            let y = py as f64 + 0.5;
            let skew = lean * (y - mid_y);
            for px in x_start..x_end {
                // undo the skew to test against the upright box
                let x = px as f64 + 0.5 - skew;
                if !zone.contains(x, y) {
                    continue;
                }
                let base = if slab.contains(x, y) { STONE_600 } else { STONE_700 };
                let color = Rgba::new(base[0] as f64, base[1] as f64, base[2] as f64, SUBDUCTION_OPACITY);
                blend(img, px, py, &color);
            }
        }
    }

    fn paint_temperature_bar(&self, img: &mut RgbaImage) {
        let bar = self.canvas.temperature_bar();
        self.fill_gradient(img, &bar, TEMPERATURE_SCALE.gradient);
    }

    fn clip_rounded_bottom(&self, img: &mut RgbaImage) {
        let background = Pixel([GRAY_900[0], GRAY_900[1], GRAY_900[2], 255]);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            if !self.canvas.inside_rounded_bottom(x as f64 + 0.5, y as f64 + 0.5) {
                *pixel = background;
            }
        }
    }

    fn rows(&self, y0: f64, y1: f64) -> (u32, u32) {
        clamp_span(y0, y1, self.canvas.height)
    }

    fn columns(&self, x0: f64, x1: f64) -> (u32, u32) {
        clamp_span(x0, x1, self.canvas.width)
    }

    fn fill_rect(&self, img: &mut RgbaImage, rect: &PixelRect, color: &Rgba) {
        let (y_start, y_end) = self.rows(rect.y0, rect.y1);
        let (x_start, x_end) = self.columns(rect.x0, rect.x1);
        for y in y_start..y_end {
            for x in x_start..x_end {
                blend(img, x, y, color);
            }
        }
    }

    fn fill_gradient(&self, img: &mut RgbaImage, rect: &PixelRect, stops: &[[u8; 3]]) {
        let (y_start, y_end) = self.rows(rect.y0, rect.y1);
        let (x_start, x_end) = self.columns(rect.x0, rect.x1);
        let height = rect.height().max(1.0);
        for y in y_start..y_end {
            let t = (y as f64 + 0.5 - rect.y0) / height;
            let color = Rgba::from_rgb8(sample_gradient(stops, t));
            for x in x_start..x_end {
                blend(img, x, y, &color);
            }
        }
    }

    fn draw_spot(&self, img: &mut RgbaImage, center: DVec2, radius: f64, color: &Rgba) {
        let (y_start, y_end) = self.rows(center.y - radius, center.y + radius);
        let (x_start, x_end) = self.columns(center.x - radius, center.x + radius);
        for y in y_start..y_end {
            for x in x_start..x_end {
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - center;
                if d.length_squared() <= radius * radius {
                    blend(img, x, y, color);
                }
            }
        }
    }

    /// Triangle pointing along +x before rotation, centered on `center`,
    /// turned clockwise on screen by `rotation_deg`.
    fn draw_arrow(&self, img: &mut RgbaImage, center: DVec2, rotation_deg: f64, scale: f64, color: &Rgba) {
        let half_len = ARROW_LENGTH_PX * scale / 2.0;
        let half_width = ARROW_WIDTH_PX * scale / 2.0;
        let (sin, cos) = rotation_deg.to_radians().sin_cos();

        let (y_start, y_end) = self.rows(center.y - half_len, center.y + half_len);
        let (x_start, x_end) = self.columns(center.x - half_len, center.x + half_len);
        for y in y_start..y_end {
            for x in x_start..x_end {
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - center;
                // back into the glyph's own frame
                let local_x = d.x * cos + d.y * sin;
                let local_y = -d.x * sin + d.y * cos;
                if local_x < -half_len || local_x > half_len {
                    continue;
                }
                let allowed = half_width * (half_len - local_x) / (2.0 * half_len);
                if local_y.abs() <= allowed {
                    blend(img, x, y, color);
                }
            }
        }
    }
}

fn clamp_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let lo = start.floor().clamp(0.0, limit as f64) as u32;
    let hi = end.ceil().clamp(0.0, limit as f64) as u32;
    (lo, hi.max(lo))
}

/// Source-over compositing onto an opaque canvas.
fn blend(img: &mut RgbaImage, x: u32, y: u32, color: &Rgba) {
    let ([r, g, b], alpha) = color.to_pixel();
    let pixel = img.get_pixel_mut(x, y);
    let mix = |src: u8, dst: u8| (src as f64 * alpha + dst as f64 * (1.0 - alpha)).round() as u8;
    *pixel = Pixel([
        mix(r, pixel[0]),
        mix(g, pixel[1]),
        mix(b, pixel[2]),
        255,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, ORANGE_700};
    use crate::phase::Phase;

    fn reference_renderer() -> DiagramRenderer {
        DiagramRenderer::new(CANVAS_WIDTH, CANVAS_HEIGHT).expect("reference canvas")
    }

    #[test]
    fn rejects_empty_canvas() {
        assert!(matches!(
            DiagramRenderer::new(0, 10),
            Err(ExportError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn renders_at_canvas_size() {
        let img = reference_renderer().render(&Frame::generate(Phase::ZERO));
        assert_eq!(img.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn corners_are_clipped_to_background() {
        let img = reference_renderer().render(&Frame::generate(Phase::new(33)));
        let corner = img.get_pixel(0, CANVAS_HEIGHT - 1);
        assert_eq!(corner.0, [GRAY_900[0], GRAY_900[1], GRAY_900[2], 255]);
    }

    #[test]
    fn outer_core_middle_shows_gradient() {
        // the core center stays clear of every arrow and particle ring
        let mut frame = Frame::generate(Phase::ZERO);
        frame.flow_indicators.clear();
        frame.particles.clear();
        let img = reference_renderer().render(&frame);
        let pixel = img.get_pixel(448, 192);
        assert_eq!(pixel.0, [ORANGE_700[0], ORANGE_700[1], ORANGE_700[2], 255]);
    }

    #[test]
    fn particles_leave_a_mark() {
        let renderer = reference_renderer();
        let frame = Frame::generate(Phase::ZERO);
        let mut empty = frame.clone();
        empty.particles.clear();

        let with = renderer.render(&frame);
        let without = renderer.render(&empty);
        // left bottom particle 0 sits at (40%, 65%) of the core
        let at = renderer.canvas().core_to_pixel(frame.particles[0].position);
        let (x, y) = (at.x as u32, at.y as u32);
        assert_ne!(with.get_pixel(x, y), without.get_pixel(x, y));
    }

    #[test]
    fn plate_halves_follow_offset() {
        let renderer = reference_renderer();
        let mut frame = Frame::generate(Phase::new(90));
        frame.flow_indicators.clear();
        frame.particles.clear();
        assert_eq!(frame.plate_offset, 8);

        let img = renderer.render(&frame);
        // just inside the gap the halves opened up at the ridge
        let gap = img.get_pixel(445, 10);
        assert_eq!(gap.0, [GRAY_900[0], GRAY_900[1], GRAY_900[2], 255]);
        let half = img.get_pixel(430, 10);
        assert_eq!(half.0, [STONE_600[0], STONE_600[1], STONE_600[2], 255]);
    }
}
