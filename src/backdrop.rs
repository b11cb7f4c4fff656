//! Static scenery behind the moving primitives: the layered interior, the
//! plates at the surface, the temperature scale and the legend.
//!
//! Vertical extents are fractions of the canvas height, horizontal pixel
//! sizes are given for the reference 896x384 canvas and scaled from there.

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, ORANGE_500, ORANGE_600, ORANGE_700, ORANGE_800, RED_700, RED_800,
    RED_900, SCALE_BAR_INSET_PX, SCALE_BAR_WIDTH_PX, SPREADING_CENTER_WIDTH_PX, STONE_500,
    STONE_600, STONE_700, SUBDUCTION_WIDTH_PX,
};
use glam::DVec2;
use serde::Serialize;

pub const TITLE: &str = "Earth's Interior Structure and Divergent Plate Boundary Model";

/// Axis-aligned pixel rectangle, `x0..x1` by `y0..y1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl PixelRect {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn shifted(&self, dx: f64, dy: f64) -> PixelRect {
        PixelRect {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// One horizontal layer of the interior. Gradient stops run top to bottom.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct Stratum {
    pub name: &'static str,
    pub top: f64,
    pub bottom: f64,
    pub gradient: &'static [[u8; 3]],
}

/// Painted in order; later layers cover earlier ones where they overlap.
pub const STRATA: [Stratum; 4] = [
    Stratum {
        name: "inner core",
        top: 0.75,
        bottom: 1.0,
        gradient: &[RED_700, RED_800, RED_900],
    },
    Stratum {
        name: "outer core",
        top: 0.25,
        bottom: 0.75,
        gradient: &[ORANGE_600, ORANGE_700, ORANGE_800],
    },
    Stratum {
        name: "lower mantle",
        top: 1.0 / 12.0,
        bottom: 0.25,
        gradient: &[ORANGE_500, ORANGE_600],
    },
    Stratum {
        name: "upper mantle",
        top: 1.0 / 12.0,
        bottom: 1.0 / 6.0,
        gradient: &[STONE_700, ORANGE_500],
    },
];

/// Crust band at the top of the canvas, as fractions of height.
pub const CRUST_TOP: f64 = 0.0;
pub const CRUST_BOTTOM: f64 = 1.0 / 12.0;

#[derive(Serialize, Clone, Copy, Debug)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: [u8; 3],
}

pub const LEGEND: [LegendEntry; 4] = [
    LegendEntry {
        label: "Continental Crust - Granite (200-400°C)",
        color: STONE_500,
    },
    LegendEntry {
        label: "Oceanic Crust - Basalt (0-900°C)",
        color: STONE_600,
    },
    LegendEntry {
        label: "Mantle - Silicate rocks, Peridotite (900-3700°C)",
        color: ORANGE_500,
    },
    LegendEntry {
        label: "Core (Heat Source) - Liquid Iron-Nickel alloy (4000-5000°C)",
        color: ORANGE_700,
    },
];

#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureScale {
    pub top_label: &'static str,
    pub bottom_label: &'static str,
    pub gradient: &'static [[u8; 3]],
}

pub const TEMPERATURE_SCALE: TemperatureScale = TemperatureScale {
    top_label: "Surface (200°C)",
    bottom_label: "Core (5400°C)",
    gradient: &[STONE_600, RED_900],
};

/// Samples a top-to-bottom gradient at `t` in `0..=1`.
pub fn sample_gradient(stops: &[[u8; 3]], t: f64) -> [u8; 3] {
    match stops {
        [] => [0, 0, 0],
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
            let index = (t.floor() as usize).min(stops.len() - 2);
            let local = t - index as f64;
            let (a, b) = (stops[index], stops[index + 1]);
            let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * local).round() as u8;
            [mix(0), mix(1), mix(2)]
        }
    }
}

/// Pixel geometry of the diagram for a given canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn reference() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Factor applied to the reference pixel sizes.
    pub fn scale(&self) -> f64 {
        let sx = self.width as f64 / CANVAS_WIDTH as f64;
        let sy = self.height as f64 / CANVAS_HEIGHT as f64;
        sx.min(sy)
    }

    fn w(&self) -> f64 {
        self.width as f64
    }

    fn h(&self) -> f64 {
        self.height as f64
    }

    pub fn band(&self, top: f64, bottom: f64) -> PixelRect {
        PixelRect {
            x0: 0.0,
            y0: top * self.h(),
            x1: self.w(),
            y1: bottom * self.h(),
        }
    }

    pub fn crust(&self) -> PixelRect {
        self.band(CRUST_TOP, CRUST_BOTTOM)
    }

    /// Box the arrow and particle percentages are measured in.
    pub fn outer_core(&self) -> PixelRect {
        self.band(STRATA[1].top, STRATA[1].bottom)
    }

    /// Maps a percentage position inside the outer core to pixels.
    pub fn core_to_pixel(&self, percent: DVec2) -> DVec2 {
        let core = self.outer_core();
        DVec2::new(
            core.x0 + percent.x / 100.0 * core.width(),
            core.y0 + percent.y / 100.0 * core.height(),
        )
    }

    /// Left and right halves of the ridge, pushed apart by `plate_offset` pixels.
    pub fn spreading_halves(&self, plate_offset: i32) -> [PixelRect; 2] {
        let crust = self.crust();
        let half = SPREADING_CENTER_WIDTH_PX as f64 * self.scale() / 2.0;
        let mid = self.w() / 2.0;
        let offset = plate_offset as f64 * self.scale();
        let left = PixelRect {
            x0: mid - half,
            y0: crust.y0,
            x1: mid,
            y1: crust.y1,
        };
        let right = PixelRect {
            x0: mid,
            y0: crust.y0,
            x1: mid + half,
            y1: crust.y1,
        };
        [left.shifted(-offset, 0.0), right.shifted(offset, 0.0)]
    }

    pub fn continental_plates(&self) -> [PixelRect; 2] {
        let crust = self.crust();
        let third = self.w() / 3.0;
        [
            PixelRect {
                x0: 0.0,
                y0: crust.y0,
                x1: third,
                y1: crust.y1,
            },
            PixelRect {
                x0: self.w() - third,
                y0: crust.y0,
                x1: self.w(),
                y1: crust.y1,
            },
        ]
    }

    /// Unskewed slab boxes at 1/6 and 5/6 of the width, with the skew
    /// direction of each (`-1` leans left going down, `1` leans right).
    pub fn subduction_zones(&self) -> [(PixelRect, f64); 2] {
        let crust = self.crust();
        let width = SUBDUCTION_WIDTH_PX as f64 * self.scale();
        let sixth = self.w() / 6.0;
        [
            (
                PixelRect {
                    x0: sixth,
                    y0: crust.y0,
                    x1: sixth + width,
                    y1: crust.y1,
                },
                -1.0,
            ),
            (
                PixelRect {
                    x0: self.w() - sixth - width,
                    y0: crust.y0,
                    x1: self.w() - sixth,
                    y1: crust.y1,
                },
                1.0,
            ),
        ]
    }

    pub fn temperature_bar(&self) -> PixelRect {
        let inset = SCALE_BAR_INSET_PX as f64 * self.scale();
        let width = SCALE_BAR_WIDTH_PX as f64 * self.scale();
        PixelRect {
            x0: self.w() - inset - width,
            y0: inset,
            x1: self.w() - inset,
            y1: self.h() - inset,
        }
    }

    /// The diagram's lower half is cut to a half ellipse.
    pub fn inside_rounded_bottom(&self, x: f64, y: f64) -> bool {
        let rx = self.w() / 2.0;
        let ry = self.h() / 2.0;
        if y < ry {
            return true;
        }
        let dx = (x - rx) / rx;
        let dy = (y - ry) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_core_maps_percentages() {
        let canvas = Canvas::reference();
        let center = canvas.core_to_pixel(DVec2::new(50.0, 50.0));
        assert_eq!(center, DVec2::new(448.0, 192.0));
        let top_left = canvas.core_to_pixel(DVec2::ZERO);
        assert_eq!(top_left, DVec2::new(0.0, 96.0));
    }

    #[test]
    fn spreading_halves_move_apart() {
        let canvas = Canvas::reference();
        let [left, right] = canvas.spreading_halves(8);
        assert_eq!(left.x0, 448.0 - 16.0 - 8.0);
        assert_eq!(left.x1, 448.0 - 8.0);
        assert_eq!(right.x0, 448.0 + 8.0);
        assert_eq!(right.x1, 448.0 + 16.0 + 8.0);
        assert_eq!(left.height(), canvas.crust().height());
    }

    #[test]
    fn canvas_scales_reference_sizes() {
        let half = Canvas::new(448, 192);
        assert_eq!(half.scale(), 0.5);
        assert_eq!(half.temperature_bar().width(), 8.0);
        let [left, _] = half.spreading_halves(0);
        assert_eq!(left.width(), 8.0);
    }

    #[test]
    fn gradient_sampling() {
        let stops = [[0, 0, 0], [100, 200, 50]];
        assert_eq!(sample_gradient(&stops, 0.0), [0, 0, 0]);
        assert_eq!(sample_gradient(&stops, 1.0), [100, 200, 50]);
        assert_eq!(sample_gradient(&stops, 0.5), [50, 100, 25]);
        assert_eq!(sample_gradient(&[RED_700, RED_800, RED_900], 0.5), RED_800);
        assert_eq!(sample_gradient(&[], 0.3), [0, 0, 0]);
    }

    #[test]
    fn rounded_bottom_clips_corners() {
        let canvas = Canvas::reference();
        assert!(canvas.inside_rounded_bottom(0.0, 10.0));
        assert!(!canvas.inside_rounded_bottom(1.0, 383.0));
        assert!(canvas.inside_rounded_bottom(448.0, 383.0));
    }

    #[test]
    fn legend_names_four_materials() {
        assert_eq!(LEGEND.len(), 4);
        assert!(LEGEND[3].label.starts_with("Core"));
    }
}
