use crate::constants::{
    BOTTOM_BAND, FLOW_ALPHA, FLOW_ARROWS_PER_CELL, FLOW_CENTER_Y, FLOW_RADIUS, LEFT_ANCHOR_X,
    MIDDLE_BAND, PARTICLE_ALPHA, RIGHT_ANCHOR_X, TOP_BAND,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One of the two mirrored convection loops.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CellSide {
    Left,
    Right,
}

impl CellSide {
    pub const ALL: [CellSide; 2] = [CellSide::Left, CellSide::Right];

    /// The left cell turns clockwise (negated angle), the right one counter-clockwise.
    pub fn orient(self, angle_rad: f64) -> f64 {
        match self {
            CellSide::Left => -angle_rad,
            CellSide::Right => angle_rad,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Bottom,
    Middle,
    Top,
}

/// Sampling of one particle ring.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BandSpec {
    pub band: Band,
    pub count: usize,
    pub density: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl BandSpec {
    fn from_tuple(band: Band, (count, density, center_y, radius): (usize, f64, f64, f64)) -> Self {
        Self { band, count, density, center_y, radius }
    }

    /// `floor(count * density)`, never below one.
    pub fn actual_count(&self) -> usize {
        ((self.count as f64 * self.density).floor() as usize).max(1)
    }
}

/// Every fixed number the geometry generator reads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConvectionLayout {
    pub left_anchor_x: f64,
    pub right_anchor_x: f64,
    pub arrows_per_cell: usize,
    pub flow_radius: f64,
    pub flow_center_y: f64,
    pub flow_alpha: f64,
    pub particle_alpha: f64,
    /// Emission order within a cell.
    pub bands: [BandSpec; 3],
}

impl Default for ConvectionLayout {
    fn default() -> Self {
        Self {
            left_anchor_x: LEFT_ANCHOR_X,
            right_anchor_x: RIGHT_ANCHOR_X,
            arrows_per_cell: FLOW_ARROWS_PER_CELL,
            flow_radius: FLOW_RADIUS,
            flow_center_y: FLOW_CENTER_Y,
            flow_alpha: FLOW_ALPHA,
            particle_alpha: PARTICLE_ALPHA,
            bands: [
                BandSpec::from_tuple(Band::Bottom, BOTTOM_BAND),
                BandSpec::from_tuple(Band::Middle, MIDDLE_BAND),
                BandSpec::from_tuple(Band::Top, TOP_BAND),
            ],
        }
    }
}

pub static DEFAULT_LAYOUT: Lazy<ConvectionLayout> = Lazy::new(ConvectionLayout::default);

impl ConvectionLayout {
    pub fn anchor_x(&self, side: CellSide) -> f64 {
        match side {
            CellSide::Left => self.left_anchor_x,
            CellSide::Right => self.right_anchor_x,
        }
    }

    pub fn band(&self, band: Band) -> &BandSpec {
        self.bands
            .iter()
            .find(|spec| spec.band == band)
            .unwrap_or(&self.bands[0])
    }

    pub fn particles_per_cell(&self) -> usize {
        self.bands.iter().map(BandSpec::actual_count).sum()
    }

    pub fn total_particles(&self) -> usize {
        self.particles_per_cell() * CellSide::ALL.len()
    }

    pub fn total_flow_indicators(&self) -> usize {
        self.arrows_per_cell * CellSide::ALL.len()
    }
}
