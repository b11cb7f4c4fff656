//! Per-frame geometry of the two convection cells.
//!
//! Everything here is a pure function of the [`Phase`]: the same phase always
//! yields the same arrows and particles, and nothing is carried between
//! frames. Positions are percentages of the outer-core box.

use crate::color::Rgba;
use crate::constants::{
    LARGE_ABOVE_Y, MEDIUM_ABOVE_Y, PLATE_SWING_PX, SIZE_LARGE, SIZE_MEDIUM, SIZE_SMALL,
};
use crate::helpers::{degrees_to_radians, round_half_up, round_to, temperature_at};
use crate::layout::{Band, BandSpec, CellSide, ConvectionLayout};
use crate::phase::Phase;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Arrow glyph showing the local circulation direction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FlowIndicator {
    pub side: CellSide,
    /// Percent, rounded to two decimals.
    pub position: DVec2,
    /// Clockwise rotation of the glyph in whole degrees.
    pub rotation_deg: i32,
    pub color: Rgba,
}

/// A convecting parcel of mantle material.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Particle {
    pub side: CellSide,
    pub band: Band,
    pub position: DVec2,
    /// Diameter class: 4, 6 or 8.
    pub size: u32,
    /// Moving toward the boundary shared by the two cells.
    pub rising: bool,
    pub color: Rgba,
}

/// Angle of sample `index` out of `count` evenly spaced samples, in radians.
fn sample_angle(phase: Phase, index: usize, count: usize) -> f64 {
    let degrees = (phase.as_f64() + index as f64 * (360.0 / count as f64)) % 360.0;
    degrees_to_radians(degrees)
}

/// Point on a circle of `radius` around `center`, walked in the cell's direction.
fn orbit_point(side: CellSide, center: DVec2, radius: f64, angle: f64) -> DVec2 {
    let oriented = side.orient(angle);
    DVec2::new(
        center.x + oriented.cos() * radius,
        center.y + oriented.sin() * radius,
    )
}

pub fn size_class(y: f64) -> u32 {
    if y > LARGE_ABOVE_Y {
        SIZE_LARGE
    } else if y > MEDIUM_ABOVE_Y {
        SIZE_MEDIUM
    } else {
        SIZE_SMALL
    }
}

pub fn is_rising(side: CellSide, x: f64, anchor_x: f64) -> bool {
    match side {
        CellSide::Left => x > anchor_x,
        CellSide::Right => x < anchor_x,
    }
}

/// The arrows of one cell, in sample order.
pub fn flow_indicators(phase: Phase, side: CellSide, layout: &ConvectionLayout) -> Vec<FlowIndicator> {
    let count = layout.arrows_per_cell;
    let center = DVec2::new(layout.anchor_x(side), layout.flow_center_y);

    (0..count)
        .map(|i| {
            let angle = sample_angle(phase, i, count);
            let point = orbit_point(side, center, layout.flow_radius, angle);

            // keeps the glyph tangent to the direction of travel
            let rotation = match side {
                CellSide::Left => (-angle * 180.0 / PI) + 90.0,
                CellSide::Right => (angle * 180.0 / PI) - 90.0,
            };

            let temp = temperature_at(point.y);
            let color = Rgba::new(
                round_to(255.0 * temp, 2),
                round_to(100.0 * temp, 2),
                round_to(255.0 * (1.0 - temp), 2),
                round_to(layout.flow_alpha, 2),
            );

            FlowIndicator {
                side,
                position: DVec2::new(round_to(point.x, 2), round_to(point.y, 2)),
                rotation_deg: round_half_up(rotation) as i32,
                color,
            }
        })
        .collect()
}

/// The particles of one band of one cell, in sample order.
pub fn particles(
    phase: Phase,
    side: CellSide,
    spec: &BandSpec,
    layout: &ConvectionLayout,
) -> Vec<Particle> {
    let count = spec.actual_count();
    let anchor_x = layout.anchor_x(side);
    let center = DVec2::new(anchor_x, spec.center_y);

    (0..count)
        .map(|i| {
            let angle = sample_angle(phase, i, count);
            let point = orbit_point(side, center, spec.radius, angle);
            let temp = temperature_at(point.y);
            let rising = is_rising(side, point.x, anchor_x);

            let color = if rising {
                Rgba::new(255.0, (temp * 100.0).floor(), 0.0, layout.particle_alpha)
            } else {
                Rgba::new(((1.0 - temp) * 100.0).floor(), 0.0, 255.0, layout.particle_alpha)
            };

            Particle {
                side,
                band: spec.band,
                position: point,
                size: size_class(point.y),
                rising,
                color,
            }
        })
        .collect()
}

/// Left arrows followed by right arrows.
pub fn all_flow_indicators(phase: Phase, layout: &ConvectionLayout) -> Vec<FlowIndicator> {
    let mut arrows = Vec::with_capacity(layout.total_flow_indicators());
    for side in CellSide::ALL {
        arrows.extend(flow_indicators(phase, side, layout));
    }
    arrows
}

/// Left cell bottom, middle, top, then the right cell in the same band order.
pub fn all_particles(phase: Phase, layout: &ConvectionLayout) -> Vec<Particle> {
    let mut all = Vec::with_capacity(layout.total_particles());
    for side in CellSide::ALL {
        for spec in &layout.bands {
            all.extend(particles(phase, side, spec, layout));
        }
    }
    all
}

/// Horizontal pixel displacement of each plate half away from the ridge.
pub fn plate_offset(phase: Phase) -> i32 {
    round_half_up((phase.as_f64() * PI / 180.0).sin() * PLATE_SWING_PX) as i32
}

/// Vertical pixel jitter of the subducting slabs.
pub fn subduction_shift(phase: Phase) -> u16 {
    phase.degrees() % 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DEFAULT_LAYOUT;

    const EPS: f64 = 1e-9;

    #[test]
    fn left_bottom_first_particle_at_phase_zero() {
        let layout = &*DEFAULT_LAYOUT;
        let bottom = layout.band(Band::Bottom);
        let ring = particles(Phase::ZERO, CellSide::Left, bottom, layout);

        assert_eq!(ring.len(), 40);
        let first = &ring[0];
        assert!((first.position.x - 40.0).abs() < EPS);
        assert!((first.position.y - 65.0).abs() < EPS);
        assert_eq!(first.size, 8);
        assert!(first.rising);
        // temp = 1 - 35/40 = 0.125
        assert_eq!(first.color, Rgba::new(255.0, 12.0, 0.0, 0.8));
    }

    #[test]
    fn right_bottom_first_particle_is_sinking_at_phase_zero() {
        let layout = &*DEFAULT_LAYOUT;
        let ring = particles(Phase::ZERO, CellSide::Right, layout.band(Band::Bottom), layout);
        let first = &ring[0];

        assert!((first.position.x - 90.0).abs() < EPS);
        assert!(!first.rising);
        // (1 - 0.125) * 100 = 87.5
        assert_eq!(first.color, Rgba::new(87.0, 0.0, 255.0, 0.8));
    }

    #[test]
    fn cool_channel_can_leave_byte_range() {
        // bottom of the bottom band: y = 80, temp = -0.25
        let layout = &*DEFAULT_LAYOUT;
        let ring = particles(Phase::new(270), CellSide::Left, layout.band(Band::Bottom), layout);
        let lowest = &ring[0];

        assert!((lowest.position.y - 80.0).abs() < EPS);
        assert_eq!(lowest.color.b, 255.0);
        assert_eq!(lowest.color.r, 125.0);
    }

    #[test]
    fn flow_arrows_at_phase_zero() {
        let layout = &*DEFAULT_LAYOUT;
        let left = flow_indicators(Phase::ZERO, CellSide::Left, layout);
        let right = flow_indicators(Phase::ZERO, CellSide::Right, layout);

        assert_eq!(left.len(), 12);
        assert_eq!(left[0].position, DVec2::new(45.0, 50.0));
        assert_eq!(left[0].rotation_deg, 90);
        assert_eq!(left[0].color.css_fixed(), "rgba(127.50, 50.00, 127.50, 0.60)");

        // quarter turn clockwise puts the left arrow at the top of its loop
        assert_eq!(left[3].position, DVec2::new(25.0, 30.0));
        assert_eq!(left[3].rotation_deg, 0);
        assert_eq!(left[3].color.css_fixed(), "rgba(255.00, 100.00, 0.00, 0.60)");

        assert_eq!(right[0].position, DVec2::new(95.0, 50.0));
        assert_eq!(right[0].rotation_deg, -90);
        assert_eq!(right[3].position, DVec2::new(75.0, 70.0));
        assert_eq!(right[3].color.css_fixed(), "rgba(0.00, 0.00, 255.00, 0.60)");
    }

    #[test]
    fn arrows_advance_with_phase() {
        let layout = &*DEFAULT_LAYOUT;
        let at_zero = flow_indicators(Phase::ZERO, CellSide::Right, layout);
        let at_thirty = flow_indicators(Phase::new(30), CellSide::Right, layout);
        // arrows are spaced 30 degrees apart, so a 30 degree step shifts them by one slot
        assert_eq!(at_thirty[0].position, at_zero[1].position);
        assert_eq!(at_thirty[0].rotation_deg, at_zero[1].rotation_deg);
    }

    #[test]
    fn flow_indicators_are_ordered_left_then_right() {
        let arrows = all_flow_indicators(Phase::new(17), &DEFAULT_LAYOUT);
        assert_eq!(arrows.len(), 24);
        assert!(arrows[..12].iter().all(|a| a.side == CellSide::Left));
        assert!(arrows[12..].iter().all(|a| a.side == CellSide::Right));
    }

    #[test]
    fn particles_are_grouped_by_cell_then_band() {
        let all = all_particles(Phase::new(123), &DEFAULT_LAYOUT);
        assert_eq!(all.len(), 194);

        let groups: Vec<(CellSide, Band)> = all.iter().fold(Vec::new(), |mut acc, p| {
            if acc.last() != Some(&(p.side, p.band)) {
                acc.push((p.side, p.band));
            }
            acc
        });
        assert_eq!(
            groups,
            vec![
                (CellSide::Left, Band::Bottom),
                (CellSide::Left, Band::Middle),
                (CellSide::Left, Band::Top),
                (CellSide::Right, Band::Bottom),
                (CellSide::Right, Band::Middle),
                (CellSide::Right, Band::Top),
            ]
        );
    }

    #[test]
    fn size_class_boundaries() {
        assert_eq!(size_class(60.0001), 8);
        assert_eq!(size_class(60.0), 6);
        assert_eq!(size_class(45.0001), 6);
        assert_eq!(size_class(45.0), 4);
        assert_eq!(size_class(20.0), 4);
    }

    #[test]
    fn plate_offset_swings_eight_pixels() {
        assert_eq!(plate_offset(Phase::ZERO), 0);
        assert_eq!(plate_offset(Phase::new(90)), 8);
        assert_eq!(plate_offset(Phase::new(180)), 0);
        assert_eq!(plate_offset(Phase::new(270)), -8);
        assert_eq!(plate_offset(Phase::new(30)), 4);
    }

    #[test]
    fn subduction_shift_alternates() {
        assert_eq!(subduction_shift(Phase::new(10)), 0);
        assert_eq!(subduction_shift(Phase::new(11)), 1);
    }
}
