use crate::frame::Frame;
use crate::layout::{CellSide, DEFAULT_LAYOUT};
use crate::phase::Phase;

#[cfg(test)]
mod tests {
    use super::*;

    // float slack for points sitting exactly on a ring's extreme
    const EPS: f64 = 1e-9;

    #[test]
    fn generation_is_deterministic_for_every_phase() {
        for phase in Phase::sweep(1) {
            assert_eq!(Frame::generate(phase), Frame::generate(phase), "phase {}", phase);
        }
    }

    #[test]
    fn primitive_counts_never_change() {
        for phase in Phase::sweep(1) {
            let frame = Frame::generate(phase);
            assert_eq!(frame.flow_indicators.len(), 24);
            assert_eq!(frame.particles.len(), 194);
        }
    }

    #[test]
    fn particle_size_follows_height() {
        for phase in Phase::sweep(1) {
            for particle in Frame::generate(phase).particles {
                let y = particle.position.y;
                let expected = if y > 60.0 {
                    8
                } else if y > 45.0 {
                    6
                } else {
                    4
                };
                assert_eq!(particle.size, expected, "phase {} y {}", phase, y);
                assert!([4, 6, 8].contains(&particle.size));
            }
        }
    }

    #[test]
    fn primitives_stay_on_their_rings() {
        let layout = &*DEFAULT_LAYOUT;
        for phase in Phase::sweep(1) {
            let frame = Frame::generate(phase);

            for arrow in &frame.flow_indicators {
                let anchor_x = layout.anchor_x(arrow.side);
                let r = layout.flow_radius;
                assert!((arrow.position.x - anchor_x).abs() <= r + EPS);
                assert!((arrow.position.y - layout.flow_center_y).abs() <= r + EPS);
            }

            for particle in &frame.particles {
                let anchor_x = layout.anchor_x(particle.side);
                let spec = layout.band(particle.band);
                let dx = particle.position.x - anchor_x;
                let dy = particle.position.y - spec.center_y;
                assert!(dx.abs() <= spec.radius + EPS);
                assert!(dy.abs() <= spec.radius + EPS);
                assert!(((dx * dx + dy * dy).sqrt() - spec.radius).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn rising_matches_color_formula() {
        for phase in Phase::sweep(1) {
            for particle in Frame::generate(phase).particles {
                let anchor_x = DEFAULT_LAYOUT.anchor_x(particle.side);
                let toward_center = match particle.side {
                    CellSide::Left => particle.position.x > anchor_x,
                    CellSide::Right => particle.position.x < anchor_x,
                };
                assert_eq!(particle.rising, toward_center);

                let warm = particle.color.r == 255.0 && particle.color.b == 0.0;
                let cool = particle.color.g == 0.0 && particle.color.b == 255.0;
                // exactly one formula applies
                assert_ne!(warm, cool);
                assert_eq!(particle.rising, warm);
                assert_eq!(particle.color.a, 0.8);
            }
        }
    }

    #[test]
    fn each_cell_has_rising_and_sinking_particles() {
        let frame = Frame::generate(Phase::new(200));
        for side in CellSide::ALL {
            let in_cell: Vec<_> = frame.particles.iter().filter(|p| p.side == side).collect();
            assert_eq!(in_cell.len(), 97);
            assert!(in_cell.iter().any(|p| p.rising));
            assert!(in_cell.iter().any(|p| !p.rising));
        }
    }

    #[test]
    fn plate_offset_stays_within_swing() {
        for phase in Phase::sweep(1) {
            let offset = Frame::generate(phase).plate_offset;
            assert!((-8..=8).contains(&offset));
        }
        assert_eq!(Frame::generate(Phase::ZERO).plate_offset, 0);
        assert_eq!(Frame::generate(Phase::new(90)).plate_offset, 8);
    }
}
