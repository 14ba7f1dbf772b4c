//! Arc geometry for the spinner.
//!
//! Pure math, no DOM. The spinner is a short circular arc chasing its own
//! tail: each frame places the arc's two endpoints on the circle from the
//! current rotation angle and emits an SVG path description for them.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI, TAU};

/// Angle advanced per tick; 192 ticks make one full revolution.
pub(crate) const STEP: f64 = PI / 96.0;

/// Gap between the circle and the viewport edge, per side.
pub(crate) const MARGIN: f64 = 2.0;

/// Rotation angle of the arc, kept within one full turn.
///
/// The reset is a threshold check rather than a modulo so a long-running
/// animation never accumulates floating-point drift past 2π.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Rotation(f64);

impl Rotation {
    /// Advance by one tick step, resetting to zero past a full turn.
    pub(crate) fn advance(&mut self) {
        self.0 += STEP;
        if self.0 > TAU {
            self.0 = 0.0;
        }
    }

    pub(crate) fn angle(self) -> f64 {
        self.0
    }
}

/// Arc endpoints for one frame of the animation.
pub(crate) struct Endpoints {
    pub(crate) x1: f64,
    pub(crate) y1: f64,
    pub(crate) x2: f64,
    pub(crate) y2: f64,
}

/// Place the arc's endpoints on the circle for the given rotation angle.
///
/// The start point leads from the top of the circle; the end point trails
/// it by a fixed phase, which is what gives the arc its length.
pub(crate) fn endpoints(angle: f64, radius: f64) -> Endpoints {
    let center = radius + MARGIN;
    Endpoints {
        x1: radius * angle.sin() + center,
        y1: -radius * angle.cos() + center,
        x2: radius * (FRAC_PI_6 + angle).cos() + center,
        y2: radius * (-FRAC_PI_3 + angle).cos() + center,
    }
}

/// SVG path description for a circular arc from (x1, y1) to (x2, y2),
/// always the short arc drawn clockwise (large-arc 0, sweep 1).
pub(crate) fn arc_path(x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> String {
    format!("M {x1} {y1} A {radius} {radius} 0 0 1 {x2} {y2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_at_rest() {
        // At angle 0 the start point sits at the top of the circle.
        let e = endpoints(0.0, 5.0);
        assert_eq!(e.x1, 7.0);
        assert_eq!(e.y1, 2.0);
    }

    #[test]
    fn test_endpoints_offset_by_margin() {
        let e = endpoints(0.0, 10.0);
        // Both coordinates stay inside the (2r + 4)-sized box.
        assert!(e.x1 >= 0.0 && e.x1 <= 24.0);
        assert!(e.y1 >= 0.0 && e.y1 <= 24.0);
        assert!(e.x2 >= 0.0 && e.x2 <= 24.0);
        assert!(e.y2 >= 0.0 && e.y2 <= 24.0);
    }

    #[test]
    fn test_arc_path_format() {
        assert_eq!(
            arc_path(7.0, 2.0, 9.0, 4.0, 5.0),
            "M 7 2 A 5 5 0 0 1 9 4"
        );
    }

    #[test]
    fn test_arc_path_flags_and_circular_radii() {
        // Circular arc: both radii equal, short variant, clockwise sweep.
        for i in 0..192 {
            let angle = i as f64 * STEP;
            let e = endpoints(angle, 8.0);
            let d = arc_path(e.x1, e.y1, e.x2, e.y2, 8.0);
            assert!(d.starts_with("M "));
            assert!(d.contains(" A 8 8 0 0 1 "), "unexpected path: {d}");
        }
    }

    #[test]
    fn test_rotation_advances_by_step() {
        let mut rot = Rotation::default();
        rot.advance();
        assert_eq!(rot.angle(), STEP);
    }

    #[test]
    fn test_rotation_resets_at_full_turn() {
        // One revolution is 192 steps; the reset fires on the tick that
        // pushes the accumulated angle past 2π, which rounding puts at
        // either tick 192 or 193.
        let mut rot = Rotation::default();
        for _ in 0..192 {
            rot.advance();
        }
        if rot.angle() != 0.0 {
            rot.advance();
        }
        assert_eq!(rot.angle(), 0.0);
    }

    #[test]
    fn test_rotation_never_exceeds_full_turn() {
        let mut rot = Rotation::default();
        for _ in 0..1000 {
            rot.advance();
            assert!(rot.angle() >= 0.0);
            assert!(rot.angle() <= TAU);
        }
    }
}
