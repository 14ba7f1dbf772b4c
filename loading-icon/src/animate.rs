//! The redraw loop: a repeating browser interval that rotates the arc.

use gloo_timers::callback::Interval;
use web_sys::Element;

use crate::geometry::{arc_path, endpoints, Rotation};

/// Milliseconds between redraws.
const TICK_MS: u32 = 25;

/// Start the redraw loop for `path`.
///
/// Each tick draws the frame for the current rotation onto the path's `d`
/// attribute, then advances the rotation by one step. The loop keeps firing
/// until the returned interval is cancelled or dropped; the tick closure is
/// the only writer of the `d` attribute for the path's lifetime.
pub(crate) fn animate(path: Element, radius: f64) -> Interval {
    let mut rotation = Rotation::default();
    Interval::new(TICK_MS, move || {
        draw_frame(&path, rotation, radius);
        rotation.advance();
    })
}

/// Write the frame for `rotation` onto the path element.
fn draw_frame(path: &Element, rotation: Rotation, radius: f64) {
    let e = endpoints(rotation.angle(), radius);
    let d = arc_path(e.x1, e.y1, e.x2, e.y2, radius);
    let _ = path.set_attribute("d", &d);
}
