//! loading-icon - animated SVG loading spinner for the browser
//!
//! Builds a small SVG arc spinner inside a host element and redraws it on a
//! 25 ms interval via `web-sys`. [`create_loading_icon`] returns a
//! [`LoadingIcon`] guard; stopping (or dropping) the guard cancels the
//! redraw and freezes the last drawn frame in place. The rendered SVG is
//! never removed from the DOM — if the host tears down the container without
//! stopping the icon first, the guard's Drop still cancels the timer.
//!
//! ```ignore
//! let icon = loading_icon::create_loading_icon(&container, 10.0)?;
//! // ... content arrives ...
//! icon.stop();
//! ```

mod animate;
mod assemble;
mod error;
mod geometry;

pub use error::IconError;

use gloo_timers::callback::Interval;
use tracing::debug;
use web_sys::Element;

/// Handle for a mounted, animating icon.
///
/// Owns the redraw timer. Dropping the handle cancels the timer, so the
/// animation cannot outlive whoever holds this — call [`forget`] if the
/// icon should keep spinning untended.
///
/// [`forget`]: LoadingIcon::forget
pub struct LoadingIcon {
    interval: Interval,
}

impl LoadingIcon {
    /// Stop the animation, leaving the last drawn frame in the container.
    pub fn stop(self) {
        debug!("Stopping loading icon");
        self.interval.cancel();
    }

    /// Leak the timer so the icon animates for the rest of the page's life.
    pub fn forget(self) {
        self.interval.forget();
    }
}

/// Mount a spinner with the centered "Loading" label into `container`.
///
/// The icon is appended as the container's last child and starts animating
/// immediately. Visual size is `2 * radius + 4` per side. The radius is not
/// validated; a non-positive radius yields a degenerate icon.
pub fn create_loading_icon(container: &Element, radius: f64) -> Result<LoadingIcon, IconError> {
    create_loading_icon_with_label(container, radius, true)
}

/// Mount a spinner, choosing whether the "Loading" label is shown.
pub fn create_loading_icon_with_label(
    container: &Element,
    radius: f64,
    show_text: bool,
) -> Result<LoadingIcon, IconError> {
    let document = container.owner_document().ok_or(IconError::NoDocument)?;

    let parts = assemble::build_icon(&document, radius, show_text)?;
    let interval = animate::animate(parts.path, radius);
    container.append_child(&parts.svg).map_err(IconError::dom)?;

    debug!("Mounted loading icon: radius {radius}, label {show_text}");
    Ok(LoadingIcon { interval })
}
