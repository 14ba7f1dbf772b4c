//! Builds the static SVG subtree: sizing wrapper, arc path, optional label.
//!
//! Everything here is created once at mount time; only the path's `d`
//! attribute changes afterwards (see `animate`).

use web_sys::{Document, Element};

use crate::error::IconError;
use crate::geometry::MARGIN;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Edge length of the square SVG viewport for a given circle radius.
pub(crate) fn outer_size(radius: f64) -> f64 {
    2.0 * radius + 2.0 * MARGIN
}

/// The assembled subtree. The svg element owns the path (and label) as
/// children; the path is handed to the animation loop separately.
pub(crate) struct IconParts {
    pub(crate) svg: Element,
    pub(crate) path: Element,
}

/// Build the wrapper, the arc path, and (if requested) the centered
/// "Loading" label. The caller appends the returned `svg` to its container.
pub(crate) fn build_icon(
    document: &Document,
    radius: f64,
    show_text: bool,
) -> Result<IconParts, IconError> {
    let svg = create_svg(document, radius)?;
    let path = create_path(document)?;
    svg.append_child(&path).map_err(IconError::dom)?;

    if show_text {
        let label = create_label(document, radius)?;
        svg.append_child(&label).map_err(IconError::dom)?;
    }

    Ok(IconParts { svg, path })
}

/// Square svg wrapper sized to fit the circle plus its margin.
fn create_svg(document: &Document, radius: f64) -> Result<Element, IconError> {
    let svg = document
        .create_element_ns(Some(SVG_NS), "svg")
        .map_err(IconError::dom)?;

    let size = outer_size(radius).to_string();
    svg.set_attribute("height", &size).map_err(IconError::dom)?;
    svg.set_attribute("width", &size).map_err(IconError::dom)?;

    Ok(svg)
}

/// Arc path with fixed styling. Its `d` attribute is left empty here; the
/// first animation tick fills it in.
fn create_path(document: &Document) -> Result<Element, IconError> {
    let path = document
        .create_element_ns(Some(SVG_NS), "path")
        .map_err(IconError::dom)?;

    path.set_attribute("stroke", "black")
        .map_err(IconError::dom)?;
    path.set_attribute("fill", "none").map_err(IconError::dom)?;
    path.set_attribute("stroke-width", "2")
        .map_err(IconError::dom)?;

    Ok(path)
}

/// Centered "Loading" text, anchored at (radius, radius).
fn create_label(document: &Document, radius: f64) -> Result<Element, IconError> {
    let text = document
        .create_element_ns(Some(SVG_NS), "text")
        .map_err(IconError::dom)?;

    let center = radius.to_string();
    text.set_attribute("text-anchor", "middle")
        .map_err(IconError::dom)?;
    text.set_attribute("x", &center).map_err(IconError::dom)?;
    text.set_attribute("y", &center).map_err(IconError::dom)?;
    text.set_text_content(Some("Loading"));

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_size() {
        assert_eq!(outer_size(10.0), 24.0);
        assert_eq!(outer_size(5.0), 14.0);
        assert_eq!(outer_size(0.5), 5.0);
    }
}
