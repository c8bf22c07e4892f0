//! Conversion between client (browser) and logical canvas coordinates.

use forge_core::{Point, Size};

/// The canvas element's bounding rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Smallest size a component can be resized to.
pub const DEFAULT_MIN_SIZE: Size = Size {
    width: 20.0,
    height: 20.0,
};

/// Convert client (viewport) coordinates to logical canvas coordinates.
///
/// `zoom` is the current zoom level (1 = 100%) and must be positive;
/// `scroll_offset` is the scroll position within the canvas (pass
/// [`Point::ZERO`] when the canvas does not scroll).
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    canvas_rect: &CanvasRect,
    zoom: f64,
    scroll_offset: Point,
) -> Point {
    Point {
        x: (client_x - canvas_rect.left + scroll_offset.x) / zoom,
        y: (client_y - canvas_rect.top + scroll_offset.y) / zoom,
    }
}

/// Convert logical canvas coordinates to client (viewport) coordinates.
///
/// Exact inverse of [`client_to_canvas`] for the same rect, zoom, and scroll
/// offset.
pub fn canvas_to_client(
    logical_x: f64,
    logical_y: f64,
    canvas_rect: &CanvasRect,
    zoom: f64,
    scroll_offset: Point,
) -> Point {
    Point {
        x: logical_x * zoom + canvas_rect.left - scroll_offset.x,
        y: logical_y * zoom + canvas_rect.top - scroll_offset.y,
    }
}

/// Clamp a point into the canvas bounds: x into `[0, width]`, y into
/// `[0, height]`.
pub fn clamp_to_canvas(point: Point, canvas_bounds: Size) -> Point {
    Point {
        x: point.x.clamp(0.0, canvas_bounds.width),
        y: point.y.clamp(0.0, canvas_bounds.height),
    }
}

/// Clamp each dimension of a size to be at least the corresponding minimum.
pub fn clamp_size(size: Size, min_size: Size) -> Size {
    Size {
        width: size.width.max(min_size.width),
        height: size.height.max(min_size.height),
    }
}
