//! Canvas coordinate and geometry helpers.
//!
//! Pure numeric support for the editor's canvas interaction: converting
//! between browser client coordinates and logical canvas coordinates under
//! zoom and scroll, and clamping positions/sizes to sane ranges. All
//! functions are stateless and total for finite inputs; `zoom` must be
//! positive (a caller precondition).

pub mod bounds;
pub mod coords;

pub use bounds::Bounds;
pub use coords::{
    canvas_to_client, clamp_size, clamp_to_canvas, client_to_canvas, CanvasRect, DEFAULT_MIN_SIZE,
};
