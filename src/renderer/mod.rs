//! Canvas 2D rendering module
//!
//! The simulation never draws. `draw_frame` walks a `GameState` and issues
//! commands against a `Surface`: the browser canvas on wasm, or a recording
//! surface for tests and headless runs.

pub mod draw;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw::draw_frame;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Sprite, Surface};
