use crate::engine::system::texture::Texture;
use crate::engine::types::world2d::{Pos, Rect};
use crate::engine::types::Color;
use std::sync::Arc;

pub mod buffered_layer;
pub mod software;

pub use buffered_layer::{Blit, BufferedCanvasLayer};
pub use software::SoftwareCanvas;

/// The rendering backend seen from the CPU side: a single primitive copying `source` (in
/// pixels of `texture`) to `position` on the surface, each pixel multiplied by `tint`.
///
/// Blending, render targets and shader effects are up to the implementation.
pub trait Surface {
    fn blit(&mut self, texture: &Arc<Texture>, source: Rect<i32>, position: Pos<f32>, tint: Color);
}
