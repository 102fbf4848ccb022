//! Positioned, drawable objects built from [`TextureRegion`]s.
//!
//! A frame is one [`GameObject::update`] followed by one [`GameObject::draw`] per object, which
//! [`Scene`] does for a whole collection in insertion order.

use crate::engine::system::canvas::Surface;
use crate::engine::system::texture::TextureRegion;
use crate::engine::types::world2d::Pos;
use crate::engine::types::Color;

mod animated;
mod scene;

pub use animated::{AnimatedTile, FrameTimerPolicy};
pub use scene::{EntityId, Scene};

pub trait GameObject {
    fn position(&self) -> Pos<f32>;

    fn set_position(&mut self, position: Pos<f32>);

    /// Advances the object by `delta_seconds`. Objects without behaviour keep the default.
    fn update(&mut self, delta_seconds: f32) {
        let _ = delta_seconds;
    }

    fn draw(&self, surface: &mut dyn Surface);
}

/// A static sprite.
#[derive(Debug, Clone)]
pub struct Tile {
    position: Pos<f32>,
    region: TextureRegion,
    tint: Color,
}

impl Tile {
    pub fn new(position: impl Into<Pos<f32>>, region: TextureRegion) -> Self {
        Self {
            position: position.into(),
            region,
            tint: Color::WHITE,
        }
    }

    #[inline]
    pub fn with_tint(mut self, tint: impl Into<Color>) -> Self {
        self.tint = tint.into();
        self
    }

    #[inline]
    pub fn region(&self) -> &TextureRegion {
        &self.region
    }

    #[inline]
    pub fn tint(&self) -> Color {
        self.tint
    }
}

impl GameObject for Tile {
    #[inline]
    fn position(&self) -> Pos<f32> {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: Pos<f32>) {
        self.position = position;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.region.draw(surface, self.position, self.tint);
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TileError {
    #[error("An animated tile needs at least one frame")]
    NoFrames,
    #[error("The frame delay must be a positive, finite number of seconds, got {0}")]
    InvalidDelay(f32),
    #[error("The tile size must not be zero, got {0}x{1}")]
    InvalidTileSize(u32, u32),
    #[error("No texture regions given for the {0} tiles")]
    NoVariants(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::system::canvas::BufferedCanvasLayer;
    use crate::engine::system::texture::Texture;
    use crate::engine::types::world2d::Rect;

    #[test]
    fn tile_draws_its_region_at_its_position() {
        let region = Texture::new("atlas", 128, 128)
            .finalize()
            .subregion(32, 64, 32, 32);
        let mut tile = Tile::new((64.0, 96.0), region);
        let mut layer = BufferedCanvasLayer::default();

        tile.update(10.0);
        tile.draw(&mut layer);
        tile.set_position(Pos::new(0.0, 0.0));
        tile.draw(&mut layer);

        let blits = layer.blits();
        assert_eq!(blits.len(), 2);
        assert_eq!(blits[0].source, Rect::from_xywh(32, 64, 32, 32));
        assert_eq!(blits[0].position, Pos::new(64.0, 96.0));
        assert_eq!(blits[0].tint, Color::WHITE);
        assert_eq!(blits[1].position, Pos::new(0.0, 0.0));
    }

    #[test]
    fn tile_uses_its_tint() {
        let region = Texture::new("atlas", 8, 8).finalize();
        let tile = Tile::new((0.0, 0.0), region).with_tint([1.0, 0.0, 0.0, 1.0]);
        let mut layer = BufferedCanvasLayer::default();
        tile.draw(&mut layer);
        assert_eq!(layer.blits()[0].tint, Color::RED);
        assert_eq!(tile.tint(), Color::RED);
    }
}
