use crate::engine::system::canvas::Surface;
use crate::engine::system::texture::TextureRegion;
use crate::engine::types::world2d::{Dim, Pos};
use crate::engine::types::Color;

/// Places a light mask sprite (usually a white-to-black radial gradient) centred on every
/// light source. Drawn onto a separate target with additive blending, the result is the mask
/// a lighting shader multiplies the scene with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightMaskLayout {
    mask_size: Dim<f32>,
    source_size: Dim<f32>,
}

impl Default for LightMaskLayout {
    fn default() -> Self {
        Self {
            mask_size: Dim::new(128.0, 128.0),
            source_size: Dim::new(32.0, 32.0),
        }
    }
}

impl LightMaskLayout {
    /// Uses the size of `mask` as the mask size.
    pub fn for_mask(mask: &TextureRegion) -> Self {
        Self::default().with_mask_size(mask.width() as f32, mask.height() as f32)
    }

    pub fn with_mask_size(mut self, width: f32, height: f32) -> Self {
        self.mask_size = Dim::new(width, height);
        self
    }

    /// Size of the sprites emitting light, whose top left corners are passed as sources.
    pub fn with_source_size(mut self, width: f32, height: f32) -> Self {
        self.source_size = Dim::new(width, height);
        self
    }

    #[inline]
    pub fn mask_size(&self) -> Dim<f32> {
        self.mask_size
    }

    /// Top left corner of the mask for a light emitted at `center`.
    #[inline]
    pub fn centered_at(&self, center: Pos<f32>) -> Pos<f32> {
        center - self.mask_size * 0.5
    }

    /// Top left corner of the mask for a light source sprite whose top left corner is at
    /// `source`.
    #[inline]
    pub fn mask_position(&self, source: Pos<f32>) -> Pos<f32> {
        self.centered_at(source + self.source_size * 0.5)
    }

    /// Draws `mask` once per light source and returns how many masks were drawn.
    pub fn draw_masks(
        &self,
        surface: &mut dyn Surface,
        mask: &TextureRegion,
        sources: impl IntoIterator<Item = Pos<f32>>,
    ) -> usize {
        let mut count = 0;
        for source in sources {
            mask.draw(&mut *surface, self.mask_position(source), Color::WHITE);
            count += 1;
        }
        trace!("Placed {count} light masks");
        count
    }

    /// A free light not bound to a sprite, like one following the cursor.
    #[inline]
    pub fn draw_mask_at(&self, surface: &mut dyn Surface, mask: &TextureRegion, center: Pos<f32>) {
        mask.draw(surface, self.centered_at(center), Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::system::canvas::BufferedCanvasLayer;
    use crate::engine::system::texture::Texture;

    #[test]
    fn masks_are_centred_on_the_source_sprite() {
        let layout = LightMaskLayout::default();
        assert_eq!(layout.mask_position(Pos::new(64.0, 64.0)), Pos::new(16.0, 16.0));
        assert_eq!(
            layout.mask_position(Pos::new(544.0, 256.0)),
            Pos::new(496.0, 208.0)
        );
    }

    #[test]
    fn mask_size_follows_the_mask_region() {
        let mask = Texture::new("lightmask", 64, 32).finalize();
        let layout = LightMaskLayout::for_mask(&mask).with_source_size(16.0, 16.0);
        assert_eq!(layout.mask_size(), Dim::new(64.0, 32.0));
        assert_eq!(layout.mask_position(Pos::new(0.0, 0.0)), Pos::new(-24.0, -8.0));
    }

    #[test]
    fn draws_one_mask_per_source_plus_free_lights() {
        let mask = Texture::new("lightmask", 128, 128).finalize();
        let layout = LightMaskLayout::for_mask(&mask);
        let mut layer = BufferedCanvasLayer::default();

        let drawn = layout.draw_masks(
            &mut layer,
            &mask,
            [Pos::new(64.0, 64.0), Pos::new(544.0, 64.0)],
        );
        layout.draw_mask_at(&mut layer, &mask, Pos::new(320.0, 180.0));

        assert_eq!(drawn, 2);
        let positions = layer
            .blits()
            .iter()
            .map(|blit| blit.position)
            .collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                Pos::new(16.0, 16.0),
                Pos::new(496.0, 16.0),
                Pos::new(256.0, 116.0),
            ]
        );
        assert!(layer.blits().iter().all(|blit| blit.tint == Color::WHITE));
    }
}
