use crate::engine::system::canvas::Surface;
use crate::engine::system::texture::Texture;
use crate::engine::types::world2d::{Pos, Rect};
use crate::engine::types::Color;
use crate::support::image::RawRgbaImage;
use std::sync::Arc;

/// A CPU render target. Blits sample the texture's RGBA pixels, multiply them with the tint
/// and alpha blend them over the target; everything outside of the target is clipped.
pub struct SoftwareCanvas {
    target: RawRgbaImage,
}

impl SoftwareCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: RawRgbaImage::filled(width, height, [0; 4]),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.target.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.target.height()
    }

    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.target.fill(color.to_rgba8());
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.target.pixel(x, y)
    }

    #[inline]
    pub fn image(&self) -> &RawRgbaImage {
        &self.target
    }

    #[inline]
    pub fn into_raw(self) -> RawRgbaImage {
        self.target
    }

    #[cfg(feature = "image")]
    pub fn into_image(self) -> Option<image::RgbaImage> {
        let (data, width, height) = self.target.destruct();
        image::RgbaImage::from_raw(width, height, data.into_owned())
    }
}

impl SoftwareCanvas {
    // false for non finite positions as well
    fn overlaps(&self, source: &Rect<i32>, position: Pos<f32>) -> bool {
        position.x < self.target.width() as f32
            && position.y < self.target.height() as f32
            && position.x + source.dim.x as f32 > 0.0
            && position.y + source.dim.y as f32 > 0.0
    }
}

impl Surface for SoftwareCanvas {
    fn blit(&mut self, texture: &Arc<Texture>, source: Rect<i32>, position: Pos<f32>, tint: Color) {
        let Some(pixels) = texture.pixels() else {
            warn!(
                "Texture {:?} has no CPU side pixels, skipping blit",
                texture.name()
            );
            return;
        };

        if !self.overlaps(&source, position) {
            return;
        }

        let origin_x = position.x.round() as i64;
        let origin_y = position.y.round() as i64;
        let width = i64::from(self.target.width());
        let height = i64::from(self.target.height());

        for sy in 0..source.dim.y.max(0) {
            let dy = origin_y + i64::from(sy);
            if dy < 0 || dy >= height {
                continue;
            }
            for sx in 0..source.dim.x.max(0) {
                let dx = origin_x + i64::from(sx);
                if dx < 0 || dx >= width {
                    continue;
                }
                let (Ok(tx), Ok(ty)) = (
                    u32::try_from(source.pos.x + sx),
                    u32::try_from(source.pos.y + sy),
                ) else {
                    continue;
                };
                let Some(texel) = pixels.pixel(tx, ty) else {
                    continue;
                };

                let (dx, dy) = (dx as u32, dy as u32);
                if let Some(below) = self.target.pixel(dx, dy) {
                    self.target
                        .set_pixel(dx, dy, blend_over(tint.modulate(texel), below));
                }
            }
        }
    }
}

/// Straight (non premultiplied) alpha `src over dst`.
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    match src[3] {
        255 => src,
        0 => dst,
        alpha => {
            let sa = f32::from(alpha) / 255.0;
            let da = f32::from(dst[3]) / 255.0;
            let out_a = sa + da * (1.0 - sa);
            let channel = |s: u8, d: u8| {
                let s = f32::from(s) / 255.0;
                let d = f32::from(d) / 255.0;
                let out = (s * sa + d * da * (1.0 - sa)) / out_a;
                (out * 255.0).round().clamp(0.0, 255.0) as u8
            };
            [
                channel(src[0], dst[0]),
                channel(src[1], dst[1]),
                channel(src[2], dst[2]),
                (out_a * 255.0).round() as u8,
            ]
        }
    }
}
