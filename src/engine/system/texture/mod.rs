use crate::engine::system::canvas::Surface;
use crate::engine::types::world2d::{Pos, Rect};
use crate::engine::types::Color;
use crate::support::image::RawRgbaImage;
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

mod loader;
pub use loader::*;

/// A loaded backing image. Shared read-only between every [`TextureRegion`] carved out of it,
/// so it is usually held in an [`Arc`].
///
/// The pixel data is optional: a backend that keeps the image on the GPU only needs the
/// dimensions on the CPU side, while software surfaces sample the pixels directly.
pub struct Texture {
    name: Cow<'static, str>,
    width: u32,
    height: u32,
    pixels: Option<RawRgbaImage>,
}

impl Texture {
    pub fn new(name: impl Into<Cow<'static, str>>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            pixels: None,
        }
    }

    pub fn from_rgba(name: impl Into<Cow<'static, str>>, pixels: RawRgbaImage) -> Self {
        Self {
            name: name.into(),
            width: pixels.width(),
            height: pixels.height(),
            pixels: Some(pixels),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> Option<&RawRgbaImage> {
        self.pixels.as_ref()
    }

    pub fn bounds(&self) -> Rect<i32> {
        Rect::from_xywh(
            0,
            0,
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    #[inline]
    pub fn finalize(self) -> TextureRegion {
        TextureRegion::from_texture(self)
    }
}

impl Debug for Texture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &self.pixels.is_some())
            .finish()
    }
}

/// A rectangular window into a shared [`Texture`].
///
/// The rectangle is kept in pixel coordinates of the backing texture and is always contained
/// in the texture bounds. Deriving a [`TextureRegion::subregion`] never widens the window: the
/// request is interpreted relative to this region and clamped into it, so a sprite can never
/// sample pixels outside of the region it was cut from.
#[derive(Clone)]
pub struct TextureRegion {
    texture: Arc<Texture>,
    rect: Rect<i32>,
}

impl TextureRegion {
    /// Covers the whole texture, `(0, 0, width, height)`.
    pub fn from_texture(texture: impl Into<Arc<Texture>>) -> Self {
        let texture = texture.into();
        Self {
            rect: texture.bounds(),
            texture,
        }
    }

    /// Cuts `(x, y, width, height)`, given relative to this region's origin, out of this
    /// region. Out of bounds requests are clamped silently and may end up zero sized.
    pub fn subregion(&self, x: i32, y: i32, width: i32, height: i32) -> Self {
        let rect = self.rect.relative(x, y, width, height);
        if rect.dim.x != width || rect.dim.y != height {
            trace!(
                "Clamped {width}x{height}+{x}+{y} to {:?} in {:?} of {:?}",
                rect,
                self.rect,
                self.texture.name()
            );
        }
        Self {
            texture: Arc::clone(&self.texture),
            rect,
        }
    }

    /// All complete `cell_width` x `cell_height` cells of this region, row by row.
    pub fn grid(
        &self,
        cell_width: i32,
        cell_height: i32,
    ) -> impl Iterator<Item = TextureRegion> + '_ {
        let columns = cells(self.rect.dim.x, cell_width);
        let rows = cells(self.rect.dim.y, cell_height);
        (0..rows).flat_map(move |row| {
            (0..columns).map(move |column| {
                self.subregion(
                    column * cell_width,
                    row * cell_height,
                    cell_width,
                    cell_height,
                )
            })
        })
    }

    /// `count` cells placed side by side, starting at the left edge at height `y`. Cells past
    /// the right edge are clamped like any other [`TextureRegion::subregion`].
    pub fn row(&self, y: i32, count: usize, cell_width: i32, cell_height: i32) -> Vec<Self> {
        (0..count)
            .map(|column| {
                let x = i32::try_from(column)
                    .unwrap_or(i32::MAX)
                    .saturating_mul(cell_width);
                self.subregion(x, y, cell_width, cell_height)
            })
            .collect()
    }

    #[inline]
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    #[inline]
    pub fn rect(&self) -> Rect<i32> {
        self.rect
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rect.dim.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rect.dim.y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// Blits this region onto `surface` with its top left corner at `position`.
    #[inline]
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, position: Pos<f32>, tint: Color) {
        surface.blit(&self.texture, self.rect, position, tint);
    }

    #[inline]
    pub fn draw_white<S: Surface + ?Sized>(&self, surface: &mut S, position: Pos<f32>) {
        self.draw(surface, position, Color::WHITE);
    }
}

impl Debug for TextureRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureRegion")
            .field("texture", &self.texture.name())
            .field("rect", &self.rect)
            .finish()
    }
}

#[inline]
fn cells(length: i32, cell: i32) -> i32 {
    if cell > 0 {
        (length / cell).max(0)
    } else {
        0
    }
}
