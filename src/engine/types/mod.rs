pub mod world2d {
    pub type Pos<T> = cgmath::Point2<T>;
    pub type Dim<T> = cgmath::Vector2<T>;

    #[derive(Debug, Copy, Clone, PartialEq)]
    #[cfg_attr(
        feature = "serde-io",
        derive(serde_derive::Serialize, serde_derive::Deserialize)
    )]
    pub struct Rect<T> {
        pub pos: Pos<T>,
        pub dim: Dim<T>,
    }

    impl<T> Rect<T> {
        #[inline]
        pub const fn new(pos: Pos<T>, dim: Dim<T>) -> Self {
            Self { pos, dim }
        }
    }

    /// Pixel rectangles are half-open: `right()` and `bottom()` are the first column and row
    /// outside of the rectangle.
    impl Rect<i32> {
        #[inline]
        pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
            Self::new(Pos::new(x, y), Dim::new(width, height))
        }

        #[inline]
        pub fn left(&self) -> i32 {
            self.pos.x
        }

        #[inline]
        pub fn top(&self) -> i32 {
            self.pos.y
        }

        #[inline]
        pub fn right(&self) -> i32 {
            self.pos.x.saturating_add(self.dim.x)
        }

        #[inline]
        pub fn bottom(&self) -> i32 {
            self.pos.y.saturating_add(self.dim.y)
        }

        #[inline]
        pub fn is_empty(&self) -> bool {
            self.dim.x <= 0 || self.dim.y <= 0
        }

        pub fn contains_rect(&self, other: &Rect<i32>) -> bool {
            other.left() >= self.left()
                && other.top() >= self.top()
                && other.right() <= self.right()
                && other.bottom() <= self.bottom()
        }

        /// Translates `(x, y, width, height)` from this rectangle's local space into the
        /// parent coordinate space and clamps the result into `self`.
        ///
        /// Both edges of each axis are clamped before the size is taken, so the result is
        /// always contained in `self`. A request without any overlap collapses to a `0x0`
        /// rectangle on the nearest border. Never fails.
        pub fn relative(&self, x: i32, y: i32, width: i32, height: i32) -> Self {
            let base_x = self.left().saturating_add(x);
            let base_y = self.top().saturating_add(y);

            let left = clamp(base_x, self.left(), self.right());
            let top = clamp(base_y, self.top(), self.bottom());
            let right = clamp(base_x.saturating_add(width), self.left(), self.right());
            let bottom = clamp(base_y.saturating_add(height), self.top(), self.bottom());

            let width = (right - left).max(0);
            let height = (bottom - top).max(0);
            if width == 0 || height == 0 {
                Self::from_xywh(left, top, 0, 0)
            } else {
                Self::from_xywh(left, top, width, height)
            }
        }
    }

    // `Ord::clamp` panics for `min > max`, which a hand built rect with a negative size
    // would trigger.
    #[inline]
    fn clamp(value: i32, min: i32, max: i32) -> i32 {
        value.max(min).min(max)
    }

}

/// An RGBA tint in linear `0.0..=1.0` channels that is multiplied onto sampled pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-io",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Multiplies each channel of the given 8-bit pixel with this tint.
    pub fn modulate(&self, rgba: [u8; 4]) -> [u8; 4] {
        let [r, g, b, a] = self.to_array();
        [
            scale_channel(rgba[0], r),
            scale_channel(rgba[1], g),
            scale_channel(rgba[2], b),
            scale_channel(rgba[3], a),
        ]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        self.modulate([255; 4])
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[inline]
fn scale_channel(value: u8, factor: f32) -> u8 {
    (f32::from(value) * factor.clamp(0.0, 1.0)).round() as u8
}
