use std::borrow::Cow;

/// Tightly packed RGBA8 pixels, row-major, no padding between rows.
#[derive(Debug, Clone)]
pub struct RawRgbaImage {
    data: Cow<'static, [u8]>,
    width: u32,
    height: u32,
}

impl RawRgbaImage {
    /// # Panics
    ///
    /// If `data` does not hold exactly `width * height` RGBA pixels.
    pub fn new(data: impl Into<Cow<'static, [u8]>>, width: u32, height: u32) -> Self {
        let data = data.into();
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "RGBA buffer does not match {width}x{height}"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = std::iter::repeat(rgba)
            .take(width as usize * height as usize)
            .flatten()
            .collect::<Vec<u8>>();
        Self::new(data, width, height)
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(self.data.as_ref())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index_of(x, y).map(|index| self.pixels()[index])
    }

    /// Returns `false` if the coordinate is outside of the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        match self.index_of(x, y) {
            Some(index) => {
                bytemuck::cast_slice_mut::<u8, [u8; 4]>(self.data.to_mut())[index] = rgba;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, rgba: [u8; 4]) {
        bytemuck::cast_slice_mut::<u8, [u8; 4]>(self.data.to_mut()).fill(rgba);
    }

    #[inline]
    pub fn destruct(self) -> (Cow<'static, [u8]>, u32, u32) {
        (self.data, self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

#[cfg(feature = "image")]
impl From<image::RgbaImage> for RawRgbaImage {
    fn from(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(image.into_raw(), width, height)
    }
}
