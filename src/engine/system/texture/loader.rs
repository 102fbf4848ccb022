use crate::engine::system::texture::Texture;
use std::borrow::Cow;

pub struct TextureLoader;

impl TextureLoader {
    /// Decodes any format the `image` crate can guess from the content.
    #[cfg(feature = "image")]
    pub fn load_from_binary<'a, R: 'a + std::io::BufRead + std::io::Seek>(
        name: impl Into<Cow<'static, str>>,
        bin: R,
    ) -> Result<Texture, Error> {
        let name = name.into();
        let mem_image = Self::read_image(bin)?;
        debug!(
            "Loaded texture {name:?} with {}x{} pixels",
            mem_image.width(),
            mem_image.height()
        );
        Ok(Self::from_dynamic_image(name, mem_image))
    }

    #[cfg(feature = "image")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Texture, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(Error::UnableToLoad)?;
        Self::load_from_binary(
            path.to_string_lossy().into_owned(),
            std::io::BufReader::new(file),
        )
    }

    #[cfg(feature = "image")]
    pub fn read_image<'a, R: 'a + std::io::BufRead + std::io::Seek>(
        bin: R,
    ) -> Result<image::DynamicImage, Error> {
        image::ImageReader::new(bin)
            .with_guessed_format()
            .map_err(Error::UnableToLoad)?
            .decode()
            .map_err(Error::UnableToDecode)
    }

    #[cfg(feature = "image")]
    pub fn from_dynamic_image(
        name: impl Into<Cow<'static, str>>,
        image: image::DynamicImage,
    ) -> Texture {
        Texture::from_rgba(name, image.into_rgba8().into())
    }

    /// A texture without CPU side pixels, for backends that only need the dimensions.
    #[inline]
    pub fn placeholder(name: impl Into<Cow<'static, str>>, width: u32, height: u32) -> Texture {
        Texture::new(name, width, height)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to load the image: {0}")]
    UnableToLoad(std::io::Error),
    #[cfg_attr(feature = "image", error("Unable to decode the image: {0}"))]
    #[cfg(feature = "image")]
    UnableToDecode(image::ImageError),
}

#[cfg(all(test, feature = "image"))]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(image: &image::RgbaImage) -> Vec<u8> {
        let mut bin = Cursor::new(Vec::new());
        image
            .write_to(&mut bin, image::ImageFormat::Png)
            .expect("encoding an in-memory png");
        bin.into_inner()
    }

    #[test]
    fn loads_png_with_pixels() {
        let mut source = image::RgbaImage::new(4, 2);
        source.put_pixel(3, 1, image::Rgba([10, 20, 30, 255]));

        let texture =
            TextureLoader::load_from_binary("sprite", Cursor::new(encode_png(&source))).unwrap();
        assert_eq!(texture.name(), "sprite");
        assert_eq!((texture.width(), texture.height()), (4, 2));
        assert_eq!(texture.pixels().unwrap().pixel(3, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let result = TextureLoader::load_from_binary("junk", Cursor::new(vec![0u8; 16]));
        assert!(matches!(
            result,
            Err(Error::UnableToDecode(_)) | Err(Error::UnableToLoad(_))
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let result = TextureLoader::load_from_path("/definitely/not/here.png");
        assert!(matches!(result, Err(Error::UnableToLoad(_))));
    }

    #[test]
    fn placeholder_has_no_pixels() {
        let texture = TextureLoader::placeholder("gpu-only", 16, 8);
        assert!(texture.pixels().is_none());
        assert_eq!(texture.finalize().rect().dim.x, 16);
    }
}
