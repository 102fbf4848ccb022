use crate::engine::system::texture::TextureRegion;
use crate::support::sprite_sheet::SpriteSheet;
use serde_derive::Deserialize;

/// Reads the `<TextureAtlas><SubTexture name x y width height/>...</TextureAtlas>` format
/// written by TexturePacker and similar tools.
pub struct XmlTextureAtlas;

impl XmlTextureAtlas {
    /// Each sub texture is cut from `parent` like [`TextureRegion::subregion`], so entries
    /// exceeding the image are clamped instead of rejected.
    pub fn load_from_str(
        content: &str,
        parent: &TextureRegion,
    ) -> Result<SpriteSheet, serde_xml_rs::Error> {
        let atlas = serde_xml_rs::from_str::<TextureAtlas>(content)?;
        debug!(
            "Loaded {} sub textures for {:?}",
            atlas.sub_textures.len(),
            atlas.image_path.as_deref().unwrap_or(parent.texture().name())
        );

        let mut sprite_sheet = SpriteSheet::default();
        for texture in atlas.sub_textures {
            sprite_sheet.add(
                parent.subregion(texture.x, texture.y, texture.width, texture.height),
                [texture.name],
            );
        }
        Ok(sprite_sheet)
    }
}

#[derive(Debug, Deserialize)]
struct TextureAtlas {
    #[serde(rename = "imagePath", default)]
    pub image_path: Option<String>,
    #[serde(rename = "SubTexture", default)]
    pub sub_textures: Vec<SubTexture>,
}

#[derive(Debug, Deserialize)]
struct SubTexture {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::system::texture::Texture;
    use crate::engine::types::world2d::Rect;

    const ATLAS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TextureAtlas imagePath="atlas.png">
    <SubTexture name="wall_0" x="0" y="0" width="32" height="32"/>
    <SubTexture name="fire_0" x="0" y="96" width="32" height="32"/>
    <SubTexture name="overhang" x="112" y="112" width="32" height="32"/>
</TextureAtlas>"#;

    #[test]
    fn loads_and_clamps_sub_textures() {
        let atlas = Texture::new("atlas", 128, 128).finalize();
        let sheet = XmlTextureAtlas::load_from_str(ATLAS, &atlas).unwrap();

        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet["wall_0"].rect(), Rect::from_xywh(0, 0, 32, 32));
        assert_eq!(sheet["fire_0"].rect(), Rect::from_xywh(0, 96, 32, 32));
        assert_eq!(sheet["overhang"].rect(), Rect::from_xywh(112, 112, 16, 16));
    }

    #[test]
    fn rejects_malformed_xml() {
        let atlas = Texture::new("atlas", 128, 128).finalize();
        assert!(XmlTextureAtlas::load_from_str("<TextureAtlas><SubTexture", &atlas).is_err());
    }
}
