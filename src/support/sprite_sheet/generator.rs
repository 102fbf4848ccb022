use crate::engine::system::texture::TextureRegion;
use crate::support::sprite_sheet::SpriteSheet;

pub struct SpriteSheetGridGenerator;

impl SpriteSheetGridGenerator {
    /// Slices `parent` into complete `sprite_width` x `sprite_height` cells named `"{x}_{y}"`
    /// after their column and row.
    pub fn generate(parent: &TextureRegion, sprite_width: i32, sprite_height: i32) -> SpriteSheet {
        let mut sprite_sheet = SpriteSheet::default();
        let columns = if sprite_width > 0 {
            parent.width() / sprite_width
        } else {
            0
        };

        for (index, cell) in parent.grid(sprite_width, sprite_height).enumerate() {
            let index = index as i32;
            let (x, y) = (index % columns, index / columns);
            sprite_sheet.add(cell, [format!("{x}_{y}")]);
        }

        sprite_sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::system::texture::Texture;
    use crate::engine::types::world2d::Rect;

    #[test]
    fn names_cells_by_column_and_row() {
        let atlas = Texture::new("atlas", 128, 128).finalize();
        let sheet = SpriteSheetGridGenerator::generate(&atlas, 32, 32);
        assert_eq!(sheet.len(), 16);
        assert_eq!(sheet["0_0"].rect(), Rect::from_xywh(0, 0, 32, 32));
        assert_eq!(sheet["3_1"].rect(), Rect::from_xywh(96, 32, 32, 32));
        assert_eq!(sheet["2_3"].rect(), Rect::from_xywh(64, 96, 32, 32));
    }

    #[test]
    fn works_on_nested_regions() {
        let atlas = Texture::new("atlas", 256, 256).finalize();
        let sheet = SpriteSheetGridGenerator::generate(&atlas.subregion(64, 64, 70, 40), 32, 32);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet["1_0"].rect(), Rect::from_xywh(96, 64, 32, 32));
        assert!(SpriteSheetGridGenerator::generate(&atlas, 0, 32).is_empty());
    }
}
