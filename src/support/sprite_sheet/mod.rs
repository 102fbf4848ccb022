use crate::engine::system::texture::TextureRegion;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::ops::Index;

mod generator;
pub use generator::SpriteSheetGridGenerator;

#[cfg(feature = "serde-xml-rs")]
pub mod xml_texture_atlas;

/// Regions cut from one atlas, in insertion order and reachable under any number of names.
#[derive(Debug, Default)]
pub struct SpriteSheet {
    sprites: Vec<TextureRegion>,
    name_index: FxHashMap<Cow<'static, str>, usize>,
}

impl SpriteSheet {
    pub fn add<I, C>(
        &mut self,
        sprite: TextureRegion,
        names: impl IntoIterator<Item = C, IntoIter = I>,
    ) -> usize
    where
        I: Iterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        let index = self.sprites.len();
        self.sprites.push(sprite);
        for name in names {
            if let Some(previous) = self.name_index.insert(name.into(), index) {
                debug!("Sprite {previous} lost its name to sprite {index}");
            }
        }
        index
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&TextureRegion> {
        self.sprites.get(index)
    }

    #[inline]
    pub fn by_name(&self, name: &str) -> Option<&TextureRegion> {
        self.name_index
            .get(name)
            .and_then(|index| self.sprites.get(*index))
    }

    /// Every sprite whose name starts with `prefix`, ordered by insertion. Handy to collect
    /// animation frames named `fire_0`, `fire_1`, ...
    pub fn with_prefix(&self, prefix: &str) -> Vec<TextureRegion> {
        let mut indices = self
            .name_index
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, index)| *index)
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices.dedup();
        indices
            .into_iter()
            .map(|index| self.sprites[index].clone())
            .collect()
    }

    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &Cow<'static, str>> {
        self.name_index.keys()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TextureRegion> {
        self.sprites.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Index<usize> for SpriteSheet {
    type Output = TextureRegion;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.sprites[index]
    }
}

impl Index<&str> for SpriteSheet {
    type Output = TextureRegion;

    #[inline]
    fn index(&self, name: &str) -> &Self::Output {
        &self.sprites[self.name_index[name]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::system::texture::Texture;
    use crate::engine::types::world2d::Rect;

    #[test]
    fn lookup_by_index_and_names() {
        let atlas = Texture::new("atlas", 64, 64).finalize();
        let mut sheet = SpriteSheet::default();
        sheet.add(atlas.subregion(0, 0, 16, 16), ["grass", "ground"]);
        sheet.add(atlas.subregion(16, 0, 16, 16), [String::from("wall")]);

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet["ground"].rect(), Rect::from_xywh(0, 0, 16, 16));
        assert_eq!(sheet[1].rect(), Rect::from_xywh(16, 0, 16, 16));
        assert_eq!(sheet.by_name("wall").map(TextureRegion::rect), Some(sheet[1].rect()));
        assert!(sheet.by_name("lava").is_none());
        assert!(sheet.get(2).is_none());

        let mut names = sheet.names().map(|n| n.as_ref()).collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(names, vec!["grass", "ground", "wall"]);
    }

    #[test]
    fn prefix_collects_frames_in_order() {
        let atlas = Texture::new("atlas", 128, 32).finalize();
        let mut sheet = SpriteSheet::default();
        for (index, frame) in atlas.row(0, 4, 32, 32).into_iter().enumerate().rev() {
            sheet.add(frame, [format!("fire_{index}")]);
        }
        sheet.add(atlas.subregion(0, 0, 8, 8), ["wall"]);

        let frames = sheet.with_prefix("fire_");
        let xs = frames.iter().map(|f| f.rect().left()).collect::<Vec<_>>();
        assert_eq!(xs, vec![96, 64, 32, 0]);
    }
}
