use crate::engine::system::canvas::Surface;
use crate::support::tile::GameObject;

/// Index of an object inside its [`Scene`], valid for the lifetime of that scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl EntityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns the objects of a scene. Objects are independent of each other, but they are always
/// updated and drawn in insertion order so overlapping sprites render deterministically.
#[derive(Default)]
pub struct Scene {
    entities: Vec<Box<dyn GameObject>>,
}

impl Scene {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, entity: impl GameObject + 'static) -> EntityId {
        self.push_boxed(Box::new(entity))
    }

    pub fn push_boxed(&mut self, entity: Box<dyn GameObject>) -> EntityId {
        let id = EntityId(self.entities.len());
        self.entities.push(entity);
        id
    }

    /// Swaps the object at `id` while keeping its place in the draw order. Returns the
    /// previous object, or hands `entity` back if `id` does not belong to this scene.
    pub fn replace(
        &mut self,
        id: EntityId,
        entity: impl GameObject + 'static,
    ) -> Result<Box<dyn GameObject>, Box<dyn GameObject>> {
        let entity = Box::new(entity) as Box<dyn GameObject>;
        match self.entities.get_mut(id.0) {
            Some(slot) => Ok(std::mem::replace(slot, entity)),
            None => Err(entity),
        }
    }

    #[inline]
    pub fn id_at(&self, index: usize) -> Option<EntityId> {
        (index < self.entities.len()).then_some(EntityId(index))
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&dyn GameObject> {
        self.entities.get(id.0).map(|entity| &**entity)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut (dyn GameObject + 'static)> {
        self.entities.get_mut(id.0).map(|entity| &mut **entity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &dyn GameObject)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (EntityId(index), &**entity))
    }

    pub fn update(&mut self, delta_seconds: f32) {
        for entity in &mut self.entities {
            entity.update(delta_seconds);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for entity in &self.entities {
            entity.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::system::canvas::BufferedCanvasLayer;
    use crate::engine::system::texture::{Texture, TextureRegion};
    use crate::engine::types::world2d::{Pos, Rect};
    use crate::support::tile::{AnimatedTile, Tile};

    fn atlas() -> TextureRegion {
        Texture::new("atlas", 128, 128).finalize()
    }

    #[test]
    fn draws_in_insertion_order() {
        let atlas = atlas();
        let mut scene = Scene::default();
        scene.push(Tile::new((0.0, 0.0), atlas.subregion(64, 0, 32, 32)));
        scene.push(Tile::new((0.0, 0.0), atlas.subregion(0, 0, 32, 32)));
        scene.push(Tile::new((0.0, 0.0), atlas.subregion(32, 0, 32, 32)));

        let mut layer = BufferedCanvasLayer::default();
        scene.draw(&mut layer);
        let xs = layer
            .blits()
            .iter()
            .map(|blit| blit.source.left())
            .collect::<Vec<_>>();
        assert_eq!(xs, vec![64, 0, 32]);
    }

    #[test]
    fn update_reaches_every_entity() {
        let frames = atlas().row(96, 4, 32, 32);
        let mut scene = Scene::with_capacity(3);
        let a = scene.push(AnimatedTile::new(frames.clone(), 0.25, (0.0, 0.0)));
        scene.push(Tile::new((32.0, 0.0), frames[3].clone()));
        let b = scene.push(AnimatedTile::new(frames, 0.25, (64.0, 0.0)));

        scene.update(0.25);
        scene.update(0.25);

        let mut layer = BufferedCanvasLayer::default();
        scene.draw(&mut layer);
        let blits = layer.blits();
        assert_eq!(blits[a.index()].source, Rect::from_xywh(64, 96, 32, 32));
        assert_eq!(blits[1].source, Rect::from_xywh(96, 96, 32, 32));
        assert_eq!(blits[b.index()].source, Rect::from_xywh(64, 96, 32, 32));
    }

    #[test]
    fn replace_keeps_the_slot() {
        let atlas = atlas();
        let mut scene = Scene::default();
        let first = scene.push(Tile::new((0.0, 0.0), atlas.clone()));
        scene.push(Tile::new((32.0, 0.0), atlas.clone()));

        let previous = scene
            .replace(first, Tile::new((99.0, 0.0), atlas.clone()))
            .ok()
            .unwrap();
        assert_eq!(previous.position(), Pos::new(0.0, 0.0));
        assert_eq!(scene.get(first).unwrap().position(), Pos::new(99.0, 0.0));
        assert_eq!(scene.len(), 2);

        assert!(scene
            .replace(EntityId(7), Tile::new((0.0, 0.0), atlas))
            .is_err());
    }

    #[test]
    fn positions_are_mutable_through_the_scene() {
        let mut scene = Scene::default();
        let id = scene.push(Tile::new((1.0, 2.0), atlas()));
        scene
            .get_mut(id)
            .unwrap()
            .set_position(Pos::new(3.0, 4.0));
        let positions = scene
            .iter()
            .map(|(_, entity)| entity.position())
            .collect::<Vec<_>>();
        assert_eq!(positions, vec![Pos::new(3.0, 4.0)]);
        assert!(!scene.is_empty());
        assert!(scene.get(EntityId(1)).is_none());
        assert_eq!(scene.id_at(0), Some(id));
        assert_eq!(scene.id_at(1), None);
    }
}
