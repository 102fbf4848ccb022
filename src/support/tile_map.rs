use crate::engine::system::canvas::Surface;
use crate::engine::system::texture::TextureRegion;
use crate::engine::types::world2d::Pos;
use crate::support::tile::{AnimatedTile, EntityId, GameObject, Scene, Tile, TileError};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// The sprites a cave map picks from. Every set needs at least one region.
#[derive(Debug, Clone, Default)]
pub struct TileVariants {
    /// Side columns and the bottom row.
    pub walls: Vec<TextureRegion>,
    /// The top row between the side columns.
    pub top_walls: Vec<TextureRegion>,
    /// Everything inside the walls.
    pub ground: Vec<TextureRegion>,
}

impl TileVariants {
    /// Atlas layout of the lighting demo: three wall sprites in the first row, four ground
    /// sprites in the second and three top wall sprites in the third.
    pub fn from_atlas_rows(atlas: &TextureRegion, tile_size: i32) -> Self {
        Self {
            walls: atlas.row(0, 3, tile_size, tile_size),
            ground: atlas.row(tile_size, 4, tile_size, tile_size),
            top_walls: atlas.row(tile_size * 2, 3, tile_size, tile_size),
        }
    }

    fn check(&self) -> Result<(), TileError> {
        for (set, name) in [
            (&self.walls, "wall"),
            (&self.top_walls, "top wall"),
            (&self.ground, "ground"),
        ] {
            if set.is_empty() {
                return Err(TileError::NoVariants(name));
            }
        }
        Ok(())
    }
}

pub struct TileMapBuilder {
    screen_size: (u32, u32),
    tile_size: (u32, u32),
    seed: u64,
}

impl Default for TileMapBuilder {
    fn default() -> Self {
        Self {
            screen_size: Self::DEFAULT_SCREEN_SIZE,
            tile_size: Self::DEFAULT_TILE_SIZE,
            seed: 0,
        }
    }
}

impl TileMapBuilder {
    pub const DEFAULT_SCREEN_SIZE: (u32, u32) = (640, 360);
    pub const DEFAULT_TILE_SIZE: (u32, u32) = (32, 32);

    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_size = (width, height);
        self
    }

    pub fn with_tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile_size = (width, height);
        self
    }

    /// Variant choice is a pure function of the seed and the cell, so the same seed always
    /// produces the same map.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fills every complete cell of the screen, row by row: walls around the left, right and
    /// bottom border, top walls on the remaining top row, ground everywhere else.
    pub fn build(&self, variants: &TileVariants) -> Result<TileMap, TileError> {
        let (tile_width, tile_height) = self.tile_size;
        if tile_width == 0 || tile_height == 0 {
            return Err(TileError::InvalidTileSize(tile_width, tile_height));
        }
        variants.check()?;

        let columns = self.screen_size.0 / tile_width;
        let rows = self.screen_size.1 / tile_height;
        let mut scene = Scene::with_capacity(columns as usize * rows as usize);

        for row in 0..rows {
            for column in 0..columns {
                let set = if column == 0 || column + 1 == columns || row + 1 == rows {
                    &variants.walls
                } else if row == 0 {
                    &variants.top_walls
                } else {
                    &variants.ground
                };
                let position = Pos::new(
                    (column * tile_width) as f32,
                    (row * tile_height) as f32,
                );
                scene.push(Tile::new(position, self.pick(set, column, row).clone()));
            }
        }

        debug!("Built a {columns}x{rows} tile map with seed {}", self.seed);
        Ok(TileMap {
            scene,
            columns,
            rows,
            tile_size: self.tile_size,
            light_sources: Vec::new(),
        })
    }

    fn pick<'a>(&self, set: &'a [TextureRegion], column: u32, row: u32) -> &'a TextureRegion {
        let mut hasher = FxHasher::default();
        (self.seed, column, row).hash(&mut hasher);
        &set[(hasher.finish() % set.len() as u64) as usize]
    }
}

/// A grid of tiles backed by a [`Scene`] in row-major order.
pub struct TileMap {
    scene: Scene,
    columns: u32,
    rows: u32,
    tile_size: (u32, u32),
    light_sources: Vec<EntityId>,
}

impl TileMap {
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn tile_size(&self) -> (u32, u32) {
        self.tile_size
    }

    pub fn index_of(&self, column: u32, row: u32) -> Option<EntityId> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.scene
            .id_at(row as usize * self.columns as usize + column as usize)
    }

    #[inline]
    pub fn cell_position(&self, column: u32, row: u32) -> Pos<f32> {
        Pos::new(
            column as f32 * self.tile_size.0 as f32,
            row as f32 * self.tile_size.1 as f32,
        )
    }

    /// Replaces the tile of the given cell with `tile`, moved onto that cell, and registers
    /// it as a light source. Returns `None` outside of the grid.
    pub fn place_animated(
        &mut self,
        column: u32,
        row: u32,
        mut tile: AnimatedTile,
    ) -> Option<EntityId> {
        let id = self.index_of(column, row)?;
        tile.set_position(self.cell_position(column, row));
        self.scene.replace(id, tile).ok()?;
        if !self.light_sources.contains(&id) {
            self.light_sources.push(id);
        }
        Some(id)
    }

    /// Top left corners of all tiles registered with [`TileMap::place_animated`].
    pub fn light_sources(&self) -> impl Iterator<Item = Pos<f32>> + '_ {
        self.light_sources
            .iter()
            .filter_map(|id| self.scene.get(*id))
            .map(|entity| entity.position())
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[inline]
    pub fn update(&mut self, delta_seconds: f32) {
        self.scene.update(delta_seconds);
    }

    #[inline]
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.scene.draw(surface);
    }
}
