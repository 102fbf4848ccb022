pub mod image;
pub mod lighting;
pub mod sprite_sheet;
pub mod tile;
pub mod tile_map;
