//! Builds the torch lit cave from a generated atlas, animates it for a second and writes the
//! final frame to `cave.png`. Pass a different output path as the first argument.

use std::error::Error;
use tilelight::engine::system::canvas::{BufferedCanvasLayer, SoftwareCanvas};
use tilelight::engine::system::fps::FrameClock;
use tilelight::engine::system::texture::{Texture, TextureRegion};
use tilelight::engine::types::Color;
use tilelight::support::image::RawRgbaImage;
use tilelight::support::lighting::LightMaskLayout;
use tilelight::support::tile::AnimatedTile;
use tilelight::support::tile_map::{TileMapBuilder, TileVariants};
use tracing::metadata::LevelFilter;

const TILE: i32 = 32;
const FIRE_DELAY: f32 = 0.15;

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tilelight::logging::init_logger_for_crate(LevelFilter::INFO)?;

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("cave.png"));

    let atlas = generate_atlas();
    let fire_frames = atlas.row(TILE * 3, 4, TILE, TILE);
    let mut map = TileMapBuilder::default()
        .with_seed(0x5eed)
        .build(&TileVariants::from_atlas_rows(&atlas, TILE))?;

    for (column, row) in [(2, 2), (17, 2), (2, 8), (17, 8)] {
        map.place_animated(
            column,
            row,
            AnimatedTile::new(fire_frames.clone(), FIRE_DELAY, (0.0, 0.0)),
        );
    }

    let mut clock = FrameClock::from_frame_rate(60);
    for _ in 0..60 {
        map.update(clock.tick());
    }

    let mask = generate_light_mask(128);
    let layout = LightMaskLayout::for_mask(&mask);

    let mut lights = BufferedCanvasLayer::from([640, 360]);
    layout.draw_masks(&mut lights, &mask, map.light_sources());
    layout.draw_mask_at(&mut lights, &mask, (320.0, 180.0).into());

    let mut canvas = SoftwareCanvas::new(640, 360);
    canvas.clear(Color::BLACK);
    map.draw(&mut canvas);
    lights.submit_to(&mut canvas);

    canvas
        .into_image()
        .ok_or("canvas buffer does not match its size")?
        .save(&output)?;
    tracing::info!("Wrote frame {} to {output}", clock.frame_index());
    Ok(())
}

/// Rows from the top: walls, ground, top walls, four fire frames.
fn generate_atlas() -> TextureRegion {
    let palette: [[[u8; 4]; 4]; 4] = [
        [[90, 80, 70, 255], [100, 90, 80, 255], [80, 72, 64, 255], [0; 4]],
        [[40, 90, 40, 255], [50, 100, 45, 255], [45, 85, 35, 255], [55, 95, 50, 255]],
        [[110, 100, 90, 255], [120, 105, 95, 255], [105, 95, 85, 255], [0; 4]],
        [[255, 120, 0, 255], [255, 160, 20, 255], [240, 100, 0, 255], [255, 200, 60, 255]],
    ];
    let mut pixels = RawRgbaImage::filled(128, 128, [0; 4]);
    for y in 0..128u32 {
        for x in 0..128u32 {
            let mut rgba = palette[(y / 32) as usize][(x / 32) as usize];
            // darker outline so individual tiles stay visible
            if x % 32 == 0 || y % 32 == 0 {
                rgba = Color::new(0.7, 0.7, 0.7, 1.0).modulate(rgba);
            }
            pixels.set_pixel(x, y, rgba);
        }
    }
    Texture::from_rgba("atlas", pixels).finalize()
}

fn generate_light_mask(size: u32) -> TextureRegion {
    let mut pixels = RawRgbaImage::filled(size, size, [0; 4]);
    let radius = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / radius).clamp(0.0, 1.0);
            pixels.set_pixel(x, y, [255, 220, 160, (falloff * 96.0) as u8]);
        }
    }
    Texture::from_rgba("lightmask", pixels).finalize()
}
