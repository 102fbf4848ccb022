pub mod canvas;
pub mod fps;
pub mod texture;
