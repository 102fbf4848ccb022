//! CPU side building blocks: geometry types, the shared textures and the regions carved out of
//! them, the surfaces regions are blitted onto, and the frame clock driving updates.

pub mod system;
pub mod types;
