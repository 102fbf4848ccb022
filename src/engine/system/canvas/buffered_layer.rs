use crate::engine::system::canvas::Surface;
use crate::engine::system::texture::Texture;
use crate::engine::types::world2d::{Pos, Rect};
use crate::engine::types::Color;
use std::sync::Arc;

/// Records blits in call order instead of executing them, so a frame can be inspected or
/// replayed onto another [`Surface`] later.
#[derive(Default)]
pub struct BufferedCanvasLayer {
    size: Option<[u32; 2]>,
    actions: Vec<Blit>,
}

impl From<[u32; 2]> for BufferedCanvasLayer {
    fn from(size: [u32; 2]) -> Self {
        Self {
            size: Some(size),
            actions: Vec::default(),
        }
    }
}

impl BufferedCanvasLayer {
    #[inline]
    pub fn size(&self) -> Option<[u32; 2]> {
        self.size
    }

    #[inline]
    pub fn blits(&self) -> &[Blit] {
        &self.actions
    }

    /// Runs of consecutive blits sharing the same texture, the unit a batching backend would
    /// submit in a single draw call.
    pub fn batches(&self) -> impl Iterator<Item = &[Blit]> + '_ {
        self.actions
            .chunk_by(|a, b| Arc::ptr_eq(&a.texture, &b.texture))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn submit_to<S: Surface + ?Sized>(self, surface: &mut S) {
        for blit in self.actions {
            surface.blit(&blit.texture, blit.source, blit.position, blit.tint);
        }
    }

    /// Whether a blit at `position` of the given `source` size would touch the layer at all.
    /// Layers without a known size accept everything.
    fn is_visible(&self, source: &Rect<i32>, position: Pos<f32>) -> bool {
        match self.size {
            None => true,
            Some([width, height]) => {
                position.x < width as f32
                    && position.y < height as f32
                    && position.x + source.dim.x as f32 > 0.0
                    && position.y + source.dim.y as f32 > 0.0
            }
        }
    }
}

impl Surface for BufferedCanvasLayer {
    fn blit(&mut self, texture: &Arc<Texture>, source: Rect<i32>, position: Pos<f32>, tint: Color) {
        if source.is_empty() || !self.is_visible(&source, position) {
            return;
        }
        self.actions.push(Blit {
            texture: Arc::clone(texture),
            source,
            position,
            tint,
        });
    }
}

#[derive(Debug, Clone)]
pub struct Blit {
    pub texture: Arc<Texture>,
    pub source: Rect<i32>,
    pub position: Pos<f32>,
    pub tint: Color,
}
