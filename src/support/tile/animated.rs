use crate::engine::system::canvas::Surface;
use crate::engine::system::texture::TextureRegion;
use crate::engine::types::world2d::Pos;
use crate::support::tile::{GameObject, TileError};

/// What happens to time beyond the delay when a frame advances.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FrameTimerPolicy {
    /// The timer restarts at zero and the excess is dropped. Under variable frame rates the
    /// animation runs slightly slow.
    #[default]
    ResetToZero,
    /// The excess (modulo the delay) is kept for the next frame.
    CarryRemainder,
}

/// Cycles through `frames` endlessly, advancing by at most one frame per
/// [`GameObject::update`] once the accumulated time reaches the delay.
#[derive(Debug, Clone)]
pub struct AnimatedTile {
    position: Pos<f32>,
    frames: Vec<TextureRegion>,
    delay: f32,
    current_frame: usize,
    timer: f32,
    policy: FrameTimerPolicy,
}

impl AnimatedTile {
    /// # Panics
    ///
    /// If `frames` is empty or `delay_seconds` is not a positive, finite number.
    pub fn new(
        frames: impl Into<Vec<TextureRegion>>,
        delay_seconds: f32,
        position: impl Into<Pos<f32>>,
    ) -> Self {
        match Self::try_new(frames, delay_seconds, position) {
            Ok(tile) => tile,
            Err(e) => panic!("Invalid animated tile: {e}"),
        }
    }

    pub fn try_new(
        frames: impl Into<Vec<TextureRegion>>,
        delay_seconds: f32,
        position: impl Into<Pos<f32>>,
    ) -> Result<Self, TileError> {
        let frames = frames.into();
        if frames.is_empty() {
            return Err(TileError::NoFrames);
        }
        if !(delay_seconds.is_finite() && delay_seconds > 0.0) {
            return Err(TileError::InvalidDelay(delay_seconds));
        }
        Ok(Self {
            position: position.into(),
            frames,
            delay: delay_seconds,
            current_frame: 0,
            timer: 0.0,
            policy: FrameTimerPolicy::default(),
        })
    }

    #[inline]
    pub fn with_policy(mut self, policy: FrameTimerPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    #[inline]
    pub fn current_region(&self) -> &TextureRegion {
        &self.frames[self.current_frame]
    }

    #[inline]
    pub fn frames(&self) -> &[TextureRegion] {
        &self.frames
    }

    #[inline]
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Time accumulated towards the next frame.
    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }
}

impl GameObject for AnimatedTile {
    #[inline]
    fn position(&self) -> Pos<f32> {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: Pos<f32>) {
        self.position = position;
    }

    fn update(&mut self, delta_seconds: f32) {
        if !(delta_seconds.is_finite() && delta_seconds >= 0.0) {
            trace!("Ignoring invalid frame delta {delta_seconds}");
            return;
        }

        self.timer += delta_seconds;
        if self.timer >= self.delay {
            self.timer = match self.policy {
                FrameTimerPolicy::ResetToZero => 0.0,
                FrameTimerPolicy::CarryRemainder => (self.timer - self.delay) % self.delay,
            };
            self.current_frame = (self.current_frame + 1) % self.frames.len();
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.current_region().draw_white(surface, self.position);
    }
}
