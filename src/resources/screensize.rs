//! Screen size resource.
//!
//! Playfield dimensions in pixels. The collision system uses the height as
//! the fall-out boundary and level loading flips grid rows against it.

use glam::Vec2;

/// Current screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            w: w as i32,
            h: h as i32,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.w as f32, self.h as f32)
    }
}
