//! A single invader
//!
//! Invaders have no motion of their own; the owning grid hands each one the
//! frame's delta. Removal is the grid's job.

use glam::Vec2;

use super::collision::Rect;
use crate::consts::{INVADER_HEIGHT, INVADER_WIDTH};

/// Shared invader size
pub const INVADER_SIZE: Vec2 = Vec2::new(INVADER_WIDTH, INVADER_HEIGHT);

#[derive(Debug, Clone, PartialEq)]
pub struct Invader {
    /// Top-left corner
    pub pos: Vec2,
}

impl Invader {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Translate by the owning grid's per-frame delta
    #[inline]
    pub fn update(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, INVADER_SIZE)
    }
}
