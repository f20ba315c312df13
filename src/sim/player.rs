//! The player's ship

use glam::Vec2;

use super::collision::Rect;
use super::state::Field;
use crate::consts::{SHIP_SPRITE_HEIGHT, SHIP_SPRITE_WIDTH};
use crate::settings::PlayerTuning;

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Held directional keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl KeyState {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Right => self.right = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
        }
    }
}

/// The single persistent player avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-tick step on each axis
    pub velocity: Vec2,
    /// Cosmetic lean (radians); does not affect the collision box
    pub rotation: f32,
    /// Lean applied while turning
    pub lean: f32,
    pub keys: KeyState,
}

impl Player {
    /// Spawn horizontally centred, resting on the bottom of the field
    pub fn new(field: &Field, tuning: &PlayerTuning) -> Self {
        let size = Vec2::new(SHIP_SPRITE_WIDTH, SHIP_SPRITE_HEIGHT) * tuning.scale;
        Self {
            pos: Vec2::new(field.width * 0.5 - size.x * 0.5, field.height - size.y),
            size,
            velocity: Vec2::new(tuning.step.0, tuning.step.1),
            rotation: 0.0,
            lean: tuning.lean,
            keys: KeyState::default(),
        }
    }

    /// Apply held keys. A step that would leave the field is skipped.
    pub fn update(&mut self, field: &Field) {
        let max = Vec2::new(field.width - self.size.x, field.height - self.size.y);

        if self.keys.up {
            self.pos.y = step_within(self.pos.y, -self.velocity.y, max.y);
        }
        if self.keys.right {
            self.pos.x = step_within(self.pos.x, self.velocity.x, max.x);
        }
        if self.keys.down {
            self.pos.y = step_within(self.pos.y, self.velocity.y, max.y);
        }
        if self.keys.left {
            self.pos.x = step_within(self.pos.x, -self.velocity.x, max.x);
        }
    }

    /// Press or release a direction. Right/left also set the lean.
    pub fn set_key(&mut self, direction: Direction, pressed: bool) {
        self.keys.set(direction, pressed);

        match (direction, pressed) {
            (Direction::Right, true) => self.rotation = self.lean,
            (Direction::Left, true) => self.rotation = -self.lean,
            (Direction::Right | Direction::Left, false) => self.rotation = 0.0,
            _ => {}
        }
    }

    /// Spawn point for projectiles (top-centre)
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.pos.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// `pos + step` if it stays within `[0, max]`, otherwise `pos`
#[inline]
fn step_within(pos: f32, step: f32, max: f32) -> f32 {
    let next = pos + step;
    if (0.0..=max).contains(&next) { next } else { pos }
}
