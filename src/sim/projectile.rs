//! Player projectiles

use glam::Vec2;

use crate::settings::ProjectileTuning;

/// A shot travelling straight up
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    /// Centre of the shot
    pub pos: Vec2,
    /// Upward speed (pixels per tick)
    pub speed: f32,
    pub radius: f32,
    /// Left the field; not drawn, removed on the next projectile pass
    pub dead: bool,
}

impl Projectile {
    pub fn new(id: u32, muzzle: Vec2, tuning: &ProjectileTuning) -> Self {
        Self {
            id,
            pos: muzzle,
            speed: tuning.speed,
            radius: tuning.radius,
            dead: false,
        }
    }

    /// Move up one step; flag dead once above the field
    pub fn update(&mut self) {
        self.pos.y -= self.speed;

        if self.pos.y < 0.0 {
            self.dead = true;
        }
    }
}
