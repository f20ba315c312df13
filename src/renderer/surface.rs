//! Drawable surface capability

use glam::Vec2;

use crate::sim::Rect;

/// Image assets the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ship,
    Invader,
}

impl Sprite {
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Ship => crate::consts::SHIP_SPRITE_PATH,
            Sprite::Invader => crate::consts::INVADER_SPRITE_PATH,
        }
    }
}

/// A fixed-size 2D drawing target with canvas-style state.
///
/// `save`/`restore` push and pop the transform and styles. Drawing a sprite
/// that has not finished loading is a silent no-op.
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> Vec2;

    /// Clear the whole surface
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);

    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);

    fn fill_rect(&mut self, rect: Rect);
    fn draw_image(&mut self, sprite: Sprite, rect: Rect);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
}
