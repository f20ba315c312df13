//! A `Surface` that records commands instead of painting
//!
//! Used by tests and by the native headless runner.

use glam::Vec2;

use super::surface::{Sprite, Surface};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    FillColor(String),
    StrokeColor(String),
    FillRect(Rect),
    Image(Sprite, Rect),
    FillCircle { center: Vec2, radius: f32 },
    StrokeCircle { center: Vec2, radius: f32 },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
    /// Current save/restore nesting
    depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
            depth: 0,
        }
    }

    /// Commands since the most recent `clear`
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Sprites of one kind drawn in the last frame
    pub fn images(&self, sprite: Sprite) -> Vec<Rect> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image(s, rect) if *s == sprite => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Circles (filled or stroked) drawn in the last frame
    pub fn circles(&self) -> Vec<Vec2> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { center, .. } | DrawCommand::StrokeCircle { center, .. } => {
                    Some(*center)
                }
                _ => None,
            })
            .collect()
    }

    /// True when every `save` has a matching `restore`
    pub fn balanced(&self) -> bool {
        self.depth == 0
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_string()));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeColor(color.to_string()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        self.commands.push(DrawCommand::Image(sprite, rect));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius });
    }
}
