//! Axis-aligned collision detection
//!
//! Every collision in the game is a point (projectile centre) tested against
//! an invader's box. Edges are inclusive on all four sides.

use glam::Vec2;

use super::invader::Invader;
use super::projectile::Projectile;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Inclusive box-vs-point test
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.pos.x && p.x <= self.right() && p.y >= self.pos.y && p.y <= self.bottom()
    }
}

/// A matched invader/projectile pair (indices into their collections)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub invader: usize,
    pub projectile: usize,
}

/// Scan invaders in membership order against live projectiles.
///
/// The first matching projectile wins: it and the invader form one `Hit`,
/// and that projectile is not tested against later invaders. Dead
/// projectiles never hit. Hits come back in invader order; nothing is
/// removed here.
pub fn find_hits(invaders: &[Invader], projectiles: &[Projectile]) -> Vec<Hit> {
    let mut consumed = vec![false; projectiles.len()];
    let mut hits = Vec::new();

    for (ii, invader) in invaders.iter().enumerate() {
        let bounds = invader.bounds();
        let matched = projectiles
            .iter()
            .enumerate()
            .find(|(pi, p)| !consumed[*pi] && !p.dead && bounds.contains_point(p.pos))
            .map(|(pi, _)| pi);

        if let Some(pi) = matched {
            consumed[pi] = true;
            hits.push(Hit {
                invader: ii,
                projectile: pi,
            });
        }
    }

    hits
}
