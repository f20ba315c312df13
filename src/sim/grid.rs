//! Invader grids
//!
//! A grid is a rectangular formation that moves as one unit. Marching grids
//! step sideways every tick and, on the tick they cross a field edge,
//! reverse and drop once. The cached `width` drives edge detection and is
//! re-derived from the survivors whenever invaders are removed.

use glam::Vec2;
use rand::Rng;

use super::collision::Hit;
use super::invader::Invader;
use crate::consts::{INVADER_HEIGHT, INVADER_WIDTH};
use crate::settings::GridTuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub id: u32,
    /// Origin (x tracks the leftmost surviving invader)
    pub pos: Vec2,
    /// x: horizontal step per tick, y: this tick's drop (zero except on reversal)
    pub vel: Vec2,
    pub columns: u32,
    pub rows: u32,
    /// Span from the leftmost to the rightmost survivor, plus one invader width
    pub width: f32,
    pub marching: bool,
    /// Drop applied on reversal
    pub drop: f32,
    /// Column-major creation order
    pub invaders: Vec<Invader>,
}

impl Grid {
    /// Random dimensions within the tuning's bounds
    pub fn new(id: u32, rng: &mut impl Rng, tuning: &GridTuning) -> Self {
        let columns = rng.random_range(tuning.min_columns..=tuning.max_columns.max(tuning.min_columns));
        let rows = rng.random_range(tuning.min_rows..=tuning.max_rows.max(tuning.min_rows));
        Self::from_dimensions(id, columns, rows, tuning)
    }

    /// Fixed dimensions, invaders laid out from the grid's (0, 0)
    pub fn from_dimensions(id: u32, columns: u32, rows: u32, tuning: &GridTuning) -> Self {
        let mut invaders = Vec::with_capacity(columns as usize * rows as usize);
        for column in 0..columns {
            for row in 0..rows {
                invaders.push(Invader::new(Vec2::new(
                    column as f32 * INVADER_WIDTH,
                    row as f32 * INVADER_HEIGHT,
                )));
            }
        }

        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::new(if tuning.marching { tuning.speed } else { 0.0 }, 0.0),
            columns,
            rows,
            width: columns as f32 * INVADER_WIDTH,
            marching: tuning.marching,
            drop: tuning.drop,
            invaders,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.invaders.is_empty()
    }

    /// Advance the formation one tick. Invaders are moved separately via `delta`.
    pub fn update(&mut self, field_width: f32) {
        if !self.marching {
            return;
        }

        self.vel.y = 0.0;
        self.pos.x += self.vel.x;

        if self.pos.x + self.width > field_width || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
            self.vel.y = self.drop;
            log::trace!("Grid {} reversed at x={:.1}", self.id, self.pos.x);
        }

        self.pos.y += self.vel.y;
    }

    /// Per-tick delta handed to every surviving invader. On a reversal tick
    /// this is already the reversed step plus the drop.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.vel
    }

    /// Remove the invaders named by `hits` (indices from a single scan)
    pub fn remove_hits(&mut self, hits: &[Hit]) {
        if hits.is_empty() {
            return;
        }

        let mut doomed = vec![false; self.invaders.len()];
        for hit in hits {
            if let Some(slot) = doomed.get_mut(hit.invader) {
                *slot = true;
            }
        }

        let mut index = 0;
        self.invaders.retain(|_| {
            let keep = !doomed[index];
            index += 1;
            keep
        });
    }

    /// Re-derive `pos.x` and `width` from the survivors (no-op when empty)
    pub fn recompute_extent(&mut self) {
        let Some(first) = self.invaders.first() else {
            return;
        };

        let (min_x, max_x) = self
            .invaders
            .iter()
            .fold((first.pos.x, first.pos.x), |(lo, hi), inv| {
                (lo.min(inv.pos.x), hi.max(inv.pos.x))
            });

        self.pos.x = min_x;
        self.width = max_x + INVADER_WIDTH - min_x;
    }
}
