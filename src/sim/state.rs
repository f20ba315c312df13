//! Game state and ownership
//!
//! `GameState` exclusively owns the player, the projectile collection and
//! the grid collection; each grid owns its invaders.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::Grid;
use super::player::{Direction, Player};
use super::projectile::Projectile;
use crate::settings::Tuning;

/// The drawable play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Field sized as a fraction of the host viewport
    pub fn from_viewport(viewport: Vec2, scale: (f32, f32)) -> Self {
        Self::new(viewport.x * scale.0, viewport.y * scale.1)
    }
}

/// A logical input, already decoded from the host's key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Move(Direction),
    Fire,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub field: Field,
    pub tuning: Tuning,
    pub player: Player,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// Grids persist even once emptied
    pub grids: Vec<Grid>,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game with `tuning.initial_grids` random grids
    pub fn new(seed: u64, field: Field, tuning: Tuning) -> Self {
        let mut state = Self::empty(seed, field, tuning);
        for _ in 0..state.tuning.initial_grids {
            state.spawn_grid();
        }
        state
    }

    /// A game with the player only (no grids)
    pub fn empty(seed: u64, field: Field, tuning: Tuning) -> Self {
        Self {
            seed,
            field,
            player: Player::new(&field, &tuning.player),
            tuning,
            projectiles: Vec::new(),
            grids: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a grid of random dimensions
    pub fn spawn_grid(&mut self) -> u32 {
        let id = self.next_entity_id();
        let grid = Grid::new(id, &mut self.rng, &self.tuning.grid);
        log::info!("Grid {}: {} columns x {} rows", id, grid.columns, grid.rows);
        self.grids.push(grid);
        id
    }

    /// Fire a projectile from the player's muzzle
    pub fn fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        let projectile = Projectile::new(id, self.player.muzzle(), &self.tuning.projectile);
        self.projectiles.push(projectile);
        id
    }

    /// Apply a key press or release. Fire acts on press only.
    pub fn handle_input(&mut self, action: InputAction, pressed: bool) {
        match action {
            InputAction::Move(direction) => self.player.set_key(direction, pressed),
            InputAction::Fire if pressed => {
                self.fire();
            }
            InputAction::Fire => {}
        }
    }

    /// Total invaders across every grid
    pub fn invader_count(&self) -> usize {
        self.grids.iter().map(|g| g.invaders.len()).sum()
    }
}
