//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (membership / firing order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod invader;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::{Hit, Rect, find_hits};
pub use grid::Grid;
pub use invader::{INVADER_SIZE, Invader};
pub use player::{Direction, KeyState, Player};
pub use projectile::Projectile;
pub use state::{Field, GameState, InputAction};
pub use tick::tick;
