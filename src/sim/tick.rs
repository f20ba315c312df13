//! Per-frame simulation tick
//!
//! Order within a tick: player, then each grid (advance, collision scan,
//! removals, invader moves), then projectiles (prune dead, advance live).

use super::collision::find_hits;
use super::state::GameState;

/// Advance the game by one tick
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    state.player.update(&state.field);

    for grid in &mut state.grids {
        grid.update(state.field.width);

        // Scan first, remove after: indices stay valid for the whole pass
        let hits = find_hits(&grid.invaders, &state.projectiles);
        if !hits.is_empty() {
            log::debug!(
                "Tick {}: grid {} lost {} invader(s)",
                state.time_ticks,
                grid.id,
                hits.len()
            );

            let mut spent = vec![false; state.projectiles.len()];
            for hit in &hits {
                spent[hit.projectile] = true;
            }
            let mut index = 0;
            state.projectiles.retain(|_| {
                let keep = !spent[index];
                index += 1;
                keep
            });

            grid.remove_hits(&hits);
        }

        let delta = grid.delta();
        for invader in &mut grid.invaders {
            invader.update(delta);
        }

        if !hits.is_empty() {
            grid.recompute_extent();
        }
    }

    state.projectiles.retain(|p| !p.dead);
    for projectile in &mut state.projectiles {
        projectile.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{INVADER_HEIGHT, INVADER_WIDTH};
    use crate::settings::{GridTuning, Tuning};
    use crate::sim::grid::Grid;
    use crate::sim::state::Field;
    use glam::Vec2;

    fn field() -> Field {
        Field::new(800.0, 600.0)
    }

    fn state_with_grid(columns: u32, rows: u32, grid: GridTuning) -> GameState {
        let mut state = GameState::empty(3, field(), Tuning::default());
        let id = state.next_entity_id();
        state.grids.push(Grid::from_dimensions(id, columns, rows, &grid));
        state
    }

    fn still() -> GridTuning {
        GridTuning {
            marching: false,
            ..GridTuning::default()
        }
    }

    /// Fire from an arbitrary point by moving the player's muzzle there
    fn fire_from(state: &mut GameState, muzzle: Vec2) {
        state.player.pos = Vec2::new(muzzle.x - state.player.size.x * 0.5, muzzle.y);
        state.fire();
    }

    #[test]
    fn test_corner_hit_removes_exactly_one_pair() {
        let mut state = state_with_grid(3, 3, still());
        // Top-left corner of the grid: inside invader 0 only
        let target = state.grids[0].invaders[0].pos;
        fire_from(&mut state, target);
        fire_from(&mut state, Vec2::new(700.0, 500.0));

        tick(&mut state);

        let grid = &state.grids[0];
        assert_eq!(grid.invaders.len(), 8);
        assert!(grid.invaders.iter().all(|i| i.pos != target));
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].pos.x, 700.0);
    }

    #[test]
    fn test_two_adjacent_hits_in_one_tick() {
        let mut state = state_with_grid(2, 2, GridTuning::default());
        // Invaders 0 and 1 are stacked in the first column
        fire_from(&mut state, Vec2::new(5.0, 5.0));
        fire_from(&mut state, Vec2::new(5.0, INVADER_HEIGHT + 5.0));

        tick(&mut state);

        let grid = &state.grids[0];
        assert_eq!(grid.invaders.len(), 2);
        assert!(state.projectiles.is_empty());
        // Survivors are the second column, moved by this tick's step
        assert_eq!(grid.invaders[0].pos, Vec2::new(INVADER_WIDTH + 2.0, 0.0));
        assert_eq!(grid.invaders[1].pos, Vec2::new(INVADER_WIDTH + 2.0, INVADER_HEIGHT));
        assert_eq!(grid.pos.x, INVADER_WIDTH + 2.0);
        assert_eq!(grid.width, INVADER_WIDTH);
    }

    #[test]
    fn test_one_projectile_cannot_hit_two_grids() {
        let mut state = state_with_grid(1, 1, still());
        let id = state.next_entity_id();
        state.grids.push(Grid::from_dimensions(id, 1, 1, &still()));
        fire_from(&mut state, Vec2::new(10.0, 10.0));

        tick(&mut state);

        assert!(state.grids[0].is_empty());
        assert_eq!(state.grids[1].invaders.len(), 1);
    }

    #[test]
    fn test_projectile_removed_tick_after_leaving_field() {
        let mut state = GameState::empty(1, field(), Tuning::default());
        fire_from(&mut state, Vec2::new(400.0, 20.0));

        tick(&mut state); // 12
        tick(&mut state); // 4
        assert!(!state.projectiles[0].dead);
        tick(&mut state); // -4, flagged
        assert_eq!(state.projectiles.len(), 1);
        assert!(state.projectiles[0].dead);
        tick(&mut state); // pruned
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_single_invader_killed_after_k_ticks() {
        let mut state = state_with_grid(1, 1, still());
        let invader = state.grids[0].invaders[0].pos;
        let muzzle = Vec2::new(invader.x + INVADER_WIDTH * 0.5, 300.0);
        fire_from(&mut state, muzzle);

        // Collision is tested before the projectile moves, so the hit lands on
        // the first tick whose pre-move y is inside the box
        let speed = state.tuning.projectile.speed;
        let distance = muzzle.y - (invader.y + INVADER_HEIGHT);
        let k = (distance / speed).ceil() as u32 + 1;

        for _ in 0..k - 1 {
            tick(&mut state);
            assert_eq!(state.grids[0].invaders.len(), 1);
            assert_eq!(state.projectiles.len(), 1);
        }

        tick(&mut state);
        assert!(state.grids[0].is_empty());
        assert!(state.projectiles.is_empty());

        // Stable on the following tick
        let grids = state.grids.clone();
        tick(&mut state);
        assert_eq!(state.grids, grids);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_marching_grid_moves_invaders_with_it() {
        let mut state = state_with_grid(2, 1, GridTuning::default());
        for _ in 0..5 {
            tick(&mut state);
        }
        let grid = &state.grids[0];
        assert_eq!(grid.pos.x, 10.0);
        assert_eq!(grid.invaders[0].pos, Vec2::new(10.0, 0.0));
        assert_eq!(grid.invaders[1].pos, Vec2::new(INVADER_WIDTH + 10.0, 0.0));
    }

    #[test]
    fn test_drop_applied_to_invaders_on_reversal() {
        let mut state = state_with_grid(1, 1, GridTuning::default());
        state.field.width = 40.0;
        // 31 wide: reverses once x > 9, i.e. on the 5th tick (x = 10)
        for _ in 0..5 {
            tick(&mut state);
        }
        let grid = &state.grids[0];
        assert_eq!(grid.pos, Vec2::new(10.0, INVADER_HEIGHT * 0.5));
        assert_eq!(grid.vel.x, -2.0);
        // Invaders take the reversed step and the drop on the same tick
        assert_eq!(grid.invaders[0].pos, Vec2::new(6.0, INVADER_HEIGHT * 0.5));

        tick(&mut state);
        assert_eq!(state.grids[0].invaders[0].pos, Vec2::new(4.0, INVADER_HEIGHT * 0.5));
    }

    #[test]
    fn test_emptied_grid_persists() {
        let mut state = state_with_grid(1, 1, GridTuning::default());
        fire_from(&mut state, Vec2::new(1.0, 1.0));
        tick(&mut state);
        assert_eq!(state.grids.len(), 1);
        assert!(state.grids[0].is_empty());

        for _ in 0..500 {
            tick(&mut state);
        }
        assert_eq!(state.grids.len(), 1);
    }
}
