//! Frame drawing
//!
//! Draw order: clear, player, invaders (grid by grid, membership order),
//! live projectiles. Draw reads only post-tick state.

use glam::Vec2;

use super::surface::{Sprite, Surface};
use crate::settings::ProjectileStyle;
use crate::sim::{GameState, Invader, Player, Projectile};

/// Backing color painted under the ship sprite
const SHIP_BACKING_COLOR: &str = "#000";

/// Render a full frame
pub fn draw_frame(state: &GameState, surface: &mut impl Surface) {
    surface.clear();

    draw_player(&state.player, surface);

    for grid in &state.grids {
        for invader in &grid.invaders {
            draw_invader(invader, surface);
        }
    }

    let style = state.tuning.projectile.style;
    let color = state.tuning.projectile.color.as_str();
    for projectile in state.projectiles.iter().filter(|p| !p.dead) {
        draw_projectile(projectile, style, color, surface);
    }
}

/// Ship sprite, rotated about its own centre by the current lean
fn draw_player(player: &Player, surface: &mut impl Surface) {
    let bounds = player.bounds();
    let center = bounds.center();

    surface.save();
    surface.translate(center);
    surface.rotate(player.rotation);
    surface.translate(-center);

    surface.set_fill_color(SHIP_BACKING_COLOR);
    surface.fill_rect(bounds);
    surface.draw_image(Sprite::Ship, bounds);

    surface.restore();
}

fn draw_invader(invader: &Invader, surface: &mut impl Surface) {
    surface.draw_image(Sprite::Invader, invader.bounds());
}

fn draw_projectile(projectile: &Projectile, style: ProjectileStyle, color: &str, surface: &mut impl Surface) {
    let center: Vec2 = projectile.pos;

    surface.save();
    match style {
        ProjectileStyle::Filled => {
            surface.set_fill_color(color);
            surface.fill_circle(center, projectile.radius);
        }
        ProjectileStyle::Outlined => {
            surface.set_stroke_color(color);
            surface.stroke_circle(center, projectile.radius);
        }
    }
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};
    use crate::settings::{GridTuning, Tuning, Variant};
    use crate::sim::{Direction, Field, GameState, Grid, tick};

    fn state(tuning: Tuning) -> GameState {
        let mut state = GameState::empty(5, Field::new(800.0, 600.0), tuning);
        let id = state.next_entity_id();
        let grid = Grid::from_dimensions(id, 2, 2, &state.tuning.grid);
        state.grids.push(grid);
        state
    }

    #[test]
    fn test_frame_order_clear_player_invaders_projectiles() {
        let mut state = state(Tuning::default());
        state.fire();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        draw_frame(&state, &mut surface);

        let frame = surface.last_frame();
        assert_eq!(frame[0], DrawCommand::Clear);
        let ship = frame
            .iter()
            .position(|c| matches!(c, DrawCommand::Image(Sprite::Ship, _)))
            .unwrap();
        let first_invader = frame
            .iter()
            .position(|c| matches!(c, DrawCommand::Image(Sprite::Invader, _)))
            .unwrap();
        let circle = frame
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .unwrap();
        assert!(ship < first_invader && first_invader < circle);
        assert_eq!(surface.images(Sprite::Invader).len(), 4);
        assert!(surface.balanced());
    }

    #[test]
    fn test_player_rotated_about_center() {
        let mut state = state(Tuning::default());
        state.player.set_key(Direction::Right, true);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        draw_frame(&state, &mut surface);

        let center = state.player.bounds().center();
        let frame = surface.last_frame();
        assert_eq!(
            &frame[1..5],
            &[
                DrawCommand::Save,
                DrawCommand::Translate(center),
                DrawCommand::Rotate(0.15),
                DrawCommand::Translate(-center),
            ]
        );
    }

    #[test]
    fn test_dead_projectiles_not_drawn() {
        let mut state = state(Tuning {
            grid: GridTuning {
                marching: false,
                ..GridTuning::default()
            },
            ..Tuning::default()
        });
        state.player.pos = Vec2::new(600.0, 10.0);
        state.fire();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        tick(&mut state); // y = 2
        draw_frame(&state, &mut surface);
        assert_eq!(surface.circles().len(), 1);

        tick(&mut state); // y = -6, flagged
        draw_frame(&state, &mut surface);
        assert!(surface.circles().is_empty());

        tick(&mut state); // pruned
        draw_frame(&state, &mut surface);
        assert!(surface.circles().is_empty());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_static_variant_outlines_projectiles() {
        let mut state = state(Variant::Static.tuning());
        state.fire();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        draw_frame(&state, &mut surface);

        assert!(surface
            .last_frame()
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokeCircle { radius, .. } if *radius == 5.0)));
        assert!(!surface
            .last_frame()
            .iter()
            .any(|c| matches!(c, DrawCommand::FillCircle { .. })));
    }

    #[test]
    fn test_invaders_drawn_at_their_bounds() {
        let state = state(Tuning::default());
        let mut surface = RecordingSurface::new(800.0, 600.0);

        draw_frame(&state, &mut surface);

        let expected: Vec<_> = state.grids[0].invaders.iter().map(|i| i.bounds()).collect();
        assert_eq!(surface.images(Sprite::Invader), expected);
    }

    #[test]
    fn test_surface_reports_field_size() {
        let state = state(Tuning::default());
        let surface = RecordingSurface::new(state.field.width, state.field.height);
        assert_eq!(surface.size(), Vec2::new(800.0, 600.0));
    }
}
