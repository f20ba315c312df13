//! Canvas Invaders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use canvas_invaders::{Settings, Variant};
    use canvas_invaders::platform::{FrameClock, action_for_key};
    use canvas_invaders::renderer::{CanvasSurface, draw_frame};
    use canvas_invaders::sim::{Field, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        clock: FrameClock,
    }

    impl Game {
        fn new(seed: u64, field: Field, settings: &Settings, surface: CanvasSurface) -> Self {
            Self {
                state: GameState::new(seed, field, settings.tuning.clone()),
                surface,
                clock: FrameClock::new(),
            }
        }

        /// Run however many fixed ticks this refresh owes, then draw once
        fn frame(&mut self, time: f64) {
            let ticks = self.clock.advance(time);
            for _ in 0..ticks {
                tick(&mut self.state);
            }
            draw_frame(&self.state, &mut self.surface);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Canvas Invaders starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let mut settings = Settings::load();
        let query = window.location().search().unwrap_or_default();
        if let Some(variant) = Variant::from_query(&query) {
            if variant != settings.variant {
                settings.apply_variant(variant);
                settings.save();
            }
        }

        // Field is fixed once from the viewport at startup
        let viewport = glam::Vec2::new(
            window.inner_width()?.as_f64().unwrap_or(0.0) as f32,
            window.inner_height()?.as_f64().unwrap_or(0.0) as f32,
        );
        let field = Field::from_viewport(viewport, settings.tuning.field_scale);
        canvas.set_width(field.width as u32);
        canvas.set_height(field.height as u32);
        log::info!("Field: {}x{} ({})", field.width, field.height, settings.variant.as_str());

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;
        let surface = CanvasSurface::new(ctx, field.width, field.height)?;

        let game = Rc::new(RefCell::new(Game::new(
            js_sys::Date::now() as u64,
            field,
            &settings,
            surface,
        )));
        log::info!("Game initialized with seed: {}", game.borrow().state.seed);

        setup_input_handlers(&window, game.clone())?;
        setup_visibility_handler(&document, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Invaders running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down: steer, or fire (key repeat fires again)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&event.key()) {
                    // Keep arrows/space from scrolling the page
                    event.prevent_default();
                    game.borrow_mut().state.handle_input(action, true);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up: release
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&event.key()) {
                    game.borrow_mut().state.handle_input(action, false);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// rAF stops while the tab is hidden; restart the clock on return so the
    /// gap is not credited as elapsed game time
    fn setup_visibility_handler(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Visible {
                game.borrow_mut().clock.reset();
                log::info!("Tab visible again, frame clock reset");
            }
        });
        document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Invaders (native) starting...");
    log::info!("Native mode runs a scripted headless session - run with `trunk serve` for the web version");

    headless::run(headless::SESSION_TICKS);
}

/// Scripted session against the recording surface
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_invaders::{Settings, Variant};
    use canvas_invaders::platform::{FrameClock, action_for_key};
    use canvas_invaders::renderer::{RecordingSurface, draw_frame};
    use canvas_invaders::sim::{Field, GameState, tick};

    pub const SESSION_TICKS: u64 = 900;
    const SEED: u64 = 1;

    /// Selects the variant preset, e.g. `CANVAS_INVADERS_VARIANT=static`
    const VARIANT_ENV: &str = "CANVAS_INVADERS_VARIANT";

    /// 1920x1080 viewport
    const VIEWPORT: (f32, f32) = (1920.0, 1080.0);
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run(ticks: u64) {
        let mut settings = Settings::load();
        if let Some(variant) = std::env::var(VARIANT_ENV).ok().as_deref().and_then(Variant::from_str) {
            settings.apply_variant(variant);
        }
        let field = Field::from_viewport(VIEWPORT.into(), settings.tuning.field_scale);
        let mut state = GameState::new(SEED, field, settings.tuning.clone());
        log::info!("Variant: {}, seed {}", settings.variant.as_str(), state.seed);
        let mut surface = RecordingSurface::new(field.width, field.height);
        let mut clock = FrameClock::new();

        let start_invaders = state.invader_count();
        let mut fired = 0u32;
        let mut frame = 0u64;

        while state.time_ticks < ticks {
            // Sweep left and right in 2 second legs, firing every 12 ticks
            let key = if (state.time_ticks / 120) % 2 == 0 { "ArrowLeft" } else { "d" };
            let other = if key == "d" { "ArrowLeft" } else { "d" };
            for (name, pressed) in [(other, false), (key, true)] {
                if let Some(action) = action_for_key(name) {
                    state.handle_input(action, pressed);
                }
            }
            if state.time_ticks % 12 == 0 {
                if let Some(action) = action_for_key(" ") {
                    state.handle_input(action, true);
                    fired += 1;
                }
            }

            for _ in 0..clock.advance(frame as f64 * FRAME_MS) {
                tick(&mut state);
            }
            draw_frame(&state, &mut surface);
            frame += 1;
        }

        log::info!(
            "{} ticks over {} frames: fired {}, invaders {} -> {}, projectiles in flight {}",
            state.time_ticks,
            frame,
            fired,
            start_invaders,
            state.invader_count(),
            state.projectiles.len()
        );
        log::info!("Last frame issued {} draw commands", surface.last_frame().len());
    }
}
