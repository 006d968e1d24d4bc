//! drift-bird entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use glam::Vec2;

    use drift_bird::assets::{self, StagedCharacter, TextureCache};
    use drift_bird::renderer::{RenderState, SpriteDraw};
    use drift_bird::sim::{SimEvent, World, tick};
    use drift_bird::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        world: World,
        tuning: Tuning,
        render_state: RenderState,
        bird_art: StagedCharacter,
        can_art: StagedCharacter,
    }

    impl Game {
        /// Advance the simulation by one displayed frame
        fn update(&mut self) -> Vec<SimEvent> {
            tick(&mut self.world, &self.tuning)
        }

        /// Render the current frame; the bird draws on top of the can
        fn render(&mut self) {
            let draws = [
                SpriteDraw {
                    texture: self.can_art.for_facing(self.world.can.facing),
                    pos: self.world.can.pos,
                    size: self.world.can.size,
                },
                SpriteDraw {
                    texture: self.bird_art.for_facing(self.world.bird.facing),
                    pos: self.world.bird.pos,
                    size: self.world.bird.size,
                },
            ];

            match self.render_state.render(&draws) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    /// Update the score readout in the DOM
    fn update_score_readout(points: u32) {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("scoreReadOut"));
        if let Some(element) = element {
            element.set_text_content(Some(&points.to_string()));
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("drift-bird starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the window, stage pixels == CSS pixels
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;

        // Stage the artwork: one character after the other, can first so the
        // bird ends up on top
        let mut cache = TextureCache::default();
        let can_art = assets::load_character(&mut cache, &render_state, assets::CAN_ART)
            .expect("Failed to load can artwork");
        let bird_art = assets::load_character(&mut cache, &render_state, assets::BIRD_ART)
            .expect("Failed to load bird artwork");
        log::info!("{} textures staged", cache.len());

        let tuning = Tuning::load();
        let seed = js_sys::Date::now() as u64;
        let bounds = Vec2::new(width as f32, height as f32);
        let mut world = World::new(seed, bounds, &tuning);

        // Display footprints come from the decoded images
        world.bird.size = bird_art.size();
        world.can.size = can_art.size();

        log::info!("World initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            world,
            tuning,
            render_state,
            bird_art,
            can_art,
        }));

        setup_resize_handler(&canvas, game.clone());
        update_score_readout(0);

        // Start game loop
        request_animation_frame(game);

        log::info!("drift-bird running!");
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let width = canvas.client_width().max(1) as u32;
            let height = canvas.client_height().max(1) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut g = game.borrow_mut();
            g.render_state.resize(width, height);
            g.world.bounds = Vec2::new(width as f32, height as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // The frame timestamp is available but unused: one tick per displayed
    // frame, no delta-time scaling.
    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        {
            let mut g = game.borrow_mut();
            let events = g.update();
            g.render();

            for event in events {
                let SimEvent::Scored { total } = event;
                update_score_readout(total);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;

    use drift_bird::sim::{SimEvent, World, tick};
    use drift_bird::tuning::Tuning;

    env_logger::init();
    log::info!("drift-bird (native) starting...");
    log::info!("The stage needs a browser - run with `trunk serve` for the web version");

    // Headless demo: let the bird fly for ten seconds' worth of frames
    let tuning = Tuning::load();
    let mut world = World::new(42, Vec2::new(800.0, 600.0), &tuning);

    let mut score = 0;
    for _ in 0..600 {
        for event in tick(&mut world, &tuning) {
            let SimEvent::Scored { total } = event;
            score = total;
            log::info!("Can collected! score={}", total);
        }
    }

    println!(
        "Final score after {} frames: {}",
        world.time_ticks, score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
