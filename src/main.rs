use tracing::{debug, info};

mod assets;
mod config;
mod frame_limiter;
mod game;
mod input_system;
mod logging;
mod region;
mod render;
mod viewport;

use assets::SceneTextures;
use config::{GameConfig, CONFIG_PATH};
use frame_limiter::FrameLimiter;
use game::Session;
use input_system::{GameAction, InputSystem};
use region::{RegionCatalog, BOARD_HEIGHT, BOARD_WIDTH};
use render::{render_frame, RenderOptions};
use viewport::Viewport;

const WINDOW_TITLE: &str = "Pirate Islands";

fn main() -> Result<(), String> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;
    logging::init(&config.log_level);
    info!(
        title = WINDOW_TITLE,
        width = BOARD_WIDTH,
        height = BOARD_HEIGHT,
        fps = config.frame_rate,
        "startup"
    );

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    // Hidden until every texture is loaded, so a missing asset never flashes a window
    let window = video_subsystem
        .window(WINDOW_TITLE, BOARD_WIDTH, BOARD_HEIGHT)
        .position_centered()
        .resizable()
        .hidden()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size so SDL2 scales and letterboxes on resize
    canvas
        .set_logical_size(BOARD_WIDTH, BOARD_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let textures = SceneTextures::load(&texture_creator, &config.assets)?;

    let catalog = RegionCatalog::islands();
    info!(regions = catalog.len(), "board_ready");

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();
    let mut session = Session::new();
    let mut viewport = Viewport::new(BOARD_WIDTH, BOARD_HEIGHT);
    let options = RenderOptions {
        show_region_outlines: config.show_region_outlines,
    };
    let mut limiter = FrameLimiter::new(config.frame_rate);

    canvas.window_mut().show();
    let (window_width, window_height) = canvas.window().size();
    viewport.resize(window_width, window_height);

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Resized(w, h) => {
                    debug!(width = w, height = h, "window_resized");
                    viewport.resize(w, h);
                }
            }
        }

        let mouse = event_pump.mouse_state();
        let before = session.state();
        let outcome = session.handle_pointer(mouse.left(), &catalog, || {
            viewport.to_logical(mouse.x(), mouse.y())
        });

        if let Some(outcome) = outcome {
            if let Some(message) = outcome.message {
                println!("{}", message);
            }
            if outcome.changed_from(before) {
                info!(from = ?before, to = ?outcome.state, "game_over");
            }
        }

        render_frame(&mut canvas, &textures, &catalog, session.state(), options)?;
        limiter.wait();
    }

    info!(final_state = ?session.state(), "shutdown");
    Ok(())
}
