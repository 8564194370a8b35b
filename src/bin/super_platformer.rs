//! Side-scrolling platformer demo.
//!
//! Three screens of world behind a clamped follow camera, a bonus block
//! that grants the one-shot grow power-up, and the shrink-plus-
//! invincibility damage model.

use macroquad::prelude::*;

use pocket_arcade::game::level;
use pocket_arcade::{input, render, FrameInput, Ruleset, World, TICK_DT};

fn window_conf() -> Conf {
    Conf {
        window_title: "Scrolling Platformer Simulation".to_string(),
        window_width: pocket_arcade::SCREEN_WIDTH as i32,
        window_height: pocket_arcade::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let level = match level::long_meadow() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Embedded level is broken: {}", e);
            return;
        }
    };
    let mut world = World::new(level, Ruleset::power_up());
    let mut accumulator = 0.0f32;

    loop {
        if input::exit_requested() {
            break;
        }

        accumulator += get_frame_time().min(0.25);
        while accumulator >= TICK_DT {
            world.step(&FrameInput::sample());
            accumulator -= TICK_DT;
        }

        render::draw_world(&world);
        next_frame().await;
    }
}
