//! Trophy viewer: a floating feather trophy with descriptive text.
//!
//! Left/right arrows spin the trophy, escape quits. The animation runs
//! on the shared 60 Hz fixed timestep even though nothing here collides.

use macroquad::prelude::*;

use pocket_arcade::trophy::{self, TrophyAnimation};
use pocket_arcade::{input, text, FrameInput, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_DT};

const BACKGROUND: Color = Color::new(0.078, 0.078, 0.157, 1.0);
const TEXT_COLOR: Color = Color::new(0.902, 0.902, 1.0, 1.0);
const TITLE_COLOR: Color = Color::new(1.0, 1.0, 0.392, 1.0);

const TROPHY_TITLE: &str = "Cape Feather";
const TROPHY_DESCRIPTION: &str = "This mystical feather first appeared in Super Mario World. \
    Grabbing it would transform Mario into Cape Mario, allowing him to fly for sustained \
    periods and perform a spinning cape attack. A well-timed flick of the cape can reflect \
    projectiles and spin opponents right around!";
const TROPHY_GAME: &str = "Appears in: Super Mario World";
const ROTATION_INSTRUCTION: &str = "(Use Left/Right Arrows to Rotate)";

fn window_conf() -> Conf {
    Conf {
        window_title: "Trophy Viewer: Cape Feather".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let font = text::load_display_font("assets/fonts/display.ttf").await;
    let mut anim = TrophyAnimation::new();
    let mut accumulator = 0.0f32;

    loop {
        if input::exit_requested() {
            break;
        }

        accumulator += get_frame_time().min(0.25);
        while accumulator >= TICK_DT {
            let keys = FrameInput::sample();
            anim.tick(keys.left, keys.right);
            accumulator -= TICK_DT;
        }

        clear_background(BACKGROUND);
        trophy::draw_feather(
            SCREEN_WIDTH * 0.25,
            SCREEN_HEIGHT / 2.0 + anim.bob_offset(),
            anim.x_scale(),
        );

        let text_x = SCREEN_WIDTH * 0.5;
        let max_width = SCREEN_WIDTH * 0.45;
        text::draw_label(TROPHY_TITLE, text_x, SCREEN_HEIGHT * 0.1, 28, TITLE_COLOR, font.as_ref());
        text::draw_wrapped(
            TROPHY_DESCRIPTION,
            text_x,
            SCREEN_HEIGHT * 0.25,
            max_width,
            18,
            TEXT_COLOR,
            font.as_ref(),
        );
        text::draw_label(TROPHY_GAME, text_x, SCREEN_HEIGHT * 0.82, 18, TITLE_COLOR, font.as_ref());
        text::draw_label(
            ROTATION_INSTRUCTION,
            text_x,
            SCREEN_HEIGHT * 0.9,
            16,
            TITLE_COLOR,
            font.as_ref(),
        );

        next_frame().await;
    }
}
