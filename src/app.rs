use std::time::Instant;

use anyhow::Context;
use log::info;
use sdl2::{pixels::Color, rect::Rect};
use thiserror::Error;

use c8vm::{Interpreter, DISPLAY_HEIGHT, DISPLAY_WIDTH};

use super::keymap::{self, Action};

const MICROS_PER_SECOND: u128 = 1_000_000;

#[derive(Error, Debug)]
enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),
}

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Sdl(s)
    }
}

enum AppState {
    Running,
    Paused,
    Quit,
}

/// Host options taken from the command line.
pub struct Settings {
    /// cycles per second
    pub speed: u32,
    /// window pixels per chip-8 pixel
    pub scale: u32,
}

/// Main application loop
pub fn run(mut emu: Interpreter, settings: Settings) -> Result<(), anyhow::Error> {
    let cycle_delay = MICROS_PER_SECOND / settings.speed.max(1) as u128;
    let zoom = settings.scale.max(1);

    // initialize SDL context and subsystems
    let sdl_context = sdl2::init()
        .map_err(AppError::from)
        .context("failed to initialize SDL context")?;
    let sdl_video = sdl_context
        .video()
        .map_err(AppError::from)
        .context("failed to initialize video subsystem")?;

    // build the window
    let window = sdl_video
        .window(
            "c8vm",
            DISPLAY_WIDTH as u32 * zoom,
            DISPLAY_HEIGHT as u32 * zoom,
        )
        .position_centered()
        .build()
        .context("error creating window")?;

    // get the drawing canvas
    let mut canvas = window
        .into_canvas()
        .build()
        .context("error creating window canvas")?;

    // get the event pump
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(AppError::from)
        .context("error obtaining the event pump")?;

    info!(
        "Running [speed: {} Hz, scale: {}]",
        settings.speed, settings.scale
    );

    let mut state = AppState::Running;
    let mut previous = Instant::now();
    let mut cpu_delta = 0;

    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(previous).as_micros();
        previous = now;

        // process input events
        for event in event_pump.poll_iter() {
            match keymap::translate_action(&event) {
                Some(Action::KeyState(key, pressed)) => emu.set_key(key, pressed),
                Some(Action::TogglePause) => {
                    state = match state {
                        AppState::Running => AppState::Paused,
                        AppState::Paused => AppState::Running,
                        AppState::Quit => AppState::Quit,
                    };
                    cpu_delta = 0;
                }
                Some(Action::Quit) => state = AppState::Quit,
                None => {}
            }
        }

        match state {
            // Only update the machine when it is running
            AppState::Running => {
                cpu_delta += elapsed;
                while cpu_delta >= cycle_delay {
                    emu.step().context("emulation stopped")?;
                    cpu_delta -= cycle_delay;
                }
            }
            AppState::Paused => {}
            AppState::Quit => break,
        }

        // draw a frame
        // this always happens, regardless of the machine state
        canvas.set_draw_color(Color::RGB(0x00, 0x00, 0x00));
        canvas.clear();

        canvas.set_draw_color(Color::RGB(0xFF, 0xFF, 0xFF));
        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                if emu.pixel(x, y) {
                    let rect = Rect::new(
                        x as i32 * zoom as i32,
                        y as i32 * zoom as i32,
                        zoom,
                        zoom,
                    );
                    canvas
                        .fill_rect(rect)
                        .map_err(AppError::from)
                        .context("error drawing to canvas")?;
                }
            }
        }
        canvas.present();
    }

    Ok(())
}
