use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::Config;
use crate::game::{Game, StepOutcome};
use crate::render::Renderer;

/// Create the window and framebuffer, then run the fixed-delay loop:
/// poll input, step the simulation once per tick interval, render.
/// Only returns through `ControlFlow::Exit` (process shutdown).
pub fn run(config: Config) -> Result<()> {
    let tick_interval = Duration::from_millis(config.tick_ms);
    let mut last_update = Instant::now();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Snake")
        .with_inner_size(LogicalSize::new(
            config.window_width(),
            config.window_height(),
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    let surface = SurfaceTexture::new(config.window_width(), config.window_height(), &window);
    let mut pixels = Pixels::new(config.window_width(), config.window_height(), surface)?;

    let renderer = Renderer::new(&config);
    let mut game = Game::new(&config);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::RedrawRequested(_) => {
                if !game.paused() && last_update.elapsed() >= tick_interval {
                    if let StepOutcome::Terminal = game.step(&mut rand::thread_rng()) {
                        info!("game over, score {}", game.score());
                        game.enter_game_over();
                    }
                    last_update = Instant::now();
                }
                renderer.draw(pixels.frame_mut(), &game);
                if pixels.render().is_err() {
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("window closed, shutting down");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        if let Some(key) = input.virtual_keycode {
                            handle_key(key, &mut game, control_flow, &mut last_update);
                        }
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => {
                window.request_redraw();
            }
            _ => {}
        }
    })
}

fn handle_key(
    key: VirtualKeyCode,
    game: &mut Game,
    control_flow: &mut ControlFlow,
    last_update: &mut Instant,
) {
    match key {
        VirtualKeyCode::Escape => {
            info!("quit requested");
            *control_flow = ControlFlow::Exit;
        }
        VirtualKeyCode::Return => {
            if game.paused() {
                info!("new game");
                game.resume();
                *last_update = Instant::now();
            }
        }
        _ => {
            if let Some(dir) = Game::key_to_direction(key) {
                game.set_direction(dir);
            }
        }
    }
}
