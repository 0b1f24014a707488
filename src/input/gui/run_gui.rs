use std::error::Error;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use log::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow as LoopControl, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

use crate::controllers::config::ExplorerConfig;
use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::render_context::RenderContext;
use crate::input::gui::key_bindings::explorer_key;
use crate::input::keyboard::HeldKeys;
use crate::presenters::pixels::presenter::PixelsSink;

pub const TICKS_PER_SECOND: u32 = 30;

pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs until Escape or the window is closed.
    /// Each tick applies the held keys, renders one frame and presents it.
    pub fn execute(self) -> Result<(), Box<dyn Error>> {
        let mut context = RenderContext::new(self.config)?;
        let frame_size = self.config.frame_size;

        let event_loop = EventLoop::new()?;
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Viewer")
                .with_inner_size(LogicalSize::new(
                    frame_size.width() as f64,
                    frame_size.height() as f64,
                ))
                .build(&event_loop)?,
        ));

        let mut sink = PixelsSink::new(window, frame_size)?;
        let mut held_keys = HeldKeys::default();
        let tick = Duration::from_secs(1) / TICKS_PER_SECOND;
        let mut next_tick = Instant::now();

        info!(
            "viewer started: {}x{} {} at {} ticks per second",
            frame_size.width(),
            frame_size.height(),
            self.config.fractal_kind,
            TICKS_PER_SECOND
        );

        event_loop.run(move |event, elwt| match event {
            Event::NewEvents(StartCause::Init)
            | Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                for command in held_keys.commands() {
                    if context.apply(command) == ControlFlow::Break(()) {
                        elwt.exit();
                        return;
                    }
                }

                context.render_frame();
                window.set_title(&format!("Fractal Viewer | {}", context.status_line()));
                window.request_redraw();

                next_tick += tick;
                let now = Instant::now();
                if next_tick < now {
                    next_tick = now;
                }
                elwt.set_control_flow(LoopControl::WaitUntil(next_tick));
            }
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Focused(false) => held_keys.release_all(),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key_code),
                            state,
                            ..
                        },
                    ..
                } => {
                    if let Some(key) = explorer_key(key_code) {
                        held_keys.handle_key(key, state == ElementState::Pressed);
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = sink.resize_surface(size.width, size.height) {
                        error!("{}", err);
                        elwt.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = sink.present(context.frame()) {
                        error!("{}", err);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            _ => {}
        })?;

        Ok(())
    }
}
