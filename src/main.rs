mod config;
mod error;
mod renderer;
mod window;

use config::Config;
use error::Result;
use renderer::{FillMode, Renderer};

use glow::HasContext;
use std::process;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

/// Turns key presses into one-shot triggers, ignoring auto-repeat while the key is held.
#[derive(Debug, Default)]
struct KeyLatch {
    held: bool,
}

impl KeyLatch {
    fn update(&mut self, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        let triggered = pressed && !self.held;
        self.held = pressed;
        triggered
    }
}

fn main() {
    env_logger::init();
    let config = Config::from_env();

    if let Err(err) = run(config) {
        log::error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::new();
    let (context, gl) = window::create(&config, &event_loop)?;

    log::info!("OpenGL {}", unsafe { gl.get_parameter_string(glow::VERSION) });

    let mut renderer = Some(Renderer::new(gl, &config)?);
    let mut space = KeyLatch::default();

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                ..
            } => {
                log::info!("closed");
                *control_flow = ControlFlow::Exit;
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(VirtualKeyCode::Space),
                        ..
                    },
                ..
            } => {
                if space.update(state) {
                    if let Some(renderer) = renderer.as_mut() {
                        let mode = renderer.toggle_wireframe();
                        log::info!("wireframe {}", mode == FillMode::Line);
                    }
                }
            }
            WindowEvent::Resized(size) => {
                context.resize(size);
                if let Some(renderer) = renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            _ => {}
        },
        Event::MainEventsCleared => context.window().request_redraw(),
        Event::RedrawRequested(_) => {
            if let Some(renderer) = renderer.as_mut() {
                renderer.render();
                if let Err(err) = context.swap_buffers() {
                    log::error!("failed to swap buffers: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
        }
        Event::LoopDestroyed => {
            // the context is still current here, release GPU objects before it goes away
            renderer.take();
        }
        _ => {}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_triggers_once_per_press() {
        let mut latch = KeyLatch::default();
        assert!(latch.update(ElementState::Pressed));
        // auto-repeat
        assert!(!latch.update(ElementState::Pressed));
        assert!(!latch.update(ElementState::Released));
        assert!(latch.update(ElementState::Pressed));
    }

    #[test]
    fn release_alone_does_nothing() {
        let mut latch = KeyLatch::default();
        assert!(!latch.update(ElementState::Released));
    }
}
