use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::config::Config;
use crate::error::{Error, Result};

pub type Context = WindowedContext<PossiblyCurrent>;

/// Opens the window, makes its GL 3.3 core context current and loads the GL functions.
pub fn create(config: &Config, event_loop: &EventLoop<()>) -> Result<(Context, glow::Context)> {
    let wb = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(PhysicalSize::new(config.dims.width, config.dims.height))
        .with_resizable(false)
        .with_visible(false);

    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(config.vsync)
        .build_windowed(wb, event_loop)
        .map_err(|err| Error::Context(err.to_string()))?;

    let context = unsafe { context.make_current() }
        .map_err(|(_, err)| Error::Context(err.to_string()))?;

    let gl = unsafe {
        glow::Context::from_loader_function(|s| context.get_proc_address(s) as *const _)
    };

    let window = context.window();
    if let Some(monitor) = window.primary_monitor() {
        let position = center(monitor.position(), monitor.size(), window.outer_size());
        window.set_outer_position(position);
    } else {
        log::warn!("no primary monitor, leaving window where the platform put it");
    }
    window.set_visible(true);

    Ok((context, gl))
}

fn center(
    origin: PhysicalPosition<i32>,
    monitor: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    PhysicalPosition::new(
        origin.x + (monitor.width as i32 - window.width as i32) / 2,
        origin.y + (monitor.height as i32 - window.height as i32) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_on_the_monitor() {
        let pos = center(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(pos, PhysicalPosition::new(560, 240));
    }

    #[test]
    fn offsets_by_the_monitor_origin() {
        let pos = center(
            PhysicalPosition::new(1920, -200),
            PhysicalSize::new(1280, 1024),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(pos, PhysicalPosition::new(2160, 12));
    }

    #[test]
    fn oversized_window_goes_negative() {
        let pos = center(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(640, 480),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(pos, PhysicalPosition::new(-80, -60));
    }
}
