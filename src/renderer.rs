use glam::Mat4;
use glow::HasContext;
use std::rc::Rc;

mod buffer;
mod mesh;
mod program;
mod shader;
mod vertex;

use crate::config::Config;
use crate::error::Result;
use mesh::Mesh;
use program::ShaderProgram;
use shader::{Shader, ShaderType};
use vertex::{INDICES, QUAD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Fill,
    Line,
}

impl FillMode {
    pub fn toggled(self) -> Self {
        match self {
            FillMode::Fill => FillMode::Line,
            FillMode::Line => FillMode::Fill,
        }
    }

    pub fn gl_enum(self) -> u32 {
        match self {
            FillMode::Fill => glow::FILL,
            FillMode::Line => glow::LINE,
        }
    }
}

pub struct Renderer<C: HasContext> {
    frame: usize,
    fill_mode: FillMode,
    fps_counter: fps_counter::FPSCounter,
    mesh: Mesh<C>,
    program: ShaderProgram<C>,
    gl: Rc<C>,
}

impl<C> Renderer<C>
where
    C: HasContext,
{
    pub fn new(gl: C, config: &Config) -> Result<Self> {
        let gl = Rc::new(gl);

        let mesh = Mesh::new(&gl, &QUAD, &INDICES)?;

        let program = {
            let vertex = Shader::load(
                &gl,
                &config.resources,
                ShaderType::Vertex.file_stem(),
                ShaderType::Vertex,
            )?;
            let fragment = Shader::load(
                &gl,
                &config.resources,
                ShaderType::Fragment.file_stem(),
                ShaderType::Fragment,
            )?;
            // shaders are deleted at the end of this block, the program keeps them alive
            ShaderProgram::link(&gl, &vertex, &fragment)?
        };

        program.activate();
        program.set_vec4("renderColor", config.render_color);
        program.set_mat4("transform", &Mat4::IDENTITY);

        let [r, g, b, a] = config.clear_color;
        unsafe { gl.clear_color(r, g, b, a) };

        Ok(Renderer {
            frame: 0,
            fill_mode: FillMode::Fill,
            fps_counter: fps_counter::FPSCounter::new(),
            mesh,
            program,
            gl,
        })
    }

    pub fn render(&mut self) {
        unsafe {
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        self.program.activate();
        self.mesh.draw();

        self.frame += 1;
        log::trace!("frame {}: {} fps", self.frame, self.fps_counter.tick());
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) }
    }

    pub fn toggle_wireframe(&mut self) -> FillMode {
        self.fill_mode = self.fill_mode.toggled();
        unsafe {
            self.gl
                .polygon_mode(glow::FRONT_AND_BACK, self.fill_mode.gl_enum());
        }
        log::debug!("polygon mode: {:?}", self.fill_mode);
        self.fill_mode
    }
}

impl<C: HasContext> Drop for Renderer<C> {
    fn drop(&mut self) {
        unsafe { self.gl.use_program(None) }
        log::info!("released gpu objects after {} frames", self.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_mode_toggles_back_and_forth() {
        let mode = FillMode::Fill;
        assert_eq!(mode.toggled(), FillMode::Line);
        assert_eq!(mode.toggled().toggled(), FillMode::Fill);
    }

    #[test]
    fn fill_mode_gl_enums() {
        assert_eq!(FillMode::Fill.gl_enum(), glow::FILL);
        assert_eq!(FillMode::Line.gl_enum(), glow::LINE);
        assert_ne!(FillMode::Fill.gl_enum(), FillMode::Line.gl_enum());
    }
}
