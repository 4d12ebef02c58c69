use glam::Mat4;
use glow::HasContext;
use std::rc::Rc;

use super::shader::{Shader, ShaderType};
use crate::error::{Error, Result};

/// A vertex and a fragment shader linked together.
pub struct ShaderProgram<C: HasContext> {
    gl: Rc<C>,
    pub program: C::Program,
}

impl<C: HasContext> ShaderProgram<C> {
    pub fn link(gl: &Rc<C>, vertex: &Shader<C>, fragment: &Shader<C>) -> Result<Self> {
        debug_assert_eq!(vertex.ty, ShaderType::Vertex);
        debug_assert_eq!(fragment.ty, ShaderType::Fragment);

        let program = unsafe { gl.create_program() }.map_err(Error::ProgramCreate)?;
        let program = ShaderProgram {
            gl: Rc::clone(gl),
            program,
        };

        unsafe {
            gl.attach_shader(program.program, vertex.shader);
            gl.attach_shader(program.program, fragment.shader);
            gl.link_program(program.program);

            if !gl.get_program_link_status(program.program) {
                return Err(Error::ProgramLink {
                    log: gl.get_program_info_log(program.program),
                });
            }

            gl.detach_shader(program.program, vertex.shader);
            gl.detach_shader(program.program, fragment.shader);
        }

        log::info!("linked `{}` + `{}`", vertex.name, fragment.name);
        Ok(program)
    }

    pub fn activate(&self) {
        unsafe { self.gl.use_program(Some(self.program)) }
    }

    /// Needs the program to be active.
    pub fn set_vec4(&self, name: &str, v: [f32; 4]) {
        if let Some(location) = self.uniform_location(name) {
            unsafe {
                self.gl
                    .uniform_4_f32(Some(&location), v[0], v[1], v[2], v[3])
            }
        }
    }

    /// Needs the program to be active.
    pub fn set_mat4(&self, name: &str, matrix: &Mat4) {
        if let Some(location) = self.uniform_location(name) {
            unsafe {
                self.gl
                    .uniform_matrix_4_f32_slice(Some(&location), false, &matrix.to_cols_array())
            }
        }
    }

    fn uniform_location(&self, name: &str) -> Option<C::UniformLocation> {
        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        if location.is_none() {
            log::warn!("uniform `{}` is not active in the program", name);
        }
        location
    }
}

impl<C: HasContext> Drop for ShaderProgram<C> {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) }
    }
}
