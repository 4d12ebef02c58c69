use glow::HasContext;
use std::rc::Rc;

use super::buffer::Buffer;
use super::vertex::Vertex;
use crate::error::{Error, Result};

/// A vertex array recording one interleaved vertex buffer and one element buffer.
pub struct Mesh<C: HasContext> {
    gl: Rc<C>,
    vao: C::VertexArray,
    // drop order: the VAO is deleted before the buffers it references
    pub vertices: Buffer<C, Vertex>,
    pub indices: Buffer<C, u32>,
}

impl<C: HasContext> Mesh<C> {
    pub fn new(gl: &Rc<C>, vertices: &[Vertex], indices: &[u32]) -> Result<Self> {
        let vao = unsafe {
            let vao = gl.create_vertex_array().map_err(Error::Buffer)?;
            gl.bind_vertex_array(Some(vao));
            vao
        };

        let vertices = Buffer::new(gl, glow::ARRAY_BUFFER, vertices)?;
        let indices = Buffer::new(gl, glow::ELEMENT_ARRAY_BUFFER, indices)?;

        unsafe {
            // reads the buffer bound to ARRAY_BUFFER and stores it in the VAO
            for attribute in Vertex::ATTRIBUTES.iter() {
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    Vertex::STRIDE,
                    attribute.offset,
                );
                gl.enable_vertex_attrib_array(attribute.location);
            }

            // unbind the VAO first so it keeps its element buffer
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }

        log::debug!(
            "mesh {:?}: {} vertices, {} indices",
            vao,
            vertices.len,
            indices.len
        );

        Ok(Mesh {
            gl: Rc::clone(gl),
            vao,
            vertices,
            indices,
        })
    }

    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_elements(
                glow::TRIANGLES,
                self.indices.len as i32,
                glow::UNSIGNED_INT,
                0,
            );
        }
    }
}

impl<C: HasContext> Drop for Mesh<C> {
    fn drop(&mut self) {
        unsafe {
            self.gl.bind_vertex_array(None);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
