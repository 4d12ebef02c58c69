use glow::HasContext;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A GL buffer object filled once with `STATIC_DRAW` data.
pub struct Buffer<C: HasContext, T> {
    gl: Rc<C>,
    pub buf: C::Buffer,
    pub len: usize,
    _content: PhantomData<T>,
}

impl<C: HasContext, T: bytemuck::Pod> Buffer<C, T> {
    /// Creates the buffer and uploads `content`. The buffer stays bound to `target`.
    pub fn new(gl: &Rc<C>, target: u32, content: &[T]) -> Result<Self> {
        assert_ne!(content.len(), 0);
        let bytes: &[u8] = bytemuck::cast_slice(content);

        let buf = unsafe {
            let buf = gl.create_buffer().map_err(Error::Buffer)?;
            gl.bind_buffer(target, Some(buf));
            gl.buffer_data_u8_slice(target, bytes, glow::STATIC_DRAW);
            buf
        };
        log::debug!(
            "uploaded {} bytes to buffer {:?} (target {:#x})",
            bytes.len(),
            buf,
            target
        );

        Ok(Buffer {
            gl: Rc::clone(gl),
            buf,
            len: content.len(),
            _content: PhantomData,
        })
    }
}

impl<C: HasContext, T> Drop for Buffer<C, T> {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.buf) }
    }
}
