use glow::HasContext;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result};

pub const EXTENSION: &str = "glsl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderType::Vertex => glow::VERTEX_SHADER,
            ShaderType::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Base name of the source file under the resource directory.
    pub fn file_stem(self) -> &'static str {
        match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
        }
    }
}

pub fn source_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name).with_extension(EXTENSION)
}

pub fn read_source(dir: &Path, name: &str) -> Result<String> {
    let path = source_path(dir, name);
    read_to_string(&path).map_err(|source| Error::ShaderSource { path, source })
}

pub struct Shader<C: HasContext> {
    gl: Rc<C>,
    pub shader: C::Shader,
    pub name: String,
    pub ty: ShaderType,
}

impl<C: HasContext> Shader<C> {
    pub fn load(gl: &Rc<C>, dir: &Path, name: &str, ty: ShaderType) -> Result<Self> {
        let code = read_source(dir, name)?;
        Self::compile(gl, name, ty, &code)
    }

    pub fn compile(gl: &Rc<C>, name: &str, ty: ShaderType, code: &str) -> Result<Self> {
        let shader = unsafe { gl.create_shader(ty.gl_enum()) }.map_err(Error::ShaderCreate)?;
        // owned from here on so a failed compile still deletes the object
        let shader = Shader {
            gl: Rc::clone(gl),
            shader,
            name: name.to_owned(),
            ty,
        };

        unsafe {
            gl.shader_source(shader.shader, code);
            gl.compile_shader(shader.shader);
            if !gl.get_shader_compile_status(shader.shader) {
                return Err(Error::ShaderCompile {
                    name: shader.name.clone(),
                    log: gl.get_shader_info_log(shader.shader),
                });
            }
        }

        log::info!("compiled {:?} shader `{}`", ty, name);
        Ok(shader)
    }
}

impl<C: HasContext> Drop for Shader<C> {
    fn drop(&mut self) {
        log::debug!("deleting shader `{}`", self.name);
        unsafe { self.gl.delete_shader(self.shader) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn gl_enum_values() {
        assert_eq!(ShaderType::Vertex.gl_enum(), 35633);
        assert_eq!(ShaderType::Fragment.gl_enum(), 35632);
    }

    #[test]
    fn source_path_appends_extension() {
        assert_eq!(
            source_path(Path::new("res"), "vertex"),
            PathBuf::from("res/vertex.glsl")
        );
    }

    #[test]
    fn bundled_sources_are_readable() {
        let dir = Config::default().resources;
        for ty in [ShaderType::Vertex, ShaderType::Fragment].iter() {
            let code = read_source(&dir, ty.file_stem()).unwrap();
            assert!(code.starts_with("#version 330 core"));
        }
    }

    #[test]
    fn missing_source_reports_path() {
        let dir = Config::default().resources;
        match read_source(&dir, "geometry") {
            Err(Error::ShaderSource { path, source }) => {
                assert!(path.ends_with("geometry.glsl"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected a source error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn uniforms_used_by_the_renderer_are_declared() {
        let dir = Config::default().resources;
        let vertex = read_source(&dir, "vertex").unwrap();
        let fragment = read_source(&dir, "fragment").unwrap();
        assert!(vertex.contains("uniform mat4 transform;"));
        assert!(fragment.contains("uniform vec4 renderColor;"));
    }
}
