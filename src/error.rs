use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create window or context: {0}")]
    Context(String),

    #[error("failed to read shader {}: {source}", path.display())]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create shader object: {0}")]
    ShaderCreate(String),

    #[error("failed to compile shader `{name}`:\n{log}")]
    ShaderCompile { name: String, log: String },

    #[error("failed to create shader program: {0}")]
    ProgramCreate(String),

    #[error("failed to link shader program:\n{log}")]
    ProgramLink { log: String },

    #[error("failed to create gpu buffer: {0}")]
    Buffer(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_source_error_names_the_path() {
        let err = Error::ShaderSource {
            path: PathBuf::from("src/data/missing.glsl"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/data/missing.glsl"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn compile_error_carries_the_info_log() {
        let err = Error::ShaderCompile {
            name: "vertex".to_owned(),
            log: "0:3(1): error: syntax error".to_owned(),
        };
        assert!(err.to_string().ends_with("0:3(1): error: syntax error"));
    }
}
