use std::env;
use std::path::PathBuf;

/// Overrides the directory `*.glsl` shader sources are read from.
pub const RESOURCES_VAR: &str = "GL_QUAD_RESOURCES";
/// Set to `0` or `false` to disable vsync.
pub const VSYNC_VAR: &str = "GL_QUAD_VSYNC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

pub const DIMS: Extent2D = Extent2D {
    width: 800,
    height: 600,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub dims: Extent2D,
    pub vsync: bool,
    pub resources: PathBuf,
    pub clear_color: [f32; 4],
    pub render_color: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "The Goal".to_owned(),
            dims: DIMS,
            vsync: true,
            resources: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/src/data")),
            clear_color: [0.0, 0.0, 0.0, 0.0],
            render_color: [0.5, 0.5, 0.5, 1.0],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_overrides(
            env::var_os(RESOURCES_VAR).map(PathBuf::from),
            env::var(VSYNC_VAR).ok(),
        )
    }

    fn with_overrides(resources: Option<PathBuf>, vsync: Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(dir) = resources {
            config.resources = dir;
        }
        if let Some(value) = vsync {
            config.vsync = parse_flag(&value).unwrap_or_else(|| {
                log::warn!("ignoring {}={:?}, expected a boolean", VSYNC_VAR, value);
                config.vsync
            });
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
