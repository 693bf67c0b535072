/// Command-line configuration for the terminal demo
use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: tiro-terminal [OPTIONS] [MODEL.obj]

Renders MODEL.obj (or a cube when omitted) with a first-person fly camera.

Options:
  --fps <N>       Target frame rate (1-240, default 30)
  --free-pitch    Do not clamp the camera pitch to +/-89 degrees
  -h, --help      Print this help

Controls:
  W/A/S/D move, Space/C up/down, arrows or mouse look, wheel or +/- zoom,
  P toggle pitch clamp, O toggle orthographic, Q/Esc quit";

const MAX_FPS: u32 = 240;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid frame rate '{0}', expected a number between 1 and 240")]
    InvalidFps(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}', only one model path is accepted")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model_path: Option<PathBuf>,
    pub target_fps: u32,
    pub constrain_pitch: bool,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: None,
            target_fps: 30,
            constrain_pitch: true,
            show_help: false,
        }
    }
}

impl Config {
    /// Parse arguments, not including the program name
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "--free-pitch" => config.constrain_pitch = false,
                "--fps" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.target_fps = match value.parse::<u32>() {
                        Ok(fps) if (1..=MAX_FPS).contains(&fps) => fps,
                        _ => return Err(ConfigError::InvalidFps(value)),
                    };
                }
                option if option.starts_with('-') => {
                    return Err(ConfigError::UnknownOption(arg));
                }
                _ if config.model_path.is_some() => {
                    return Err(ConfigError::UnexpectedArgument(arg));
                }
                _ => config.model_path = Some(PathBuf::from(arg)),
            }
        }

        Ok(config)
    }
}
