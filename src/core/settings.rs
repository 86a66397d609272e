// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};
use crate::sensors::perspective::PerspectiveCamera;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

#[derive(Debug)]
pub enum SettingsError {
    ParseInt(ParseIntError),
    ParseFloat(ParseFloatError),
    MissingValue(String),
    UnknownFlag(String),
    Invalid(String),
}

impl From<ParseIntError> for SettingsError {
    fn from(err: ParseIntError) -> Self {
        SettingsError::ParseInt(err)
    }
}

impl From<ParseFloatError> for SettingsError {
    fn from(err: ParseFloatError) -> Self {
        SettingsError::ParseFloat(err)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::ParseInt(e) => write!(f, "invalid integer: {}", e),
            SettingsError::ParseFloat(e) => write!(f, "invalid number: {}", e),
            SettingsError::MissingValue(flag) => write!(f, "missing value for {}", flag),
            SettingsError::UnknownFlag(flag) => write!(f, "unknown flag {}", flag),
            SettingsError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

pub const USAGE: &str = "[output.exr] [--width N] [--height N] [--frames N] [--fov DEG] \
                         [--camera X,Y,Z] [--target X,Y,Z] [--threads N] [--png PATH]";

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub frames: u32,
    /// Vertical field of view in degrees.
    pub fov_y: Float,
    pub camera_position: Vector3f,
    pub camera_target: Vector3f,
    pub output_path: String,
    pub png_path: Option<String>,
    pub threads: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            frames: 16,
            fov_y: 45.0,
            camera_position: Vector3f::new(0.0, 0.0, 3.0),
            camera_target: Vector3f::new(0.0, 0.0, -3.0),
            output_path: String::from("render.exr"),
            png_path: None,
            threads: None,
        }
    }
}

fn parse_vector(value: &str) -> Result<Vector3f, SettingsError> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(SettingsError::Invalid(format!("expected x,y,z but got '{}'", value)));
    }
    let x = parts[0].trim().parse::<Float>()?;
    let y = parts[1].trim().parse::<Float>()?;
    let z = parts[2].trim().parse::<Float>()?;
    Ok(Vector3f::new(x, y, z))
}

impl RenderSettings {
    /// Parses command-line arguments, excluding the program name.
    pub fn parse_args(args: &[String]) -> Result<Self, SettingsError> {
        let mut settings = RenderSettings::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if !flag.starts_with("--") {
                settings.output_path = args[i].clone();
                i += 1;
                continue;
            }

            i += 1;
            let value = args.get(i)
                .map(|v| v.as_str())
                .ok_or_else(|| SettingsError::MissingValue(flag.to_string()))?;
            match flag {
                "--width" => settings.width = value.parse::<usize>()?,
                "--height" => settings.height = value.parse::<usize>()?,
                "--frames" => settings.frames = value.parse::<u32>()?,
                "--fov" => settings.fov_y = value.parse::<Float>()?,
                "--camera" => settings.camera_position = parse_vector(value)?,
                "--target" => settings.camera_target = parse_vector(value)?,
                "--threads" => settings.threads = Some(value.parse::<usize>()?),
                "--png" => settings.png_path = Some(value.to_string()),
                _ => return Err(SettingsError::UnknownFlag(flag.to_string())),
            }
            i += 1;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(
                format!("image size must be positive, got {}x{}", self.width, self.height)));
        }
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return Err(SettingsError::Invalid(format!("fov must be in (0, 180), got {}", self.fov_y)));
        }
        let forward = self.camera_target - self.camera_position;
        if forward.norm() == 0.0 {
            return Err(SettingsError::Invalid(String::from("camera and target coincide")));
        }
        if self.threads == Some(0) {
            return Err(SettingsError::Invalid(String::from("thread count must be positive")));
        }
        Ok(())
    }

    pub fn aspect(&self) -> Float {
        self.width as Float / self.height as Float
    }

    pub fn camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::look_at(self.camera_position,
                                   self.camera_target,
                                   Vector3f::new(0.0, 1.0, 0.0),
                                   self.fov_y.to_radians(),
                                   self.aspect())
    }
}
