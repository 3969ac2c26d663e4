use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest cell size accepted regardless of configuration.
pub const ABSOLUTE_MIN_CELL_SIZE: i32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Logical surface units per cell.
    pub cell_size: i32,
    pub min_cell_size: i32,
    /// Logical units left empty on every side of the surface.
    pub margin: i32,
    /// Wall insertion trials per cell on each regeneration.
    pub wall_attempts_per_cell: f64,
    /// Fixed generator seed. Seeded from the OS when absent.
    pub seed: Option<u64>,
    /// Grid size used by the non interactive modes.
    pub size: Option<(i32, i32)>,
    pub log_path: PathBuf,
    pub export_path: PathBuf,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            cell_size: 2,
            min_cell_size: 2,
            margin: 0,
            wall_attempts_per_cell: 1.0,
            seed: None,
            size: None,
            log_path: PathBuf::from("exports/maze.log"),
            export_path: PathBuf::from("exports/maze.json"),
        }
    }
}

impl MazeConfig {
    pub fn load(path: &Path) -> Result<MazeConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<MazeConfig, ConfigError> {
        let config: MazeConfig = serde_json::from_str(text)?;
        config.validated()
    }

    pub fn min_cell_size(&self) -> i32 {
        self.min_cell_size.max(ABSOLUTE_MIN_CELL_SIZE)
    }

    pub fn wall_attempts(&self, width: i32, height: i32) -> usize {
        let cells = crate::core::default_wall_attempts(width, height) as f64;
        (cells * self.wall_attempts_per_cell).round() as usize
    }

    fn validated(self) -> Result<MazeConfig, ConfigError> {
        if !(self.wall_attempts_per_cell >= 0.0) {
            return Err(ConfigError::InvalidArgument(format!(
                "wall_attempts_per_cell must be non-negative, got {}",
                self.wall_attempts_per_cell
            )));
        }
        if self.margin < 0 {
            return Err(ConfigError::InvalidArgument(format!("margin must be non-negative, got {}", self.margin)));
        }
        if let Some((width, height)) = self.size {
            if width <= 0 || height <= 0 {
                return Err(ConfigError::InvalidArgument(format!("size must be positive, got {}x{}", width, height)));
            }
        }
        Ok(self)
    }
}

/// How the binary was asked to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Print,
    Export,
}

/// Reads `[mode] [--config <path>] [--seed <n>] [--size <W>x<H>]`.
///
/// Flags given on the command line override the config file.
pub fn parse_args<I>(args: I) -> Result<(RunMode, MazeConfig), ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut mode = RunMode::Interactive;
    let mut config_path = None;
    let mut seed = None;
    let mut size = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "interactive" => mode = RunMode::Interactive,
            "print" => mode = RunMode::Print,
            "export" => mode = RunMode::Export,
            "--config" => config_path = Some(PathBuf::from(flag_value(&mut args, "--config")?)),
            "--seed" => {
                let value = flag_value(&mut args, "--seed")?;
                seed = Some(value.parse::<u64>().map_err(|_| {
                    ConfigError::InvalidArgument(format!("--seed expects an integer, got {}", value))
                })?);
            }
            "--size" => size = Some(parse_size(&flag_value(&mut args, "--size")?)?),
            other => {
                return Err(ConfigError::InvalidArgument(format!(
                    "unknown argument {}. Use 'interactive', 'print' or 'export'",
                    other
                )));
            }
        }
    }

    let mut config = match config_path {
        Some(path) => MazeConfig::load(&path)?,
        None => MazeConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if size.is_some() {
        config.size = size;
    }
    Ok((mode, config.validated()?))
}

fn flag_value<I>(args: &mut I, flag: &str) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ConfigError::InvalidArgument(format!("{} expects a value", flag)))
}

fn parse_size(value: &str) -> Result<(i32, i32), ConfigError> {
    let invalid = || ConfigError::InvalidArgument(format!("--size expects <W>x<H>, got {}", value));
    let (width, height) = value.split_once('x').ok_or_else(invalid)?;
    let width = width.trim().parse::<i32>().map_err(|_| invalid())?;
    let height = height.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok((width, height))
}
