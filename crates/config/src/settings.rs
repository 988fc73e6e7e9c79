// Run settings
// Loaded from ./leetsheet.toml, falling back to ~/.config/leetsheet/leetsheet.toml

use std::fs;
use std::path::{Path, PathBuf};

use leetsheet_engine::options::{DEFAULT_SYNTHETIC_START, DEFAULT_TARGET};
use leetsheet_engine::PipelineOptions;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const FILE_NAME: &str = "leetsheet.toml";
pub const DEFAULT_INPUT: &str = "leetcode problems.xlsx";
pub const DEFAULT_OUTPUT: &str = "leetcode_problems.csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Source workbook or CSV
    pub input: PathBuf,
    /// Export destination
    pub output: PathBuf,
    /// Exact number of exported rows once padding applies
    pub target: usize,
    /// Problem number of the first filler record
    pub synthetic_start: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            target: DEFAULT_TARGET,
            synthetic_start: DEFAULT_SYNTHETIC_START,
        }
    }
}

impl Settings {
    pub fn from_toml(input: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(input).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target == 0 {
            return Err(ConfigError::Invalid("target must be at least 1".into()));
        }
        if self.pipeline_options().last_filler_number().is_none() {
            return Err(ConfigError::Invalid(format!(
                "synthetic_start {} leaves no room for {} filler numbers",
                self.synthetic_start, self.target
            )));
        }
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("input path is empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output path is empty".into()));
        }
        Ok(())
    }

    /// Read and validate one config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&contents, path)?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Settings for a run.
    ///
    /// An explicit path must exist. Without one, the first of
    /// `./leetsheet.toml` and the user config file that exists is used, and
    /// defaults apply when neither does.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::discover(Path::new(".")) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no {} found, using defaults", FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// First existing config file: `dir/leetsheet.toml`, then the user config dir.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let local = dir.join(FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        Self::user_config_path().filter(|p| p.is_file())
    }

    /// `~/.config/leetsheet/leetsheet.toml` (platform equivalent elsewhere)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("leetsheet").join(FILE_NAME))
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            target: self.target,
            synthetic_start: self.synthetic_start,
        }
    }
}
