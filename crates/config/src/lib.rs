// Configuration loading

pub mod env_file;
pub mod error;
pub mod settings;

pub use env_file::{EnvFile, RequiredKey, SetupOutcome, ENV_FILE, REQUIRED_KEYS};
pub use error::ConfigError;
pub use settings::Settings;
