// .env credentials file used by the desktop app

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::ConfigError;

pub const ENV_FILE: &str = ".env";

/// A key the app needs, with the question asked when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredKey {
    pub key: &'static str,
    pub prompt: &'static str,
}

pub const REQUIRED_KEYS: &[RequiredKey] = &[
    RequiredKey { key: "VITE_A4F_API_KEY", prompt: "Enter your Brain View API Key (A4F)" },
    RequiredKey { key: "GOOGLE_CLIENT_ID", prompt: "Enter your Google Client ID" },
    RequiredKey { key: "GOOGLE_CLIENT_SECRET", prompt: "Enter your Google Client Secret" },
];

/// `KEY=VALUE` pairs in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

/// What a setup pass did with each required key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupOutcome {
    pub already_set: Vec<&'static str>,
    pub added: Vec<&'static str>,
    pub left_empty: Vec<&'static str>,
}

impl EnvFile {
    /// Lines without `=` are ignored. A repeated key keeps its first position
    /// and its last value.
    pub fn parse(contents: &str) -> Self {
        let mut env = Self::default();
        for line in contents.lines() {
            if let Some((key, value)) = line.trim().split_once('=') {
                env.set(key, value);
            }
        }
        env
    }

    /// Missing file reads as empty.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no env file yet");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.render()).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), keys = self.entries.len(), "saved env file");
        Ok(())
    }

    /// Ask for every required key that is absent or empty. Blank answers leave
    /// the key untouched.
    pub fn prompt_missing<R: BufRead, W: Write>(
        &mut self,
        required: &[RequiredKey],
        input: &mut R,
        output: &mut W,
    ) -> Result<SetupOutcome, ConfigError> {
        let mut outcome = SetupOutcome::default();

        for req in required {
            if self.get(req.key).is_some_and(|v| !v.is_empty()) {
                writeln!(output, "{} is already set.", req.key).map_err(ConfigError::Prompt)?;
                outcome.already_set.push(req.key);
                continue;
            }

            write!(output, "{}: ", req.prompt).map_err(ConfigError::Prompt)?;
            output.flush().map_err(ConfigError::Prompt)?;

            // EOF reads as a blank answer
            let mut answer = String::new();
            input.read_line(&mut answer).map_err(ConfigError::Prompt)?;
            let answer = answer.trim();

            if answer.is_empty() {
                outcome.left_empty.push(req.key);
            } else {
                self.set(req.key, answer);
                outcome.added.push(req.key);
            }
        }

        Ok(outcome)
    }
}
