// Rust guideline compliant 2026-10-19

//! Working directory and configuration resolution for a run.

use crate::discovery::discover_candidates;
use crate::error::{AppError, Result};
use csvmerge_core::{Config, CONFIG_FILE_NAME};
use std::path::{Component, Path, PathBuf};

/// Resolved paths and configuration for one csvmerge run.
#[derive(Debug, Clone)]
pub struct RunContext {
    workdir: PathBuf,
    config: Config,
}

impl RunContext {
    /// Resolves the working directory and loads its configuration.
    ///
    /// # Arguments
    ///
    /// * `workdir` - Optional working directory (defaults to the current one)
    /// * `config_path` - Optional config file (defaults to `csvmerge.toml`
    ///   inside the working directory)
    ///
    /// # Returns
    ///
    /// A `RunContext` with the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The working directory cannot be resolved or does not exist
    /// - The configuration cannot be loaded
    pub fn discover(workdir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let workdir = match workdir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };
        if !workdir.is_dir() {
            return Err(AppError::WorkdirNotFound { path: workdir });
        }

        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => workdir.join(CONFIG_FILE_NAME),
        };
        let config = Config::load(&config_path)?;

        Ok(Self { workdir, config })
    }

    /// Builds a context from an already-loaded configuration.
    #[must_use]
    pub fn with_config(workdir: PathBuf, config: Config) -> Self {
        Self { workdir, config }
    }

    /// Returns the working directory.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        self.workdir.as_path()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the active configuration for in-place overrides.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Returns the directory outputs are written to.
    ///
    /// Relative `output_dir` values resolve against the working directory,
    /// with `.` components dropped.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        if self.config.output_dir.is_absolute() {
            return self.config.output_dir.clone();
        }
        let relative: PathBuf = self
            .config
            .output_dir
            .components()
            .filter(|component| *component != Component::CurDir)
            .collect();
        if relative.as_os_str().is_empty() {
            self.workdir.clone()
        } else {
            self.workdir.join(relative)
        }
    }

    /// Resolves a user-supplied input path against the working directory.
    #[must_use]
    pub fn resolve_input(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }

    /// Lists candidate input files in the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        discover_candidates(&self.workdir, self.config.extension())
    }
}
