//! Path resolution for pomo configuration and log files.
//!
//! All pomo data is stored in `~/.pomo/`:
//! - `config.yaml` - Main configuration file
//! - `pomo.log` - Diagnostic log (the TUI owns the terminal)

use std::path::PathBuf;

use crate::error::PomoError;

/// Paths to pomo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomo/`
    pub root: PathBuf,
    /// Config file: `~/.pomo/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.pomo/pomo.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomo.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomo"))
        })
    }
}
