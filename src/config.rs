//! Startup configuration, persisted as JSON next to the binary.
//! Command-line flags override whatever the file provides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Draw mode index for the split-map demo
    /// (0: Fill | 1: Fill+Wireframe | 2: Wireframe | 3: Points)
    pub mode: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            mode: 0,
        }
    }
}

impl Config {
    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}
