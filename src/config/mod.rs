//! JSON configuration for the demo binaries.
//!
//! Each tool under `src/bin/` is driven by a config file describing the
//! input image, the operations to run, and where the outputs go.

pub mod filter;
pub mod spectrum;

pub use filter::{FilterOutputConfig, FilterToolConfig, Operation};
pub use spectrum::{SpectrumOutputConfig, SpectrumToolConfig};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON config file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
