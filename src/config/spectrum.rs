//! Config for the `spectrum_demo` tool.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct SpectrumToolConfig {
    pub input: PathBuf,
    pub output: SpectrumOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SpectrumOutputConfig {
    /// Where the rendered spectrum image is written.
    pub image: PathBuf,
    /// Optional JSON dump of the padding/normalization stats.
    #[serde(default)]
    pub stats_json: Option<PathBuf>,
}
