use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::angles::PitchDomain;
use crate::common::extend_path;

pub const DEFAULT_OUTPUT_PATH: &str = "output_angles_between_sensors.txt";

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Folder holding the three sensor folders.
    pub parent_directory: PathBuf,
    /// Sensor folder names, in sensor order 1, 2, 3.
    pub sensor_folders: [String; 3],
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub pitch_domain: PitchDomain,
}

impl AnalysisConfig {
    pub fn new(parent_directory: PathBuf, sensor_folders: [String; 3]) -> Self {
        Self {
            parent_directory,
            sensor_folders,
            output_path: default_output_path(),
            pitch_domain: PitchDomain::default(),
        }
    }

    pub fn sensor_directories(&self) -> [PathBuf; 3] {
        self.sensor_folders
            .each_ref()
            .map(|folder| extend_path(&self.parent_directory, folder))
    }
}

pub fn read_analysis_config<P: AsRef<Path>>(path: P) -> Result<AnalysisConfig> {
    let path = path.as_ref();
    let config = read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: AnalysisConfig = serde_json::from_str(&config)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
