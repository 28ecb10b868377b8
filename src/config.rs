use crate::scene::ObjectGroup;
use crate::scene::material::Rgba;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Settings for navigation queries, path highlighting and waypoint tours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    // Queries
    /// Only objects whose id starts with this prefix are graph candidates.
    /// An empty prefix selects every object.
    pub candidate_prefix: String,
    /// Vertical (Y) coordinate used for points given on the ground plane.
    pub vertical: f64,

    // Highlighting
    pub highlight_color: Rgba,

    // Tour
    pub tour_prefix: String,
    /// Pause the scheduler should make between tour steps.
    pub tour_step_delay_ms: u64,
}

impl NavConfig {
    pub fn new() -> Self {
        Self {
            candidate_prefix: ObjectGroup::Road.prefix().to_string(),
            vertical: 0.0,
            highlight_color: (1.0, 0.0, 0.0, 1.0),
            tour_prefix: ObjectGroup::Waypoint.prefix().to_string(),
            tour_step_delay_ms: 1000,
        }
    }

    pub fn tour_step_delay(&self) -> Duration {
        Duration::from_millis(self.tour_step_delay_ms)
    }

    /// Reads a config from a JSON file. Missing fields take default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::new()
    }
}
