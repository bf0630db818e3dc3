// src/config.rs
//! Simulation settings.
//!
//! Every tunable lives here with its default. A JSON file may override
//! any subset of fields; command-line flags override the file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::geometry::{DiskGeometry, DEFAULT_DISK_SIZE, DEFAULT_INITIAL_HEAD};
use crate::replay::{validate_latency, DEFAULT_MS_PER_CYLINDER};
use crate::schedulers::Algorithm;

/// Smallest request count offered for generated workloads.
pub const MIN_REQUESTS: usize = 4;
/// Largest request count offered for generated workloads.
pub const MAX_REQUESTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub disk_size: u32,
    pub initial_head: u32,
    pub ms_per_cylinder: f64,
    /// Number of requests to generate when none are supplied.
    pub request_count: usize,
    pub algorithm: Algorithm,
    /// Charge the C-SCAN return from the last cylinder to 0.
    pub count_jump_cost: bool,
    pub animation: AnimationConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            disk_size: DEFAULT_DISK_SIZE,
            initial_head: DEFAULT_INITIAL_HEAD,
            ms_per_cylinder: DEFAULT_MS_PER_CYLINDER,
            request_count: 8,
            algorithm: Algorithm::Sstf,
            count_jump_cost: true,
            animation: AnimationConfig::default(),
        }
    }
}

/// Pacing and layout of the animated head track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Pause before the first step.
    pub start_delay_ms: u64,
    /// Pause before each following step.
    pub step_delay_ms: u64,
    /// Columns used for the cylinder ruler.
    pub track_width: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 400,
            step_delay_ms: 450,
            track_width: 64,
        }
    }
}

impl AnimationConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl SimulationConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: SimulationConfig = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn geometry(&self) -> Result<DiskGeometry, EngineError> {
        DiskGeometry::new(self.disk_size, self.initial_head)
    }

    /// Checks everything the engine would otherwise reject later.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.validate_schedule()?;
        self.validate_generation()
    }

    /// Settings needed to schedule and replay a request set. The head only
    /// matters here.
    pub fn validate_schedule(&self) -> Result<(), EngineError> {
        self.geometry()?;
        validate_latency(self.ms_per_cylinder)
    }

    /// Settings needed to draw random requests: a usable disk and a
    /// request count in the offered range.
    pub fn validate_generation(&self) -> Result<(), EngineError> {
        if self.disk_size <= 1 {
            return Err(EngineError::InvalidGeometry { size: self.disk_size });
        }
        if !(MIN_REQUESTS..=MAX_REQUESTS).contains(&self.request_count) {
            return Err(EngineError::InvalidRequestCount { count: self.request_count });
        }
        Ok(())
    }
}
