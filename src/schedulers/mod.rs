// src/schedulers/mod.rs
//! Disk-head scheduling disciplines.
//!
//! Every discipline is a pure mapping from a [`RequestSet`] to a
//! [`SeekPlan`]. Replay and stats only ever see the plan, so a new
//! discipline plugs in here without touching either of them.

pub mod cscan;
pub mod sstf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::geometry::RequestSet;
use crate::plan::SeekPlan;

pub use cscan::{schedule_cscan, CScan};
pub use sstf::{schedule_sstf, Sstf};

pub trait Scheduler: Send + Sync {
    fn algorithm(&self) -> Algorithm;
    fn schedule(&self, requests: &RequestSet) -> SeekPlan;

    fn name(&self) -> &'static str {
        self.algorithm().name()
    }
}

/// Scheduling disciplines selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    #[default]
    Sstf,
    CScan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Sstf, Algorithm::CScan];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sstf => "SSTF",
            Algorithm::CScan => "C-SCAN",
        }
    }

    /// Builds the scheduler for this discipline. `count_jump_cost` only
    /// affects C-SCAN.
    pub fn scheduler(self, count_jump_cost: bool) -> Box<dyn Scheduler> {
        match self {
            Algorithm::Sstf => Box::new(Sstf),
            Algorithm::CScan => Box::new(CScan { count_jump_cost }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sstf" => Ok(Algorithm::Sstf),
            "c-scan" | "cscan" | "c_scan" => Ok(Algorithm::CScan),
            _ => Err(EngineError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name().to_string()
    }
}
