//! Disk-head scheduling and replay.
//!
//! Schedulers turn a [`RequestSet`] into a [`SeekPlan`]; [`replay`] walks a
//! plan one [`MoveEvent`] at a time and [`aggregate`] summarises it.
//!
//! ```
//! use seektool::{aggregate, replay, schedule_cscan};
//!
//! let plan = schedule_cscan(&[98, 183, 37, 122, 14, 124, 65, 67], 53, 200, true)?;
//! assert_eq!(plan.total_seek(), 382);
//!
//! let last = replay(&plan, 53, 0.5).last().unwrap();
//! assert_eq!(last.target, 37);
//! assert_eq!(aggregate(&plan, 8).average_seek, 47.75);
//! # Ok::<(), seektool::EngineError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod formats;
pub mod generate;
pub mod geometry;
pub mod plan;
pub mod replay;
pub mod schedulers;
pub mod stats;

pub use config::SimulationConfig;
pub use error::{EngineError, Result};
pub use generate::RequestGenerator;
pub use geometry::{DiskGeometry, RequestSet};
pub use plan::SeekPlan;
pub use replay::{advance, replay, MoveEvent, Replay, ReplayCursor, ReplayState};
pub use schedulers::{schedule_cscan, schedule_sstf, Algorithm, CScan, Scheduler, Sstf};
pub use stats::{aggregate, Stats};
