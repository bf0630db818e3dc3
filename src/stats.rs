// src/stats.rs
use crate::plan::SeekPlan;

/// Summary of a completed plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total_seek: u64,
    pub average_seek: f64,
}

/// Totals a plan and averages its cost over `request_count` requests.
///
/// An empty simulation has nothing to average, so its average is 0.
pub fn aggregate(plan: &SeekPlan, request_count: usize) -> Stats {
    let total_seek = plan.total_seek();
    let average_seek = if request_count == 0 {
        0.0
    } else {
        total_seek as f64 / request_count as f64
    };
    Stats { total_seek, average_seek }
}
