// src/schedulers/sstf.rs
//! Shortest-Seek-Time-First.

use tracing::debug;

use super::{Algorithm, Scheduler};
use crate::geometry::RequestSet;
use crate::plan::SeekPlan;

/// Greedy nearest-request scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl Scheduler for Sstf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sstf
    }

    fn schedule(&self, requests: &RequestSet) -> SeekPlan {
        schedule_sstf(requests.cylinders(), requests.head())
    }
}

/// Services the closest pending request first.
///
/// Ties go to the request that appears earliest in `requests`; the strict
/// `<` in the scan below is what guarantees it. O(n^2), which is fine for
/// the request counts this is used with.
pub fn schedule_sstf(requests: &[u32], head: u32) -> SeekPlan {
    let mut visited = vec![false; requests.len()];
    let mut visit_order = Vec::with_capacity(requests.len());
    let mut total_seek = 0u64;
    let mut current = head;

    for _ in 0..requests.len() {
        let mut nearest: Option<(usize, u32)> = None;
        for (i, &cylinder) in requests.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let distance = current.abs_diff(cylinder);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((i, distance));
            }
        }

        // Each pass still has at least one unvisited request.
        let Some((index, distance)) = nearest else { break };
        visited[index] = true;
        total_seek += u64::from(distance);
        current = requests[index];
        visit_order.push(current);
        debug!(cylinder = current, distance, total_seek, "sstf pick");
    }

    SeekPlan::new(Algorithm::Sstf, head, visit_order, total_seek)
}
