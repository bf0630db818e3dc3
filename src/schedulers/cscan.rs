// src/schedulers/cscan.rs
//! Circular SCAN.
//!
//! The head sweeps upward servicing everything at or above its start,
//! runs on to the last cylinder, returns to cylinder 0 and sweeps upward
//! again through the rest. Both passes service in ascending order.

use tracing::debug;

use super::{Algorithm, Scheduler};
use crate::error::Result;
use crate::geometry::{DiskGeometry, RequestSet};
use crate::plan::SeekPlan;

#[derive(Debug, Clone, Copy)]
pub struct CScan {
    /// Charge `size - 1` for the return from the last cylinder to 0.
    /// Hardware that returns for free is modelled with `false`.
    pub count_jump_cost: bool,
}

impl Default for CScan {
    fn default() -> Self {
        CScan { count_jump_cost: true }
    }
}

impl Scheduler for CScan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::CScan
    }

    fn schedule(&self, requests: &RequestSet) -> SeekPlan {
        sweep(requests.cylinders(), requests.geometry(), self.count_jump_cost)
    }
}

/// Validates the inputs and runs C-SCAN over them.
///
/// Fails before servicing anything when the disk is too small, the head
/// lies outside it, or a request does.
pub fn schedule_cscan(
    requests: &[u32],
    head: u32,
    disk_size: u32,
    count_jump_cost: bool,
) -> Result<SeekPlan> {
    let geometry = DiskGeometry::new(disk_size, head)?;
    let requests = RequestSet::new(geometry, requests.to_vec())?;
    Ok(CScan { count_jump_cost }.schedule(&requests))
}

fn sweep(requests: &[u32], geometry: DiskGeometry, count_jump_cost: bool) -> SeekPlan {
    let head = geometry.initial_head();
    if requests.is_empty() {
        return SeekPlan::empty(Algorithm::CScan, head);
    }

    let (mut left, mut right): (Vec<u32>, Vec<u32>) =
        requests.iter().copied().partition(|&cylinder| cylinder < head);
    left.sort_unstable();
    right.sort_unstable();

    let mut visit_order = Vec::with_capacity(requests.len());
    let mut total_seek = 0u64;
    let mut current = head;

    for &cylinder in &right {
        total_seek += u64::from(current.abs_diff(cylinder));
        current = cylinder;
        visit_order.push(cylinder);
    }

    let top = geometry.last_cylinder();
    if current != top {
        total_seek += u64::from(top - current);
        debug!(from = current, to = top, "cscan boundary sweep");
        current = top;
    }

    // With nothing below the head there is no reason to wrap.
    if !left.is_empty() {
        if count_jump_cost {
            total_seek += u64::from(current);
        }
        debug!(from = current, charged = count_jump_cost, "cscan jump to 0");
        current = 0;

        for &cylinder in &left {
            total_seek += u64::from(current.abs_diff(cylinder));
            current = cylinder;
            visit_order.push(cylinder);
        }
    }

    debug!(requests = visit_order.len(), total_seek, "cscan plan");
    SeekPlan::new(Algorithm::CScan, head, visit_order, total_seek)
}
