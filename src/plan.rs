// src/plan.rs
use crate::schedulers::Algorithm;

/// Ordered service sequence produced by a scheduler, plus its total cost.
///
/// `visit_order` holds exactly one entry per request and never contains
/// cylinders the head only passes through (such as the C-SCAN boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekPlan {
    algorithm: Algorithm,
    head: u32,
    visit_order: Vec<u32>,
    total_seek: u64,
}

impl SeekPlan {
    pub fn new(algorithm: Algorithm, head: u32, visit_order: Vec<u32>, total_seek: u64) -> Self {
        SeekPlan { algorithm, head, visit_order, total_seek }
    }

    pub fn empty(algorithm: Algorithm, head: u32) -> Self {
        SeekPlan::new(algorithm, head, Vec::new(), 0)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Head position the plan starts from.
    pub fn head(&self) -> u32 {
        self.head
    }

    pub fn visit_order(&self) -> &[u32] {
        &self.visit_order
    }

    pub fn total_seek(&self) -> u64 {
        self.total_seek
    }

    pub fn len(&self) -> usize {
        self.visit_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visit_order.is_empty()
    }

    /// Sum of head travel along `head -> visit_order[0] -> ...` only.
    ///
    /// Equals `total_seek` for SSTF. For C-SCAN the difference is the
    /// boundary sweep plus any charged jump.
    pub fn path_distance(&self) -> u64 {
        self.visit_order
            .iter()
            .scan(self.head, |prev, &target| {
                let step = u64::from(prev.abs_diff(target));
                *prev = target;
                Some(step)
            })
            .sum()
    }
}
