// src/geometry.rs
//! Disk geometry and validated request sets.

use crate::error::{EngineError, Result};

/// Cylinder count used when nothing else is configured.
pub const DEFAULT_DISK_SIZE: u32 = 200;
/// Head position used when nothing else is configured.
pub const DEFAULT_INITIAL_HEAD: u32 = 50;

/// Size of the disk and where the head starts.
///
/// Only constructible through [`DiskGeometry::new`], so a value of this type
/// always satisfies `size > 1` and `initial_head < size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskGeometry {
    size: u32,
    initial_head: u32,
}

impl DiskGeometry {
    pub fn new(size: u32, initial_head: u32) -> Result<Self> {
        if size <= 1 {
            return Err(EngineError::InvalidGeometry { size });
        }
        if initial_head >= size {
            return Err(EngineError::HeadOutOfRange { head: initial_head, size });
        }
        Ok(DiskGeometry { size, initial_head })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn initial_head(&self) -> u32 {
        self.initial_head
    }

    /// Highest addressable cylinder, the C-SCAN sweep boundary.
    pub fn last_cylinder(&self) -> u32 {
        self.size - 1
    }

    pub fn contains(&self, cylinder: u32) -> bool {
        cylinder < self.size
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        DiskGeometry { size: DEFAULT_DISK_SIZE, initial_head: DEFAULT_INITIAL_HEAD }
    }
}

/// Pending cylinder requests in arrival order, bound to a geometry.
///
/// Order matters: SSTF breaks distance ties by position in this sequence.
/// Duplicates are kept as-is. An empty set is valid and schedules to an
/// empty plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSet {
    geometry: DiskGeometry,
    cylinders: Vec<u32>,
}

impl RequestSet {
    pub fn new(geometry: DiskGeometry, cylinders: Vec<u32>) -> Result<Self> {
        if let Some(&cylinder) = cylinders.iter().find(|&&c| !geometry.contains(c)) {
            return Err(EngineError::CylinderOutOfRange { cylinder, size: geometry.size() });
        }
        Ok(RequestSet { geometry, cylinders })
    }

    pub fn geometry(&self) -> DiskGeometry {
        self.geometry
    }

    pub fn head(&self) -> u32 {
        self.geometry.initial_head()
    }

    pub fn cylinders(&self) -> &[u32] {
        &self.cylinders
    }

    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }
}
