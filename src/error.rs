//! Errors raised by the scheduling engine.
//!
//! Scheduling fails fast: every variant here is detected before any
//! request is serviced, so no partial plan ever escapes.

/// Logical input violations the engine can detect on its own.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid disk geometry: size {size} must be greater than 1")]
    InvalidGeometry { size: u32 },

    #[error("Head position {head} is outside the disk (0..={max})", max = .size.saturating_sub(1))]
    HeadOutOfRange { head: u32, size: u32 },

    #[error("Requested cylinder {cylinder} is outside the disk (0..={max})", max = .size.saturating_sub(1))]
    CylinderOutOfRange { cylinder: u32, size: u32 },

    #[error("Invalid latency: {ms_per_cylinder} ms/cylinder (must be finite and non-negative)")]
    InvalidLatency { ms_per_cylinder: f64 },

    #[error("Invalid request count: {count}")]
    InvalidRequestCount { count: usize },

    #[error("Unknown algorithm: {name} (expected SSTF or C-SCAN)")]
    UnknownAlgorithm { name: String },
}

impl EngineError {
    /// Checks if this error comes from the disk geometry itself rather
    /// than from the requests or replay settings.
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidGeometry { .. } | EngineError::HeadOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
