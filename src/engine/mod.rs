mod random;
mod scan;

pub use random::{RandomSource, StdRandom};
pub use scan::ScanEngine;

#[derive(Debug, Clone)]
pub enum ScanControl {
    /// Stop the running scan; the engine returns `ScanError::Cancelled`.
    Cancel,
}
