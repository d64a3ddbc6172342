//! Cost allocation for carpoolshare.

pub mod engine;
pub mod fees;
pub mod result;
pub mod split;

pub use engine::{allocate, AllocationEngine};
pub use fees::FeeSplit;
pub use result::AllocationResult;
pub use split::PeriodSplit;
