//! Core types, configuration and errors for carpoolshare.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CommuteCost, CostParameters, DayPreset, RoadTripCost};
pub use error::{Result, ShareError};
pub use types::*;
