//! carpoolshare - fair cost splitting for shared rides.
//!
//! This crate provides:
//! - A pure allocation engine for daily commutes and single road trips
//! - Partial participation (full round trip, one way, or no trip)
//! - Even distribution of shared tolls and parking
//! - An editable trip planner with JSON snapshots

pub mod allocation;
pub mod core;
pub mod planner;

pub use crate::allocation::{allocate, AllocationEngine, AllocationResult};
pub use crate::core::{
    CostParameters, Participant, ParticipantId, Result, ShareError, TripMode, TripStatus,
};
pub use crate::planner::TripPlanner;
