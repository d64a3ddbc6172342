//! Cost allocation engine.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::allocation::fees::FeeSplit;
use crate::allocation::result::AllocationResult;
use crate::allocation::split::PeriodSplit;
use crate::core::config::CostParameters;
use crate::core::error::{Result, ShareError};
use crate::core::types::{Money, Participant, TripMode};

/// Allocate the cost of a commute series or road trip across `participants`.
///
/// Equivalent to `AllocationEngine::new(*params, mode).run(participants)`.
pub fn allocate(
    participants: &[Participant],
    params: &CostParameters,
    mode: TripMode,
) -> Result<AllocationResult> {
    AllocationEngine::new(*params, mode).run(participants)
}

/// Allocation engine.
///
/// Stateless between runs: the same participants and parameters always give the same result.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    /// Cost parameters.
    pub params: CostParameters,
    /// Trip mode.
    pub mode: TripMode,
}

impl AllocationEngine {
    /// Create a new engine for the given parameters and mode.
    pub fn new(params: CostParameters, mode: TripMode) -> Self {
        Self { params, mode }
    }

    /// Commute engine.
    pub fn commute(params: CostParameters) -> Self {
        Self::new(params, TripMode::Commute)
    }

    /// Road-trip engine.
    pub fn road_trip(params: CostParameters) -> Self {
        Self::new(params, TripMode::RoadTrip)
    }

    /// Number of periods each participant must have.
    #[inline]
    pub fn periods(&self) -> usize {
        self.params.periods(self.mode)
    }

    /// Check the participant set before allocating.
    pub fn validate(&self, participants: &[Participant]) -> Result<()> {
        if participants.is_empty() {
            return Err(ShareError::EmptyParticipantSet);
        }

        let periods = self.periods();
        if periods == 0 {
            return Err(ShareError::invalid_parameter("day count must be at least 1"));
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for p in participants {
            if !seen.insert(p.id) {
                return Err(ShareError::DuplicateParticipant { id: p.id });
            }
            if p.periods() != periods {
                return Err(ShareError::length_mismatch(p.id, periods, p.periods()));
            }
        }

        Ok(())
    }

    /// Run the allocation.
    ///
    /// # Arguments
    /// * `participants` - Riders with one status per period
    ///
    /// # Returns
    /// Per-participant totals and aggregate totals
    pub fn run(&self, participants: &[Participant]) -> Result<AllocationResult> {
        self.validate(participants)?;
        let period_cost = self.params.period_cost(self.mode)?;
        let periods = self.periods();

        let mut totals: BTreeMap<_, Money> = participants.iter().map(|p| (p.id, 0.0)).collect();
        let mut splits = Vec::with_capacity(periods);
        let mut total_variable_cost = 0.0;
        let mut unallocated_variable_cost = 0.0;

        for period in 0..periods {
            let split = PeriodSplit::compute(
                period,
                period_cost,
                participants.iter().map(|p| p.participation[period]),
            );

            if split.is_skipped() {
                debug!(period, cost = period_cost, "No riders, period skipped");
            } else {
                for p in participants {
                    let charge = split.charge(p.participation[period]);
                    if let Some(total) = totals.get_mut(&p.id) {
                        *total += charge;
                    }
                }
                total_variable_cost += split.counted_cost();
                unallocated_variable_cost += split.unallocated;
            }

            splits.push(split);
        }

        let fees = FeeSplit::for_participants(self.params.shared_fees(), participants);
        for p in participants {
            if let Some(total) = totals.get_mut(&p.id) {
                *total += fees.charge(p);
            }
        }
        if fees.has_unassigned() {
            warn!(fees = fees.total, "Nobody rode, shared fees left unassigned");
        }

        let total_cost = total_variable_cost + self.params.tolls + self.params.parking;

        debug!(
            mode = ?self.mode,
            participants = participants.len(),
            periods,
            total_variable_cost,
            total_cost,
            "Allocation complete"
        );

        Ok(AllocationResult {
            mode: self.mode,
            per_participant_total: totals,
            total_variable_cost,
            total_cost,
            periods: splits,
            fees,
            unallocated_variable_cost,
        })
    }
}
