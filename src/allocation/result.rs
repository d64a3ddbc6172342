//! Allocation output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::allocation::fees::FeeSplit;
use crate::allocation::split::PeriodSplit;
use crate::core::types::{Money, ParticipantId, TripMode};

/// Result of an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Mode the result was computed for.
    pub mode: TripMode,
    /// Total owed per participant, including riders who owe nothing.
    pub per_participant_total: BTreeMap<ParticipantId, Money>,
    /// Sum of period costs for periods with at least one rider.
    pub total_variable_cost: Money,
    /// Variable cost plus tolls and parking.
    pub total_cost: Money,
    /// Per-period breakdown, in period order.
    pub periods: Vec<PeriodSplit>,
    /// Shared fee breakdown.
    pub fees: FeeSplit,
    /// Variable cost charged to nobody (periods with only one-way riders).
    pub unallocated_variable_cost: Money,
}

impl AllocationResult {
    /// Total owed by a participant.
    pub fn total_for(&self, id: ParticipantId) -> Option<Money> {
        self.per_participant_total.get(&id).copied()
    }

    /// Sum of all participant totals.
    pub fn allocated_total(&self) -> Money {
        self.per_participant_total.values().sum()
    }

    /// Fee share charged to each active participant.
    #[inline]
    pub fn fee_share(&self) -> Money {
        self.fees.share
    }

    /// Fees nobody was charged for.
    #[inline]
    pub fn unassigned_fees(&self) -> Money {
        self.fees.unassigned
    }

    /// Number of periods left out because nobody rode.
    pub fn skipped_periods(&self) -> usize {
        self.periods.iter().filter(|p| p.is_skipped()).count()
    }

    /// Check that charges plus uncharged remainders add up to the total cost.
    pub fn reconciles(&self, tolerance: f64) -> bool {
        let accounted =
            self.allocated_total() + self.unallocated_variable_cost + self.fees.unassigned;
        let scale = self.total_cost.abs().max(1.0);
        (accounted - self.total_cost).abs() <= tolerance * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AllocationResult {
        let mut totals = BTreeMap::new();
        totals.insert(1, 1250.0);
        totals.insert(2, 1250.0);
        totals.insert(3, 0.0);
        AllocationResult {
            mode: TripMode::RoadTrip,
            per_participant_total: totals,
            total_variable_cost: 2400.0,
            total_cost: 2500.0,
            periods: vec![],
            fees: FeeSplit::new(100.0, 2),
            unallocated_variable_cost: 0.0,
        }
    }

    #[test]
    fn test_totals() {
        let result = sample();
        assert_eq!(result.total_for(3), Some(0.0));
        assert_eq!(result.total_for(9), None);
        assert!((result.allocated_total() - 2500.0).abs() < 1e-10);
        assert!((result.fee_share() - 50.0).abs() < 1e-10);
        assert!(result.reconciles(1e-9));
    }

    #[test]
    fn test_reconcile_detects_gap() {
        let mut result = sample();
        result.total_cost = 2600.0;
        assert!(!result.reconciles(1e-9));
    }
}
