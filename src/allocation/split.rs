//! Per-period cost split between full-trip and one-way riders.
//!
//! A round trip is two one-way legs. Every active rider's leg is priced at
//! `cost / (active * 2)`. One-way riders pay a single leg and full-trip riders
//! share whatever is left of the period cost.

use serde::{Deserialize, Serialize};

use crate::core::types::{Money, TripStatus};

/// Charges for a single period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSplit {
    /// Period index.
    pub period: usize,
    /// Cost of the period before splitting.
    pub cost: Money,
    /// Riders with a full round trip.
    pub full_riders: usize,
    /// Riders going one way only.
    pub half_riders: usize,
    /// Charge for each one-way rider.
    pub one_way_cost: Money,
    /// Charge for each full-trip rider.
    pub full_trip_cost: Money,
    /// Part of `cost` charged to nobody.
    pub unallocated: Money,
}

impl PeriodSplit {
    /// Split `cost` across the statuses recorded for `period`.
    pub fn compute<I>(period: usize, cost: Money, statuses: I) -> Self
    where
        I: IntoIterator<Item = TripStatus>,
    {
        let mut full_riders = 0usize;
        let mut half_riders = 0usize;
        for status in statuses {
            match status {
                TripStatus::Full => full_riders += 1,
                TripStatus::HalfOrOneWay => half_riders += 1,
                TripStatus::None => {}
            }
        }

        let active = full_riders + half_riders;
        if active == 0 {
            return Self {
                period,
                cost,
                full_riders,
                half_riders,
                one_way_cost: 0.0,
                full_trip_cost: 0.0,
                unallocated: 0.0,
            };
        }

        let one_way_cost = cost / (active * 2) as f64;
        let remaining = cost - half_riders as f64 * one_way_cost;

        // With only one-way riders the other half of the round trip has no payer
        let (full_trip_cost, unallocated) = if full_riders > 0 {
            (remaining / full_riders as f64, 0.0)
        } else {
            (0.0, remaining)
        };

        Self {
            period,
            cost,
            full_riders,
            half_riders,
            one_way_cost,
            full_trip_cost,
            unallocated,
        }
    }

    /// Number of riders in the period.
    #[inline]
    pub fn active_riders(&self) -> usize {
        self.full_riders + self.half_riders
    }

    /// Whether nobody rode, so the period is left out of the totals.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        self.active_riders() == 0
    }

    /// Charge for a rider with `status` in this period.
    #[inline]
    pub fn charge(&self, status: TripStatus) -> Money {
        match status {
            TripStatus::Full => self.full_trip_cost,
            TripStatus::HalfOrOneWay => self.one_way_cost,
            TripStatus::None => 0.0,
        }
    }

    /// Cost counted towards the variable total (zero for a skipped period).
    #[inline]
    pub fn counted_cost(&self) -> Money {
        if self.is_skipped() {
            0.0
        } else {
            self.cost
        }
    }

    /// Sum of all charges made in this period.
    pub fn allocated(&self) -> Money {
        self.full_riders as f64 * self.full_trip_cost + self.half_riders as f64 * self.one_way_cost
    }
}
