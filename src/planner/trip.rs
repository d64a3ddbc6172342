//! Editable trip state: roster, mode and costs.

use tracing::debug;

use crate::allocation::{allocate, AllocationResult};
use crate::core::config::{CostParameters, DayPreset, RoadTripCost};
use crate::core::error::{Result, ShareError};
use crate::core::types::{Money, Participant, ParticipantId, TripMode, TripStatus};
use crate::planner::roster::Roster;

/// Mutable model behind a carpool calculator.
///
/// Every participant's participation length matches [`TripPlanner::periods`].
/// Any edit that can change the period count resets all participation to
/// full trips.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlanner {
    roster: Roster,
    mode: TripMode,
    params: CostParameters,
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TripPlanner {
    /// Create a planner with the default commute, costs and roster.
    pub fn new() -> Self {
        let params = CostParameters::default();
        let mode = TripMode::default();
        Self {
            roster: Roster::with_defaults(params.periods(mode)),
            mode,
            params,
        }
    }

    /// Assemble a planner from existing parts, checking every invariant.
    pub fn from_parts(roster: Roster, mode: TripMode, params: CostParameters) -> Result<Self> {
        let periods = params.periods(mode);
        if periods == 0 {
            return Err(ShareError::invalid_parameter("day count must be at least 1"));
        }
        if let Some(p) = roster.participants().iter().find(|p| p.periods() != periods) {
            return Err(ShareError::length_mismatch(p.id, periods, p.periods()));
        }
        Ok(Self {
            roster,
            mode,
            params,
        })
    }

    /// Current trip mode.
    #[inline]
    pub fn mode(&self) -> TripMode {
        self.mode
    }

    /// Current cost parameters.
    #[inline]
    pub fn cost_parameters(&self) -> &CostParameters {
        &self.params
    }

    /// Participant roster.
    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Participants in display order.
    #[inline]
    pub fn participants(&self) -> &[Participant] {
        self.roster.participants()
    }

    /// Number of periods every participant tracks.
    #[inline]
    pub fn periods(&self) -> usize {
        self.params.periods(self.mode)
    }

    /// Add a participant, full trips in every period.
    pub fn add_participant(&mut self, name: Option<String>) -> Result<ParticipantId> {
        let periods = self.periods();
        self.roster.add(name, periods)
    }

    /// Remove a participant. The last one cannot be removed.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<Participant> {
        self.roster.remove(id)
    }

    /// Rename a participant.
    pub fn rename_participant(&mut self, id: ParticipantId, name: impl Into<String>) -> Result<()> {
        self.roster.rename(id, name)
    }

    /// Record a participant's status for one period.
    pub fn set_status(&mut self, id: ParticipantId, period: usize, status: TripStatus) -> Result<()> {
        self.roster.set_status(id, period, status)
    }

    /// Record one status for every participant in a period.
    pub fn set_period_status(&mut self, period: usize, status: TripStatus) -> Result<()> {
        self.roster.set_period_status(period, status)
    }

    /// Switch trip mode. Participation is reset when the mode actually changes.
    pub fn set_mode(&mut self, mode: TripMode) {
        if self.mode == mode {
            return;
        }
        debug!(from = ?self.mode, to = ?mode, "Trip mode changed");
        self.mode = mode;
        self.roster.reset_participation(self.periods());
    }

    /// Set the number of commute days.
    ///
    /// In commute mode this resets every participant to `days` full trips.
    /// In road-trip mode only the stored day count changes.
    pub fn set_day_count(&mut self, days: usize) -> Result<()> {
        if days == 0 {
            return Err(ShareError::invalid_parameter("day count must be at least 1"));
        }
        self.params.commute.day_count = days;
        if self.mode == TripMode::Commute {
            self.roster.reset_participation(days);
        }
        Ok(())
    }

    /// Apply a day-count preset.
    pub fn apply_preset(&mut self, preset: DayPreset) -> Result<()> {
        self.set_day_count(preset.days())
    }

    /// Set the cost of one commute day.
    pub fn set_daily_cost(&mut self, daily_cost: Money) {
        self.params.commute.daily_cost = daily_cost;
    }

    /// Replace the road-trip inputs.
    pub fn set_road_trip(&mut self, road_trip: RoadTripCost) {
        self.params.road_trip = road_trip;
    }

    /// Set tolls and parking.
    pub fn set_fees(&mut self, tolls: Money, parking: Money) {
        self.params.tolls = tolls;
        self.params.parking = parking;
    }

    /// Replace all cost parameters, resetting participation if the period count changes.
    pub fn set_cost_parameters(&mut self, params: CostParameters) -> Result<()> {
        if params.commute.day_count == 0 {
            return Err(ShareError::invalid_parameter("day count must be at least 1"));
        }
        let day_count_changed = params.commute.day_count != self.params.commute.day_count;
        self.params = params;
        if day_count_changed && self.mode == TripMode::Commute {
            self.roster.reset_participation(self.periods());
        }
        Ok(())
    }

    /// Allocate costs for the current state.
    pub fn allocate(&self) -> Result<AllocationResult> {
        allocate(self.roster.participants(), &self.params, self.mode)
    }
}
