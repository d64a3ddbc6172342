//! JSON snapshot of a planner, in the calculator's local-storage layout.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::config::{CommuteCost, CostParameters, RoadTripCost};
use crate::core::error::Result;
use crate::core::types::{Money, Participant, ParticipantId, TripMode};
use crate::planner::roster::Roster;
use crate::planner::trip::TripPlanner;

/// Storage key the snapshot is kept under.
pub const SNAPSHOT_KEY: &str = "carpoolData";

/// Flat, serializable copy of a planner.
///
/// Missing fields fall back to the planner defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub passengers: Vec<Participant>,
    pub daily_price: Money,
    pub number_of_days: usize,
    pub mode: TripMode,
    pub distance: f64,
    pub efficiency: f64,
    pub fuel_price: Money,
    pub tolls: Money,
    pub parking: Money,
    /// Absent in older snapshots; derived from the stored ids then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_id: Option<ParticipantId>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::from(&TripPlanner::default())
    }
}

impl From<&TripPlanner> for Snapshot {
    fn from(planner: &TripPlanner) -> Self {
        let params = planner.cost_parameters();
        Self {
            passengers: planner.participants().to_vec(),
            daily_price: params.commute.daily_cost,
            number_of_days: params.commute.day_count,
            mode: planner.mode(),
            distance: params.road_trip.distance,
            efficiency: params.road_trip.fuel_efficiency,
            fuel_price: params.road_trip.fuel_unit_price,
            tolls: params.tolls,
            parking: params.parking,
            next_id: Some(planner.roster().next_id()),
        }
    }
}

impl Snapshot {
    /// Cost parameters stored in the snapshot.
    pub fn cost_parameters(&self) -> CostParameters {
        CostParameters {
            commute: CommuteCost::new(self.daily_price, self.number_of_days),
            road_trip: RoadTripCost::new(self.distance, self.efficiency, self.fuel_price),
            tolls: self.tolls,
            parking: self.parking,
        }
    }

    /// Rebuild a planner, checking the roster invariants.
    ///
    /// Participation sequences that do not match the period count are fitted
    /// to it: the calculator keeps stale per-day entries after a switch to
    /// road-trip mode, and only the leading entries are ever read.
    pub fn into_planner(self) -> Result<TripPlanner> {
        let params = self.cost_parameters();
        let periods = params.periods(self.mode);
        let mut roster = Roster::from_parts(self.passengers, self.next_id.unwrap_or(1))?;
        if periods > 0 {
            let fitted = roster.fit_participation(periods);
            if !fitted.is_empty() {
                warn!(
                    mode = ?self.mode,
                    periods,
                    participants = ?fitted,
                    "Snapshot participation fitted to period count"
                );
            }
        }
        TripPlanner::from_parts(roster, self.mode, params)
    }
}

impl TripPlanner {
    /// Capture the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Encode the current state as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Restore a planner from JSON produced by [`TripPlanner::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let planner = snapshot.into_planner()?;
        debug!(
            participants = planner.participants().len(),
            periods = planner.periods(),
            "Planner restored from snapshot"
        );
        Ok(planner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ShareError;
    use crate::core::types::TripStatus;

    #[test]
    fn test_snapshot_layout() {
        let planner = TripPlanner::new();
        let value: serde_json::Value = serde_json::from_str(&planner.to_json().unwrap()).unwrap();

        assert_eq!(value["mode"], "commute");
        assert_eq!(value["numberOfDays"], 5);
        assert_eq!(value["passengers"][0]["name"], "Car Owner");
        assert_eq!(value["passengers"][0]["dailyParticipation"][0], "full");
        assert_eq!(value["nextId"], 4);
    }

    #[test]
    fn test_restore_keeps_edits() {
        let mut planner = TripPlanner::new();
        planner.set_status(2, 3, TripStatus::HalfOrOneWay).unwrap();
        planner.rename_participant(3, "Asha").unwrap();
        let removed = planner.add_participant(None).unwrap();
        planner.remove_participant(removed).unwrap();
        planner.set_fees(120.0, 30.0);

        let restored = TripPlanner::from_json(&planner.to_json().unwrap()).unwrap();
        assert_eq!(restored, planner);
        // The removed id stays retired
        assert_eq!(restored.roster().next_id(), removed + 1);
    }

    #[test]
    fn test_partial_snapshot_uses_defaults() {
        let json = r#"{"mode":"roadtrip","distance":300,"passengers":[
            {"id":1,"name":"Car Owner","dailyParticipation":["full"]},
            {"id":5,"name":"Ravi","dailyParticipation":["one-way"]}
        ]}"#;
        let planner = TripPlanner::from_json(json).unwrap();

        assert_eq!(planner.mode(), TripMode::RoadTrip);
        assert!((planner.cost_parameters().road_trip.distance - 300.0).abs() < 1e-10);
        assert!((planner.cost_parameters().road_trip.fuel_efficiency - 15.0).abs() < 1e-10);
        assert_eq!(planner.roster().next_id(), 6);
    }

    #[test]
    fn test_road_trip_snapshot_with_daily_entries() {
        let json = r#"{"mode":"roadtrip","numberOfDays":5,"distance":200,"efficiency":15,
            "fuelPrice":270,"tolls":100,"parking":50,"passengers":[
            {"id":1,"name":"Car Owner","dailyParticipation":["full","full","full","full","full"]},
            {"id":2,"name":"Passenger 1","dailyParticipation":["one-way","none","full","full","full"]},
            {"id":3,"name":"Passenger 2","dailyParticipation":["full","full","full","full","full"]}
        ]}"#;
        let planner = TripPlanner::from_json(json).unwrap();

        assert_eq!(planner.periods(), 1);
        assert!(planner.participants().iter().all(|p| p.periods() == 1));
        assert_eq!(planner.participants()[1].status(0), Some(TripStatus::HalfOrOneWay));
        // The commute length survives for a later switch back
        assert_eq!(planner.cost_parameters().commute.day_count, 5);

        let result = planner.allocate().unwrap();
        assert!((result.total_cost - 3750.0).abs() < 1e-9);
        assert!((result.allocated_total() - result.total_cost).abs() < 1e-9);
    }

    #[test]
    fn test_short_snapshot_sequence_reset() {
        let json = r#"{"numberOfDays":2,"passengers":[
            {"id":1,"name":"Car Owner","dailyParticipation":["none"]}
        ]}"#;
        let planner = TripPlanner::from_json(json).unwrap();
        assert_eq!(
            planner.participants()[0].participation,
            vec![TripStatus::Full, TripStatus::Full]
        );
    }

    #[test]
    fn test_zero_days_snapshot_rejected() {
        let json = r#"{"numberOfDays":0,"passengers":[
            {"id":1,"name":"Car Owner","dailyParticipation":[]}
        ]}"#;
        let err = TripPlanner::from_json(json).unwrap_err();
        assert!(matches!(err, ShareError::InvalidParameter { .. }));
    }

    #[test]
    fn test_max_id_snapshot_rejected() {
        let json = r#"{"passengers":[
            {"id":18446744073709551615,"name":"Car Owner",
             "dailyParticipation":["full","full","full","full","full"]}
        ]}"#;
        let err = TripPlanner::from_json(json).unwrap_err();
        assert!(matches!(err, ShareError::InvalidParameter { .. }));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(TripPlanner::from_json("{"), Err(ShareError::Snapshot(_))));
    }
}
