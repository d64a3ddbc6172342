//! Core data types for carpoolshare.

use serde::{Deserialize, Serialize};

/// Type alias for monetary values.
pub type Money = f64;

/// Stable participant identifier, never reused within a planner session.
pub type ParticipantId = u64;

/// How a participant rode during one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripStatus {
    /// Full round trip (two legs).
    #[serde(rename = "full")]
    Full,
    /// One way only (a single leg).
    #[serde(rename = "one-way")]
    HalfOrOneWay,
    /// Did not ride.
    #[serde(rename = "none")]
    None,
}

impl TripStatus {
    /// Number of one-way legs this status occupies.
    #[inline]
    pub fn legs(self) -> usize {
        match self {
            TripStatus::Full => 2,
            TripStatus::HalfOrOneWay => 1,
            TripStatus::None => 0,
        }
    }

    /// Whether the participant rode at all.
    #[inline]
    pub fn is_active(self) -> bool {
        self != TripStatus::None
    }
}

impl Default for TripStatus {
    fn default() -> Self {
        TripStatus::Full
    }
}

/// Trip model that decides where the period cost comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripMode {
    /// Repeated daily commute, one period per day.
    #[serde(rename = "commute")]
    Commute,
    /// A single long trip, always exactly one period.
    #[serde(rename = "roadtrip")]
    RoadTrip,
}

impl Default for TripMode {
    fn default() -> Self {
        TripMode::Commute
    }
}

/// A person sharing the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier.
    pub id: ParticipantId,
    /// Display label.
    pub name: String,
    /// One status per period.
    #[serde(rename = "dailyParticipation")]
    pub participation: Vec<TripStatus>,
}

impl Participant {
    /// Create a participant riding the full trip in every one of `periods` periods.
    pub fn new(id: ParticipantId, name: impl Into<String>, periods: usize) -> Self {
        Self {
            id,
            name: name.into(),
            participation: vec![TripStatus::Full; periods],
        }
    }

    /// Replace the participation sequence.
    pub fn with_participation(mut self, participation: Vec<TripStatus>) -> Self {
        self.participation = participation;
        self
    }

    /// Default display name for a freshly added participant.
    pub fn placeholder_name(id: ParticipantId) -> String {
        format!("Passenger {}", id)
    }

    /// Status for a period, if the index is in range.
    #[inline]
    pub fn status(&self, period: usize) -> Option<TripStatus> {
        self.participation.get(period).copied()
    }

    /// Number of periods recorded.
    #[inline]
    pub fn periods(&self) -> usize {
        self.participation.len()
    }

    /// Whether the participant rode in at least one period.
    pub fn is_ever_active(&self) -> bool {
        self.participation.iter().any(|s| s.is_active())
    }

    /// Discard the sequence and refill it with `periods` full trips.
    pub fn reset_participation(&mut self, periods: usize) {
        self.participation.clear();
        self.participation.resize(periods, TripStatus::Full);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_legs() {
        assert_eq!(TripStatus::Full.legs(), 2);
        assert_eq!(TripStatus::HalfOrOneWay.legs(), 1);
        assert_eq!(TripStatus::None.legs(), 0);
        assert!(!TripStatus::None.is_active());
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&vec![
            TripStatus::Full,
            TripStatus::HalfOrOneWay,
            TripStatus::None,
        ])
        .unwrap();
        assert_eq!(json, r#"["full","one-way","none"]"#);

        let mode: TripMode = serde_json::from_str(r#""roadtrip""#).unwrap();
        assert_eq!(mode, TripMode::RoadTrip);
    }

    #[test]
    fn test_participant_reset() {
        let mut p = Participant::new(1, "Car Owner", 3)
            .with_participation(vec![TripStatus::None, TripStatus::HalfOrOneWay, TripStatus::None]);
        assert!(p.is_ever_active());

        p.reset_participation(5);
        assert_eq!(p.periods(), 5);
        assert!(p.participation.iter().all(|s| *s == TripStatus::Full));
        assert_eq!(p.status(5), None);
    }

    #[test]
    fn test_never_active() {
        let p = Participant::new(2, "Passenger 2", 2)
            .with_participation(vec![TripStatus::None, TripStatus::None]);
        assert!(!p.is_ever_active());
        assert_eq!(Participant::placeholder_name(4), "Passenger 4");
    }
}
