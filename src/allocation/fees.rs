//! Shared fee distribution.

use serde::{Deserialize, Serialize};

use crate::core::types::{Money, Participant};

/// Tolls and parking split evenly over everyone who rode at least once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Tolls plus parking.
    pub total: Money,
    /// Participants receiving a share.
    pub recipients: usize,
    /// Share charged to each recipient.
    pub share: Money,
    /// Fees left without a payer (nobody rode).
    pub unassigned: Money,
}

impl FeeSplit {
    /// Split `total` over `recipients` people.
    pub fn new(total: Money, recipients: usize) -> Self {
        if recipients == 0 {
            return Self {
                total,
                recipients,
                share: 0.0,
                unassigned: total,
            };
        }

        Self {
            total,
            recipients,
            share: total / recipients as f64,
            unassigned: 0.0,
        }
    }

    /// Split `total` over the participants that were active in any period.
    pub fn for_participants(total: Money, participants: &[Participant]) -> Self {
        let recipients = participants.iter().filter(|p| p.is_ever_active()).count();
        Self::new(total, recipients)
    }

    /// Fee share owed by `participant`.
    #[inline]
    pub fn charge(&self, participant: &Participant) -> Money {
        if participant.is_ever_active() {
            self.share
        } else {
            0.0
        }
    }

    /// Whether some fees have no payer.
    #[inline]
    pub fn has_unassigned(&self) -> bool {
        self.recipients == 0 && self.total != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TripStatus;

    #[test]
    fn test_even_split() {
        let fees = FeeSplit::new(150.0, 3);
        assert!((fees.share - 50.0).abs() < 1e-10);
        assert_eq!(fees.unassigned, 0.0);
        assert!(!fees.has_unassigned());
    }

    #[test]
    fn test_only_active_participants_pay() {
        let participants = vec![
            Participant::new(1, "Car Owner", 2)
                .with_participation(vec![TripStatus::None, TripStatus::HalfOrOneWay]),
            Participant::new(2, "Passenger 1", 2)
                .with_participation(vec![TripStatus::None, TripStatus::None]),
        ];
        let fees = FeeSplit::for_participants(100.0, &participants);
        assert_eq!(fees.recipients, 1);
        assert!((fees.charge(&participants[0]) - 100.0).abs() < 1e-10);
        assert_eq!(fees.charge(&participants[1]), 0.0);
    }

    #[test]
    fn test_no_recipients() {
        let fees = FeeSplit::new(80.0, 0);
        assert_eq!(fees.share, 0.0);
        assert!((fees.unassigned - 80.0).abs() < 1e-10);
        assert!(fees.has_unassigned());

        let nothing = FeeSplit::new(0.0, 0);
        assert!(!nothing.has_unassigned());
    }
}
