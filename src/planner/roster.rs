//! Participant roster with stable, never reused ids.

use std::collections::HashSet;

use tracing::debug;

use crate::core::error::{Result, ShareError};
use crate::core::types::{Participant, ParticipantId, TripStatus};

/// Ordered list of participants.
///
/// Always holds at least one participant. Ids come from a counter that only
/// moves forward, so a removed id is never handed out again.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    participants: Vec<Participant>,
    /// Id given to the next added participant.
    next_id: ParticipantId,
}

impl Roster {
    /// The starting roster: the car owner and two passengers, full trips throughout.
    pub fn with_defaults(periods: usize) -> Self {
        Self {
            participants: vec![
                Participant::new(1, "Car Owner", periods),
                Participant::new(2, "Passenger 1", periods),
                Participant::new(3, "Passenger 2", periods),
            ],
            next_id: 4,
        }
    }

    /// Rebuild a roster from stored participants.
    ///
    /// `next_id` is raised above the largest stored id when needed.
    pub fn from_parts(participants: Vec<Participant>, next_id: ParticipantId) -> Result<Self> {
        if participants.is_empty() {
            return Err(ShareError::EmptyParticipantSet);
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for p in &participants {
            if !seen.insert(p.id) {
                return Err(ShareError::DuplicateParticipant { id: p.id });
            }
        }

        let max_id = participants.iter().map(|p| p.id).max().unwrap_or(0);
        let floor = max_id.checked_add(1).ok_or_else(id_space_exhausted)?;
        Ok(Self {
            participants,
            next_id: next_id.max(floor),
        })
    }

    /// Participants in display order.
    #[inline]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Number of participants.
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster is empty. Never true for a constructed roster.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Id the next added participant will get.
    #[inline]
    pub fn next_id(&self) -> ParticipantId {
        self.next_id
    }

    /// Look up a participant.
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: ParticipantId) -> Result<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ShareError::unknown_participant(id))
    }

    /// Add a participant riding the full trip in every period.
    ///
    /// # Arguments
    /// * `name` - Display name, `Passenger {id}` when absent
    /// * `periods` - Current period count
    ///
    /// # Returns
    /// Id of the new participant, or an error once the id counter is used up
    pub fn add(&mut self, name: Option<String>, periods: usize) -> Result<ParticipantId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(id_space_exhausted)?;

        let name = name.unwrap_or_else(|| Participant::placeholder_name(id));
        debug!(id, name = %name, "Participant added");
        self.participants.push(Participant::new(id, name, periods));
        Ok(id)
    }

    /// Remove a participant, refusing to remove the last one.
    pub fn remove(&mut self, id: ParticipantId) -> Result<Participant> {
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ShareError::unknown_participant(id))?;

        if self.participants.len() == 1 {
            return Err(ShareError::LastParticipant);
        }

        debug!(id, "Participant removed");
        Ok(self.participants.remove(idx))
    }

    /// Change a participant's display name.
    pub fn rename(&mut self, id: ParticipantId, name: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Record how a participant rode in one period.
    pub fn set_status(
        &mut self,
        id: ParticipantId,
        period: usize,
        status: TripStatus,
    ) -> Result<()> {
        let participant = self.get_mut(id)?;
        let periods = participant.periods();
        let slot = participant
            .participation
            .get_mut(period)
            .ok_or_else(|| ShareError::period_out_of_range(period, periods))?;
        *slot = status;
        Ok(())
    }

    /// Record the same status for everyone in one period.
    pub fn set_period_status(&mut self, period: usize, status: TripStatus) -> Result<()> {
        for participant in &mut self.participants {
            let periods = participant.periods();
            let slot = participant
                .participation
                .get_mut(period)
                .ok_or_else(|| ShareError::period_out_of_range(period, periods))?;
            *slot = status;
        }
        Ok(())
    }

    /// Throw away all participation and refill every sequence with `periods` full trips.
    pub fn reset_participation(&mut self, periods: usize) {
        for participant in &mut self.participants {
            participant.reset_participation(periods);
        }
        debug!(periods, participants = self.participants.len(), "Participation reset");
    }

    /// Bring every sequence to exactly `periods` entries.
    ///
    /// Longer sequences keep their first `periods` entries. Shorter ones are
    /// reset to full trips.
    ///
    /// # Returns
    /// Ids of the participants whose sequence changed
    pub fn fit_participation(&mut self, periods: usize) -> Vec<ParticipantId> {
        let mut changed = Vec::new();
        for participant in &mut self.participants {
            let len = participant.periods();
            if len > periods {
                participant.participation.truncate(periods);
            } else if len < periods {
                participant.reset_participation(periods);
            } else {
                continue;
            }
            changed.push(participant.id);
        }
        changed
    }
}

fn id_space_exhausted() -> ShareError {
    ShareError::invalid_parameter("participant id space exhausted")
}
