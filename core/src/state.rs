//! Application state.
//!
//! One `AppState` value is owned by the `Planner` and lent to the views and
//! the renderer. Nothing here talks to the network.

use tracing::debug;

use crate::types::{Guest, Party, PartyId, Rsvp};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// All parties, in the order the API returned them.
    pub parties: Vec<Party>,
    pub selected_party: Option<Party>,
    pub rsvps: Vec<Rsvp>,
    pub guests: Vec<Guest>,
}

impl AppState {
    pub fn is_selected(&self, id: PartyId) -> bool {
        self.selected_party.as_ref().is_some_and(|p| p.id == id)
    }

    /// Replace the party collection.
    ///
    /// A selection whose id is missing from the new collection is cleared.
    pub fn set_parties(&mut self, parties: Vec<Party>) {
        self.parties = parties;
        if let Some(selected) = &self.selected_party {
            if !self.parties.iter().any(|p| p.id == selected.id) {
                debug!(party_id = selected.id, "selected party no longer listed, clearing selection");
                self.selected_party = None;
            }
        }
    }

    /// Guests holding an RSVP for `party_id`, in guest collection order.
    pub fn guests_at_party(&self, party_id: PartyId) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|guest| {
                self.rsvps
                    .iter()
                    .any(|rsvp| rsvp.guest_id == guest.id && rsvp.event_id == party_id)
            })
            .collect()
    }
}
