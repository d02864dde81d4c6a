//! The controller: owns `AppState`, turns user events into requests, and
//! applies responses.
//!
//! # Design
//! `Planner` never performs I/O. Every call returns a list of [`Effect`]s
//! for the host: `Send` a request (tagged with a `RequestId`) or `Render` a
//! fresh tree into the mount point. The host reports each finished request
//! through [`Planner::complete`], which may yield more effects. The whole
//! thing runs on one thread; the only ordering hazard is the host completing
//! requests in a different order than they were sent.
//!
//! Startup loads parties, then RSVPs, then guests, each one sent only after
//! the previous one completed, and renders once more at the end. A failed
//! load leaves that slot empty and the sequence moves on.
//!
//! Each selection request gets a fresh id and only the newest one may set
//! the selected party, so a slow answer for an earlier click cannot replace
//! a later one.

use std::collections::HashMap;

use tracing::{debug, error, warn};

use crate::client::PartyClient;
use crate::dom::Node;
use crate::error::{ApiError, FetchError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::render::render;
use crate::state::AppState;
use crate::types::{PartyDraft, PartyId};

pub type RequestId = u64;

/// Work the host must carry out on the planner's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Send { id: RequestId, request: HttpRequest },
    /// Replace the contents of the mount point.
    Render(Vec<Node>),
}

/// User interactions, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectParty(PartyId),
    SaveParty(PartyDraft),
    DeleteParty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    ListParties,
    GetParty,
    ListRsvps,
    ListGuests,
    UpdateParty(PartyId),
    DeleteParty(PartyId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    LoadingParties,
    LoadingRsvps,
    LoadingGuests,
    Ready,
}

#[derive(Debug)]
pub struct Planner {
    client: PartyClient,
    state: AppState,
    pending: HashMap<RequestId, Pending>,
    next_id: RequestId,
    latest_selection: Option<RequestId>,
    phase: Phase,
}

impl Planner {
    pub fn new(client: PartyClient) -> Self {
        Self {
            client,
            state: AppState::default(),
            pending: HashMap::new(),
            next_id: 1,
            latest_selection: None,
            phase: Phase::Idle,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether the startup sequence has finished, successfully or not.
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Number of requests sent and not yet completed.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn render(&self) -> Vec<Node> {
        render(&self.state)
    }

    /// Begin the startup sequence. Calling it again once started does nothing.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Idle {
            warn!("planner already started");
            return Vec::new();
        }
        self.phase = Phase::LoadingParties;
        let request = self.client.build_list_parties();
        vec![self.send(Pending::ListParties, request)]
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::SelectParty(id) => {
                let request = self.client.build_get_party(id);
                let effect = self.send(Pending::GetParty, request);
                if let Effect::Send { id: request_id, .. } = &effect {
                    self.latest_selection = Some(*request_id);
                }
                vec![effect]
            }
            Event::SaveParty(draft) => {
                let Some(party_id) = self.state.selected_party.as_ref().map(|p| p.id) else {
                    debug!("save without a selected party ignored");
                    return Vec::new();
                };
                let request = draft
                    .into_update()
                    .and_then(|update| self.client.build_update_party(party_id, &update));
                match request {
                    Ok(request) => vec![self.send(Pending::UpdateParty(party_id), request)],
                    Err(e) => {
                        error!(party_id, error = %e, "could not build party update");
                        Vec::new()
                    }
                }
            }
            Event::DeleteParty => {
                let Some(party_id) = self.state.selected_party.as_ref().map(|p| p.id) else {
                    debug!("delete without a selected party ignored");
                    return Vec::new();
                };
                let request = self.client.build_delete_party(party_id);
                vec![self.send(Pending::DeleteParty(party_id), request)]
            }
        }
    }

    /// Apply the outcome of a request previously handed out in a `Send`.
    pub fn complete(&mut self, id: RequestId, result: Result<HttpResponse, TransportError>) -> Vec<Effect> {
        let Some(pending) = self.pending.remove(&id) else {
            warn!(request_id = id, "completion for unknown request");
            return Vec::new();
        };

        let mut effects = Vec::new();
        match pending {
            Pending::ListParties => {
                match fetch(result, |r| self.client.parse_list_parties(r)) {
                    Ok(parties) => {
                        debug!(count = parties.len(), "parties loaded");
                        self.state.set_parties(parties);
                        effects.push(self.render_effect());
                    }
                    Err(e) => error!(error = %e, "failed to fetch parties"),
                }
                if self.phase == Phase::LoadingParties {
                    self.phase = Phase::LoadingRsvps;
                    let request = self.client.build_list_rsvps();
                    effects.push(self.send(Pending::ListRsvps, request));
                }
            }
            Pending::ListRsvps => {
                match fetch(result, |r| self.client.parse_list_rsvps(r)) {
                    Ok(rsvps) => {
                        debug!(count = rsvps.len(), "rsvps loaded");
                        self.state.rsvps = rsvps;
                        effects.push(self.render_effect());
                    }
                    Err(e) => error!(error = %e, "failed to fetch rsvps"),
                }
                if self.phase == Phase::LoadingRsvps {
                    self.phase = Phase::LoadingGuests;
                    let request = self.client.build_list_guests();
                    effects.push(self.send(Pending::ListGuests, request));
                }
            }
            Pending::ListGuests => {
                match fetch(result, |r| self.client.parse_list_guests(r)) {
                    Ok(guests) => {
                        debug!(count = guests.len(), "guests loaded");
                        self.state.guests = guests;
                        effects.push(self.render_effect());
                    }
                    Err(e) => error!(error = %e, "failed to fetch guests"),
                }
                if self.phase == Phase::LoadingGuests {
                    self.phase = Phase::Ready;
                    effects.push(self.render_effect());
                }
            }
            Pending::GetParty => {
                if self.latest_selection != Some(id) {
                    debug!(request_id = id, "dropping superseded party response");
                    return effects;
                }
                self.latest_selection = None;
                match fetch(result, |r| self.client.parse_get_party(r)) {
                    Ok(party) => {
                        debug!(party_id = party.id, "party selected");
                        self.state.selected_party = Some(party);
                        effects.push(self.render_effect());
                    }
                    Err(e) => error!(error = %e, "failed to fetch party"),
                }
            }
            Pending::UpdateParty(party_id) => match fetch(result, |r| self.client.parse_update_party(r)) {
                Ok(party) => {
                    debug!(party_id, "party updated");
                    if self.state.is_selected(party.id) {
                        self.state.selected_party = Some(party);
                    }
                    let request = self.client.build_list_parties();
                    effects.push(self.send(Pending::ListParties, request));
                }
                Err(e) => error!(party_id, error = %e, "failed to update party"),
            },
            Pending::DeleteParty(party_id) => match fetch(result, |r| self.client.parse_delete_party(r)) {
                Ok(()) => {
                    debug!(party_id, "party deleted");
                    self.state.selected_party = None;
                    self.latest_selection = None;
                    let request = self.client.build_list_parties();
                    effects.push(self.send(Pending::ListParties, request));
                }
                Err(e) => error!(party_id, error = %e, "failed to delete party"),
            },
        }
        effects
    }

    fn send(&mut self, pending: Pending, request: HttpRequest) -> Effect {
        let id = self.next_id;
        self.next_id += 1;
        debug!(request_id = id, method = request.method.as_str(), path = %request.path, "sending request");
        self.pending.insert(id, pending);
        Effect::Send { id, request }
    }

    fn render_effect(&self) -> Effect {
        Effect::Render(self.render())
    }
}

fn fetch<T>(
    result: Result<HttpResponse, TransportError>,
    parse: impl FnOnce(HttpResponse) -> Result<T, ApiError>,
) -> Result<T, FetchError> {
    Ok(parse(result?)?)
}
