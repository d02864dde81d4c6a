//! A synchronous effect loop for hosts with a blocking HTTP stack.
//!
//! # Design
//! `Driver` pairs a `Planner` with a `Transport` (executes requests) and a
//! `Mount` (receives rendered trees). Effects are drained from a FIFO queue,
//! so a request is only executed after everything queued before it, and the
//! planner's startup order is preserved. Hosts with an async stack can skip
//! the driver and feed `Planner::complete` themselves.

use std::collections::VecDeque;

use tracing::debug;

use crate::dom::{Element, Intent, ListenerKind, Node};
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::planner::{Effect, Event, Planner};
use crate::view::read_party_form;

/// Executes one HTTP round-trip.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// The display surface: owns the mount point's children.
pub trait Mount {
    fn replace_children(&mut self, children: Vec<Node>);
}

pub struct Driver<T, M> {
    planner: Planner,
    transport: T,
    mount: M,
    queue: VecDeque<Effect>,
}

impl<T: Transport, M: Mount> Driver<T, M> {
    pub fn new(planner: Planner, transport: T, mount: M) -> Self {
        Self {
            planner,
            transport,
            mount,
            queue: VecDeque::new(),
        }
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Run the startup sequence to completion.
    pub fn start(&mut self) {
        let effects = self.planner.start();
        self.run(effects);
    }

    /// Feed one user event and run everything it causes.
    pub fn dispatch(&mut self, event: Event) {
        let effects = self.planner.handle(event);
        self.run(effects);
    }

    /// Fire `target`'s listener of the given kind, the way a browser would
    /// on click or submit. Returns false if the element has no such listener.
    pub fn trigger(&mut self, target: &Element, kind: ListenerKind) -> bool {
        let Some(listener) = target.listeners.iter().find(|l| l.kind == kind) else {
            return false;
        };
        let event = match listener.intent {
            Intent::SelectParty(party_id) => Event::SelectParty(party_id),
            Intent::SaveParty => Event::SaveParty(read_party_form(target)),
            Intent::DeleteParty => Event::DeleteParty,
        };
        self.dispatch(event);
        true
    }

    fn run(&mut self, effects: Vec<Effect>) {
        self.queue.extend(effects);
        while let Some(effect) = self.queue.pop_front() {
            match effect {
                Effect::Send { id, request } => {
                    let result = self.transport.execute(&request);
                    let next = self.planner.complete(id, result);
                    self.queue.extend(next);
                }
                Effect::Render(children) => {
                    debug!("mounting rendered tree");
                    self.mount.replace_children(children);
                }
            }
        }
    }
}
