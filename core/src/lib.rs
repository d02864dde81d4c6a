//! Party planner front-end core.
//!
//! # Overview
//! Fetches parties, RSVPs, and guests from the party REST API, keeps them in
//! an `AppState`, and renders the whole page as a document tree after every
//! change. A selected party can be edited or deleted.
//!
//! # Design
//! - Host-does-IO: `PartyClient` builds `HttpRequest` values and parses
//!   `HttpResponse` values; the `Planner` emits them as `Effect`s and never
//!   touches the network.
//! - `Planner` owns the state; views and the renderer only borrow it.
//! - Rendering rebuilds the full tree each time (`render::render`).
//! - Failures are logged through `tracing` and otherwise ignored; the page
//!   keeps whatever it showed before.
//! - `Driver` runs the effect loop for hosts with a blocking transport.

pub mod client;
pub mod config;
pub mod dom;
pub mod driver;
pub mod error;
pub mod http;
pub mod planner;
pub mod render;
pub mod state;
pub mod types;
pub mod view;

pub use client::PartyClient;
pub use config::ApiConfig;
pub use dom::{Element, Intent, ListenerKind, Node};
pub use driver::{Driver, Mount, Transport};
pub use error::{ApiError, FetchError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use planner::{Effect, Event, Planner, RequestId};
pub use state::AppState;
pub use types::{Guest, Party, PartyDraft, PartyId, Rsvp, UpdateParty};
