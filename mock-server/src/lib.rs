use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Party {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: u64,
    pub guest_id: u64,
    pub event_id: u64,
}

#[derive(Deserialize)]
pub struct UpdateParty {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// `{ "data": ... }`
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Clone, Debug, Default)]
pub struct Store {
    pub parties: BTreeMap<u64, Party>,
    pub guests: Vec<Guest>,
    pub rsvps: Vec<Rsvp>,
}

impl Store {
    /// A small data set for local development.
    pub fn seeded() -> Self {
        let parties = [
            (1, "Harvest Moon Bash", "Lanterns, cider, and a bonfire.", "2025-10-04T00:00:00.000Z", "Orchard Barn"),
            (2, "Winter Gala", "Black tie optional.", "2025-12-13T00:00:00.000Z", "Grand Hall"),
            (3, "Spring Picnic", "Bring a blanket.", "2026-04-18T00:00:00.000Z", "Riverside Park"),
        ]
        .into_iter()
        .map(|(id, name, description, date, location)| {
            (
                id,
                Party {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    date: date.to_string(),
                    location: location.to_string(),
                },
            )
        })
        .collect();

        let guests = [(1, "Ada Lovelace"), (2, "Grace Hopper"), (3, "Alan Turing")]
            .into_iter()
            .map(|(id, name): (u64, &str)| Guest {
                id,
                name: name.to_string(),
                email: format!("{}@example.com", name.split(' ').next().unwrap_or(name).to_lowercase()),
                phone: format!("555-010{id}"),
            })
            .collect();

        let rsvps = [(1, 1, 1), (2, 2, 1), (3, 3, 2), (4, 1, 3)]
            .into_iter()
            .map(|(id, guest_id, event_id)| Rsvp { id, guest_id, event_id })
            .collect();

        Self {
            parties,
            guests,
            rsvps,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Router over an empty store.
pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/{cohort}/events", get(list_parties))
        .route(
            "/api/{cohort}/events/{id}",
            get(get_party).put(update_party).delete(delete_party),
        )
        .route("/api/{cohort}/rsvps", get(list_rsvps))
        .route("/api/{cohort}/guests", get(list_guests))
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

fn not_found(id: u64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": { "message": format!("Event {id} not found") } })),
    )
        .into_response()
}

async fn list_parties(State(db): State<Db>) -> Json<Envelope<Vec<Party>>> {
    let store = db.read().await;
    Json(Envelope {
        data: store.parties.values().cloned().collect(),
    })
}

async fn get_party(State(db): State<Db>, Path((_cohort, id)): Path<(String, u64)>) -> Response {
    let store = db.read().await;
    match store.parties.get(&id) {
        Some(party) => Json(Envelope { data: party.clone() }).into_response(),
        None => not_found(id),
    }
}

async fn update_party(
    State(db): State<Db>,
    Path((_cohort, id)): Path<(String, u64)>,
    Json(input): Json<UpdateParty>,
) -> Response {
    let mut store = db.write().await;
    let Some(party) = store.parties.get_mut(&id) else {
        return not_found(id);
    };
    if let Some(name) = input.name {
        party.name = name;
    }
    if let Some(description) = input.description {
        party.description = description;
    }
    if let Some(date) = input.date {
        party.date = date;
    }
    if let Some(location) = input.location {
        party.location = location;
    }
    debug!(id, "party updated");
    Json(Envelope { data: party.clone() }).into_response()
}

async fn delete_party(State(db): State<Db>, Path((_cohort, id)): Path<(String, u64)>) -> Response {
    let mut store = db.write().await;
    if store.parties.remove(&id).is_none() {
        return not_found(id);
    }
    store.rsvps.retain(|rsvp| rsvp.event_id != id);
    debug!(id, "party deleted");
    StatusCode::NO_CONTENT.into_response()
}

async fn list_rsvps(State(db): State<Db>) -> Json<Envelope<Vec<Rsvp>>> {
    let store = db.read().await;
    Json(Envelope {
        data: store.rsvps.clone(),
    })
}

async fn list_guests(State(db): State<Db>) -> Json<Envelope<Vec<Guest>>> {
    let store = db.read().await;
    Json(Envelope {
        data: store.guests.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsvp_serializes_camel_case() {
        let rsvp = Rsvp {
            id: 1,
            guest_id: 5,
            event_id: 9,
        };
        let json = serde_json::to_value(&rsvp).unwrap();
        assert_eq!(json["guestId"], 5);
        assert_eq!(json["eventId"], 9);
    }

    #[test]
    fn envelope_wraps_payload() {
        let json = serde_json::to_string(&Envelope { data: vec![1, 2] }).unwrap();
        assert_eq!(json, r#"{"data":[1,2]}"#);
    }

    #[test]
    fn update_party_all_fields_optional() {
        let input: UpdateParty = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        assert!(input.date.is_none());
    }

    #[test]
    fn seeded_rsvps_reference_existing_records() {
        let store = Store::seeded();
        for rsvp in &store.rsvps {
            assert!(store.parties.contains_key(&rsvp.event_id));
            assert!(store.guests.iter().any(|g| g.id == rsvp.guest_id));
        }
        assert_eq!(store.guests[0].email, "ada@example.com");
    }
}
