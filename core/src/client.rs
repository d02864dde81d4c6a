//! Stateless HTTP request builder and response parser for the party API.
//!
//! # Design
//! `PartyClient` holds only the endpoint prefix and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse` and unwraps the `{ "data": ... }` envelope. The host runs
//! the round-trip in between.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Envelope, Guest, Party, PartyId, Rsvp, UpdateParty};

/// Synchronous, stateless client for the party API.
#[derive(Debug, Clone)]
pub struct PartyClient {
    endpoint: String,
}

impl PartyClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_list_parties(&self) -> HttpRequest {
        self.get("/events".to_string())
    }

    pub fn build_get_party(&self, id: PartyId) -> HttpRequest {
        self.get(format!("/events/{id}"))
    }

    pub fn build_list_rsvps(&self) -> HttpRequest {
        self.get("/rsvps".to_string())
    }

    pub fn build_list_guests(&self) -> HttpRequest {
        self.get("/guests".to_string())
    }

    pub fn build_update_party(&self, id: PartyId, input: &UpdateParty) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/events/{id}", self.endpoint),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_party(&self, id: PartyId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/events/{id}", self.endpoint),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_parties(&self, response: HttpResponse) -> Result<Vec<Party>, ApiError> {
        check_status(&response, &[200])?;
        unwrap_envelope(&response.body)
    }

    pub fn parse_get_party(&self, response: HttpResponse) -> Result<Party, ApiError> {
        check_status(&response, &[200])?;
        unwrap_envelope(&response.body)
    }

    pub fn parse_list_rsvps(&self, response: HttpResponse) -> Result<Vec<Rsvp>, ApiError> {
        check_status(&response, &[200])?;
        unwrap_envelope(&response.body)
    }

    pub fn parse_list_guests(&self, response: HttpResponse) -> Result<Vec<Guest>, ApiError> {
        check_status(&response, &[200])?;
        unwrap_envelope(&response.body)
    }

    pub fn parse_update_party(&self, response: HttpResponse) -> Result<Party, ApiError> {
        check_status(&response, &[200])?;
        unwrap_envelope(&response.body)
    }

    /// The body of a delete response is never read.
    pub fn parse_delete_party(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])
    }

    fn get(&self, resource: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{resource}", self.endpoint),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PartyClient {
        PartyClient::new(&ApiConfig::new("http://localhost:3000/api", "/demo"))
    }

    #[test]
    fn build_list_parties_produces_correct_request() {
        let req = client().build_list_parties();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/demo/events");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_party_produces_correct_request() {
        let req = client().build_get_party(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/demo/events/42");
    }

    #[test]
    fn build_collection_requests() {
        assert_eq!(client().build_list_rsvps().path, "http://localhost:3000/api/demo/rsvps");
        assert_eq!(client().build_list_guests().path, "http://localhost:3000/api/demo/guests");
    }

    #[test]
    fn build_update_party_produces_correct_request() {
        let input = UpdateParty {
            name: "Gala".to_string(),
            description: "Formal".to_string(),
            date: "2024-01-01T00:00:00.000Z".to_string(),
            location: "Hall".to_string(),
        };
        let req = client().build_update_party(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/demo/events/7");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Gala");
        assert_eq!(body["date"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn build_delete_party_produces_correct_request() {
        let req = client().build_delete_party(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/api/demo/events/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_parties_unwraps_envelope() {
        let response = HttpResponse::new(
            200,
            r#"{"success":true,"data":[{"id":1,"name":"Bash","description":"","date":"2023-10-01T00:00:00Z","location":"Home"}]}"#,
        );
        let parties = client().parse_list_parties(response).unwrap();
        assert_eq!(parties.len(), 1);
        assert_eq!(parties[0].name, "Bash");
    }

    #[test]
    fn parse_list_parties_rejects_bare_array() {
        let response = HttpResponse::new(200, "[]");
        let err = client().parse_list_parties(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_party_not_found() {
        let response = HttpResponse::new(404, r#"{"success":false,"error":{"message":"nope"}}"#);
        let err = client().parse_get_party(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_guests_server_error() {
        let response = HttpResponse::new(500, "boom");
        let err = client().parse_list_guests(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, ref body } if body == "boom"));
    }

    #[test]
    fn parse_list_rsvps_success() {
        let response = HttpResponse::new(200, r#"{"data":[{"id":9,"guestId":5,"eventId":1}]}"#);
        let rsvps = client().parse_list_rsvps(response).unwrap();
        assert_eq!(rsvps[0].guest_id, 5);
        assert_eq!(rsvps[0].id, Some(9));
    }

    #[test]
    fn parse_delete_party_accepts_204_and_200() {
        assert!(client().parse_delete_party(HttpResponse::new(204, "")).is_ok());
        assert!(client().parse_delete_party(HttpResponse::new(200, "whatever")).is_ok());
    }

    #[test]
    fn parse_delete_party_not_found() {
        let err = client().parse_delete_party(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
