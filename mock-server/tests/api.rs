use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Envelope, Guest, Party, Rsvp, Store};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_parties_empty() {
    let resp = app().oneshot(get("/api/demo/events")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let parties: Envelope<Vec<Party>> = body_json(resp).await;
    assert!(parties.data.is_empty());
}

#[tokio::test]
async fn list_parties_seeded_in_id_order() {
    let resp = app_with(Store::seeded())
        .oneshot(get("/api/demo/events"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let parties: Envelope<Vec<Party>> = body_json(resp).await;
    let ids: Vec<_> = parties.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn list_guests_and_rsvps() {
    let app = app_with(Store::seeded());

    let resp = app.clone().oneshot(get("/api/demo/guests")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let guests: Envelope<Vec<Guest>> = body_json(resp).await;
    assert_eq!(guests.data.len(), 3);

    let resp = app.oneshot(get("/api/demo/rsvps")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["data"][0]["guestId"], 1);
    assert_eq!(body["data"][0]["eventId"], 1);
}

// --- get ---

#[tokio::test]
async fn get_party_found() {
    let resp = app_with(Store::seeded())
        .oneshot(get("/api/demo/events/2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let party: Envelope<Party> = body_json(resp).await;
    assert_eq!(party.data.name, "Winter Gala");
}

#[tokio::test]
async fn get_party_not_found() {
    let resp = app().oneshot(get("/api/demo/events/42")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["message"], "Event 42 not found");
}

#[tokio::test]
async fn get_party_bad_id_returns_400() {
    let resp = app().oneshot(get("/api/demo/events/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_party_partial() {
    let resp = app_with(Store::seeded())
        .oneshot(json_request("PUT", "/api/demo/events/1", r#"{"location":"Cellar"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let party: Envelope<Party> = body_json(resp).await;
    assert_eq!(party.data.location, "Cellar");
    assert_eq!(party.data.name, "Harvest Moon Bash");
}

#[tokio::test]
async fn update_party_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/demo/events/1", r#"{"name":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_party_not_found() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/demo/events/1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- lifecycle ---

#[tokio::test]
async fn delete_removes_party_and_its_rsvps() {
    use tower::Service;

    let mut app = app_with(Store::seeded()).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/api/demo/events/1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete: 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/demo/events/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete: two left
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/demo/events"))
        .await
        .unwrap();
    let parties: Envelope<Vec<Party>> = body_json(resp).await;
    let ids: Vec<_> = parties.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, [2, 3]);

    // rsvps for the deleted party are gone
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/demo/rsvps"))
        .await
        .unwrap();
    let rsvps: Envelope<Vec<Rsvp>> = body_json(resp).await;
    assert!(rsvps.data.iter().all(|r| r.event_id != 1));
    assert_eq!(rsvps.data.len(), 2);
}
