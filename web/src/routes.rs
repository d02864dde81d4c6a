//! Browser-facing routes.
//!
//! Every route locks the session, feeds one planner event through the
//! blocking driver, and answers with the freshly rendered document or a
//! redirect back to it. Requests to the party API run on the blocking pool.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use party_core::{Driver, Event, PartyDraft, PartyId, Transport};
use serde::Deserialize;
use tracing::error;

use crate::page::HtmlMount;
use crate::HostError;

pub type Session<T> = Arc<Mutex<Driver<T, HtmlMount>>>;

pub fn session<T: Transport>(driver: Driver<T, HtmlMount>) -> Session<T> {
    Arc::new(Mutex::new(driver))
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub party: Option<PartyId>,
}

pub fn app<T: Transport + Send + 'static>(session: Session<T>) -> Router {
    Router::new()
        .route("/", get(index::<T>))
        .route("/save", post(save::<T>))
        .route("/delete", post(delete::<T>))
        .with_state(session)
}

/// Run the planner's startup sequence.
pub async fn start<T: Transport + Send + 'static>(session: Session<T>) -> Result<(), HostError> {
    with_driver(session, |driver| driver.start())
        .await
        .map_err(|status| HostError::Startup(status.to_string()))
}

async fn index<T: Transport + Send + 'static>(
    State(session): State<Session<T>>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    let document = with_driver(session, move |driver| {
        if let Some(id) = query.party {
            driver.dispatch(Event::SelectParty(id));
        }
        driver.mount().document()
    })
    .await?;
    Ok(Html(document))
}

async fn save<T: Transport + Send + 'static>(
    State(session): State<Session<T>>,
    Form(draft): Form<PartyDraft>,
) -> Result<Redirect, StatusCode> {
    with_driver(session, move |driver| driver.dispatch(Event::SaveParty(draft))).await?;
    Ok(Redirect::to("/#selected"))
}

async fn delete<T: Transport + Send + 'static>(State(session): State<Session<T>>) -> Result<Redirect, StatusCode> {
    with_driver(session, |driver| driver.dispatch(Event::DeleteParty)).await?;
    Ok(Redirect::to("/"))
}

async fn with_driver<T, R>(
    session: Session<T>,
    f: impl FnOnce(&mut Driver<T, HtmlMount>) -> R + Send + 'static,
) -> Result<R, StatusCode>
where
    T: Transport + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut driver = session.lock().map_err(|_| {
            error!("session lock poisoned");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        Ok(f(&mut driver))
    })
    .await
    .map_err(|e| {
        error!(error = %e, "driver task failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?
}
