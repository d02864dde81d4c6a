//! Browser host for the party planner.
//!
//! Owns one `Driver` (planner + ureq transport + HTML mount point) behind a
//! mutex and serves the rendered page. Links and forms in the page map back
//! onto planner events: `?party={id}` selects, `POST /save` updates,
//! `POST /delete` deletes.

pub mod config;
pub mod page;
pub mod routes;
pub mod transport;

use thiserror::Error;

pub use config::HostConfig;
pub use page::HtmlMount;
pub use routes::{app, session, start, Session};
pub use transport::UreqTransport;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("startup failed: {0}")]
    Startup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
