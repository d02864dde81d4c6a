//! Domain DTOs for the party API.
//!
//! # Design
//! These types mirror the remote API's JSON (camelCase keys, integer ids) but
//! are defined independently from the mock-server crate. Integration tests
//! catch any schema drift between the two.
//!
//! Every successful response wraps its payload in `{ "data": ... }`; the
//! envelope is unwrapped by `PartyClient` and never leaves this crate.

use chrono::{DateTime, NaiveDate, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

pub type PartyId = u64;
pub type GuestId = u64;

/// A party (an "event" on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// ISO-8601 date-time as sent by the server.
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

/// Optional text fields arrive either absent or as `null`; both read as "".
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Party {
    /// Calendar-date portion of `date` (`YYYY-MM-DD`), time of day dropped.
    ///
    /// RFC 3339 input keeps the date as written in its own offset. Anything
    /// else is cut at ten characters.
    pub fn calendar_date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.date) {
            Ok(parsed) => parsed.date_naive().to_string(),
            Err(_) => self.date.get(..10).unwrap_or(&self.date).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Join record between a guest and a party.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub guest_id: GuestId,
    pub event_id: PartyId,
}

/// Request payload for `PUT /events/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateParty {
    pub name: String,
    pub description: String,
    /// RFC 3339 UTC timestamp.
    pub date: String,
    pub location: String,
}

/// The values of the party detail form, as the user typed them.
///
/// `date` is a calendar date (`YYYY-MM-DD`), the value a date input yields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartyDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
}

impl PartyDraft {
    /// Convert to the wire payload, placing the party at midnight UTC.
    pub fn into_update(self) -> Result<UpdateParty, ApiError> {
        let day = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::InvalidDate(self.date.clone()))?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ApiError::InvalidDate(self.date.clone()))?
            .and_utc();

        Ok(UpdateParty {
            name: self.name,
            description: self.description,
            date: midnight.to_rfc3339_opts(SecondsFormat::Millis, true),
            location: self.location,
        })
    }
}

/// `{ "data": ... }` wrapper around every successful payload.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}
