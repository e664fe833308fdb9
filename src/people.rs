//! Person lookup against the directory API.
//!
//! A spec naming a registered user (login or uid) resolves to that
//! account's profile. A spec naming an unrecognized commit-author email
//! still succeeds: the service answers with a transient person carrying
//! `uid == 0` and whatever name it could derive.

use crate::client::{Client, ResponseMeta};
use crate::error::RosterResult;
use crate::model::{Person, PersonSpec};

/// Fetch the person addressed by `spec`.
///
/// One synchronous GET; no caching, no retries. The returned
/// [`ResponseMeta`] carries the status line, final URL, and response
/// headers for diagnostics.
pub fn get(client: &Client, spec: &PersonSpec) -> RosterResult<(Person, ResponseMeta)> {
    let url = client.person_url(spec)?;
    client.get_json(&url)
}
