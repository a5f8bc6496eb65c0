//! REST API helpers for the photo and show listing endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `None` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so listing failures
//! degrade to an empty view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Photo;

/// Base address of the REST API, fixed at build time.
const API_BASE: &str = match option_env!("ENCORE_API_URL") {
    Some(base) => base,
    None => "/api",
};

/// Build a full API URL from a path like `/auth/login`.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", API_BASE.trim_end_matches('/'))
}

/// Percent-encode a query-string value (RFC 3986 unreserved set kept).
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Thumbnail URL for a photo, templated from the configured API base.
pub fn photo_thumbnail_url(photo_id: i64) -> String {
    api_url(&format!("/photos/{photo_id}/thumbnail"))
}

/// Fetch the signed-in user's photos from `GET /photos`.
/// Returns `None` on failure or on the server.
pub async fn fetch_photos() -> Option<Vec<Photo>> {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::token::{BrowserTokens, TokenStore};

        let mut req = gloo_net::http::Request::get(&api_url("/photos"));
        if let Some(token) = BrowserTokens.get() {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::PhotoList>().await.ok().map(|l| l.photos)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Photos taken at one show, for the grouped gallery view.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowGroup {
    pub show_id: i64,
    pub artist_name: String,
    pub venue_name: String,
    pub show_date: String,
    pub photos: Vec<Photo>,
}

/// Group a photo listing by show, preserving first-seen order.
///
/// Missing artist/venue names fall back to placeholders so the group header
/// always renders.
pub fn group_photos_by_show(photos: Vec<Photo>) -> Vec<ShowGroup> {
    let mut groups: Vec<ShowGroup> = Vec::new();
    for photo in photos {
        match groups.iter_mut().find(|g| g.show_id == photo.show_id) {
            Some(group) => group.photos.push(photo),
            None => groups.push(ShowGroup {
                show_id: photo.show_id,
                artist_name: photo
                    .artist_name
                    .clone()
                    .unwrap_or_else(|| "Unknown Artist".to_owned()),
                venue_name: photo
                    .venue_name
                    .clone()
                    .unwrap_or_else(|| "Unknown Venue".to_owned()),
                show_date: photo.show_date.clone().unwrap_or_default(),
                photos: vec![photo],
            }),
        }
    }
    groups
}
