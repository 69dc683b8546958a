//! Shared helpers for driving `handle_event` without the Zellij host.

#![allow(dead_code)]

use reelscout::api::{HttpMethod, OutboundRequest, RequestKind};
use reelscout::{handle_event, initialize, Action, AppState, Config, Event};
use serde_json::{json, Value};

pub const TMDB: &str = "https://api.themoviedb.org/3";

pub fn configured_state() -> AppState {
    initialize(&Config {
        tmdb_token: Some("test-token".to_string()),
        appwrite_project: Some("proj".to_string()),
        appwrite_database: Some("db".to_string()),
        appwrite_collection: Some("metrics".to_string()),
        ..Config::default()
    })
}

pub fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

pub fn requests(actions: &[Action]) -> Vec<OutboundRequest> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::Request(request) => Some(request.clone()),
            _ => None,
        })
        .collect()
}

pub fn only_request(actions: &[Action]) -> OutboundRequest {
    let mut found = requests(actions);
    assert_eq!(found.len(), 1, "expected exactly one request in {actions:?}");
    found.remove(0)
}

/// Feeds `body` back as the host's answer to `request`.
pub fn respond(state: &mut AppState, request: &OutboundRequest, status: u16, body: &Value) -> (bool, Vec<Action>) {
    send(
        state,
        Event::HttpResponse {
            status,
            body: body.to_string().into_bytes(),
            context: request.context.to_map().unwrap(),
        },
    )
}

pub fn movie(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Movie {id}"),
        "poster_path": format!("/poster{id}.jpg"),
        "vote_average": 7.25,
        "release_date": "2008-07-18",
        "original_language": "en",
    })
}

pub fn page(ids: std::ops::Range<u64>, total_pages: u32) -> Value {
    json!({
        "page": 1,
        "results": ids.map(movie).collect::<Vec<_>>(),
        "total_pages": total_pages,
    })
}

/// Grants web access and answers the initial discover request with `body`.
/// Returns the trending request issued alongside it.
pub fn start(state: &mut AppState, body: &Value) -> OutboundRequest {
    let (_, actions) = send(state, Event::PermissionsGranted);
    let issued = requests(&actions);
    let discover = issued
        .iter()
        .find(|r| matches!(r.context.kind, RequestKind::MoviePage { .. }))
        .unwrap()
        .clone();
    let trending = issued
        .iter()
        .find(|r| r.context.kind == RequestKind::Trending)
        .unwrap()
        .clone();
    respond(state, &discover, 200, body);
    trending
}

/// Types `text` into the search box and lets every debounce timer expire.
/// Returns the actions of the final expiry.
pub fn type_and_settle(state: &mut AppState, text: &str) -> Vec<Action> {
    send(state, Event::FocusSearch);
    let mut timers = 0;
    for c in text.chars() {
        let (_, actions) = send(state, Event::Char(c));
        assert!(matches!(actions[..], [Action::StartTimer(_)]));
        timers += 1;
    }

    let mut last = vec![];
    for _ in 0..timers {
        let (_, actions) = send(state, Event::DebounceTimerFired);
        last = actions;
    }
    last
}

pub fn is_get(request: &OutboundRequest, url: &str) -> bool {
    request.request.method == HttpMethod::Get && request.request.url == url
}
