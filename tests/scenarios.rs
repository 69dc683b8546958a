//! End-to-end flows through `handle_event`, with the host's answers faked.

mod common;

use common::*;
use reelscout::api::RequestKind;
use reelscout::app::pagination::GENERIC_ERROR;
use reelscout::app::state::{DetailState, DETAILS_ERROR};
use reelscout::ui::{DetailsView, ListStatus, ViewBody};
use reelscout::{Event, Route};
use serde_json::json;

fn result_ids(state: &reelscout::AppState) -> Vec<u64> {
    state.paginator.results().iter().map(|m| m.id).collect()
}

#[test]
fn empty_query_at_load_discovers_popular_movies() {
    let mut state = configured_state();

    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    let discover = requests(&actions)
        .into_iter()
        .find(|r| matches!(r.context.kind, RequestKind::MoviePage { .. }))
        .unwrap();
    assert!(is_get(&discover, &format!("{TMDB}/discover/movie?sort_by=popularity.desc&page=1")));
    assert_eq!(
        discover.request.headers.get("Authorization").map(String::as_str),
        Some("Bearer test-token")
    );

    let (render, actions) = respond(&mut state, &discover, 200, &page(1..21, 10));
    assert!(render);
    assert!(actions.is_empty(), "discover results are never recorded");
    assert_eq!(result_ids(&state), (1..21).collect::<Vec<_>>());
    assert_eq!(state.paginator.total_pages(), 10);
}

#[test]
fn nothing_is_fetched_before_web_access() {
    let mut state = configured_state();

    let actions = type_and_settle(&mut state, "alien");
    assert!(requests(&actions).is_empty());

    let (_, actions) = send(&mut state, Event::PermissionsDenied);
    assert!(actions.is_empty());
    assert!(state.paginator.results().is_empty());
}

#[test]
fn typing_batman_searches_and_records_the_top_result() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    let actions = type_and_settle(&mut state, "batman");
    let search = only_request(&actions);
    assert!(is_get(&search, &format!("{TMDB}/search/movie?query=batman&page=1")));
    assert_eq!(state.paginator.query(), "batman");
    assert_eq!(state.paginator.page(), 1);

    let (_, actions) = respond(&mut state, &search, 200, &page(100..110, 3));
    assert_eq!(result_ids(&state), (100..110).collect::<Vec<_>>());
    assert_eq!(state.selected_index, 0);

    let lookup = only_request(&actions);
    assert_eq!(
        lookup.context.kind,
        RequestKind::SearchCountLookup {
            term: "batman".to_string(),
            movie_id: 100,
            poster_url: "https://image.tmdb.org/t/p/w500/poster100.jpg".to_string(),
        }
    );
}

#[test]
fn only_the_last_keystroke_commits() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    send(&mut state, Event::FocusSearch);
    send(&mut state, Event::Char('b'));
    send(&mut state, Event::Char('a'));

    let (_, actions) = send(&mut state, Event::DebounceTimerFired);
    assert!(actions.is_empty(), "superseded timer must not commit");
    assert_eq!(state.paginator.query(), "");

    let (_, actions) = send(&mut state, Event::DebounceTimerFired);
    let search = only_request(&actions);
    assert!(is_get(&search, &format!("{TMDB}/search/movie?query=ba&page=1")));
}

#[test]
fn search_without_results_records_nothing_and_loads_no_more() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    let search = only_request(&type_and_settle(&mut state, "zzzz"));
    let (_, actions) = respond(&mut state, &search, 200, &json!({"results": [], "total_pages": 0}));

    assert!(actions.is_empty());
    assert!(state.paginator.results().is_empty());

    let (_, actions) = send(&mut state, Event::KeyDown);
    assert!(requests(&actions).is_empty(), "a search without pages has nothing to load");
    assert_eq!(state.paginator.page(), 1);
    let ViewBody::List(list) = state.compute_viewmodel(30, 100).body else {
        panic!("expected the list view");
    };
    assert_ne!(list.status, ListStatus::LoadingMore);
}

#[test]
fn scrolling_to_85_percent_fetches_and_appends_page_two() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));
    assert_eq!(state.viewport_rows, 10);

    let (_, actions) = send(&mut state, Event::MouseScroll(5));
    assert!(requests(&actions).is_empty(), "75% is not near the bottom");

    let (_, actions) = send(&mut state, Event::MouseScroll(2));
    let next = only_request(&actions);
    assert!(is_get(&next, &format!("{TMDB}/discover/movie?sort_by=popularity.desc&page=2")));
    assert_eq!(state.paginator.page(), 2);

    let (_, actions) = send(&mut state, Event::MouseScroll(3));
    assert!(requests(&actions).is_empty(), "no advance while a fetch is in flight");
    assert_eq!(state.paginator.page(), 2);

    let (_, actions) = respond(&mut state, &next, 200, &page(21..41, 10));
    assert!(actions.is_empty());
    assert_eq!(result_ids(&state), (1..41).collect::<Vec<_>>());
}

#[test]
fn last_page_is_never_exceeded() {
    let mut state = configured_state();
    start(&mut state, &page(1..6, 1));

    let (_, actions) = send(&mut state, Event::KeyDown);
    assert!(requests(&actions).is_empty());
    send(&mut state, Event::PageDown);
    assert_eq!(state.paginator.page(), 1);
    assert!(state.paginator.reached_end());
}

#[test]
fn server_error_keeps_the_list_and_shows_the_message() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    let (_, actions) = send(&mut state, Event::MouseScroll(7));
    let next = only_request(&actions);

    let (render, actions) = respond(&mut state, &next, 500, &json!({"status_message": "Internal error"}));
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.paginator.error_message(), Some(GENERIC_ERROR));
    assert!(!state.paginator.is_loading());
    assert_eq!(result_ids(&state), (1..21).collect::<Vec<_>>());

    let ViewBody::List(list) = state.compute_viewmodel(30, 100).body else {
        panic!("expected the list view");
    };
    assert_eq!(list.error.as_deref(), Some(GENERIC_ERROR));
    assert!(!list.items.is_empty());
    assert!(list.empty_state.is_none());
}

#[test]
fn failed_page_stops_further_scrolling() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    let (_, actions) = send(&mut state, Event::MouseScroll(7));
    let next = only_request(&actions);
    respond(&mut state, &next, 500, &json!({}));

    let (_, actions) = send(&mut state, Event::KeyDown);
    assert!(requests(&actions).is_empty());
    let (_, actions) = send(&mut state, Event::MouseScroll(7));
    assert!(requests(&actions).is_empty());
    assert_eq!(state.paginator.page(), 2);
    assert_eq!(state.paginator.error_message(), Some(GENERIC_ERROR));
    assert_eq!(result_ids(&state), (1..21).collect::<Vec<_>>());
}

#[test]
fn failed_first_page_of_a_search_keeps_the_previous_list() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    let search = only_request(&type_and_settle(&mut state, "dune"));
    assert!(is_get(&search, &format!("{TMDB}/search/movie?query=dune&page=1")));
    let (render, actions) = respond(&mut state, &search, 500, &json!({}));

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.paginator.error_message(), Some(GENERIC_ERROR));
    assert!(!state.paginator.is_loading());
    assert_eq!(result_ids(&state), (1..21).collect::<Vec<_>>());

    let (_, actions) = send(&mut state, Event::MouseScroll(7));
    assert!(requests(&actions).is_empty(), "the failed search is not continued");
    assert_eq!(state.paginator.page(), 1);
    assert_eq!(result_ids(&state), (1..21).collect::<Vec<_>>());
}

#[test]
fn query_committed_during_a_fetch_waits_and_discards_the_stale_page() {
    let mut state = configured_state();
    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    let discover = requests(&actions)
        .into_iter()
        .find(|r| matches!(r.context.kind, RequestKind::MoviePage { .. }))
        .unwrap();

    let actions = type_and_settle(&mut state, "dune");
    assert!(requests(&actions).is_empty(), "one fetch in flight at a time");

    let (_, actions) = respond(&mut state, &discover, 200, &page(1..21, 10));
    assert!(state.paginator.results().is_empty(), "stale discover page is not applied");
    let search = only_request(&actions);
    assert!(is_get(&search, &format!("{TMDB}/search/movie?query=dune&page=1")));

    respond(&mut state, &search, 200, &page(50..52, 1));
    assert_eq!(result_ids(&state), vec![50, 51]);
}

#[test]
fn duplicate_response_is_ignored() {
    let mut state = configured_state();
    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    let discover = only_request(
        &actions
            .into_iter()
            .filter(|a| !matches!(a, reelscout::Action::Request(r) if r.context.kind == RequestKind::Trending))
            .collect::<Vec<_>>(),
    );

    respond(&mut state, &discover, 200, &page(1..4, 1));
    let (render, _) = respond(&mut state, &discover, 200, &page(7..9, 1));
    assert!(!render);
    assert_eq!(result_ids(&state), vec![1, 2, 3]);
}

#[test]
fn opening_details_loads_the_selected_movie() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));
    send(&mut state, Event::KeyDown);

    let (_, actions) = send(&mut state, Event::OpenSelected);
    let details = only_request(&actions);
    assert!(is_get(&details, &format!("{TMDB}/movie/2?language=en-US")));
    assert_eq!(state.route, Route::Details { movie_id: 2 });

    respond(
        &mut state,
        &details,
        200,
        &json!({
            "id": 2,
            "title": "Movie 2",
            "tagline": "Why so serious?",
            "overview": "A long story.",
            "vote_average": 8.5,
            "release_date": "2008-07-18",
            "runtime": 152,
            "genres": [{"id": 18, "name": "Drama"}],
        }),
    );
    let DetailState::Loaded(loaded) = &state.details else {
        panic!("expected loaded details, got {:?}", state.details);
    };
    assert_eq!(loaded.runtime, Some(152));

    let ViewBody::Details(DetailsView::Loaded(info)) = state.compute_viewmodel(30, 100).body else {
        panic!("expected loaded details view");
    };
    assert_eq!(info.meta, "★ 8.5 • 2008 • 152 min");
    assert_eq!(info.genres, vec!["Drama".to_string()]);
}

#[test]
fn details_failure_shows_the_message() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    let details = only_request(&send(&mut state, Event::OpenSelected).1);
    respond(&mut state, &details, 404, &json!({"status_code": 34}));

    assert_eq!(state.details, DetailState::Failed);
    let ViewBody::Details(DetailsView::Failed(message)) = state.compute_viewmodel(30, 100).body else {
        panic!("expected failed details view");
    };
    assert_eq!(message, DETAILS_ERROR);
}

#[test]
fn back_keeps_the_list_and_drops_late_details() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));
    send(&mut state, Event::PageDown);
    let selected = state.selected_index;

    let first = only_request(&send(&mut state, Event::OpenSelected).1);
    let (render, actions) = send(&mut state, Event::Backspace);
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.route, Route::List);
    assert_eq!(state.selected_index, selected);
    assert_eq!(state.paginator.results().len(), 20);

    send(&mut state, Event::KeyDown);
    let second = only_request(&send(&mut state, Event::OpenSelected).1);

    let (render, _) = respond(&mut state, &first, 200, &json!({"id": 11, "title": "Movie 11"}));
    assert!(!render, "response for a movie no longer shown is ignored");

    respond(&mut state, &second, 200, &json!({"id": 12, "title": "Movie 12"}));
    assert!(matches!(&state.details, DetailState::Loaded(d) if d.id == 12));

    send(&mut state, Event::Back);
    let (render, _) = respond(&mut state, &second, 200, &json!({"id": 12, "title": "Movie 12"}));
    assert!(!render);
    assert_eq!(state.details, DetailState::Idle);
}

#[test]
fn trending_keeps_the_top_five_by_count() {
    let mut state = configured_state();
    let trending = start(&mut state, &page(1..21, 10));

    let documents: Vec<_> = [3, 9, 1, 7, 5, 8, 2]
        .iter()
        .enumerate()
        .map(|(i, count)| json!({"$id": format!("doc{i}"), "searchTerm": format!("term{count}"), "count": count}))
        .collect();
    let (render, _) = respond(&mut state, &trending, 200, &json!({"total": 7, "documents": documents}));
    assert!(render);

    let counts: Vec<u64> = state.trending.iter().map(|t| t.count).collect();
    assert_eq!(counts, vec![9, 8, 7, 5, 3]);

    let ViewBody::List(list) = state.compute_viewmodel(30, 100).body else {
        panic!("expected the list view");
    };
    assert_eq!(list.trending.len(), 5);
    assert_eq!(list.trending[0].rank, 1);
    assert_eq!(list.trending[0].label, "term9");
}

#[test]
fn trending_failure_is_silent() {
    let mut state = configured_state();
    let trending = start(&mut state, &page(1..21, 10));

    let (render, actions) = respond(&mut state, &trending, 503, &json!({"message": "unavailable"}));
    assert!(!render);
    assert!(actions.is_empty());
    assert!(state.trending.is_empty());
    assert_eq!(state.paginator.error_message(), None);
}

#[test]
fn trending_is_requested_once() {
    let mut state = configured_state();
    start(&mut state, &page(1..21, 10));

    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    assert!(requests(&actions)
        .iter()
        .all(|r| r.context.kind != RequestKind::Trending));
}

#[test]
fn foreign_context_is_an_error() {
    let mut state = configured_state();
    let result = reelscout::handle_event(
        &mut state,
        &Event::HttpResponse {
            status: 200,
            body: vec![],
            context: std::collections::BTreeMap::new(),
        },
    );
    assert!(matches!(result, Err(reelscout::ReelscoutError::Context(_))));
}
