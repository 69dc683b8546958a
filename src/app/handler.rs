//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer expiries and web responses, translating them into state changes
//! and action sequences. It serves as the primary control flow coordinator
//! for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (keys, mouse, timers, web responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its controllers
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `PageDown`, `PageUp`, `MouseScroll`
//! - **Input**: `Char`, `Backspace`, `FocusSearch`, `LeaveSearch`
//! - **Routing**: `OpenSelected`, `Back`, `CloseFocus`
//! - **Host**: `DebounceTimerFired`, `PermissionsGranted`, `PermissionsDenied`,
//!   `HttpResponse`
//!
//! Every navigation event counts as a scroll event and may advance the page.

use crate::api::appwrite::decode_documents;
use crate::api::context::{OutboundRequest, RequestContext, RequestKind, TraceContext};
use crate::api::http::HttpResponse;
use crate::api::tmdb::decode_details;
use crate::app::modes::{InputMode, Route};
use crate::app::pagination::PageOutcome;
use crate::app::state::{DetailState, WebAccess};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::rank_trending;
use std::collections::BTreeMap;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one row.
    KeyDown,
    /// Moves selection up by one row.
    KeyUp,
    /// Moves selection down by one screen.
    PageDown,
    /// Moves selection up by one screen.
    PageUp,
    /// Mouse wheel; positive scrolls towards the end of the list.
    MouseScroll(isize),

    /// Gives the search box typing focus.
    FocusSearch,
    /// Leaves typing focus, keeping the search text.
    LeaveSearch,
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character of the search text (back, on the details route).
    Backspace,

    /// Opens the detail view for the selected movie.
    OpenSelected,
    /// Returns from the detail view to the list.
    Back,
    /// Hides the plugin pane.
    CloseFocus,

    /// A debounce timer expired.
    DebounceTimerFired,

    /// The host allowed web requests.
    PermissionsGranted,
    /// The host refused web requests.
    PermissionsDenied,

    /// A web request completed.
    ///
    /// `context` is the map supplied with the request, echoed back unchanged.
    HttpResponse {
        status: u16,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    },
}

impl Event {
    /// Short name for spans and logs. Response bodies are never logged.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KeyDown => "KeyDown",
            Self::KeyUp => "KeyUp",
            Self::PageDown => "PageDown",
            Self::PageUp => "PageUp",
            Self::MouseScroll(_) => "MouseScroll",
            Self::FocusSearch => "FocusSearch",
            Self::LeaveSearch => "LeaveSearch",
            Self::Char(_) => "Char",
            Self::Backspace => "Backspace",
            Self::OpenSelected => "OpenSelected",
            Self::Back => "Back",
            Self::CloseFocus => "CloseFocus",
            Self::DebounceTimerFired => "DebounceTimerFired",
            Self::PermissionsGranted => "PermissionsGranted",
            Self::PermissionsDenied => "PermissionsDenied",
            Self::HttpResponse { .. } => "HttpResponse",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI should re-render, and the actions to execute in order.
///
/// # Errors
///
/// Returns [`ReelscoutError::Context`](crate::ReelscoutError::Context) or
/// [`ReelscoutError::Decode`](crate::ReelscoutError::Decode) when a web
/// response carries a context map this plugin did not produce.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::KeyDown => Ok(scrolled(state, AppState::move_selection_down)),
        Event::KeyUp => Ok(scrolled(state, AppState::move_selection_up)),
        Event::PageDown => Ok(scrolled(state, AppState::page_down)),
        Event::PageUp => Ok(scrolled(state, AppState::page_up)),
        Event::MouseScroll(lines) => Ok(scrolled(state, |state| state.scroll_by(*lines))),

        Event::FocusSearch => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::LeaveSearch => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.route != Route::List || state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            Ok((true, vec![keystroke(state)]))
        }
        Event::Backspace => {
            if state.route.is_details() {
                return Ok(back(state));
            }
            if state.input_mode != InputMode::Search || state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![keystroke(state)]))
        }

        Event::OpenSelected => Ok(open_selected(state)),
        Event::Back => Ok(back(state)),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::DebounceTimerFired => {
            let Some(text) = state.debouncer.expire() else {
                return Ok((false, vec![]));
            };
            let query = text.trim();
            tracing::debug!(query, "search text settled");

            let mut actions = vec![];
            if state.paginator.commit(query) {
                actions.extend(fetch_next_page(state));
            }
            Ok((true, actions))
        }

        Event::PermissionsGranted => {
            tracing::info!("web access granted");
            state.web_access = WebAccess::Granted;

            let mut actions: Vec<Action> = fetch_next_page(state).into_iter().collect();
            if !state.trending_requested {
                state.trending_requested = true;
                actions.push(Action::Request(state.recorder.trending_request()));
            }
            Ok((true, actions))
        }
        Event::PermissionsDenied => {
            tracing::error!("web access denied, nothing can be loaded");
            state.web_access = WebAccess::Denied;
            Ok((true, vec![]))
        }

        Event::HttpResponse { status, body, context } => {
            let request_context = RequestContext::from_map(context)?;
            let response = HttpResponse::new(*status, body.clone());
            Ok(handle_response(state, request_context, &response))
        }
    }
}

/// Runs a selection movement, then checks whether the list should advance a page.
fn scrolled(state: &mut AppState, movement: impl FnOnce(&mut AppState)) -> (bool, Vec<Action>) {
    if state.route != Route::List {
        return (false, vec![]);
    }
    movement(state);

    let metrics = state.scroll_metrics();
    let mut actions = vec![];
    if state.paginator.advance(metrics) {
        actions.extend(fetch_next_page(state));
    }
    (true, actions)
}

/// Registers a search box edit with the debouncer and arms its timer.
fn keystroke(state: &mut AppState) -> Action {
    state.debouncer.input(&state.search_query);
    Action::StartTimer(state.debouncer.quiet_period())
}

/// Issues the paginator's current target, if it is due.
fn fetch_next_page(state: &mut AppState) -> Option<Action> {
    if state.web_access != WebAccess::Granted {
        tracing::debug!("web access not granted yet, fetch deferred");
        return None;
    }

    let (token, target) = state.paginator.next_request()?;
    tracing::info!(token, query = %target.query, page = target.page, "fetching movies");

    let request = state.movie_api.page_request(&target.query, target.page);
    Some(Action::Request(OutboundRequest::new(
        RequestKind::MoviePage {
            token,
            query: target.query,
            page: target.page,
        },
        request,
    )))
}

fn open_selected(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.route != Route::List {
        return (false, vec![]);
    }
    let Some(movie) = state.selected_movie() else {
        tracing::debug!("no movie selected");
        return (false, vec![]);
    };
    let movie_id = movie.id;

    state.route = Route::Details { movie_id };
    state.input_mode = InputMode::Normal;

    if state.web_access != WebAccess::Granted {
        state.details = DetailState::Failed;
        return (true, vec![]);
    }

    state.details_token += 1;
    let token = state.details_token;
    state.details = DetailState::Loading { token, movie_id };
    tracing::info!(movie_id, "opening movie details");

    let request = state.movie_api.details_request(movie_id);
    (
        true,
        vec![Action::Request(OutboundRequest::new(
            RequestKind::MovieDetails { token, movie_id },
            request,
        ))],
    )
}

fn back(state: &mut AppState) -> (bool, Vec<Action>) {
    if !state.route.is_details() {
        return (false, vec![]);
    }
    state.route = Route::List;
    state.details = DetailState::Idle;
    state.ensure_selection_visible();
    (true, vec![])
}

fn handle_response(state: &mut AppState, context: RequestContext, response: &HttpResponse) -> (bool, Vec<Action>) {
    let _trace_guard = context.trace_context.as_ref().and_then(TraceContext::attach);
    let _span = tracing::debug_span!("handle_response", kind = ?context.kind, status = response.status).entered();

    match context.kind {
        RequestKind::MoviePage { token, page, .. } => match state.paginator.apply_response(token, response) {
            PageOutcome::Ignored => (false, vec![]),
            PageOutcome::Discarded => (true, fetch_next_page(state).into_iter().collect()),
            PageOutcome::Applied { record } => {
                if page == 1 {
                    state.reset_selection();
                }
                let actions = record
                    .map(|(term, top)| {
                        let poster_url = state.movie_api.poster_url(top.poster_path.as_deref());
                        Action::Request(state.recorder.lookup(&term, top.id, &poster_url))
                    })
                    .into_iter()
                    .collect();
                (true, actions)
            }
            PageOutcome::Failed => (true, vec![]),
        },

        RequestKind::MovieDetails { token, movie_id } => {
            let expected = DetailState::Loading { token, movie_id };
            if state.details != expected || state.route != (Route::Details { movie_id }) {
                tracing::debug!(movie_id, token, "discarding details for a view no longer shown");
                return (false, vec![]);
            }
            state.details = match decode_details(response, movie_id) {
                Ok(details) => DetailState::Loaded(details),
                Err(err) => {
                    tracing::error!(error = %err, movie_id, "Error fetching movie details");
                    DetailState::Failed
                }
            };
            (true, vec![])
        }

        RequestKind::Trending => match decode_documents(response, "trending") {
            Ok(list) => {
                state.trending = rank_trending(list.documents);
                tracing::debug!(count = state.trending.len(), "trending loaded");
                (true, vec![])
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error loading trending movies");
                (false, vec![])
            }
        },

        RequestKind::SearchCountLookup {
            term,
            movie_id,
            poster_url,
        } => {
            let actions = state
                .recorder
                .resolve_lookup(&term, movie_id, &poster_url, response)
                .map(Action::Request)
                .into_iter()
                .collect();
            (false, actions)
        }

        RequestKind::SearchCountWrite { term } => {
            state.recorder.finish_write(&term, response);
            (false, vec![])
        }
    }
}
