//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Reelscout library
//! and the Zellij plugin system. It translates host events into library
//! [`Event`]s and carries out the returned [`Action`]s with host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; nothing is fetched until granted
//! 3. **Subscribe**: Key, Mouse, Timer, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Size the list window, call the library renderer
//!
//! # Keybindings
//!
//! List, normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `PageDown`/`PageUp`: Move a screen
//! - `Enter`: Open details
//! - `/`: Focus search
//! - `q`: Close plugin
//!
//! List, search mode:
//! - Characters and `Backspace`: Edit the search text
//! - `Enter`/`Esc`: Leave search, keeping the text
//! - `Down`/`Up`, `Ctrl+n`/`Ctrl+p`, `PageDown`/`PageUp`: Move selection
//!
//! Details:
//! - `Esc`/`Backspace`/`h`: Back to the list
//! - `q`: Close plugin
//!
//! The mouse wheel scrolls the list in either mode.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use reelscout::api::{HttpMethod, OutboundRequest};
use reelscout::{handle_event, Action, Config, Event, InputMode, Route};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: reelscout::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: reelscout::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state, requests web access and
    /// subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        reelscout::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "incomplete configuration, requests will fail");
        }
        tracing::debug!(
            tmdb_base_url = %config.tmdb_base_url,
            appwrite_endpoint = %config.appwrite_endpoint,
            debounce_ms = config.debounce_ms,
            "parsed configuration"
        );
        self.app = reelscout::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, runs it through `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match mouse {
                Mouse::ScrollDown(lines) => Event::MouseScroll(to_lines(lines)),
                Mouse::ScrollUp(lines) => Event::MouseScroll(-to_lines(lines)),
                _ => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::DebounceTimerFired,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                Event::HttpResponse { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in &actions {
                    Self::execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Sizes the list window to the pane, then renders.
    fn render(&mut self, rows: usize, cols: usize) {
        let capacity = self.app.list_capacity(rows);
        self.app.set_viewport_rows(capacity);
        reelscout::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events, by route and input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if let Route::Details { .. } = self.app.route {
            return match key.bare_key {
                BareKey::Esc | BareKey::Backspace | BareKey::Char('h') => Some(Event::Back),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match (self.app.input_mode, key.bare_key) {
            (_, BareKey::Down) => Event::KeyDown,
            (_, BareKey::Up) => Event::KeyUp,
            (_, BareKey::PageDown) => Event::PageDown,
            (_, BareKey::PageUp) => Event::PageUp,

            (InputMode::Search, BareKey::Enter | BareKey::Esc) => Event::LeaveSearch,
            (InputMode::Search, BareKey::Backspace) => Event::Backspace,
            (InputMode::Search, BareKey::Char(c)) => Event::Char(c),

            (InputMode::Normal, BareKey::Char('j')) => Event::KeyDown,
            (InputMode::Normal, BareKey::Char('k')) => Event::KeyUp,
            (InputMode::Normal, BareKey::Enter) => Event::OpenSelected,
            (InputMode::Normal, BareKey::Char('/')) => Event::FocusSearch,
            (InputMode::Normal, BareKey::Char('q')) => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::StartTimer(duration) => {
                set_timeout(duration.as_secs_f64());
            }
            Action::Request(outbound) => Self::send_request(outbound),
        }
    }

    /// Hands a request to the host, with its routing context attached.
    fn send_request(outbound: &OutboundRequest) {
        let context = match outbound.context.to_map() {
            Ok(context) => context,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode request context");
                return;
            }
        };

        let request = &outbound.request;
        let verb = match request.method {
            HttpMethod::Get => HttpVerb::Get,
            HttpMethod::Post => HttpVerb::Post,
            HttpMethod::Put => HttpVerb::Put,
        };
        tracing::debug!(kind = ?outbound.context.kind, method = ?request.method, "sending web request");

        web_request(
            &request.url,
            verb,
            request.headers.clone(),
            request.body.clone(),
            context,
        );
    }
}

fn to_lines(lines: usize) -> isize {
    isize::try_from(lines).unwrap_or(isize::MAX)
}
