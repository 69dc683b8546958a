//! Reelscout: a Zellij plugin for discovering movies.
//!
//! Reelscout is a terminal movie browser that provides:
//! - Debounced title search against the TMDB v3 API
//! - An infinite-scroll result list that fetches the next page near the bottom
//! - A detail view with tagline, rating, runtime, genres and overview
//! - A trending strip of the most searched terms, counted in an Appwrite collection

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - web_request / set_timeout / hide_self            │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, action dispatching               │
//! │  - Debouncer, paginator, search-count recorder      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────────────────────┐
//! │ UI Layer      │   │ API Layer (api/)              │
//! │ (ui/)         │   │ - TMDB request builders       │
//! │ - Rendering   │   │ - Appwrite request builders   │
//! │ - Theming     │   │ - Request context codec       │
//! └───────────────┘   └───────────────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Movie and trending models, errors (domain/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the shim is free of host calls. Requests and timers are
//! returned as [`Action`]s, and their results come back as [`Event`]s.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/reelscout.wasm" {
//!         tmdb_token "eyJhbGciOi..."
//!         appwrite_project "my-project"
//!         appwrite_database "movies"
//!         appwrite_collection "metrics"
//!         debounce_ms "1000"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use reelscout::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::PermissionsGranted)?;
//!
//! handle_event(&mut state, &Event::FocusSearch)?;
//! let (_, actions) = handle_event(&mut state, &Event::Char('x'))?;
//! assert!(matches!(actions[..], [Action::StartTimer(_)]));
//! # Ok::<(), reelscout::ReelscoutError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Route};
pub use domain::{ReelscoutError, Result};
pub use ui::Theme;

use api::{appwrite, tmdb, MovieApi, SearchCountStore};
use app::recorder::SearchCountRecorder;
use std::collections::BTreeMap;
use std::time::Duration;

/// Default quiet period before typed text is committed as a search.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Plugin configuration, parsed once from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TMDB v4 read access token, sent as a bearer token.
    pub tmdb_token: Option<String>,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,

    pub appwrite_endpoint: String,
    pub appwrite_project: Option<String>,
    pub appwrite_database: Option<String>,
    pub appwrite_collection: Option<String>,
    /// Server API key, for collections without guest permissions.
    pub appwrite_api_key: Option<String>,

    /// Search debounce in milliseconds.
    pub debounce_ms: u64,

    /// Built-in theme name.
    pub theme_name: Option<String>,
    /// Custom theme file; wins over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_token: None,
            tmdb_base_url: tmdb::DEFAULT_BASE_URL.to_string(),
            tmdb_image_base_url: tmdb::DEFAULT_IMAGE_BASE_URL.to_string(),
            appwrite_endpoint: appwrite::DEFAULT_ENDPOINT.to_string(),
            appwrite_project: None,
            appwrite_database: None,
            appwrite_collection: None,
            appwrite_api_key: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a config from the plugin's key/value configuration.
    ///
    /// Blank values count as absent. Unparseable `debounce_ms` falls back to
    /// the default.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            tmdb_token: get("tmdb_token"),
            tmdb_base_url: get("tmdb_base_url").unwrap_or(defaults.tmdb_base_url),
            tmdb_image_base_url: get("tmdb_image_base_url").unwrap_or(defaults.tmdb_image_base_url),
            appwrite_endpoint: get("appwrite_endpoint").unwrap_or(defaults.appwrite_endpoint),
            appwrite_project: get("appwrite_project"),
            appwrite_database: get("appwrite_database"),
            appwrite_collection: get("appwrite_collection"),
            appwrite_api_key: get("appwrite_api_key"),
            debounce_ms: get("debounce_ms")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(DEFAULT_DEBOUNCE_MS),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Checks that every credential the plugin needs is present.
    ///
    /// # Errors
    ///
    /// Returns [`ReelscoutError::Config`] naming all missing keys.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("tmdb_token", &self.tmdb_token),
            ("appwrite_project", &self.appwrite_project),
            ("appwrite_database", &self.appwrite_database),
            ("appwrite_collection", &self.appwrite_collection),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ReelscoutError::Config(format!(
                "missing required keys: {}",
                missing.join(", ")
            )))
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }
        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from `config`.
///
/// Missing credentials are not an error here: requests are still built, and
/// the services reject them through the normal failure path.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing reelscout plugin");

    let movie_api = MovieApi::new(
        &config.tmdb_base_url,
        &config.tmdb_image_base_url,
        config.tmdb_token.as_deref().unwrap_or_default(),
    );
    let store = SearchCountStore::new(
        &config.appwrite_endpoint,
        config.appwrite_project.as_deref().unwrap_or_default(),
        config.appwrite_database.as_deref().unwrap_or_default(),
        config.appwrite_collection.as_deref().unwrap_or_default(),
        config.appwrite_api_key.as_deref(),
    );

    AppState::new(
        movie_api,
        SearchCountRecorder::new(store),
        config.debounce(),
        config.theme(),
    )
}
