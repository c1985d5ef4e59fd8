//! # Actions
//!
//! Everything that can happen on the country screen becomes an `Action`.
//! User types in the search box? That's `Action::SearchChanged(text)`.
//! The fetch comes back? That's `Action::FetchCompleted { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what I/O to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, error, info};

use crate::core::country::{CountryRecord, RawCountry};
use crate::core::sections::{filter_sections, group_by_continent};
use crate::core::state::{App, LoadState};
use crate::fetch::FetchError;

#[derive(Debug)]
pub enum Action {
    /// A fetch task settled. `generation` identifies which fetch it was.
    FetchCompleted {
        generation: u64,
        result: Result<Vec<RawCountry>, FetchError>,
    },
    SearchChanged(String),
    SelectCountry(CountryRecord),
    Back,
    /// Fetch the list again (after a failure, or to refresh).
    Reload,
    Quit,
}

/// Side effects the adapter must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a fetch for `app.fetch_generation`.
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchCompleted { generation, result } => {
            if generation != app.fetch_generation {
                debug!(
                    "Ignoring stale fetch result (generation {}, current {})",
                    generation, app.fetch_generation
                );
                return Effect::None;
            }
            match result {
                Ok(raw) => {
                    app.countries = group_by_continent(raw);
                    app.filtered_countries = filter_sections(&app.countries, &app.search_query);
                    app.load = LoadState::Loaded;
                    app.status_message = format!(
                        "{} countries in {} continents",
                        app.total_count(),
                        app.countries.len()
                    );
                    info!("{}", app.status_message);
                }
                Err(e) => {
                    error!("Failed to fetch countries: {}", e);
                    app.load = LoadState::Failed(e.to_string());
                    app.status_message = String::from("Load failed");
                }
            }
            Effect::None
        }
        Action::SearchChanged(text) => {
            app.filtered_countries = filter_sections(&app.countries, &text);
            app.search_query = text;
            debug!(
                "Search {:?}: {} of {} countries",
                app.search_query,
                app.visible_count(),
                app.total_count()
            );
            Effect::None
        }
        Action::SelectCountry(country) => {
            debug!("Opening detail for {}", country.name);
            app.selection.select(country);
            Effect::None
        }
        Action::Back => {
            app.selection.clear();
            Effect::None
        }
        Action::Reload => {
            if app.is_loading() {
                return Effect::None;
            }
            app.fetch_generation += 1;
            app.load = LoadState::Loading;
            app.status_message = String::from("Loading countries...");
            info!("Reloading countries (generation {})", app.fetch_generation);
            Effect::SpawnFetch
        }
        Action::Quit => Effect::Quit,
    }
}
