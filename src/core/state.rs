//! # Application State
//!
//! Everything the country screen knows, in one struct. No TUI types here;
//! presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CountrySource>    // where countries come from
//! ├── countries: Vec<Section>           // full grouped list, replaced only on load
//! ├── filtered_countries: Vec<Section>  // what the list shows
//! ├── search_query: String              // current filter text
//! ├── load: LoadState                   // Loading / Loaded / Failed
//! ├── fetch_generation: u64             // id of the fetch we are waiting on
//! ├── selection: Selection              // open detail view, if any
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::country::CountryRecord;
use crate::core::sections::{Section, country_count};
use crate::core::selection::{Selection, View};
use crate::fetch::CountrySource;

/// Progress of the country fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// Fetch failed; the reason is shown to the user with a retry hint.
    Failed(String),
}

pub struct App {
    pub source: Arc<dyn CountrySource>,
    pub countries: Vec<Section>,
    pub filtered_countries: Vec<Section>,
    pub search_query: String,
    pub load: LoadState,
    pub fetch_generation: u64,
    pub selection: Selection,
    pub status_message: String,
}

impl App {
    /// A fresh screen. Loading starts immediately: the adapter spawns the
    /// first fetch for `fetch_generation` right after construction.
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            countries: Vec::new(),
            filtered_countries: Vec::new(),
            search_query: String::new(),
            load: LoadState::Loading,
            fetch_generation: 0,
            selection: Selection::new(),
            status_message: String::from("Loading countries..."),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Sections currently on display.
    pub fn sections(&self) -> &[Section] {
        &self.filtered_countries
    }

    pub fn selected_country(&self) -> Option<&CountryRecord> {
        self.selection.current()
    }

    pub fn view(&self) -> View {
        self.selection.view()
    }

    pub fn visible_count(&self) -> usize {
        country_count(&self.filtered_countries)
    }

    pub fn total_count(&self) -> usize {
        country_count(&self.countries)
    }
}
