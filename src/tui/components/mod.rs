//! # TUI Components
//!
//! All UI pieces of the country screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top status line
//! - `LoadingView` / `ErrorView`: what the list area shows without a list
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit high-level events:
//! - `SearchBox`: query text, emits `SearchEvent::Changed`
//! - `CountryListState` + `CountryList`: sectioned list, emits `ListEvent::Open`
//! - `CountryDetailState` + `CountryDetail`: detail panel, emits `DetailEvent::Back`
//!
//! Stateful components split persistent state (kept in `TuiState`) from a
//! transient wrapper built each frame with borrowed props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── search_box.rs      (query input)
//! ├── country_list.rs    (sectioned list)
//! ├── country_detail.rs  (detail panel)
//! └── status.rs          (loading spinner, error panel)
//! ```

pub mod country_detail;
pub mod country_list;
pub mod search_box;
pub mod status;
mod title_bar;

pub use country_detail::{CountryDetail, CountryDetailState, DetailEvent};
pub use country_list::{CountryList, CountryListState, ListEvent};
pub use search_box::{SearchBox, SearchEvent};
pub use status::{ErrorView, LoadingView};
pub use title_bar::TitleBar;
