//! # Core Application Logic
//!
//! The country screen's business logic. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • grouping / search    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  --list    │
//!           │  Adapter   │              │  (stdout)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`country`]: provider records and the normalized `CountryRecord`
//! - [`sections`]: continent grouping and search filtering
//! - [`selection`]: which country is open in the detail view
//! - [`state`]: The `App` struct, all screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: settings file and override resolution

pub mod action;
pub mod config;
pub mod country;
pub mod sections;
pub mod selection;
pub mod state;
