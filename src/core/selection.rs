//! # Selection
//!
//! Tracks which single country, if any, is open in the detail view.
//!
//! ```text
//!          select(c)
//!   List ────────────▶ Detail ◀─┐ select(c')
//!    ▲                   │ └────┘
//!    └──── clear() ──────┘
//! ```
//!
//! The selection is not checked against the current search results, so a
//! query change never closes an open detail view.

use crate::core::country::CountryRecord;

/// Which screen the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    current: Option<CountryRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `country`, replacing any previous pick.
    pub fn select(&mut self, country: CountryRecord) {
        self.current = Some(country);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&CountryRecord> {
        self.current.as_ref()
    }

    pub fn view(&self) -> View {
        if self.current.is_some() {
            View::Detail
        } else {
            View::List
        }
    }
}
