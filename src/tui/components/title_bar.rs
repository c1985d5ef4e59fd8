//! # TitleBar Component
//!
//! Top status line. Stateless: it renders whatever props it is given.
//!
//! The text changes based on state:
//!
//! 1. **Active search**: `"Atlas (restcountries) | 250 countries in 8 continents | 3 matches"`
//! 2. **Status message**: `"Atlas (restcountries) | Loading countries..."`
//! 3. **Default**: `"Atlas (restcountries)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    pub source_name: String,
    pub status_message: String,
    /// Number of countries matching the query, when a query is active.
    pub matches: Option<usize>,
}

impl TitleBar {
    pub fn new(source_name: String, status_message: String, matches: Option<usize>) -> Self {
        Self {
            source_name,
            status_message,
            matches,
        }
    }

    fn text(&self) -> String {
        let base = format!("Atlas ({})", self.source_name);
        match (self.status_message.is_empty(), self.matches) {
            (_, Some(n)) => {
                let noun = if n == 1 { "match" } else { "matches" };
                format!("{} | {} | {} {}", base, self.status_message, n, noun)
            }
            (true, None) => base,
            (false, None) => format!("{} | {}", base, self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}
