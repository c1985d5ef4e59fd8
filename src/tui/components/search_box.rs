//! # SearchBox Component
//!
//! Single-line text field that drives the country filter.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text
//! - Handle Backspace
//! - Emit `SearchEvent::Changed` whenever the query text changes
//! - Show a placeholder when empty and place the terminal cursor at the end
//!
//! The buffer is internal state. The parent forwards each `Changed` event to
//! the core as `Action::SearchChanged`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search countries...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Changed(String),
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if flat.is_empty() {
                    return None;
                }
                self.buffer.push_str(&flat);
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
            }
            _ => return None,
        }
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Search ")
            .border_style(Style::default().fg(Color::DarkGray));

        let content = if self.buffer.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.buffer.as_str())
        };

        // Keep the tail visible when the query is wider than the box
        let inner_width = area.width.saturating_sub(2);
        let text_width = self.buffer.width() as u16;
        let scroll_x = text_width.saturating_sub(inner_width.saturating_sub(1));

        let paragraph = Paragraph::new(content).block(block).scroll((0, scroll_x));
        frame.render_widget(paragraph, area);

        if area.width > 2 && area.height > 2 {
            let cursor_x = area.x + 1 + (text_width - scroll_x).min(inner_width.saturating_sub(1));
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(search: &mut SearchBox, text: &str) -> Option<SearchEvent> {
        let mut last = None;
        for c in text.chars() {
            last = search.handle_event(&TuiEvent::InputChar(c));
        }
        last
    }

    #[test]
    fn test_typing_emits_changed_with_full_text() {
        let mut search = SearchBox::new();
        let event = type_str(&mut search, "Chi");
        assert_eq!(event, Some(SearchEvent::Changed("Chi".to_string())));
        assert_eq!(search.buffer, "Chi");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut search = SearchBox::new();
        type_str(&mut search, "Chí");
        let event = search.handle_event(&TuiEvent::Backspace);
        assert_eq!(event, Some(SearchEvent::Changed("Ch".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut search = SearchBox::new();
        let event = search.handle_event(&TuiEvent::Paste("New\nZealand".to_string()));
        assert_eq!(event, Some(SearchEvent::Changed("New Zealand".to_string())));
    }

    #[test]
    fn test_navigation_keys_are_not_consumed() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(search.handle_event(&TuiEvent::Submit), None);
        assert!(search.buffer.is_empty());
    }

    #[test]
    fn test_render_shows_placeholder_then_text() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();

        terminal
            .draw(|f| {
                let area = f.area();
                search.render(f, area)
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(PLACEHOLDER));

        type_str(&mut search, "peru");
        terminal
            .draw(|f| {
                let area = f.area();
                search.render(f, area)
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("peru"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
