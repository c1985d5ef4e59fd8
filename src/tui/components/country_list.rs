//! # CountryList Component
//!
//! Sectioned list: one header row per continent followed by its countries.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState` and tracks the highlighted country
//! - `CountryList` is created each frame with borrowed state and sections
//!
//! The highlight is an index into the countries as read top to bottom,
//! headers excluded, so it maps straight onto `sections::country_at`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::sections::Section;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const NAME_COLUMN: usize = 32;

/// Events emitted by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Open the country at this index.
    Open(usize),
}

/// Persistent state for the country list.
#[derive(Debug, Default)]
pub struct CountryListState {
    pub selected: usize,
    /// Number of countries currently listed (a prop synced from `App`).
    total: usize,
    /// Visible rows at the last render, used for PageUp/PageDown.
    page_size: usize,
    list_state: ListState,
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            page_size: 10,
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Sync the number of listed countries, keeping the highlight in range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.selected = self.selected.min(total.saturating_sub(1));
    }

    /// Back to the top, e.g. after the query changed.
    pub fn reset(&mut self) {
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
    }

    fn move_by(&mut self, delta: isize) {
        if self.total == 0 {
            return;
        }
        let last = self.total - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }
}

impl EventHandler for CountryListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        let page = self.page_size.max(1) as isize;
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.move_by(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-page),
            TuiEvent::PageDown => self.move_by(page),
            TuiEvent::Home => self.selected = 0,
            TuiEvent::End => self.selected = self.total.saturating_sub(1),
            TuiEvent::Submit if self.total > 0 => return Some(ListEvent::Open(self.selected)),
            _ => return None,
        }
        None
    }
}

/// Transient render wrapper for the country list.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    sections: &'a [Section],
    query: &'a str,
}

impl<'a> CountryList<'a> {
    pub fn new(state: &'a mut CountryListState, sections: &'a [Section], query: &'a str) -> Self {
        Self {
            state,
            sections,
            query,
        }
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Countries ")
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Clear/Quit  Ctrl+R Reload ").centered());

        self.state.page_size = area.height.saturating_sub(2) as usize;

        if self.sections.is_empty() {
            let message = if self.query.is_empty() {
                "No countries.".to_string()
            } else {
                format!("No countries match \"{}\".", self.query)
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let capital_style = Style::default().fg(Color::Gray);

        let mut items: Vec<ListItem> = Vec::new();
        let mut highlight_row = None;
        let mut country_index = 0usize;

        for section in self.sections {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{} ({})", section.title, section.data.len()),
                header_style,
            ))));
            for country in &section.data {
                if country_index == self.state.selected {
                    highlight_row = Some(items.len());
                }
                let name = format!("{} {}", country.flag_emoji, country.name);
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::raw(pad_to_width(name.trim_start(), NAME_COLUMN)),
                    Span::styled(country.capital.clone(), capital_style),
                ])));
                country_index += 1;
            }
        }

        self.state.list_state.select(highlight_row);

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate or pad `s` to exactly `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    if s.width() < width {
        return format!("{}{}", s, " ".repeat(width - s.width()));
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(2) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sections::group_by_continent;
    use crate::test_support::sample_countries;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state_with(total: usize) -> CountryListState {
        let mut state = CountryListState::new();
        state.set_total(total);
        state
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut state = state_with(3);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_home_end_and_paging() {
        let mut state = state_with(50);
        state.handle_event(&TuiEvent::End);
        assert_eq!(state.selected, 49);
        state.handle_event(&TuiEvent::PageUp);
        assert_eq!(state.selected, 39);
        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::PageDown);
        assert_eq!(state.selected, 10);
    }

    #[test]
    fn test_submit_opens_selected() {
        let mut state = state_with(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ListEvent::Open(1)));
    }

    #[test]
    fn test_submit_on_empty_list_does_nothing() {
        let mut state = state_with(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_shrinking_total_clamps_selection() {
        let mut state = state_with(10);
        state.handle_event(&TuiEvent::End);
        state.set_total(4);
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_render_shows_headers_and_countries() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let sections = group_by_continent(sample_countries());
        let mut state = state_with(3);

        terminal
            .draw(|f| {
                let area = f.area();
                CountryList::new(&mut state, &sections, "").render(f, area)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Africa (1)"));
        assert!(text.contains("Chad"));
        assert!(text.contains("Chile City"));
        // Header row + country row for the first section; Chad is row 1
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_render_empty_result_mentions_query() {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = state_with(0);

        terminal
            .draw(|f| {
                let area = f.area();
                CountryList::new(&mut state, &[], "zzz").render(f, area)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No countries match \"zzz\"."));
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Chad", 6), "Chad  ");
        let long = pad_to_width("South Georgia and the South Sandwich Islands", 12);
        assert_eq!(long.width(), 12);
        assert!(long.contains('…'));
    }
}
