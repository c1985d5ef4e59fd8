//! # CountryDetail Component
//!
//! Full-screen panel for the selected country. Esc or Backspace goes back.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::country::CountryRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ACCENT: Color = Color::Rgb(255, 99, 71);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
}

/// Persistent state for the detail panel.
#[derive(Debug, Default)]
pub struct CountryDetailState {
    pub scroll: u16,
}

impl CountryDetailState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for CountryDetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => return Some(DetailEvent::Back),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1)
            }
            TuiEvent::Home => self.scroll = 0,
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the detail panel.
pub struct CountryDetail<'a> {
    state: &'a mut CountryDetailState,
    country: &'a CountryRecord,
}

impl<'a> CountryDetail<'a> {
    pub fn new(state: &'a mut CountryDetailState, country: &'a CountryRecord) -> Self {
        Self { state, country }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let c = self.country;
        let title = format!("{} {}", c.flag_emoji, c.name).trim().to_string();

        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        let rows = [
            ("Official name", c.official_name.clone()),
            ("Capital", c.capital.clone()),
            ("Continent", c.continent.clone()),
            ("Currencies", c.currency_codes()),
            ("Lat/Long", c.coordinates()),
            ("Languages", c.language_names()),
            ("Area", format!("{} km²", c.area)),
            ("Population", group_digits(c.population)),
            ("Flag", c.flag.clone()),
        ];
        for (label, value) in rows {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<14}"), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ]));
        }
        lines
    }
}

impl Component for CountryDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        self.state.scroll = self
            .state
            .scroll
            .min(lines.len().saturating_sub(1) as u16);

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Country ")
            .title_bottom(Line::from(" Esc Back  ↑↓ Scroll ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

/// 19116209 → "19,116,209"
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
