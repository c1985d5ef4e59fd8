//! # Status Views
//!
//! What the list area shows while there is no list: a spinner while the
//! fetch runs, or the failure reason with a retry hint.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct LoadingView {
    frame_index: usize,
}

impl LoadingView {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for LoadingView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER[self.frame_index % SPINNER.len()];
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(Color::Rgb(255, 99, 71))),
            Span::raw("Loading countries..."),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}

pub struct ErrorView<'a> {
    reason: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(reason: &'a str) -> Self {
        Self { reason }
    }
}

impl Component for ErrorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Could not load countries",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(self.reason.to_string()),
            Line::default(),
            Line::from(Span::styled(
                "Press Ctrl+R to retry, Ctrl+C to quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(" Error ")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
