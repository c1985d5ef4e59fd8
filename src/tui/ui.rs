use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::selection::View;
use crate::core::state::{App, LoadState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryDetail, CountryList, ErrorView, LoadingView, TitleBar,
};

/// Draws one frame.
///
/// ```text
/// ┌ title bar ─────────────────────┐  1 row
/// │ search box                     │  3 rows  (list view only)
/// │ list / spinner / error         │  rest
/// └────────────────────────────────┘
/// ```
///
/// An open detail view takes the whole body, even during a reload.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let matches = (!app.search_query.is_empty() && app.load == LoadState::Loaded)
        .then(|| app.visible_count());
    TitleBar::new(
        app.source.name().to_string(),
        app.status_message.clone(),
        matches,
    )
    .render(frame, title_area);

    if app.view() == View::Detail
        && let Some(country) = app.selected_country()
    {
        CountryDetail::new(&mut tui.detail, country).render(frame, body_area);
        return;
    }

    if let LoadState::Failed(reason) = &app.load {
        ErrorView::new(reason).render(frame, body_area);
        return;
    }

    let [search_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(body_area);
    tui.search_box.render(frame, search_area);

    if app.is_loading() {
        LoadingView::new(spinner_frame).render(frame, list_area);
    } else {
        CountryList::new(&mut tui.country_list, app.sections(), &app.search_query)
            .render(frame, list_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::fetch::FetchError;
    use crate::test_support::{loaded_app, record, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_screen_keeps_search_box() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Loading countries..."));
        assert!(text.contains("Search"));
    }

    #[test]
    fn test_loaded_screen_lists_sections() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        tui.country_list.set_total(app.visible_count());
        let text = render(&app, &mut tui);
        assert!(text.contains("Atlas (static)"));
        assert!(text.contains("Africa (1)"));
        assert!(text.contains("Asia (1)"));
        assert!(text.contains("Americas (1)"));
    }

    #[test]
    fn test_search_shows_match_count() {
        let mut app = loaded_app();
        update(&mut app, Action::SearchChanged("Chi".to_string()));
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("2 matches"));
        assert!(!text.contains("Africa (1)"));
    }

    #[test]
    fn test_failed_screen_shows_error() {
        let mut app = test_app();
        update(
            &mut app,
            Action::FetchCompleted {
                generation: 0,
                result: Err(FetchError::Api {
                    status: 500,
                    message: "boom".into(),
                }),
            },
        );
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Could not load countries"));
        assert!(text.contains("API error (HTTP 500): boom"));
    }

    #[test]
    fn test_detail_replaces_list() {
        let mut app = loaded_app();
        update(&mut app, Action::SelectCountry(record("China", "Asia")));
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Republic of China"));
        assert!(!text.contains("Search"));
    }
}
