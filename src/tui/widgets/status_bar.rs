// Status bar: board name, pick progress, completion badge, sound label.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::catalog::SLOT_COUNT;
use crate::tui::ViewState;

/// Build the status line text for the current view state.
pub fn status_line(state: &ViewState) -> String {
    let sound = if state.muted { "Sound: Off" } else { "Sound: On" };
    let mut text = format!(
        " {} | Picks: {}/{} | {}",
        state.board_name, state.board.pick_count, SLOT_COUNT, sound
    );
    if state.board.is_complete {
        text.push_str(" | DRAFT COMPLETE");
    }
    if let Some(ref notice) = state.notice {
        text.push_str(" | ");
        text.push_str(notice);
    }
    text
}

/// Render the status bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        status_line(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::board::BoardView;
    use crate::tui::ViewState;

    fn view() -> ViewState {
        ViewState::new("Test Board".to_string())
    }

    #[test]
    fn status_line_shows_name_and_progress() {
        let state = view();
        let line = status_line(&state);
        assert!(line.contains("Test Board"));
        assert!(line.contains("Picks: 0/12"));
        assert!(line.contains("Sound: On"));
        assert!(!line.contains("DRAFT COMPLETE"));
    }

    #[test]
    fn status_line_reflects_mute_toggle() {
        let mut state = view();
        state.muted = true;
        assert!(status_line(&state).contains("Sound: Off"));
    }

    #[test]
    fn status_line_shows_completion_badge() {
        let mut state = view();
        state.board = BoardView {
            is_complete: true,
            pick_count: 12,
            ..Default::default()
        };
        let line = status_line(&state);
        assert!(line.contains("Picks: 12/12"));
        assert!(line.contains("DRAFT COMPLETE"));
    }

    #[test]
    fn status_line_appends_notice() {
        let mut state = view();
        state.notice = Some("Copied 3 picks".to_string());
        assert!(status_line(&state).ends_with("Copied 3 picks"));
    }
}
