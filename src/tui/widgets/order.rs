// Draft order widget: the twelve ordered pick slots.
//
// Always renders exactly twelve rows; open slots show the empty marker.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the pick slots into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let lines: Vec<Line> = state
        .board
        .slots
        .iter()
        .map(|slot| {
            let label = Span::styled(
                format!("Pick #{:<2} ", slot.number),
                Style::default().fg(Color::Cyan),
            );
            match &slot.team {
                Some(team) => Line::from(vec![
                    label,
                    Span::styled(
                        team.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                None => Line::from(vec![
                    label,
                    Span::styled("— empty", Style::default().add_modifier(Modifier::DIM)),
                ]),
            }
        })
        .collect();

    let title = if state.board.is_complete {
        " Draft Order ✔ "
    } else {
        " Draft Order "
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title),
    );
    frame.render_widget(paragraph, area);
}
