// Available teams widget: the selectable list of undrafted teams.
//
// Teams disappear from this list once picked, which is what prevents
// duplicate picks from the keyboard in the first place.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the available teams list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let title = format!(" Teams ({} left) ", state.board.available.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if state.board.available.is_empty() {
        let paragraph = Paragraph::new(Line::styled(
            "All teams picked",
            Style::default().add_modifier(Modifier::DIM),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .board
        .available
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let selected = i == state.selected;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{marker}{}", team.name), style))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
