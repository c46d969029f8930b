// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, AppState};

/// Renders the input box widget. A rejected domain turns the box red and
/// puts the reason in its title.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let (title, border_style) = match &app.input_error {
        Some(message) => (message.as_str(), Style::default().fg(Color::Red)),
        None => ("Target Domain", Style::default()),
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Show the cursor only while typing.
    if matches!(app.state, AppState::Idle) && !app.show_disclaimer && !app.show_glossary {
        frame.set_cursor_position((
            area.x + app.input.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}
