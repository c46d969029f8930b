// src/ui/widgets/footer.rs

use crate::app::{App, AppState, ExportStatus};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.show_disclaimer {
        Line::from(vec![Span::raw("Press "), key("Enter"), Span::raw(" to acknowledge the disclaimer.")])
    } else if app.show_glossary {
        Line::from(vec![
            Span::raw("Type to filter, "),
            key("↑↓"),
            Span::raw(" scroll, "),
            key("Esc"),
            Span::raw(" close glossary."),
        ])
    } else {
        match app.state {
            AppState::Idle => Line::from(vec![
                Span::raw("Press "),
                key("Enter"),
                Span::raw(" to analyze, "),
                key("F1"),
                Span::raw(" glossary, "),
                key("F2"),
                Span::raw(" logs, "),
                key("Esc"),
                Span::raw(" to quit."),
            ]),
            AppState::Finished => {
                let mut spans = vec![
                    key("[N]"), Span::raw("ew Scan, "),
                    key("[E]"), Span::raw("xport, "),
                    key("[G]"), Span::raw("lossary, "),
                    key("[L]"), Span::raw("ogs, "),
                    key("[Q]"), Span::raw("uit"),
                ];
                match &app.export_status {
                    ExportStatus::Idle => {}
                    ExportStatus::Success(path) => spans.push(Span::styled(format!("  Saved to {path}"), Style::new().fg(Color::Green))),
                    ExportStatus::Error(message) => spans.push(Span::styled(format!("  {message}"), Style::new().fg(Color::Red))),
                }
                Line::from(spans)
            }
            AppState::Scanning => Line::from(vec![
                Span::raw("Analyzing... "),
                key("[G]"), Span::raw("lossary, "),
                key("[L]"), Span::raw("ogs, "),
                key("[Q]"), Span::raw("uit"),
            ]),
        }
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
