// src/ui/widgets/disclaimer_popup.rs

use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders the educational disclaimer on top of the existing UI.
///
/// `Clear` wipes the popup area first so the background UI does not bleed
/// through.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("EDUCATIONAL TOOL".bold().yellow()),
        Line::from(""),
        Line::from("SecureCheck produces a simulated security report to illustrate what a real assessment looks at: SSL/TLS certificates, HTTP security headers and DNS health."),
        Line::from(""),
        Line::from("No connection is ever made to the domain you enter. Every result is derived from the domain name itself, so the same name always gives the same report."),
        Line::from(""),
        Line::from("Do not rely on these results to judge the real security of any website. Use a professional assessment for that."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to Acknowledge and Continue".bold()),
    ]);

    let block = Block::default()
        .title("Disclaimer")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let popup_area = centered_rect(70, 60, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
