// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    text::Line,
};
use securecheck::core::models::RiskLevel;

/// Renders the summary widget: the score gauge, the risk level, the state of
/// each check family and the report's recommendations. Nothing is drawn
/// until the scan has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Score & risk
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Security checks
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Check counts
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Recommendations
        ])
        .split(area);

    if !matches!(app.state, AppState::Finished) {
        return;
    }
    let Some(report) = &app.scan_report else {
        return;
    };

    let (risk_text, risk_style) = match app.summary.risk {
        Some(RiskLevel::Low) => ("Low Risk", Style::default().fg(Color::Green)),
        Some(RiskLevel::Medium) => ("Medium Risk", Style::default().fg(Color::Yellow)),
        Some(RiskLevel::High) | None => ("High Risk", Style::default().fg(Color::Red)),
    };
    let score_line = Line::from(format!("{}/100 ({})", app.summary.score, risk_text)).style(risk_style);
    let score_text = Text::from(vec![
        Line::from("Risk Score".bold()),
        score_line,
        Line::from(report.domain.as_str()).dark_gray(),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    // The gauge animates towards the real score and follows the same bands.
    let score_gauge = Gauge::default()
        .percent(app.displayed_score as u16)
        .label("")
        .style(Style::default().fg(match RiskLevel::from_score(app.displayed_score) {
            RiskLevel::Low => Color::Green,
            RiskLevel::Medium => Color::Yellow,
            RiskLevel::High => Color::Red,
        }));
    frame.render_widget(score_gauge, summary_chunks[1]);

    let checks_block = Block::default().title("SECURITY CHECKS".bold());
    let checks_to_render = [
        ("SSL/TLS Certificate", app.summary.ssl_check_passed),
        ("HTTP Security Headers", app.summary.headers_check_passed),
        ("DNS Resolution", app.summary.dns_check_passed),
    ];
    let checks_lines: Vec<Line> = checks_to_render
        .into_iter()
        .map(|(name, passed)| {
            let (icon, style) = if passed { ("✓", Style::default().fg(Color::Green)) } else { ("✗", Style::default().fg(Color::Red)) };
            Line::from(vec![Span::styled(format!("{} ", icon), style), Span::raw(name)])
        })
        .collect();
    frame.render_widget(Paragraph::new(checks_lines).block(checks_block), summary_chunks[3]);

    let counts_block = Block::default().title("CHECKS".bold());
    let counts_text = Text::from(vec![
        Line::from(vec![Span::raw("Passed: "), Span::styled(app.summary.passed_checks.to_string(), Style::default().fg(Color::Green))]),
        Line::from(vec![Span::raw("Failed: "), Span::styled(app.summary.failed_checks.to_string(), Style::default().fg(Color::Red))]),
    ]);
    frame.render_widget(Paragraph::new(counts_text).block(counts_block), summary_chunks[5]);

    let recommendations_block = Block::default().title("RECOMMENDATIONS".bold());
    let recommendation_lines: Vec<Line> = report
        .recommendations
        .iter()
        .enumerate()
        .map(|(index, rec)| Line::from(format!("{}. {}", index + 1, rec)))
        .collect();
    let recommendations = Paragraph::new(recommendation_lines)
        .block(recommendations_block)
        .wrap(Wrap { trim: true });
    frame.render_widget(recommendations, summary_chunks[7]);
}
