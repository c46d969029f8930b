// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState, CheckCategory, SPINNER_CHARS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    text::Line,
};

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Analysis Report (Navigate with ↑ ↓)");

    if !matches!(app.state, AppState::Finished) {
        let content = match app.state {
            AppState::Idle => Paragraph::new(vec![
                Line::from("Enter a domain and press Enter to generate a simulated security report."),
                Line::from(""),
                Line::from("No traffic is sent to the domain: results are derived from its name.".dark_gray()),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            AppState::Scanning => {
                let spinner_char = SPINNER_CHARS[app.spinner_frame];
                Paragraph::new(
                    Line::from(vec![
                        Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                        Span::raw("Analyzing... Please wait."),
                    ])
                ).alignment(Alignment::Center)
            },
            AppState::Finished => Paragraph::new(""),
        };
        frame.render_widget(content.block(main_block), area);
        return;
    }

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.all_checks.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(inner_area);

    let items: Vec<ListItem> = app.all_checks.iter().map(|check| {
        let category_prefix = match check.category {
            CheckCategory::Ssl => "[SSL/TLS] ",
            CheckCategory::Headers => "[HTTP] ",
            CheckCategory::Dns => "[DNS] ",
        };
        let (icon, style) = if check.passed {
            ("✓ ", Style::default().fg(Color::Green))
        } else {
            ("✗ ", Style::default().fg(Color::Red))
        };

        ListItem::new(Line::from(vec![
            Span::styled(icon, style),
            Span::styled(category_prefix, Style::default().fg(Color::DarkGray)),
            Span::styled(check.title.clone(), style),
        ]))
    }).collect();

    let checks_list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(checks_list, chunks[0], &mut app.analysis_list_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let selected = app
        .analysis_list_state
        .selected()
        .and_then(|index| app.all_checks.get(index));

    let Some(check) = selected else {
        frame.render_widget(Paragraph::new("Select an item above to see details.").block(detail_block), chunks[1]);
        return;
    };

    let mut text = vec![
        Line::from(""),
        Line::from("WHAT IT IS:".yellow().bold()),
        Line::from(check.detail.clone()),
        Line::from(""),
    ];
    match &check.advice {
        Some(advice) => {
            text.push(Line::from("HOW TO FIX:".yellow().bold()));
            text.push(Line::from(advice.clone()));
        }
        None => text.push(Line::from("✓ This check passed.".green())),
    }
    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block);
    frame.render_widget(p, chunks[1]);
}
