// src/ui/widgets/glossary_popup.rs

use crate::app::App;
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};
use securecheck::core::knowledge_base::search_glossary;

/// Rows `text` occupies once word-wrapped to `width` columns.
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let mut rows = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used == 0 {
            used = len;
        } else if used + 1 + len <= width {
            used += 1 + len;
        } else {
            rows += 1;
            used = len;
        }
    }
    rows
}

/// Renders the glossary of security terms as a centered popup, filtered by
/// `app.glossary_query` and scrolled by `app.glossary_scroll`. The scroll
/// offset is clamped so the last entry can reach the bottom of the popup
/// but never scroll past it.
pub fn render_glossary_popup(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.glossary_query.is_empty() {
        " Glossary ".to_string()
    } else {
        format!(" Glossary: {} ", app.glossary_query)
    };
    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(" type to filter, ↑↓ scroll, Esc close ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let popup_area = centered_rect(70, 80, area);
    let inner = block.inner(popup_area);
    let width = inner.width as usize;

    let entries = search_glossary(&app.glossary_query);
    let mut lines = Vec::new();
    let mut rows = 0;
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
            rows += 1;
        }
        lines.push(Line::from(entry.term.bold().cyan()));
        lines.push(Line::from(entry.definition));
        rows += wrapped_rows(entry.term, width) + wrapped_rows(entry.definition, width);
    }
    if entries.is_empty() {
        lines.push(Line::from("No matching terms.".dark_gray()));
    }

    let max_scroll = rows.saturating_sub(inner.height as usize);
    app.glossary_scroll = app.glossary_scroll.min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    let popup = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.glossary_scroll, 0));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use securecheck::config::Settings;
    use std::path::PathBuf;

    fn app() -> App {
        let mut app = App::new(Settings::new(0, Some(PathBuf::from("."))));
        app.show_disclaimer = false;
        app.show_glossary = true;
        app
    }

    /// Draws the popup on an 80x24 terminal and returns the screen text.
    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_glossary_popup(frame, app, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn small_terminal_shows_the_first_terms_unscrolled() {
        let mut app = app();
        let text = screen(&mut app);
        assert!(text.contains("SSL/TLS"));
        assert!(!text.contains("Administrative Controls"));
    }

    #[test]
    fn scrolling_reaches_the_last_term() {
        let mut app = app();
        app.glossary_scroll = u16::MAX;
        let text = screen(&mut app);
        assert!(text.contains("Administrative Controls"));
        assert!(!text.contains("SSL/TLS"));
        assert!(app.glossary_scroll < u16::MAX);
        assert!(app.glossary_scroll > 0);
    }

    #[test]
    fn query_filters_the_visible_terms() {
        let mut app = app();
        app.glossary_query = "admin".to_string();
        let text = screen(&mut app);
        assert!(text.contains("Administrative Controls"));
        assert!(!text.contains("SSL/TLS"));
        assert_eq!(app.glossary_scroll, 0);
    }

    #[test]
    fn unmatched_query_says_so() {
        let mut app = app();
        app.glossary_query = "zzz".to_string();
        assert!(screen(&mut app).contains("No matching terms."));
    }

    #[test]
    fn wrapping_counts_rows_by_whole_words() {
        assert_eq!(wrapped_rows("short", 10), 1);
        assert_eq!(wrapped_rows("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_rows("aaaa bbbb cccc", 4), 3);
        assert_eq!(wrapped_rows("anything", 0), 0);
    }
}
