//! Layout components (sidebar split, status bar)

use super::sidebar::SIDEBAR_WIDTH;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar. Returns (sidebar, main content).
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Credential status
    let key_status = if app.has_api_key {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ no API key ", Style::default().fg(Color::Red))
    };
    spans.push(key_status);

    spans.push(Span::styled(
        format!("{} ", app.state.current_view.title()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if app.state.submission.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Calling…", Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Home => "j/k:nav  Enter:open  d:dashboard  q:quit",
        View::VoiceAgent => "Tab:next  ←/→:demo  Enter/^S:call  Esc:back",
    }
}
