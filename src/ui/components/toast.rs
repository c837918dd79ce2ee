//! Toast notification overlay

use crate::state::Notification;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast
const TOAST_MAX_WIDTH: u16 = 44;

/// Render a toast in the top-right corner of the screen
pub fn render_toast(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = TOAST_MAX_WIDTH.saturating_sub(padding) as usize;

    let wrapped_lines = wrap_text(&notification.description, max_line_width);

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(notification.title.chars().count())
        .min(max_line_width) as u16;
    let toast_width = content_width
        .saturating_add(padding)
        .min(TOAST_MAX_WIDTH)
        .min(area.width);
    // title + message lines + borders, one row of margin above
    let line_count = u16::try_from(wrapped_lines.len()).unwrap_or(u16::MAX);
    let toast_height = line_count
        .saturating_add(3)
        .min(area.height.saturating_sub(1));

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width + 1),
        y: area.y + 1,
        width: toast_width,
        height: toast_height,
    };

    frame.render_widget(Clear, toast_area);

    let accent = if notification.is_success() {
        Color::Green
    } else {
        Color::Red
    };

    let mut content = vec![Line::from(Span::styled(
        notification.title.as_str(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    content.extend(wrapped_lines.into_iter().map(Line::from));

    let toast = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title_bottom(Span::styled(
                format!(" {} ", notification.created_at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(toast, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
