//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a field occupies: bordered input plus one line for its error
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its validation message underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_locked: bool,
) {
    let has_error = field.error.is_some();

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active && !is_locked {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };

    let value = field.as_text();
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            field.placeholder.as_str(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        let style = if is_locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        vec![Span::styled(value, style)]
    };

    if is_active && !is_locked {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let label_style = if has_error {
        Style::default().fg(Color::Red)
    } else {
        border_style
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), label_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(error) = &field.error {
        if area.height > input_area.height {
            let error_area = Rect {
                y: input_area.y + input_area.height,
                height: 1,
                ..area
            };
            let message = Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(message, error_area);
        }
    }
}
