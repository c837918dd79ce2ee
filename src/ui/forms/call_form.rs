//! Call request form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FormRow, DEMO_OPTIONS};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the form card
const FORM_WIDTH: u16 = 52;

/// Draw the call request form, centered horizontally in `area`
pub fn draw_call_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.call_form;
    let is_locked = app.state.submission.is_submitting();
    let active_row = form.active_row();
    let field_ids = form.field_ids();

    let card = Rect {
        x: area.x + area.width.saturating_sub(FORM_WIDTH) / 2,
        width: FORM_WIDTH.min(area.width),
        ..area
    };

    let block = Block::default()
        .title(" Voice Agent Demo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let mut constraints = vec![
        Constraint::Length(3), // Preset selector
        Constraint::Length(1), // Separator
    ];
    constraints.extend(field_ids.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(2)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(card);

    draw_preset_selector(
        frame,
        chunks[0],
        form.selected_preset,
        active_row == FormRow::Preset && !is_locked,
    );

    let separator = Paragraph::new("─".repeat(chunks[1].width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(separator, chunks[1]);

    for (offset, id) in field_ids.iter().enumerate() {
        draw_field(
            frame,
            chunks[2 + offset],
            form.field(*id),
            active_row == FormRow::Field(*id),
            is_locked,
        );
    }

    let submit_idx = 2 + field_ids.len();
    render_submit_button(
        frame,
        chunks[submit_idx],
        &app.state.submission,
        active_row == FormRow::Submit,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": demo  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::raw(": call  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[submit_idx + 1]);
}

/// Draw the preset selector row
fn draw_preset_selector(frame: &mut Frame, area: Rect, selected: Option<usize>, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = match selected.and_then(|i| DEMO_OPTIONS.get(i)) {
        Some(option) => Span::raw(option.name),
        None => Span::styled("Select a demo", Style::default().fg(Color::DarkGray)),
    };

    let position = selected
        .map(|i| format!("  ({}/{})", i + 1, DEMO_OPTIONS.len()))
        .unwrap_or_default();

    let content = Line::from(vec![
        Span::styled("◂ ", border_style),
        label,
        Span::styled(" ▸", border_style),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(" Demo ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
