//! Landing view

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const LOGO: &[&str] = &[
    "███████ ███████ ██████  ███████",
    "██         ███  ██   ██    ███ ",
    "█████     ███   ██████    ███  ",
    "██       ███    ██       ███   ",
    "███████ ███████ ██      ███████",
];

const DASHBOARD_LABEL: &str = "Go to Dashboard";

/// Draw the landing view: logo and the dashboard entry point
pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let logo_height = LOGO.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(logo_height),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let logo: Vec<Line> = LOGO.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(
        Paragraph::new(logo)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        chunks[1],
    );

    let button_width = DASHBOARD_LABEL.len() as u16 + 4;
    let button_area = Rect {
        x: chunks[3].x + chunks[3].width.saturating_sub(button_width) / 2,
        width: button_width.min(chunks[3].width),
        ..chunks[3]
    };
    render_button(frame, button_area, DASHBOARD_LABEL, true, true);
}
