//! Sidebar drawing functions

use crate::app::App;
use crate::state::sidebar_entries;
use crate::ui::components::{render_sidebar_list, SidebarItem};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the sidebar: main navigation, then each workspace under its header
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current_view = app.state.current_view;
    let mut items = Vec::new();
    let mut selected_item = 0;

    for (idx, entry) in sidebar_entries().into_iter().enumerate() {
        if let Some(header) = entry.group_header {
            items.push(SidebarItem::Header(header.to_string()));
        }
        if idx == app.state.sidebar_index {
            selected_item = items.len();
        }

        let is_current = entry.target == Some(current_view);
        let is_highlighted = idx == app.state.sidebar_index && !current_view.is_form_view();

        items.push(SidebarItem::Entry {
            is_enabled: entry.is_enabled(),
            label: entry.label,
            is_selected: is_current || is_highlighted,
        });
    }

    // Keep the highlighted entry near the top when the list is clipped
    let scroll_offset = selected_item.saturating_sub(2);

    render_sidebar_list(frame, inner, &items, scroll_offset);
}
