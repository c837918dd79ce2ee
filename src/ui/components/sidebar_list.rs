//! Vertical list of sidebar buttons under group headers

use super::button::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Height of a group header row
pub const HEADER_HEIGHT: u16 = 1;

/// One row group in the sidebar list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    /// Group label, not selectable
    Header(String),
    /// Navigation button
    Entry {
        label: String,
        is_selected: bool,
        is_enabled: bool,
    },
}

impl SidebarItem {
    pub fn height(&self) -> u16 {
        match self {
            SidebarItem::Header(_) => HEADER_HEIGHT,
            SidebarItem::Entry { .. } => BUTTON_HEIGHT,
        }
    }
}

/// Draw `items` top-aligned starting at item `scroll`. The offset is clamped
/// so a scrolled list never leaves empty rows under its last item. Markers
/// show when items are cut off above or below.
pub fn render_sidebar_list(frame: &mut Frame, area: Rect, items: &[SidebarItem], scroll: usize) {
    if items.is_empty() || area.height == 0 {
        return;
    }

    let first = scroll.min(tail_start(items, area.height));
    let bottom = area.y + area.height;
    let mut y = area.y;

    if first > 0 {
        draw_marker(frame, Rect { y, height: 1, ..area }, "▲");
        y += 1;
    }

    let mut clipped = false;
    for item in &items[first..] {
        let height = item.height();
        if y + height > bottom {
            clipped = true;
            break;
        }
        let row = Rect { y, height, ..area };
        match item {
            SidebarItem::Header(label) => {
                let header =
                    Paragraph::new(label.as_str()).style(Style::default().fg(Color::DarkGray));
                frame.render_widget(header, row);
            }
            SidebarItem::Entry {
                label,
                is_selected,
                is_enabled,
            } => render_button(frame, row, label, *is_selected, *is_enabled),
        }
        y += height;
    }

    if clipped && y < bottom {
        draw_marker(frame, Rect { y: bottom - 1, height: 1, ..area }, "▼");
    }
}

fn draw_marker(frame: &mut Frame, area: Rect, marker: &str) {
    let widget = Paragraph::new(marker)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Smallest start index from which every remaining item fits in `height`,
/// counting the "more above" marker row
fn tail_start(items: &[SidebarItem], height: u16) -> usize {
    let mut remaining: u16 = items.iter().map(SidebarItem::height).sum();
    for (idx, item) in items.iter().enumerate() {
        let marker = u16::from(idx > 0);
        if remaining + marker <= height {
            return idx;
        }
        remaining -= item.height();
    }
    items.len().saturating_sub(1)
}
