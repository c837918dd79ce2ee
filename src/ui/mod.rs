//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod sidebar;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    sidebar::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::VoiceAgent => forms::draw_call_form(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Toast goes on top of everything
    if let Some(notification) = &app.state.notification {
        components::render_toast(frame, notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CallerSettings;
    use crate::state::Notification;
    use crate::vendor::MockVoiceApi;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::with_api(CallerSettings::default(), Arc::new(MockVoiceApi::new()))
    }

    /// Render the app and return the screen as text, one line per row
    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 36)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_home_shows_dashboard_entry_and_sidebar() {
        let screen = render(&test_app());
        assert!(screen.contains("Go to Dashboard"));
        assert!(screen.contains("Voice Agent"));
        assert!(screen.contains("Inbox (10)"));
        assert!(screen.contains("Demos"));
        assert!(screen.contains("no API key"));
    }

    #[test]
    fn test_call_form_shows_fields_and_submit() {
        let mut app = test_app();
        app.navigate(View::VoiceAgent);
        let screen = render(&app);
        assert!(screen.contains("Select a demo"));
        assert!(screen.contains("Name"));
        assert!(screen.contains("Phone Number"));
        assert!(screen.contains("+351912580952"));
        assert!(screen.contains("Run Demo"));
        assert!(!screen.contains("Company Name"));
    }

    #[test]
    fn test_call_form_shows_validation_errors() {
        let mut app = test_app();
        app.navigate(View::VoiceAgent);
        app.state.call_form.name.set_text("M");
        app.state.call_form.phone_number.set_text("123");
        let _ = app.state.call_form.validate();
        let screen = render(&app);
        assert!(screen.contains("Name must be at least 2 characters."));
        assert!(screen.contains("Phone number must be at least 10 characters."));
    }

    #[test]
    fn test_call_form_shows_selected_preset() {
        let mut app = test_app();
        app.navigate(View::VoiceAgent);
        app.select_preset(1);
        let screen = render(&app);
        assert!(screen.contains("Jordi"));
        assert!(screen.contains("(2/2)"));
    }

    #[test]
    fn test_busy_indicator_replaces_submit_label() {
        let mut app = test_app();
        app.navigate(View::VoiceAgent);
        app.state.submission = crate::state::SubmissionPhase::begin();
        let screen = render(&app);
        assert!(!screen.contains("Run Demo"));
        assert!(screen.contains("Calling"));
    }

    #[test]
    fn test_toast_rendered_on_top() {
        let mut app = test_app();
        app.state
            .notify(Notification::failure("Failed to initiate call", "insufficient balance"));
        let screen = render(&app);
        assert!(screen.contains("Failed to initiate call"));
        assert!(screen.contains("insufficient balance"));
    }
}
