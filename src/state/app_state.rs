//! Application state definitions

use super::forms::{CallRequestForm, FormVariant};
use super::navigation::{entry_index_for, sidebar_entries};
use super::notification::Notification;
use super::submission::SubmissionPhase;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen
    #[default]
    Home,
    /// Outbound call demo form
    VoiceAgent,
}

impl View {
    /// Views that capture typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::VoiceAgent)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::VoiceAgent => "Voice Agent",
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,
    pub sidebar_index: usize,

    // Call form
    pub call_form: CallRequestForm,
    pub submission: SubmissionPhase,

    // Toast
    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            call_form: CallRequestForm::new(variant),
            sidebar_index: entry_index_for(&View::Home).unwrap_or(0),
            ..Default::default()
        }
    }

    /// Show a toast, replacing any current one
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the toast once its display time is over
    pub fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Move sidebar selection to the next enabled entry
    pub fn sidebar_down(&mut self) {
        let entries = sidebar_entries();
        if let Some(offset) = entries
            .iter()
            .skip(self.sidebar_index + 1)
            .position(|e| e.is_enabled())
        {
            self.sidebar_index += offset + 1;
        }
    }

    /// Move sidebar selection to the previous enabled entry
    pub fn sidebar_up(&mut self) {
        let entries = sidebar_entries();
        if let Some(idx) = entries
            .iter()
            .take(self.sidebar_index)
            .rposition(|e| e.is_enabled())
        {
            self.sidebar_index = idx;
        }
    }

    /// View the highlighted sidebar entry opens
    pub fn sidebar_target(&self) -> Option<View> {
        sidebar_entries()
            .get(self.sidebar_index)
            .and_then(|e| e.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::new(FormVariant::default());
        assert_eq!(state.current_view, View::Home);
        assert_eq!(state.sidebar_target(), Some(View::Home));
        assert!(!state.submission.is_submitting());
    }

    #[test]
    fn test_form_view_flag() {
        assert!(View::VoiceAgent.is_form_view());
        assert!(!View::Home.is_form_view());
    }

    #[test]
    fn test_sidebar_skips_disabled_entries() {
        let mut state = AppState::new(FormVariant::default());
        state.sidebar_down();
        assert_eq!(state.sidebar_target(), Some(View::VoiceAgent));
        // No enabled entry below Voice Agent
        state.sidebar_down();
        assert_eq!(state.sidebar_target(), Some(View::VoiceAgent));
        state.sidebar_up();
        assert_eq!(state.sidebar_target(), Some(View::Home));
        state.sidebar_up();
        assert_eq!(state.sidebar_target(), Some(View::Home));
    }

    #[test]
    fn test_notify_replaces_previous() {
        let mut state = AppState::default();
        state.notify(Notification::success("first", ""));
        state.notify(Notification::failure("second", ""));
        assert_eq!(state.notification.as_ref().unwrap().title, "second");
    }

    #[test]
    fn test_expire_notification() {
        let mut state = AppState::default();
        state.notify(Notification::success("a", "b"));
        state.expire_notification();
        assert!(state.notification.is_some());

        if let Some(toast) = state.notification.as_mut() {
            toast.backdate(Notification::DISPLAY_DURATION);
        }
        state.expire_notification();
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_dismiss_notification() {
        let mut state = AppState::default();
        state.notify(Notification::success("a", "b"));
        state.dismiss_notification();
        assert!(state.notification.is_none());
    }
}
