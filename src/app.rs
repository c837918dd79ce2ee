//! Application state and core logic

use crate::config::CallerSettings;
use crate::state::{AppState, Form, FormRow, Notification, SubmissionPhase, View};
use crate::vendor::{BlandClient, CallDefaults, CallError, CallReceipt, VoiceApi};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Toast title when the vendor queues the call
pub const SUCCESS_TITLE: &str = "Scheduled: Catch up";
/// Toast description when the vendor queues the call
pub const SUCCESS_DESCRIPTION: &str = "Call successfully queued.";
/// Toast title for every failed attempt
pub const FAILURE_TITLE: &str = "Failed to initiate call";
/// Toast description when no better message is available
pub const FALLBACK_FAILURE_DESCRIPTION: &str = "Please try again later.";

type CallOutcome = Result<CallReceipt, CallError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Vendor call API
    api: Arc<dyn VoiceApi>,
    /// Constant part of every call request
    call_defaults: CallDefaults,
    /// Whether a credential was configured (shown in the status bar)
    pub has_api_key: bool,
    /// In-flight call request, if any
    pending_call: Option<JoinHandle<CallOutcome>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the real vendor API
    pub fn new(settings: CallerSettings) -> Result<Self> {
        let client = BlandClient::new(
            settings.endpoint.clone(),
            settings.api_key.clone(),
            settings.org_header.clone(),
        )?;
        tracing::info!(endpoint = client.endpoint(), "Vendor client ready");
        Ok(Self::with_api(settings, Arc::new(client)))
    }

    /// Create an App around any [`VoiceApi`] implementation
    pub fn with_api(settings: CallerSettings, api: Arc<dyn VoiceApi>) -> Self {
        Self {
            state: AppState::new(settings.variant),
            api,
            has_api_key: settings.has_api_key(),
            call_defaults: settings.call_defaults,
            pending_call: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-tick housekeeping: expire toasts
    pub fn tick(&mut self) {
        self.state.expire_notification();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Esc dismisses a visible toast before doing anything else
        if self.state.notification.is_some() && key.code == KeyCode::Esc {
            self.state.dismiss_notification();
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::VoiceAgent => self.handle_voice_agent_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        if let Some(idx) = crate::state::entry_index_for(&view) {
            self.state.sidebar_index = idx;
        }
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
            if let Some(idx) = crate::state::entry_index_for(&view) {
                self.state.sidebar_index = idx;
            }
        }
    }

    /// Handle keys on the landing view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.sidebar_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.sidebar_up(),
            KeyCode::Char('d') => self.navigate(View::VoiceAgent),
            KeyCode::Enter => {
                // The highlighted entry wins unless it is this page; then the
                // dashboard button is what Enter presses
                let target = self
                    .state
                    .sidebar_target()
                    .filter(|view| *view != View::Home)
                    .unwrap_or(View::VoiceAgent);
                self.navigate(target);
            }
            _ => {}
        }
    }

    /// Handle keys on the call form
    fn handle_voice_agent_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit_call();
                }
                KeyCode::Char('u') if !self.state.submission.is_submitting() => {
                    if let Some(field) = self.state.call_form.get_active_field_mut() {
                        field.clear();
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.state.call_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.call_form.prev_field(),
            _ => match self.state.call_form.active_row() {
                FormRow::Preset => self.handle_preset_key(key),
                FormRow::Field(_) => self.handle_field_key(key),
                FormRow::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit_call();
                    }
                }
            },
        }
    }

    fn handle_preset_key(&mut self, key: KeyEvent) {
        if self.state.submission.is_submitting() {
            return;
        }
        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.call_form.next_preset();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.call_form.prev_preset();
            }
            KeyCode::Char(c) => {
                // 1-based shortcut into the preset list
                if let Some(n) = c.to_digit(10).filter(|n| *n > 0) {
                    self.select_preset(n as usize - 1);
                }
            }
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        if self.state.submission.is_submitting() {
            return;
        }
        match key.code {
            KeyCode::Enter => {
                self.submit_call();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.call_form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.call_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Replace the form values with preset `index`. Out of range is a no-op.
    pub fn select_preset(&mut self, index: usize) -> bool {
        if self.state.submission.is_submitting() {
            return false;
        }
        let changed = self.state.call_form.select_preset(index);
        if !changed {
            tracing::debug!(index, "Ignoring out-of-range preset");
        }
        changed
    }

    /// Validate the form and, if valid, start one call request in the
    /// background. Returns true when a request was started.
    pub fn submit_call(&mut self) -> bool {
        if self.state.submission.is_submitting() {
            return false;
        }

        let input = match self.state.call_form.validate() {
            Ok(input) => input,
            Err(errors) => {
                tracing::debug!(%errors, "Call form rejected");
                return false;
            }
        };

        let payload = self.call_defaults.build_payload(&input);
        self.state.submission = SubmissionPhase::begin();
        tracing::info!(name = %input.name, "Requesting outbound call");

        let api = Arc::clone(&self.api);
        self.pending_call = Some(tokio::spawn(async move { api.create_call(&payload).await }));
        true
    }

    /// Apply the outcome of a finished call request, if there is one.
    /// Never waits for a request still in flight.
    pub async fn poll_submission(&mut self) {
        let finished = self
            .pending_call
            .as_ref()
            .is_some_and(JoinHandle::is_finished);
        if finished {
            self.await_submission().await;
        }
    }

    /// Wait for the in-flight call request, then apply its outcome
    pub async fn await_submission(&mut self) {
        if let Some(handle) = self.pending_call.take() {
            let outcome = handle
                .await
                .unwrap_or_else(|e| Err(CallError::Transport(e.to_string())));
            self.finish_submission(outcome);
        }
    }

    /// Report the outcome and return the form to idle
    fn finish_submission(&mut self, outcome: CallOutcome) {
        let notification = match outcome {
            Ok(CallReceipt) => {
                tracing::info!("Call queued");
                Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION)
            }
            Err(err) if err.is_rejection() => {
                tracing::warn!(error = %err, "Vendor rejected call request");
                let description = err
                    .vendor_message()
                    .unwrap_or(FALLBACK_FAILURE_DESCRIPTION);
                Notification::failure(FAILURE_TITLE, description)
            }
            Err(err) => {
                tracing::error!(error = %err, "Error initiating call");
                Notification::failure(FAILURE_TITLE, FALLBACK_FAILURE_DESCRIPTION)
            }
        };

        self.state.notify(notification);
        self.state.submission = SubmissionPhase::Idle;
    }
}
