//! Submission state for the call request form

use std::time::{Duration, Instant};

/// Braille spinner shown on the submit button while a call is in flight
const SPINNER_FRAMES: &[&str] = &[
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Ready; the submit button is actionable
    #[default]
    Idle,
    /// A call request is in flight; the submit button is disabled
    Submitting { started: Instant },
}

impl SubmissionPhase {
    /// Time between spinner frames
    const FRAME_DURATION: Duration = Duration::from_millis(80);

    /// Enter the submitting phase now
    pub fn begin() -> Self {
        Self::Submitting {
            started: Instant::now(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Spinner glyph for the current moment, if submitting
    pub fn spinner_frame(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Submitting { started } => {
                let ticks = started.elapsed().as_millis() / Self::FRAME_DURATION.as_millis();
                Some(SPINNER_FRAMES[ticks as usize % SPINNER_FRAMES.len()])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let phase = SubmissionPhase::default();
        assert!(!phase.is_submitting());
        assert!(phase.spinner_frame().is_none());
    }

    #[test]
    fn test_begin_is_submitting() {
        let phase = SubmissionPhase::begin();
        assert!(phase.is_submitting());
        assert!(phase.spinner_frame().is_some());
    }

    #[test]
    fn test_spinner_advances_with_time() {
        let phase = SubmissionPhase::Submitting {
            started: Instant::now() - Duration::from_millis(85),
        };
        assert_eq!(phase.spinner_frame(), Some(SPINNER_FRAMES[1]));
    }

    #[test]
    fn test_spinner_wraps() {
        let phase = SubmissionPhase::Submitting {
            started: Instant::now() - Duration::from_millis(80 * 10 + 5),
        };
        assert_eq!(phase.spinner_frame(), Some(SPINNER_FRAMES[0]));
    }
}
