//! Copy-email button state.
//!
//! The button shows "Copy email" until a copy finishes. Success switches to
//! "Copied!" (with the `copied` style) until a revert deadline; failure
//! switches to a manual-copy hint that stays.
//!
//! Only the most recent successful copy owns the revert deadline. The browser
//! layer holds the matching timer handle and drops (cancels) the previous one
//! whenever a new deadline is set, and [`CopyEmailButton::tick`] re-checks the
//! deadline so a stale timer can never revert early.

#[cfg(test)]
#[path = "copy_email_test.rs"]
mod copy_email_test;

use crate::consts::{COPIED_LABEL, COPY_EMAIL_LABEL, MANUAL_COPY_LABEL};
use crate::error::CopyError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyPhase {
    #[default]
    Idle,
    Copied,
    ManualHint,
}

#[derive(Clone, Debug)]
pub struct CopyEmailButton {
    phase: CopyPhase,
    revert_after_ms: f64,
    revert_at_ms: Option<f64>,
}

impl CopyEmailButton {
    #[must_use]
    pub fn new(revert_after_ms: u32) -> Self {
        Self { phase: CopyPhase::Idle, revert_after_ms: f64::from(revert_after_ms), revert_at_ms: None }
    }

    #[must_use]
    #[cfg(test)]
    pub(crate) fn phase(&self) -> CopyPhase {
        self.phase
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.phase {
            CopyPhase::Idle => COPY_EMAIL_LABEL,
            CopyPhase::Copied => COPIED_LABEL,
            CopyPhase::ManualHint => MANUAL_COPY_LABEL,
        }
    }

    /// Whether the `copied` style class should be present.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.phase == CopyPhase::Copied
    }

    /// Pending revert deadline, if a successful copy is on screen.
    #[must_use]
    #[cfg(test)]
    pub(crate) fn revert_at(&self) -> Option<f64> {
        self.revert_at_ms
    }

    /// Record the clipboard result at `now_ms`.
    ///
    /// Returns the new revert deadline on success. Any earlier deadline is
    /// superseded in both cases.
    pub fn finish(&mut self, result: Result<(), CopyError>, now_ms: f64) -> Option<f64> {
        match result {
            Ok(()) => {
                let deadline = now_ms + self.revert_after_ms;
                self.phase = CopyPhase::Copied;
                self.revert_at_ms = Some(deadline);
                Some(deadline)
            }
            Err(err) => {
                log::info!("email copy fell back to manual hint: {err}");
                self.phase = CopyPhase::ManualHint;
                self.revert_at_ms = None;
                None
            }
        }
    }

    /// Advance the clock. Returns `true` when the label reverted.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.revert_at_ms {
            Some(deadline) if now_ms >= deadline => {
                self.phase = CopyPhase::Idle;
                self.revert_at_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Text to put on the clipboard for an email link's visible content.
#[must_use]
pub fn email_text(link_text: &str) -> &str {
    link_text.trim()
}
