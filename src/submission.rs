//! Form submission state, separated from the dialog views.
//!
//! Each auth form owns one `SubmissionPhase`. A submission validates,
//! goes in flight, and returns to idle when the response (or transport
//! failure) is handled — the button label and enabled state derive from
//! the phase, so they are restored on every exit path.

use std::time::Instant;

use crate::protocol::{FormFields, FormKind};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    InFlight { started: Instant },
}

/// Submission state for both auth forms.
pub struct AuthController {
    signin: SubmissionPhase,
    signup: SubmissionPhase,
}

impl AuthController {
    pub fn new() -> Self {
        Self {
            signin: SubmissionPhase::Idle,
            signup: SubmissionPhase::Idle,
        }
    }

    fn phase_mut(&mut self, kind: FormKind) -> &mut SubmissionPhase {
        match kind {
            FormKind::SignIn => &mut self.signin,
            FormKind::SignUp => &mut self.signup,
        }
    }

    pub fn phase(&self, kind: FormKind) -> SubmissionPhase {
        match kind {
            FormKind::SignIn => self.signin,
            FormKind::SignUp => self.signup,
        }
    }

    pub fn in_flight(&self, kind: FormKind) -> bool {
        matches!(self.phase(kind), SubmissionPhase::InFlight { .. })
    }

    /// Validate and move to in-flight. `Err` carries the toast message;
    /// nothing may hit the network in that case.
    pub fn begin(
        &mut self,
        kind: FormKind,
        fields: &FormFields,
        now: Instant,
    ) -> Result<(), String> {
        if self.in_flight(kind) {
            // A submission is already running; the disabled button makes
            // this unreachable from the UI
            return Err("Submission already in progress".to_string());
        }
        validation::validate_form(kind, fields)?;
        *self.phase_mut(kind) = SubmissionPhase::InFlight { started: now };
        Ok(())
    }

    /// The response settled, one way or the other. Always restores idle.
    pub fn complete(&mut self, kind: FormKind) {
        *self.phase_mut(kind) = SubmissionPhase::Idle;
    }

    /// Submit button label for the current phase.
    pub fn button_label(&self, kind: FormKind) -> &'static str {
        match (kind, self.in_flight(kind)) {
            (FormKind::SignIn, false) => "Sign In",
            (FormKind::SignIn, true) => "Signing In...",
            (FormKind::SignUp, false) => "Create Account",
            (FormKind::SignUp, true) => "Creating Account...",
        }
    }
}

impl Default for AuthController {
    fn default() -> Self {
        Self::new()
    }
}

/// The collaborator's body text is authoritative: any body containing
/// "success" (case-insensitive) is the success branch, everything else
/// is shown verbatim as an error.
pub fn is_success_body(body: &str) -> bool {
    body.to_lowercase().contains("success")
}
