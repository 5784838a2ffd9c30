//! Backend event processing (submission responses, backend faults).

use std::time::Instant;

use crate::dialog_manager::{DialogId, DialogManager, SIGNUP_CLOSE_DELAY};
use crate::protocol::{FormKind, GuiEvent};
use crate::state::UiState;
use crate::submission::{is_success_body, AuthController};
use crate::toast::{Severity, ToastPresenter};
use crate::ui::dialogs::Forms;

/// Apply one backend event to the client state.
pub fn process_single_event(
    event: GuiEvent,
    auth: &mut AuthController,
    dialogs: &mut DialogManager,
    toasts: &mut ToastPresenter,
    forms: &mut Forms,
    state: &mut UiState,
    now: Instant,
) {
    match event {
        GuiEvent::AuthResponse { kind, result } => {
            // Whatever happened, the button must come back
            auth.complete(kind);

            match result {
                Ok(body) if is_success_body(&body) => {
                    toasts.show(body, Severity::Success, now);
                    forms.auth_form_mut(kind).clear();
                    match kind {
                        FormKind::SignIn => dialogs.close(DialogId::SignIn, now),
                        // Leave the dialog up long enough to read the toast
                        FormKind::SignUp => {
                            dialogs.close_after(DialogId::SignUp, SIGNUP_CLOSE_DELAY, now)
                        }
                    }
                    state.push_log(&format!("{} succeeded", kind_label(kind)));
                }
                Ok(body) => {
                    // Server-reported error: shown verbatim, dialog stays
                    // open, fields retained
                    toasts.show(body.clone(), Severity::Error, now);
                    state.push_log(&format!("{} rejected: {}", kind_label(kind), body));
                }
                Err(description) => {
                    toasts.show(format!("Error: {}", description), Severity::Error, now);
                    state.push_log(&format!("{} failed: {}", kind_label(kind), description));
                }
            }
        }

        GuiEvent::Error(msg) => {
            toasts.show(
                "Something went wrong. Please try again.",
                Severity::Error,
                now,
            );
            state.push_log(&format!("Unexpected fault: {}", msg));
        }
    }
}

fn kind_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::SignIn => "Sign-in",
        FormKind::SignUp => "Sign-up",
    }
}
