//! Modal dialogs - self-contained form views.
//!
//! Each dialog owns its field state and returns `DialogAction`s instead
//! of mutating external state directly; the app processes the actions in
//! its update loop. Lifecycle (open/close/fade) belongs to
//! `DialogManager`; the views only ask it what to draw.

mod booking;
mod sign_in;
mod sign_up;
mod toast;

pub use booking::BookingForm;
pub use sign_in::SignInForm;
pub use sign_up::SignUpForm;
pub use toast::render_toast;

use eframe::egui;

use crate::dialog_manager::{next_focus_index, DialogId};
use crate::protocol::{FormFields, FormKind};

/// Actions returned by dialog views for the app to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// The user submitted an auth form
    SubmitAuth(FormKind),
    /// The user submitted the booking form
    SubmitBooking,
    /// Backdrop click or escape dismissed the dialog
    Dismiss(DialogId),
    /// "Already have an account?" style cross-link
    Switch { from: DialogId, to: DialogId },
}

/// The seam between the submission controller and the concrete views:
/// the controller only ever sees `FormFields`.
pub trait AuthForm {
    fn fields(&self) -> FormFields;
    fn clear(&mut self);
}

/// All form view state, owned by the app.
#[derive(Default)]
pub struct Forms {
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    pub booking: BookingForm,
}

impl Forms {
    pub fn auth_form(&self, kind: FormKind) -> &dyn AuthForm {
        match kind {
            FormKind::SignIn => &self.sign_in,
            FormKind::SignUp => &self.sign_up,
        }
    }

    pub fn auth_form_mut(&mut self, kind: FormKind) -> &mut dyn AuthForm {
        match kind {
            FormKind::SignIn => &mut self.sign_in,
            FormKind::SignUp => &mut self.sign_up,
        }
    }
}

/// Keep Tab/Shift+Tab cycling inside the dialog: `ids` are the dialog's
/// focusable widgets in order, and focus wraps at both ends.
pub fn trap_focus(ctx: &egui::Context, ids: &[egui::Id]) {
    let Some(focused) = ctx.memory(|m| m.focused()) else {
        return;
    };
    let Some(pos) = ids.iter().position(|&id| id == focused) else {
        return;
    };
    let backwards = ctx.input(|i| i.modifiers.shift);
    let modifiers = if backwards {
        egui::Modifiers::SHIFT
    } else {
        egui::Modifiers::NONE
    };
    if ctx.input_mut(|i| i.consume_key(modifiers, egui::Key::Tab)) {
        let next = next_focus_index(pos, ids.len(), backwards);
        ctx.memory_mut(|m| m.request_focus(ids[next]));
    }
}
