//! Dialog rendering orchestration

use std::time::Instant;

use chrono::Local;
use eframe::egui;

use super::SaltmereApp;
use crate::dialog_manager::DialogId;
use crate::protocol::{BackendAction, FormKind};
use crate::toast::Severity;
use crate::ui::dialogs::{render_toast, DialogAction};
use crate::ui::theme::SaltmereTheme;

impl SaltmereApp {
    /// Render all dialogs and the toast, then handle dialog actions.
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context, now: Instant) {
        let theme = SaltmereTheme::from_ctx(ctx);
        let focus = self.pending_focus.take();
        let mut actions: Vec<DialogAction> = Vec::new();

        if let Some(action) = self.forms.sign_in.render(
            ctx,
            &self.dialogs,
            &self.auth,
            &theme,
            focus == Some(DialogId::SignIn),
            now,
        ) {
            actions.push(action);
        }
        if let Some(action) = self.forms.sign_up.render(
            ctx,
            &self.dialogs,
            &self.auth,
            &theme,
            focus == Some(DialogId::SignUp),
            now,
        ) {
            actions.push(action);
        }
        if let Some(action) = self.forms.booking.render(
            ctx,
            &self.dialogs,
            &theme,
            focus == Some(DialogId::Booking),
            now,
        ) {
            actions.push(action);
        }

        for action in actions {
            self.handle_dialog_action(action, now);
        }

        // Toast renders above everything
        render_toast(ctx, &mut self.toasts, &theme);
    }

    fn handle_dialog_action(&mut self, action: DialogAction, now: Instant) {
        match action {
            DialogAction::Dismiss(id) => self.dialogs.close(id, now),
            DialogAction::Switch { from, to } => self.dialogs.switch(from, to, now),
            DialogAction::SubmitAuth(kind) => self.submit_auth(kind, now),
            DialogAction::SubmitBooking => self.submit_booking(now),
        }
    }

    /// Validate and dispatch an auth submission. Validation failures
    /// surface as an error toast and never reach the network.
    fn submit_auth(&mut self, kind: FormKind, now: Instant) {
        let fields = self.forms.auth_form(kind).fields();
        match self.auth.begin(kind, &fields, now) {
            Err(message) => self.toasts.show(message, Severity::Error, now),
            Ok(()) => {
                if kind == FormKind::SignIn {
                    self.settings.remembered_email = fields.email.clone();
                }
                let url = self.settings.endpoint_url(kind.endpoint_path());
                self.state.push_log(&format!("Submitting to {}", url));
                let _ = self.action_tx.send(BackendAction::Submit { kind, url, fields });
            }
        }
    }

    fn submit_booking(&mut self, now: Instant) {
        let today = Local::now().date_naive();
        match self.forms.booking.validate(today) {
            Err(message) => self.toasts.show(message, Severity::Error, now),
            Ok((check_in, check_out)) => {
                let nights = (check_out - check_in).num_days();
                self.toasts.show(
                    format!(
                        "Request received: {} night(s) from {} for {} guest(s). We'll be in touch!",
                        nights, check_in, self.forms.booking.guests
                    ),
                    Severity::Success,
                    now,
                );
                self.state.push_log(&format!(
                    "Booking request: {} to {}, {} guest(s)",
                    check_in, check_out, self.forms.booking.guests
                ));
                self.dialogs.close(DialogId::Booking, now);
            }
        }
    }
}
