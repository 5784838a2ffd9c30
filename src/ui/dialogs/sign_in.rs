//! Sign-in dialog.

use eframe::egui;

use super::{trap_focus, AuthForm, DialogAction};
use crate::dialog_manager::{DialogId, DialogManager};
use crate::protocol::{FormFields, FormKind};
use crate::submission::AuthController;
use crate::ui::theme::SaltmereTheme;

/// Sign-in form fields. Field state survives close/reopen; it is only
/// cleared on a successful submission.
#[derive(Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl AuthForm for SignInForm {
    fn fields(&self) -> FormFields {
        FormFields {
            fullname: None,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

impl SignInForm {
    /// Render the dialog if it is visible. `focus_first` moves focus to
    /// the email field (set when the opening transition completes).
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        dialogs: &DialogManager,
        auth: &AuthController,
        theme: &SaltmereTheme,
        focus_first: bool,
        now: std::time::Instant,
    ) -> Option<DialogAction> {
        if !dialogs.visible(DialogId::SignIn) {
            return None;
        }

        let alpha = dialogs.opacity(DialogId::SignIn, now);
        let in_flight = auth.in_flight(FormKind::SignIn);
        let mut action: Option<DialogAction> = None;

        let modal = egui::Modal::new(egui::Id::new("sign_in_modal"))
            .backdrop_color(egui::Color32::from_black_alpha((120.0 * alpha) as u8))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(theme.surface_raised)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                ui.set_width(300.0);
                ui.set_opacity(alpha);

                ui.heading("Welcome Back");
                ui.label(
                    egui::RichText::new("Sign in to manage your stay")
                        .color(theme.text_muted)
                        .size(12.0),
                );
                ui.add_space(12.0);

                ui.label("Email");
                let email_resp = ui.add(
                    egui::TextEdit::singleline(&mut self.email)
                        .hint_text("you@example.com")
                        .desired_width(f32::INFINITY),
                );
                if focus_first {
                    email_resp.request_focus();
                }

                ui.add_space(6.0);
                ui.label("Password");
                let password_resp = ui.add(
                    egui::TextEdit::singleline(&mut self.password)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(14.0);
                let submit_resp = ui.add_enabled(
                    !in_flight,
                    egui::Button::new(auth.button_label(FormKind::SignIn))
                        .fill(theme.accent)
                        .min_size(egui::vec2(ui.available_width(), 32.0)),
                );
                if in_flight {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(egui::RichText::new("Contacting the resort...").size(11.0));
                    });
                }
                if submit_resp.clicked() {
                    action = Some(DialogAction::SubmitAuth(FormKind::SignIn));
                }

                // Also submit on Enter key
                if !in_flight && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = Some(DialogAction::SubmitAuth(FormKind::SignIn));
                }

                ui.add_space(8.0);
                let switch_resp = ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("New to Saltmere Cove?")
                            .color(theme.text_muted)
                            .size(12.0),
                    );
                    ui.link("Create an account")
                });
                if switch_resp.inner.clicked() {
                    action = Some(DialogAction::Switch {
                        from: DialogId::SignIn,
                        to: DialogId::SignUp,
                    });
                }

                trap_focus(
                    ui.ctx(),
                    &[
                        email_resp.id,
                        password_resp.id,
                        submit_resp.id,
                        switch_resp.inner.id,
                    ],
                );
            });

        if modal.should_close() && action.is_none() {
            action = Some(DialogAction::Dismiss(DialogId::SignIn));
        }
        action
    }
}
