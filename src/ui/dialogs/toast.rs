//! Toast banner - floating message in the top-right corner.

use eframe::egui;

use crate::toast::ToastPresenter;
use crate::ui::theme::SaltmereTheme;

/// Render the toast, if one is up. The close button hides it early;
/// auto-hide is handled by `ToastPresenter::tick`.
pub fn render_toast(ctx: &egui::Context, toasts: &mut ToastPresenter, theme: &SaltmereTheme) {
    let Some(toast) = toasts.current() else {
        return;
    };
    let accent = theme.severity_color(toast.severity);
    let message = toast.message.clone();

    let mut close_clicked = false;
    egui::Area::new(egui::Id::new("toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 50.0]) // Below the header
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.surface_raised)
                .stroke(egui::Stroke::new(1.0, accent))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&message).color(accent));
                        if ui.small_button("✕").clicked() {
                            close_clicked = true;
                        }
                    });
                });
        });

    if close_clicked {
        toasts.hide();
    }
}
