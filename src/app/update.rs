//! Main update loop

use std::time::{Duration, Instant};

use eframe::egui;

use super::SaltmereApp;
use crate::ui;
use crate::ui::theme::SaltmereTheme;

impl eframe::App for SaltmereApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Apply responses from the network backend
        self.process_events(now);

        // Advance every transition deadline
        if let Some(opened) = self.dialogs.tick(now) {
            self.pending_focus = Some(opened);
        }
        self.toasts.tick(now);
        self.state.testimonials.tick(now);

        // Escape closes whichever dialog is up
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dialogs.handle_escape(now);
        }

        // Keep the deadlines moving even without input
        ctx.request_repaint_after(Duration::from_millis(100));

        let theme = SaltmereTheme::from_ctx(ctx);
        ui::panels::render_header(
            ctx,
            &mut self.dialogs,
            &theme,
            &mut self.settings.theme,
            now,
        );
        ui::panels::render_status_bar(ctx, &self.state, &theme);
        ui::panels::render_central(
            ctx,
            &mut self.state,
            &mut self.toasts,
            &mut self.dialogs,
            &theme,
            now,
        );

        self.render_dialogs(ctx, now);
    }
}
