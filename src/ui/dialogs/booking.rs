//! Booking dialog: stay dates and party size.
//!
//! Dates are typed as YYYY-MM-DD. Check-out is clamped to the day after
//! check-in whenever an edit leaves it at or before check-in, matching
//! the behavior of the booking form on the website.

use chrono::{Days, Local, NaiveDate};
use eframe::egui;

use super::{trap_focus, DialogAction};
use crate::dialog_manager::{DialogId, DialogManager};
use crate::ui::theme::SaltmereTheme;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct BookingForm {
    pub check_in: String,
    pub check_out: String,
    pub guests: u8,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            guests: 2,
        }
    }
}

impl BookingForm {
    /// Parse and check the stay dates. Returns (check_in, check_out).
    pub fn validate(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), String> {
        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;
        if check_in < today {
            return Err("Check-in cannot be in the past".to_string());
        }
        if check_out <= check_in {
            return Err("Check-out must be after check-in".to_string());
        }
        Ok((check_in, check_out))
    }

    /// Bump check-out to the day after check-in when an edit leaves it
    /// at or before check-in. Unparseable fields are left for
    /// `validate` to report.
    pub fn clamp_dates(&mut self) {
        let (Ok(check_in), Ok(check_out)) =
            (parse_date(&self.check_in), parse_date(&self.check_out))
        else {
            return;
        };
        if check_out <= check_in {
            if let Some(next_day) = check_in.checked_add_days(Days::new(1)) {
                self.check_out = next_day.format(DATE_FORMAT).to_string();
            }
        }
    }

    pub fn render(
        &mut self,
        ctx: &egui::Context,
        dialogs: &DialogManager,
        theme: &SaltmereTheme,
        focus_first: bool,
        now: std::time::Instant,
    ) -> Option<DialogAction> {
        if !dialogs.visible(DialogId::Booking) {
            return None;
        }

        let alpha = dialogs.opacity(DialogId::Booking, now);
        let mut action: Option<DialogAction> = None;

        let modal = egui::Modal::new(egui::Id::new("booking_modal"))
            .backdrop_color(egui::Color32::from_black_alpha((120.0 * alpha) as u8))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(theme.surface_raised)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                ui.set_width(320.0);
                ui.set_opacity(alpha);

                ui.heading("Book Your Stay");
                ui.label(
                    egui::RichText::new(format!(
                        "Earliest check-in: {}",
                        Local::now().date_naive().format(DATE_FORMAT)
                    ))
                    .color(theme.text_muted)
                    .size(12.0),
                );
                ui.add_space(12.0);

                ui.label("Check-in (YYYY-MM-DD)");
                let check_in_resp = ui.add(
                    egui::TextEdit::singleline(&mut self.check_in)
                        .hint_text("2026-08-14")
                        .desired_width(f32::INFINITY),
                );
                if focus_first {
                    check_in_resp.request_focus();
                }

                ui.add_space(6.0);
                ui.label("Check-out (YYYY-MM-DD)");
                let check_out_resp = ui.add(
                    egui::TextEdit::singleline(&mut self.check_out)
                        .hint_text("2026-08-16")
                        .desired_width(f32::INFINITY),
                );

                if check_in_resp.changed() || check_out_resp.changed() {
                    self.clamp_dates();
                }

                ui.add_space(6.0);
                ui.label("Guests");
                ui.add(egui::Slider::new(&mut self.guests, 1..=8));

                ui.add_space(14.0);
                let submit_resp = ui.add(
                    egui::Button::new("Check Availability")
                        .fill(theme.accent)
                        .min_size(egui::vec2(ui.available_width(), 32.0)),
                );
                if submit_resp.clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    action = Some(DialogAction::SubmitBooking);
                }

                trap_focus(
                    ui.ctx(),
                    &[check_in_resp.id, check_out_resp.id, submit_resp.id],
                );
            });

        if modal.should_close() && action.is_none() {
            action = Some(DialogAction::Dismiss(DialogId::Booking));
        }
        action
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| "Please enter dates as YYYY-MM-DD".to_string())
}
