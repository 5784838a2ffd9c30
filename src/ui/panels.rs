//! Page panels: header, the central marketing sections, and the status
//! bar. Dialogs and the toast render on top of these.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::dialog_manager::{DialogId, DialogManager};
use crate::state::{Season, UiState};
use crate::toast::{Severity, ToastPresenter};
use crate::ui::theme::SaltmereTheme;

pub struct RateRow {
    pub room: &'static str,
    pub off_peak: &'static str,
    pub peak: &'static str,
}

pub const RATES: [RateRow; 4] = [
    RateRow { room: "Garden View Room", off_peak: "$180 / night", peak: "$260 / night" },
    RateRow { room: "Lagoon Suite", off_peak: "$290 / night", peak: "$410 / night" },
    RateRow { room: "Beachfront Villa", off_peak: "$450 / night", peak: "$620 / night" },
    RateRow { room: "Cove Residence", off_peak: "$680 / night", peak: "$940 / night" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The quietest week we've had in years. We booked next summer before checking out.",
        author: "Priya N., returning guest",
    },
    Testimonial {
        quote: "Breakfast on the cove terrace alone is worth the trip.",
        author: "Marcus T.",
    },
    Testimonial {
        quote: "Staff remembered our anniversary from last year. Unreal attention to detail.",
        author: "Elena & Sam R.",
    },
];

/// Top header: brand, booking, auth entry points, theme toggle.
pub fn render_header(
    ctx: &egui::Context,
    dialogs: &mut DialogManager,
    theme: &SaltmereTheme,
    theme_name: &mut String,
    now: Instant,
) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Saltmere Cove").heading().color(theme.accent));
            ui.label(RichText::new("resort & spa").color(theme.text_muted).size(11.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = if theme_name.as_str() == "dark" { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Switch theme").clicked() {
                    if theme_name.as_str() == "dark" {
                        *theme_name = "light".into();
                        ctx.set_visuals(egui::Visuals::light());
                    } else {
                        *theme_name = "dark".into();
                        ctx.set_visuals(egui::Visuals::dark());
                    }
                }
                if ui.button("Sign Up").clicked() {
                    dialogs.open(DialogId::SignUp, now);
                }
                if ui.button("Sign In").clicked() {
                    dialogs.open(DialogId::SignIn, now);
                }
                if ui
                    .add(egui::Button::new(RichText::new("Book Now").strong()).fill(theme.accent))
                    .clicked()
                {
                    dialogs.open(DialogId::Booking, now);
                }
            });
        });
        ui.add_space(6.0);
    });
}

/// Bottom status bar: the latest activity line.
pub fn render_status_bar(ctx: &egui::Context, state: &UiState, theme: &SaltmereTheme) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(line) = state.last_log() {
                ui.label(RichText::new(line).color(theme.text_muted).size(11.0));
            }
        });
    });
}

/// Central scrollable page: hero, pricing, testimonials.
pub fn render_central(
    ctx: &egui::Context,
    state: &mut UiState,
    toasts: &mut ToastPresenter,
    dialogs: &mut DialogManager,
    theme: &SaltmereTheme,
    now: Instant,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme.surface).inner_margin(egui::Margin::same(24)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                // Background scroll is locked while a dialog is up
                .enable_scrolling(!dialogs.scroll_locked())
                .show(ui, |ui| {
                    render_hero(ui, dialogs, theme, now);
                    ui.add_space(28.0);
                    render_pricing(ui, state, toasts, theme, now);
                    ui.add_space(28.0);
                    render_testimonials(ui, state, theme, now);
                    ui.add_space(16.0);
                });
        });
}

fn render_hero(
    ui: &mut egui::Ui,
    dialogs: &mut DialogManager,
    theme: &SaltmereTheme,
    now: Instant,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("Where the tide sets the schedule").size(28.0).strong());
        ui.label(
            RichText::new("Forty acres of private shoreline, three restaurants, one pace.")
                .color(theme.text_muted),
        );
        ui.add_space(12.0);
        if ui
            .add(egui::Button::new(RichText::new("Check Availability").strong()).fill(theme.accent))
            .clicked()
        {
            dialogs.open(DialogId::Booking, now);
        }
        ui.add_space(24.0);
    });
}

fn render_pricing(
    ui: &mut egui::Ui,
    state: &mut UiState,
    toasts: &mut ToastPresenter,
    theme: &SaltmereTheme,
    now: Instant,
) {
    ui.label(RichText::new("Rates").size(20.0).strong());
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        for season in [Season::OffPeak, Season::Peak] {
            let selected = state.season == season;
            if ui
                .selectable_label(selected, format!("{} Season", season.label()))
                .clicked()
                && state.switch_season(season, now)
            {
                toasts.show(
                    format!("Switched to {} Season pricing", season.label()),
                    Severity::Success,
                    now,
                );
                state.push_log(&format!("Viewing {} Season rates", season.label()));
            }
        }
    });
    ui.add_space(8.0);

    // Cross-fade the table after a season switch
    ui.scope(|ui| {
        ui.set_opacity(state.season_alpha(now));
        egui::Grid::new("rates_grid").striped(true).show(ui, |ui| {
            for row in &RATES {
                ui.label(row.room);
                let price = match state.season {
                    Season::OffPeak => row.off_peak,
                    Season::Peak => row.peak,
                };
                ui.label(RichText::new(price).color(theme.accent).strong());
                ui.end_row();
            }
        });
    });
}

fn render_testimonials(
    ui: &mut egui::Ui,
    state: &mut UiState,
    theme: &SaltmereTheme,
    now: Instant,
) {
    ui.label(RichText::new("Guests say").size(20.0).strong());
    ui.add_space(6.0);

    let testimonial = &TESTIMONIALS[state.testimonials.index % TESTIMONIALS.len()];
    egui::Frame::new()
        .fill(theme.surface_raised)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("\u{201c}{}\u{201d}", testimonial.quote)).italics());
            ui.add_space(4.0);
            ui.label(RichText::new(testimonial.author).color(theme.text_muted).size(12.0));
        });

    ui.horizontal(|ui| {
        if ui.button("◀").clicked() {
            state.testimonials.prev(now);
        }
        ui.label(
            RichText::new(format!(
                "{} / {}",
                state.testimonials.index + 1,
                TESTIMONIALS.len()
            ))
            .color(theme.text_muted)
            .size(11.0),
        );
        if ui.button("▶").clicked() {
            state.testimonials.next(now);
        }
    });
}
