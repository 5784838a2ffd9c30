//! Color themes and styling utilities for the client.

use eframe::egui::{self, Color32};

use crate::toast::Severity;

/// Palette for one visual theme.
pub struct SaltmereTheme {
    pub accent: Color32,
    pub surface: Color32,
    pub surface_raised: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
    pub info: Color32,
}

impl SaltmereTheme {
    pub fn light() -> Self {
        Self {
            accent: Color32::from_rgb(0x0e, 0x7a, 0x8a),
            surface: Color32::from_rgb(0xfb, 0xf9, 0xf4),
            surface_raised: Color32::WHITE,
            text_muted: Color32::from_rgb(0x6b, 0x6f, 0x76),
            border: Color32::from_rgb(0xd8, 0xd4, 0xc8),
            success: Color32::from_rgb(0x28, 0xa7, 0x45),
            error: Color32::from_rgb(0xe7, 0x4c, 0x3c),
            info: Color32::from_rgb(0xf3, 0x9c, 0x12),
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(0x4f, 0xb3, 0xc4),
            surface: Color32::from_rgb(0x1d, 0x20, 0x24),
            surface_raised: Color32::from_rgb(0x26, 0x2a, 0x30),
            text_muted: Color32::from_rgb(0x9a, 0x9f, 0xa8),
            border: Color32::from_rgb(0x3a, 0x3f, 0x47),
            success: Color32::from_rgb(0x3d, 0xc0, 0x5c),
            error: Color32::from_rgb(0xef, 0x6a, 0x5a),
            info: Color32::from_rgb(0xf5, 0xad, 0x42),
        }
    }

    /// Theme matching the context's current visuals.
    pub fn from_ctx(ctx: &egui::Context) -> Self {
        if ctx.style().visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Accent color for a toast severity. Pure state -> presentation
    /// mapping; severity never leaks into ad hoc styling elsewhere.
    pub fn severity_color(&self, severity: Severity) -> Color32 {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Info => self.info,
        }
    }
}

/// Apply app-wide spacing and rounding tweaks.
pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}
