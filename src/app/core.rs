//! Core SaltmereApp struct definition and initialization

use std::thread;
use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, Settings};
use crate::dialog_manager::{DialogId, DialogManager};
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::UiState;
use crate::submission::AuthController;
use crate::toast::ToastPresenter;
use crate::ui;
use crate::ui::dialogs::Forms;
use crate::ui::panels::TESTIMONIALS;

pub struct SaltmereApp {
    // Page-level state (season, carousel, activity log)
    pub state: UiState,

    // Persisted settings (endpoint, theme, remembered email)
    pub settings: Settings,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Dialog lifecycle - managed centrally by DialogManager
    pub dialogs: DialogManager,

    // Form field state for the three dialogs
    pub forms: Forms,

    // Submission phases for the auth forms
    pub auth: AuthController,

    // The single toast slot
    pub toasts: ToastPresenter,

    // Set when a dialog finishes opening; the next render moves focus
    // into its first field
    pub pending_focus: Option<DialogId>,
}

impl SaltmereApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx);
        });

        // Restore persisted settings and apply the theme
        let settings = load_settings().unwrap_or_default();
        match settings.theme.as_str() {
            "dark" => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::light()),
        }
        ui::theme::apply_app_style(&cc.egui_ctx);

        let mut forms = Forms::default();
        forms.sign_in.email = settings.remembered_email.clone();

        Self {
            state: UiState::new(TESTIMONIALS.len(), Instant::now()),
            settings,
            action_tx,
            event_rx,
            dialogs: DialogManager::new(),
            forms,
            auth: AuthController::new(),
            toasts: ToastPresenter::new(),
            pending_focus: None,
        }
    }
}

impl Drop for SaltmereApp {
    fn drop(&mut self) {
        // Persist settings on exit and let the backend thread wind down
        if let Err(e) = save_settings(&self.settings) {
            eprintln!("Failed to save settings: {}", e);
        }
        let _ = self.action_tx.send(BackendAction::Shutdown);
    }
}
