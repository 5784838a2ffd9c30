//! Saltmere Cove desktop client
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for the HTTP calls
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use saltmere::app::SaltmereApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Saltmere Cove",
        options,
        Box::new(|cc| Ok(Box::new(SaltmereApp::new(cc)))),
    )
}
