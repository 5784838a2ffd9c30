use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5500";

#[derive(Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the account service the forms POST to.
    pub endpoint: String,
    pub theme: String,
    /// Pre-filled into the sign-in form on startup.
    #[serde(default)]
    pub remembered_email: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: "light".to_string(),
            remembered_email: String::new(),
        }
    }
}

impl Settings {
    /// Full URL for a form endpoint path, tolerating a trailing slash in
    /// the configured base.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "saltmere", "saltmere") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).expect("settings serialize");
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}
