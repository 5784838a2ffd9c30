//! Activity logging persistence layer
//!
//! Appends timestamped activity lines (auth attempts, bookings, season
//! switches) to a daily file under the platform data dir:
//! <data_dir>/saltmere/logs/YYYY-MM-DD.log

use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::thread;

/// Logger queues lines to a background thread so the UI never blocks on
/// file I/O.
pub struct Logger {
    tx: Sender<String>,
}

impl Logger {
    /// Create a new logger and spawn the writer thread.
    pub fn new() -> Result<Self, String> {
        let log_dir = log_directory()?;
        fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;

        let (tx, rx) = unbounded::<String>();
        thread::spawn(move || {
            run_logger_thread(rx, log_dir);
        });

        Ok(Self { tx })
    }

    /// Log a line (non-blocking, queued for background writing).
    pub fn log(&self, line: &str) {
        // If send fails, the writer thread has stopped - silently ignore
        let _ = self.tx.send(line.to_string());
    }
}

fn run_logger_thread(rx: Receiver<String>, log_dir: PathBuf) {
    while let Ok(line) = rx.recv() {
        if let Err(e) = append_line(&log_dir, &line) {
            eprintln!("Logger error: {}", e);
        }
    }
}

fn append_line(log_dir: &std::path::Path, line: &str) -> Result<(), String> {
    let now = Local::now();
    let path = log_dir.join(format!("{}.log", now.format("%Y-%m-%d")));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    writeln!(file, "[{}] {}", now.format("%H:%M:%S"), line)
        .map_err(|e| format!("Failed to write log entry: {}", e))
}

fn log_directory() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new().ok_or("Failed to determine home directory")?;
    Ok(base.data_dir().join("saltmere").join("logs"))
}
