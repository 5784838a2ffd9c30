//! Core UI state, separated from rendering.
//!
//! `UiState` holds the page-level state that used to be scattered
//! globals: the pricing season, the testimonial carousel, and the
//! activity log. It is owned by `SaltmereApp` and passed to UI
//! components as needed.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::logging::Logger;

/// Cross-fade when the pricing season changes.
pub const SEASON_FADE: Duration = Duration::from_millis(200);

/// Testimonial autoplay interval.
pub const CAROUSEL_AUTOPLAY: Duration = Duration::from_millis(5000);

const MAX_LOG_LINES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    OffPeak,
    Peak,
}

impl Season {
    pub fn label(self) -> &'static str {
        match self {
            Season::OffPeak => "Off-Peak",
            Season::Peak => "Peak",
        }
    }
}

/// Testimonial carousel: wrap-around index with an autoplay deadline.
/// Manual navigation restarts the countdown.
pub struct Carousel {
    pub index: usize,
    len: usize,
    next_advance: Instant,
}

impl Carousel {
    pub fn new(len: usize, now: Instant) -> Self {
        Self {
            index: 0,
            len,
            next_advance: now + CAROUSEL_AUTOPLAY,
        }
    }

    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.next_advance = now + CAROUSEL_AUTOPLAY;
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.next_advance = now + CAROUSEL_AUTOPLAY;
    }

    pub fn tick(&mut self, now: Instant) {
        if now >= self.next_advance {
            self.next(now);
        }
    }
}

pub struct UiState {
    pub season: Season,
    season_changed_at: Option<Instant>,

    pub testimonials: Carousel,

    /// Timestamped activity lines (latest shown in the status bar).
    pub system_log: Vec<String>,

    /// Background file logger; `None` when the data dir is unavailable.
    pub logger: Option<Logger>,
}

impl UiState {
    pub fn new(testimonial_count: usize, now: Instant) -> Self {
        let mut state = Self {
            season: Season::OffPeak,
            season_changed_at: None,
            testimonials: Carousel::new(testimonial_count, now),
            system_log: Vec::new(),
            logger: Logger::new().ok(),
        };
        state.push_log("Welcome to Saltmere Cove!");
        state
    }

    /// Switch the pricing season. Returns false (and does nothing) when
    /// the season is unchanged.
    pub fn switch_season(&mut self, season: Season, now: Instant) -> bool {
        if self.season == season {
            return false;
        }
        self.season = season;
        self.season_changed_at = Some(now);
        true
    }

    /// Cross-fade alpha for the pricing panel after a season switch.
    pub fn season_alpha(&self, now: Instant) -> f32 {
        match self.season_changed_at {
            None => 1.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at).as_secs_f32();
                (elapsed / SEASON_FADE.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Append a timestamped line to the activity log and mirror it to
    /// the file logger.
    pub fn push_log(&mut self, line: &str) {
        let ts = Local::now().format("%H:%M:%S").to_string();
        self.system_log.push(format!("[{}] {}", ts, line));
        if self.system_log.len() > MAX_LOG_LINES {
            self.system_log.remove(0);
        }
        if let Some(logger) = &self.logger {
            logger.log(line);
        }
    }

    pub fn last_log(&self) -> Option<&str> {
        self.system_log.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_switch_is_noop_when_unchanged() {
        let now = Instant::now();
        let mut state = UiState::new(3, now);
        assert!(!state.switch_season(Season::OffPeak, now));
        assert!(state.switch_season(Season::Peak, now));
        assert_eq!(state.season, Season::Peak);
        assert!(state.season_alpha(now) < 1.0);
        assert_eq!(state.season_alpha(now + SEASON_FADE), 1.0);
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let now = Instant::now();
        let mut carousel = Carousel::new(3, now);
        assert_eq!(carousel.index, 0);

        carousel.prev(now);
        assert_eq!(carousel.index, 2);
        carousel.next(now);
        assert_eq!(carousel.index, 0);
    }

    #[test]
    fn test_carousel_autoplay() {
        let now = Instant::now();
        let mut carousel = Carousel::new(2, now);

        carousel.tick(now + CAROUSEL_AUTOPLAY - Duration::from_millis(1));
        assert_eq!(carousel.index, 0);

        carousel.tick(now + CAROUSEL_AUTOPLAY);
        assert_eq!(carousel.index, 1);

        // Manual navigation pushes the next autoplay back
        let later = now + CAROUSEL_AUTOPLAY;
        carousel.prev(later);
        assert_eq!(carousel.index, 0);
        carousel.tick(later + CAROUSEL_AUTOPLAY - Duration::from_millis(1));
        assert_eq!(carousel.index, 0);
    }

    #[test]
    fn test_log_lines_are_timestamped_and_capped() {
        let now = Instant::now();
        let mut state = UiState::new(0, now);
        state.logger = None;

        for i in 0..(MAX_LOG_LINES + 10) {
            state.push_log(&format!("line {}", i));
        }
        assert_eq!(state.system_log.len(), MAX_LOG_LINES);
        let last = state.last_log().unwrap();
        assert!(last.starts_with('['));
        assert!(last.ends_with(&format!("line {}", MAX_LOG_LINES + 9)));
    }
}
