//! Dialog lifecycle management.
//!
//! All dialog state lives in a single `DialogManager` that enforces the
//! at-most-one-open invariant and owns every transition deadline. Nothing
//! here touches egui: the views ask the manager what to draw (`visible`,
//! `opacity`) and the update loop advances it with `tick`.
//!
//! Transitions are deadlines, not timers. A superseding call overwrites
//! the relevant deadline, so a stale pending transition can never hide a
//! dialog that has since been reopened.

use std::time::{Duration, Instant};

/// Open/close fade duration.
pub const DIALOG_TRANSITION: Duration = Duration::from_millis(300);

/// How long a successful sign-up keeps its dialog up so the toast can be
/// read before the dialog goes away.
pub const SIGNUP_CLOSE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogId {
    SignIn,
    SignUp,
    Booking,
}

impl DialogId {
    pub const ALL: [DialogId; 3] = [DialogId::SignIn, DialogId::SignUp, DialogId::Booking];

    fn idx(self) -> usize {
        match self {
            DialogId::SignIn => 0,
            DialogId::SignUp => 1,
            DialogId::Booking => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Opening { since: Instant },
    Open,
    Closing { since: Instant },
}

impl DialogPhase {
    fn is_open(self) -> bool {
        matches!(self, DialogPhase::Opening { .. } | DialogPhase::Open)
    }
}

/// Manages all application dialogs in one place.
pub struct DialogManager {
    phases: [DialogPhase; 3],
    /// Deferred open scheduled by `switch` (runs after the close fade).
    pending_open: Option<(DialogId, Instant)>,
    /// Deferred close scheduled by `close_after`.
    pending_close: Option<(DialogId, Instant)>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self {
            phases: [DialogPhase::Closed; 3],
            pending_open: None,
            pending_close: None,
        }
    }

    pub fn phase(&self, id: DialogId) -> DialogPhase {
        self.phases[id.idx()]
    }

    /// Whether the dialog is opening or open.
    pub fn is_open(&self, id: DialogId) -> bool {
        self.phase(id).is_open()
    }

    /// Whether the dialog should be drawn at all (fading counts).
    pub fn visible(&self, id: DialogId) -> bool {
        self.phase(id) != DialogPhase::Closed
    }

    /// The at-most-one dialog currently opening or open.
    pub fn current_open(&self) -> Option<DialogId> {
        DialogId::ALL.into_iter().find(|id| self.is_open(*id))
    }

    pub fn any_open(&self) -> bool {
        self.current_open().is_some()
    }

    /// Background scroll is locked while any dialog is up; `close`
    /// releases it immediately, without waiting for the fade.
    pub fn scroll_locked(&self) -> bool {
        self.any_open()
    }

    /// Open a dialog, closing whichever one is currently up first. The
    /// new dialog starts opening immediately; the old one fades out in
    /// parallel.
    pub fn open(&mut self, id: DialogId, now: Instant) {
        if self.is_open(id) {
            return;
        }
        for other in DialogId::ALL {
            if other != id && self.phases[other.idx()].is_open() {
                self.phases[other.idx()] = DialogPhase::Closing { since: now };
            }
        }
        self.phases[id.idx()] = DialogPhase::Opening { since: now };
        // Opening supersedes any scheduled transition
        self.pending_open = None;
        if matches!(self.pending_close, Some((target, _)) if target == id) {
            self.pending_close = None;
        }
    }

    /// Close a dialog. Idempotent: closing a closed (or already closing)
    /// dialog does nothing.
    pub fn close(&mut self, id: DialogId, now: Instant) {
        if self.phases[id.idx()].is_open() {
            self.phases[id.idx()] = DialogPhase::Closing { since: now };
        }
        if matches!(self.pending_close, Some((target, _)) if target == id) {
            self.pending_close = None;
        }
    }

    /// Close `from`, then open `to` once the close fade has run.
    pub fn switch(&mut self, from: DialogId, to: DialogId, now: Instant) {
        self.close(from, now);
        self.pending_open = Some((to, now + DIALOG_TRANSITION));
    }

    pub fn toggle(&mut self, id: DialogId, now: Instant) {
        if self.is_open(id) {
            self.close(id, now);
        } else {
            self.open(id, now);
        }
    }

    /// Schedule a close after `delay`. Cancelled if the dialog is closed
    /// or reopened in the meantime.
    pub fn close_after(&mut self, id: DialogId, delay: Duration, now: Instant) {
        if self.is_open(id) {
            self.pending_close = Some((id, now + delay));
        }
    }

    /// Escape closes whichever dialog is up.
    pub fn handle_escape(&mut self, now: Instant) {
        if let Some(id) = self.current_open() {
            self.close(id, now);
        }
    }

    /// Advance every deadline. Returns the dialog that just finished
    /// opening, if any, so the caller can move focus into it.
    pub fn tick(&mut self, now: Instant) -> Option<DialogId> {
        if let Some((id, at)) = self.pending_open {
            if now >= at {
                self.pending_open = None;
                self.open(id, now);
            }
        }
        if let Some((id, at)) = self.pending_close {
            if now >= at {
                self.pending_close = None;
                self.close(id, now);
            }
        }

        let mut focus = None;
        for id in DialogId::ALL {
            match self.phases[id.idx()] {
                DialogPhase::Opening { since } if now >= since + DIALOG_TRANSITION => {
                    self.phases[id.idx()] = DialogPhase::Open;
                    focus = Some(id);
                }
                DialogPhase::Closing { since } if now >= since + DIALOG_TRANSITION => {
                    self.phases[id.idx()] = DialogPhase::Closed;
                }
                _ => {}
            }
        }
        focus
    }

    /// Fade alpha for a dialog, a pure function of its phase.
    pub fn opacity(&self, id: DialogId, now: Instant) -> f32 {
        match self.phase(id) {
            DialogPhase::Closed => 0.0,
            DialogPhase::Open => 1.0,
            DialogPhase::Opening { since } => fade_fraction(since, now),
            DialogPhase::Closing { since } => 1.0 - fade_fraction(since, now),
        }
    }
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new()
    }
}

fn fade_fraction(since: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(since).as_secs_f32();
    (elapsed / DIALOG_TRANSITION.as_secs_f32()).clamp(0.0, 1.0)
}

/// Next index when Tab-cycling focus through a dialog's widgets,
/// wrapping last -> first and first -> last.
pub fn next_focus_index(current: usize, len: usize, backwards: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if backwards {
        (current + len - 1) % len
    } else {
        (current + 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past_transition(now: Instant) -> Instant {
        now + DIALOG_TRANSITION + Duration::from_millis(1)
    }

    #[test]
    fn test_new_all_closed() {
        let dm = DialogManager::new();
        for id in DialogId::ALL {
            assert_eq!(dm.phase(id), DialogPhase::Closed);
        }
        assert!(!dm.any_open());
    }

    #[test]
    fn test_open_completes_after_transition() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.open(DialogId::SignIn, now);
        assert!(matches!(dm.phase(DialogId::SignIn), DialogPhase::Opening { .. }));
        assert!(dm.scroll_locked());

        // Finishing the fade yields a focus request for the dialog
        let focus = dm.tick(past_transition(now));
        assert_eq!(focus, Some(DialogId::SignIn));
        assert_eq!(dm.phase(DialogId::SignIn), DialogPhase::Open);
    }

    #[test]
    fn test_at_most_one_open() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.open(DialogId::SignIn, now);
        dm.tick(past_transition(now));

        let later = past_transition(now);
        dm.open(DialogId::SignUp, later);

        // The first dialog fades out while the second fades in
        assert!(matches!(dm.phase(DialogId::SignIn), DialogPhase::Closing { .. }));
        assert!(matches!(dm.phase(DialogId::SignUp), DialogPhase::Opening { .. }));
        assert_eq!(dm.current_open(), Some(DialogId::SignUp));

        dm.tick(past_transition(later));
        assert_eq!(dm.phase(DialogId::SignIn), DialogPhase::Closed);
        assert_eq!(dm.phase(DialogId::SignUp), DialogPhase::Open);
    }

    #[test]
    fn test_close_is_idempotent() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.close(DialogId::Booking, now);
        assert_eq!(dm.phase(DialogId::Booking), DialogPhase::Closed);

        dm.open(DialogId::Booking, now);
        dm.close(DialogId::Booking, now);
        dm.close(DialogId::Booking, now);
        assert!(matches!(dm.phase(DialogId::Booking), DialogPhase::Closing { .. }));
        assert!(!dm.scroll_locked());
    }

    #[test]
    fn test_switch_opens_after_close_fade() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.open(DialogId::SignIn, now);
        dm.tick(past_transition(now));

        let later = past_transition(now);
        dm.switch(DialogId::SignIn, DialogId::SignUp, later);
        assert!(!dm.is_open(DialogId::SignUp));

        // Not yet: the close fade is still running
        dm.tick(later + Duration::from_millis(100));
        assert!(!dm.is_open(DialogId::SignUp));

        dm.tick(past_transition(later));
        assert!(dm.is_open(DialogId::SignUp));
        assert_eq!(dm.phase(DialogId::SignIn), DialogPhase::Closed);
    }

    #[test]
    fn test_toggle() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.toggle(DialogId::SignIn, now);
        assert!(dm.is_open(DialogId::SignIn));
        dm.toggle(DialogId::SignIn, now);
        assert!(!dm.is_open(DialogId::SignIn));
    }

    #[test]
    fn test_escape_closes_current() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.handle_escape(now); // nothing open, nothing happens

        dm.open(DialogId::SignUp, now);
        dm.handle_escape(now);
        assert!(!dm.any_open());
    }

    #[test]
    fn test_deferred_close_runs() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.open(DialogId::SignUp, now);
        dm.tick(past_transition(now));

        let later = past_transition(now);
        dm.close_after(DialogId::SignUp, SIGNUP_CLOSE_DELAY, later);
        dm.tick(later + SIGNUP_CLOSE_DELAY - Duration::from_millis(1));
        assert!(dm.is_open(DialogId::SignUp));

        dm.tick(later + SIGNUP_CLOSE_DELAY);
        assert!(matches!(dm.phase(DialogId::SignUp), DialogPhase::Closing { .. }));
    }

    #[test]
    fn test_reopen_cancels_stale_deferred_close() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        dm.open(DialogId::SignUp, now);
        dm.tick(past_transition(now));

        let later = past_transition(now);
        dm.close_after(DialogId::SignUp, SIGNUP_CLOSE_DELAY, later);
        dm.close(DialogId::SignUp, later);
        dm.tick(past_transition(later));
        dm.open(DialogId::SignUp, past_transition(later));

        // The old deadline must not hide the reopened dialog
        dm.tick(later + SIGNUP_CLOSE_DELAY + Duration::from_millis(1));
        assert!(dm.is_open(DialogId::SignUp));
    }

    #[test]
    fn test_opacity_mapping() {
        let now = Instant::now();
        let mut dm = DialogManager::new();
        assert_eq!(dm.opacity(DialogId::SignIn, now), 0.0);

        dm.open(DialogId::SignIn, now);
        assert_eq!(dm.opacity(DialogId::SignIn, now), 0.0);
        let half = dm.opacity(DialogId::SignIn, now + DIALOG_TRANSITION / 2);
        assert!(half > 0.4 && half < 0.6);

        dm.tick(past_transition(now));
        assert_eq!(dm.opacity(DialogId::SignIn, past_transition(now)), 1.0);
    }

    #[test]
    fn test_focus_wrap() {
        assert_eq!(next_focus_index(0, 3, false), 1);
        assert_eq!(next_focus_index(2, 3, false), 0); // last wraps to first
        assert_eq!(next_focus_index(0, 3, true), 2); // first wraps to last
        assert_eq!(next_focus_index(2, 3, true), 1);
        assert_eq!(next_focus_index(0, 0, false), 0);
    }
}
