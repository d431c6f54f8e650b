//! Rotating spinner in the browser tab title.
//!
//! `TitleTicker` is clock-agnostic: it is fed display-frame timestamps and
//! hands back the title to write whenever a tick is due. The owning hook
//! decides where the title goes.

use crate::config::{SITE_NAME, SPINNER_GLYPHS, TITLE_TICK_INTERVAL_MS};
use log::debug;

/// Lifecycle of a ticker. `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerPhase {
    Active,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct TitleTicker {
    page_name: String,
    step: usize,
    last_tick_ms: f64,
    phase: TickerPhase,
}

/// Build `"<glyph> <page> | <site>"`.
pub fn format_title(glyph: char, page_name: &str) -> String {
    format!("{} {} | {}", glyph, page_name, SITE_NAME)
}

impl TitleTicker {
    pub fn new(page_name: impl Into<String>) -> Self {
        let page_name = page_name.into();
        debug!("Title ticker started for '{}'", page_name);
        Self {
            page_name,
            step: 0,
            last_tick_ms: 0.0,
            phase: TickerPhase::Active,
        }
    }

    /// Index of the glyph the next tick will display, always in `0..4`.
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn phase(&self) -> TickerPhase {
        self.phase
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase == TickerPhase::Cancelled
    }

    /// Feed one display frame. Returns the new title when more than one
    /// tick interval has passed since the last committed tick.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Option<String> {
        if self.is_cancelled() || timestamp_ms - self.last_tick_ms <= TITLE_TICK_INTERVAL_MS {
            return None;
        }

        let title = format_title(SPINNER_GLYPHS[self.step], &self.page_name);
        self.step = (self.step + 1) % SPINNER_GLYPHS.len();
        self.last_tick_ms = timestamp_ms;
        Some(title)
    }

    /// Stop the ticker. Safe to call more than once.
    pub fn cancel(&mut self) {
        if self.phase == TickerPhase::Active {
            debug!("Title ticker cancelled for '{}'", self.page_name);
            self.phase = TickerPhase::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: u32 = 16;

    /// Drive the ticker with 16 ms frames over `[from_ms, until_ms]`, collecting writes.
    fn run_frames(ticker: &mut TitleTicker, from_ms: u32, until_ms: u32) -> Vec<String> {
        (from_ms..=until_ms)
            .step_by(FRAME_MS as usize)
            .filter_map(|now| ticker.on_frame(now as f64))
            .collect()
    }

    #[test]
    fn step_index_tracks_committed_ticks() {
        let mut ticker = TitleTicker::new("home");
        for n in 1..=9 {
            let title = ticker.on_frame(n as f64 * (TITLE_TICK_INTERVAL_MS + 1.0));
            assert!(title.is_some(), "tick {} should commit", n);
            assert_eq!(ticker.step_index(), n % 4);
        }
    }

    #[test]
    fn titles_cycle_through_spinner_glyphs() {
        let mut ticker = TitleTicker::new("projects");
        let writes: Vec<String> = (1..=5)
            .filter_map(|n| ticker.on_frame(n as f64 * 501.0))
            .collect();
        assert_eq!(
            writes,
            vec![
                "/ projects | Dandung",
                "- projects | Dandung",
                "\\ projects | Dandung",
                "| projects | Dandung",
                "/ projects | Dandung",
            ]
        );
    }

    #[test]
    fn frame_rate_does_not_change_tick_rate() {
        let mut ticker = TitleTicker::new("home");
        let writes = run_frames(&mut ticker, 0, 5_000);
        // Each tick lands on the first frame past the interval, 512 ms apart.
        assert_eq!(writes.len(), 9);
        for title in &writes {
            assert!(title.ends_with(" home | Dandung"), "unexpected title {title}");
        }
    }

    #[test]
    fn no_tick_before_interval_elapses() {
        let mut ticker = TitleTicker::new("home");
        assert_eq!(ticker.on_frame(100.0), None);
        assert_eq!(ticker.on_frame(TITLE_TICK_INTERVAL_MS), None);
        assert!(ticker.on_frame(TITLE_TICK_INTERVAL_MS + 0.5).is_some());
        assert_eq!(ticker.on_frame(TITLE_TICK_INTERVAL_MS + 200.0), None);
    }

    #[test]
    fn no_writes_after_cancel() {
        let mut ticker = TitleTicker::new("about-me");
        assert!(!run_frames(&mut ticker, 0, 2_000).is_empty());

        ticker.cancel();
        ticker.cancel();
        assert!(ticker.is_cancelled());
        assert!(run_frames(&mut ticker, 2_000, 10_000).is_empty());
    }
}
