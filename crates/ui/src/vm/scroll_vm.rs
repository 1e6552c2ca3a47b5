use std::collections::HashSet;

use super::visibility::{OneShotTracker, PollingTracker, ScrollFrame, VisibilityTracker};

/// Pixel offset past which the scroll-to-top affordance appears.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Progress through the scrollable range, 0 to 100. Zero when the content
/// does not overflow the viewport.
#[must_use]
pub fn progress_percent(frame: &ScrollFrame) -> f64 {
    let range = frame.content_height - frame.viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (frame.offset / range * 100.0).clamp(0.0, 100.0)
}

/// Scroll-derived display state for the dashboard, recomputed on every
/// frame from the bridge.
#[derive(Debug, Default)]
pub struct ScrollVm {
    progress_percent: f64,
    past_threshold: bool,
    revealed: HashSet<String>,
    one_shot: OneShotTracker,
    polling: PollingTracker,
}

impl ScrollVm {
    /// Point both reveal sources at a fresh set of elements, forgetting all
    /// previous reveal state. Called when the result content is replaced.
    pub fn rebind(&mut self, ids: &[String]) {
        self.revealed.clear();
        self.one_shot.watch(ids);
        self.polling.watch(ids);
    }

    /// Fold one frame into the derived state. The union of both reveal
    /// sources feeds the revealed set.
    pub fn apply_frame(&mut self, frame: &ScrollFrame) {
        self.progress_percent = progress_percent(frame);
        self.past_threshold = frame.offset > SCROLL_TOP_THRESHOLD_PX;
        for id in self.one_shot.observe(frame) {
            self.revealed.insert(id);
        }
        for id in self.polling.observe(frame) {
            self.revealed.insert(id);
        }
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    #[must_use]
    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Once revealed, an element stays revealed until the next rebind.
    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Class pair driving the one-time fade-up transition.
    #[must_use]
    pub fn reveal_class(&self, id: &str) -> &'static str {
        if self.is_revealed(id) {
            "scroll-animate animate-in"
        } else {
            "scroll-animate"
        }
    }
}
