use std::collections::HashSet;

use serde::Deserialize;

/// Bottom margin that triggers the reveal a little before an element fully
/// enters the viewport.
pub const REVEAL_MARGIN_PX: f64 = 100.0;

/// Position of one watched element relative to the viewport top.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ElementBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// One scroll tick's view of the page, as reported by the webview bridge.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScrollFrame {
    pub offset: f64,
    pub viewport_height: f64,
    pub content_height: f64,
    #[serde(default)]
    pub elements: Vec<ElementBounds>,
}

/// Whether any part of the element intersects the viewport, with the
/// early-trigger margin applied at the bottom edge.
#[must_use]
pub fn is_in_view(bounds: &ElementBounds, viewport_height: f64) -> bool {
    bounds.top < viewport_height - REVEAL_MARGIN_PX && bounds.bottom > 0.0
}

/// A reveal source: watches tagged elements and reports the ones visible
/// in a frame. Backends differ in how they watch, not in what they report;
/// the caller unions every source into one revealed set.
pub trait VisibilityTracker {
    /// Replace the watched set.
    fn watch(&mut self, ids: &[String]);

    /// Feed one frame; returns the ids this source considers visible.
    fn observe(&mut self, frame: &ScrollFrame) -> Vec<String>;
}

/// One-shot backend: an element is dropped from the watch list the first
/// time it reports, the way an intersection observer unobserves its target.
#[derive(Debug, Default)]
pub struct OneShotTracker {
    watching: HashSet<String>,
}

impl VisibilityTracker for OneShotTracker {
    fn watch(&mut self, ids: &[String]) {
        self.watching = ids.iter().cloned().collect();
    }

    fn observe(&mut self, frame: &ScrollFrame) -> Vec<String> {
        let mut hits = Vec::new();
        for bounds in &frame.elements {
            if self.watching.contains(&bounds.id) && is_in_view(bounds, frame.viewport_height) {
                self.watching.remove(&bounds.id);
                hits.push(bounds.id.clone());
            }
        }
        hits
    }
}

/// Polling backend: every watched element is re-checked on every tick and
/// reported whenever it is visible; deduplication is the caller's job.
#[derive(Debug, Default)]
pub struct PollingTracker {
    watching: HashSet<String>,
}

impl VisibilityTracker for PollingTracker {
    fn watch(&mut self, ids: &[String]) {
        self.watching = ids.iter().cloned().collect();
    }

    fn observe(&mut self, frame: &ScrollFrame) -> Vec<String> {
        frame
            .elements
            .iter()
            .filter(|bounds| {
                self.watching.contains(&bounds.id) && is_in_view(bounds, frame.viewport_height)
            })
            .map(|bounds| bounds.id.clone())
            .collect()
    }
}
