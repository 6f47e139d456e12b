// Section visibility tracking against the scroll viewport
use super::viewport::ViewportEvent;
use crate::model::Section;
use eframe::egui;
use std::collections::HashMap;

/// Fraction of `target` that lies inside `viewport`, by height.
///
/// Returns `None` when the target has no height yet (not laid out).
pub fn visible_ratio(viewport: egui::Rect, target: egui::Rect) -> Option<f32> {
    let height = target.height();
    if !(height > 0.0) {
        return None;
    }
    let top = viewport.top().max(target.top());
    let bottom = viewport.bottom().min(target.bottom());
    Some(((bottom - top).max(0.0) / height).clamp(0.0, 1.0))
}

/// Emits an intersection event whenever a section crosses the threshold,
/// plus once for the first observation of each section.
pub struct VisibilityTracker {
    threshold: f32,
    last: HashMap<Section, bool>,
}

impl VisibilityTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last: HashMap::new(),
        }
    }

    pub fn observe(
        &mut self,
        viewport: egui::Rect,
        sections: &[(Section, egui::Rect)],
    ) -> Vec<ViewportEvent> {
        let mut events = Vec::new();
        for &(section, rect) in sections {
            let Some(ratio) = visible_ratio(viewport, rect) else {
                continue;
            };
            let is_intersecting = ratio >= self.threshold;
            if self.last.insert(section, is_intersecting) != Some(is_intersecting) {
                events.push(ViewportEvent::Intersection {
                    section,
                    is_intersecting,
                    ratio,
                });
            }
        }
        events
    }

    /// Forget previous observations, e.g. after the layout width changed.
    pub fn reset(&mut self) {
        self.last.clear();
    }
}
