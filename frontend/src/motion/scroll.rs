//! Scroll progress and active section tracking.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// How far down the page we are, in `[0, 100]`.
    pub scroll_percent: f64,
    pub active_section: Option<&'static str>,
}

/// Percentage of the scrollable distance already scrolled. Pages that don't
/// scroll at all report 0.
pub fn scroll_percent(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if !(scrollable > 0.0) || !metrics.scroll_y.is_finite() {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

pub struct SectionTracker {
    sections: Vec<&'static str>,
    activation_offset: f64,
}

impl SectionTracker {
    /// `sections` must be listed in layout order, top to bottom.
    pub fn new(sections: &[&'static str], activation_offset: f64) -> Self {
        Self {
            sections: sections.to_vec(),
            activation_offset,
        }
    }

    /// First section (in layout order) containing `scroll_y` plus the
    /// activation offset. Sections `measure` can't find are skipped.
    pub fn active_section<F>(&self, scroll_y: f64, mut measure: F) -> Option<&'static str>
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        let probe = scroll_y + self.activation_offset;
        self.sections
            .iter()
            .copied()
            .find(|id| measure(id).map_or(false, |bounds| bounds.contains(probe)))
    }

    pub fn sample<F>(&self, metrics: &ScrollMetrics, measure: F) -> ScrollState
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        ScrollState {
            scroll_percent: scroll_percent(metrics),
            active_section: self.active_section(metrics.scroll_y, measure),
        }
    }
}

/// Lets at most one recompute wait for the next animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// Returns `true` if the caller should request a frame, `false` if one
    /// is already on its way.
    pub fn arm(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: &[&str] = &["home", "about", "services"];

    fn layout(id: &str) -> Option<SectionBounds> {
        match id {
            "home" => Some(SectionBounds { top: 0.0, height: 800.0 }),
            "about" => Some(SectionBounds { top: 800.0, height: 600.0 }),
            "services" => Some(SectionBounds { top: 1400.0, height: 1000.0 }),
            _ => None,
        }
    }

    #[test]
    fn test_scroll_percent_boundaries() {
        let top = ScrollMetrics { scroll_y: 0.0, document_height: 3000.0, viewport_height: 800.0 };
        let bottom = ScrollMetrics { scroll_y: 2200.0, ..top };
        let middle = ScrollMetrics { scroll_y: 1100.0, ..top };

        assert_eq!(scroll_percent(&top), 0.0);
        assert_eq!(scroll_percent(&bottom), 100.0);
        assert_eq!(scroll_percent(&middle), 50.0);
    }

    #[test]
    fn test_scroll_percent_clamps_overscroll() {
        let base = ScrollMetrics { scroll_y: -40.0, document_height: 3000.0, viewport_height: 800.0 };
        assert_eq!(scroll_percent(&base), 0.0);
        assert_eq!(scroll_percent(&ScrollMetrics { scroll_y: 2500.0, ..base }), 100.0);
    }

    #[test]
    fn test_short_page_is_always_zero() {
        for scroll_y in [0.0, 10.0, 5000.0] {
            let equal = ScrollMetrics { scroll_y, document_height: 800.0, viewport_height: 800.0 };
            let shorter = ScrollMetrics { scroll_y, document_height: 500.0, viewport_height: 800.0 };
            assert_eq!(scroll_percent(&equal), 0.0);
            assert_eq!(scroll_percent(&shorter), 0.0);
        }
    }

    #[test]
    fn test_active_section_uses_offset() {
        let tracker = SectionTracker::new(SECTIONS, 100.0);

        assert_eq!(tracker.active_section(0.0, layout), Some("home"));
        assert_eq!(tracker.active_section(699.0, layout), Some("home"));
        // 700 + 100 reaches the top edge of "about".
        assert_eq!(tracker.active_section(700.0, layout), Some("about"));
        assert_eq!(tracker.active_section(1350.0, layout), Some("services"));
        assert_eq!(tracker.active_section(5000.0, layout), None);
    }

    #[test]
    fn test_overlapping_sections_pick_first_in_layout_order() {
        let tracker = SectionTracker::new(&["hero", "intro"], 0.0);
        let overlapping = |id: &str| match id {
            "hero" => Some(SectionBounds { top: 0.0, height: 1000.0 }),
            "intro" => Some(SectionBounds { top: 500.0, height: 1000.0 }),
            _ => None,
        };

        assert_eq!(tracker.active_section(600.0, overlapping), Some("hero"));
        assert_eq!(tracker.active_section(1200.0, overlapping), Some("intro"));
    }

    #[test]
    fn test_missing_sections_are_never_active() {
        let tracker = SectionTracker::new(SECTIONS, 100.0);
        assert_eq!(tracker.active_section(300.0, |_| None), None);
    }

    #[test]
    fn test_sample_combines_both() {
        let tracker = SectionTracker::new(SECTIONS, 100.0);
        let metrics = ScrollMetrics { scroll_y: 1100.0, document_height: 3000.0, viewport_height: 800.0 };

        let state = tracker.sample(&metrics, layout);

        assert_eq!(state, ScrollState { scroll_percent: 50.0, active_section: Some("about") });
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let gate = FrameGate::default();

        assert!(gate.arm());
        assert!(!gate.arm());
        assert!(!gate.arm());
        assert!(gate.is_pending());

        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.arm());
    }
}
