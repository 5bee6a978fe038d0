//! Viewport scrolling over the composed page.

/// Anchor of the landing section.
pub const HERO_ANCHOR: &str = "hero";
/// Anchor of the interactive strategy builder.
pub const STRATEGY_BUILDER_ANCHOR: &str = "strategy-builder";
/// Anchor of the live portfolio dashboard.
pub const PORTFOLIO_DASHBOARD_ANCHOR: &str = "portfolio-dashboard";

/// A named row in the page document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub top: u16,
}

/// Tracks the viewport offset into the page and scrolls it to anchors.
///
/// Anchors are registered from the rendered page layout. A pending target is
/// approached a fraction of the remaining distance per tick when smooth
/// scrolling is enabled.
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    anchors: Vec<Anchor>,
    content_height: u16,
    viewport_height: u16,
    offset: u16,
    target: Option<u16>,
    smooth: bool,
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ScrollCoordinator {
    pub fn new(smooth: bool) -> Self {
        Self {
            anchors: Vec::new(),
            content_height: 0,
            viewport_height: 0,
            offset: 0,
            target: None,
            smooth,
        }
    }

    /// Replace the registered anchors and total page height.
    pub fn set_document(&mut self, anchors: impl IntoIterator<Item = Anchor>, content_height: u16) {
        self.anchors = anchors.into_iter().collect();
        self.anchors.sort_by_key(|a| a.top);
        self.content_height = content_height;
        self.clamp();
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        if self.viewport_height != height {
            self.viewport_height = height;
            self.clamp();
        }
    }

    pub fn anchor(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    /// Scroll the anchor `id` to the top edge of the viewport.
    ///
    /// Unknown ids are ignored.
    pub fn scroll_to_element(&mut self, id: &str) {
        let Some(top) = self.anchor(id).map(|a| a.top) else {
            tracing::debug!(anchor = id, "scroll target not found");
            return;
        };

        let top = top.min(self.max_offset());
        if self.smooth {
            self.target = Some(top);
        } else {
            self.offset = top;
            self.target = None;
        }
    }

    /// Advance a pending smooth scroll by one step.
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        let distance = target.abs_diff(self.offset);
        let step = distance.div_ceil(4).max(1);
        if distance <= step {
            self.offset = target;
            self.target = None;
        } else if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
    }

    /// Manual scroll; cancels any pending anchor jump.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.offset = next as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn is_scrolling(&self) -> bool {
        self.target.is_some()
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// The last anchor at or above the top of the viewport.
    pub fn current_anchor(&self) -> Option<&Anchor> {
        self.anchors.iter().rev().find(|a| a.top <= self.offset)
    }

    fn clamp(&mut self) {
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        if let Some(target) = self.target.as_mut() {
            *target = (*target).min(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(smooth: bool) -> ScrollCoordinator {
        let mut scroll = ScrollCoordinator::new(smooth);
        scroll.set_document(
            [
                Anchor {
                    id: HERO_ANCHOR.to_string(),
                    top: 0,
                },
                Anchor {
                    id: STRATEGY_BUILDER_ANCHOR.to_string(),
                    top: 20,
                },
                Anchor {
                    id: PORTFOLIO_DASHBOARD_ANCHOR.to_string(),
                    top: 50,
                },
            ],
            90,
        );
        scroll.set_viewport_height(30);
        scroll
    }

    #[test]
    fn test_instant_scroll_aligns_anchor_to_top() {
        let mut scroll = document(false);
        scroll.scroll_to_element(STRATEGY_BUILDER_ANCHOR);
        assert_eq!(scroll.offset(), 20);
        assert_eq!(
            scroll.current_anchor().map(|a| a.id.as_str()),
            Some(STRATEGY_BUILDER_ANCHOR)
        );
    }

    #[test]
    fn test_unknown_anchor_is_noop() {
        let mut scroll = document(true);
        scroll.scroll_by(5);
        scroll.scroll_to_element("does-not-exist");
        assert_eq!(scroll.offset(), 5);
        assert!(!scroll.is_scrolling());
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let mut scroll = document(true);
        scroll.scroll_to_element(PORTFOLIO_DASHBOARD_ANCHOR);
        assert_eq!(scroll.offset(), 0);

        let mut ticks = 0;
        while scroll.is_scrolling() {
            scroll.tick();
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(scroll.offset(), 50);
        assert!(ticks > 1);
    }

    #[test]
    fn test_anchor_near_end_is_clamped() {
        let mut scroll = document(false);
        scroll.set_viewport_height(60);
        scroll.scroll_to_element(PORTFOLIO_DASHBOARD_ANCHOR);
        assert_eq!(scroll.offset(), 30);
    }

    #[test]
    fn test_manual_scroll_bounds() {
        let mut scroll = document(true);
        scroll.scroll_by(-3);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 60);
        scroll.scroll_by(10);
        assert_eq!(scroll.offset(), 60);
    }
}
