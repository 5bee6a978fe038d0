//! Page composition: the three sections stacked into one tall document that
//! is scrolled through the page area.

use super::theme::Theme;
use super::widgets::{BuilderSection, HeroSection, PortfolioSection};
use crate::state::{Anchor, Focus, ScrollCoordinator, Store};
use ratatui::{Frame, buffer::Buffer, layout::Rect};

/// Gap between sections.
const SECTION_GAP: u16 = 1;

/// Placement of one section in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub focus: Focus,
    pub top: u16,
    pub height: u16,
}

/// Vertical placement of every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<Section>,
    pub height: u16,
}

impl PageLayout {
    pub fn new(store: &Store) -> Self {
        let mut top = 0;
        let mut sections = Vec::with_capacity(Focus::ALL.len());
        for focus in Focus::ALL {
            let height = match focus {
                Focus::Hero => HeroSection::height(),
                Focus::Builder => BuilderSection::height(store),
                Focus::Portfolio => PortfolioSection::height(store),
            };
            sections.push(Section { focus, top, height });
            top = top.saturating_add(height).saturating_add(SECTION_GAP);
        }
        Self {
            sections,
            height: top.saturating_sub(SECTION_GAP),
        }
    }

    pub fn anchors(&self) -> impl Iterator<Item = Anchor> + '_ {
        self.sections.iter().map(|s| Anchor {
            id: s.focus.anchor().to_string(),
            top: s.top,
        })
    }

    /// Register anchors and viewport size with the scroll coordinator.
    pub fn register(&self, scroll: &mut ScrollCoordinator, viewport_height: u16) {
        scroll.set_document(self.anchors(), self.height);
        scroll.set_viewport_height(viewport_height);
    }
}

/// Render the visible slice of the page into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let layout = PageLayout::new(store);
    let mut page = Buffer::empty(Rect::new(0, 0, area.width, layout.height.max(1)));

    for section in &layout.sections {
        let rect = Rect::new(0, section.top, area.width, section.height);
        let focused = store.app.focus == section.focus;
        match section.focus {
            Focus::Hero => HeroSection::render(&mut page, rect, store, theme, focused),
            Focus::Builder => BuilderSection::render(&mut page, rect, store, theme, focused),
            Focus::Portfolio => PortfolioSection::render(&mut page, rect, store, theme, focused),
        }
    }

    blit(&page, frame.buffer_mut(), area, store.scroll.offset());
}

/// Copy the rows `offset..offset + area.height` of `page` into `area`.
fn blit(page: &Buffer, dst: &mut Buffer, area: Rect, offset: u16) {
    for row in 0..area.height {
        let src_y = offset.saturating_add(row);
        if src_y >= page.area.height {
            break;
        }
        for col in 0..area.width.min(page.area.width) {
            if let (Some(src), Some(cell)) = (
                page.cell((col, src_y)),
                dst.cell_mut((area.x + col, area.y + row)),
            ) {
                *cell = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::scroll::{HERO_ANCHOR, PORTFOLIO_DASHBOARD_ANCHOR, STRATEGY_BUILDER_ANCHOR};

    #[test]
    fn test_sections_are_stacked_in_order() {
        let store = Store::new(&Config::default());
        let layout = PageLayout::new(&store);

        let ids: Vec<String> = layout.anchors().map(|a| a.id).collect();
        assert_eq!(
            ids,
            [HERO_ANCHOR, STRATEGY_BUILDER_ANCHOR, PORTFOLIO_DASHBOARD_ANCHOR]
        );
        assert_eq!(layout.sections[0].top, 0);
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[1].top, pair[0].top + pair[0].height + SECTION_GAP);
        }
        let last = layout.sections[2];
        assert_eq!(layout.height, last.top + last.height);
    }

    #[test]
    fn test_register_feeds_scroll_coordinator() {
        let mut store = Store::new(&Config::default());
        let layout = PageLayout::new(&store);
        layout.register(&mut store.scroll, 20);

        let top = layout.sections[2].top;
        assert_eq!(
            store.scroll.anchor(PORTFOLIO_DASHBOARD_ANCHOR).map(|a| a.top),
            Some(top)
        );
        assert_eq!(store.scroll.max_offset(), layout.height - 20);
    }

    #[test]
    fn test_blit_copies_visible_rows() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 3));
        page.set_string(0, 0, "aaaa", ratatui::style::Style::default());
        page.set_string(0, 1, "bbbb", ratatui::style::Style::default());
        page.set_string(0, 2, "cccc", ratatui::style::Style::default());

        let area = Rect::new(0, 0, 4, 2);
        let mut dst = Buffer::empty(area);
        blit(&page, &mut dst, area, 1);

        assert_eq!(dst, Buffer::with_lines(["bbbb", "cccc"]));
    }
}
