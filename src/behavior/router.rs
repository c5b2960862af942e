//! Page switching and scroll positioning

use crate::dom::document::{CLASS_ACTIVE, CLASS_PAGE, ElementRegistry, ID_NAVBAR};
use tracing::debug;

/// Swaps the active page and keeps revealed content clear of the header.
///
/// Navigation itself only toggles classes; the scroll adjustment is
/// deferred until the next frame's `apply_pending_scroll` call so that it
/// reads offsets produced by the post-activation reflow.
#[derive(Debug)]
pub struct PageRouter {
    header_height: u16,
    gutter: u16,
    pending_scroll: Option<String>,
}

impl PageRouter {
    pub fn new(gutter: u16) -> Self {
        PageRouter {
            header_height: 0,
            gutter,
            pending_scroll: None,
        }
    }

    /// Last measured header height in rows
    pub fn header_height(&self) -> u16 {
        self.header_height
    }

    /// Re-measure the header and reserve scroll offset below it.
    ///
    /// Called on load and on every viewport resize. No-op without a navbar.
    pub fn update_scroll_padding<R: ElementRegistry>(&mut self, reg: &mut R) {
        let Some(navbar) = reg.find(ID_NAVBAR) else {
            return;
        };
        self.header_height = navbar.offset_height;
        reg.set_scroll_padding(self.header_height + self.gutter);
    }

    /// Switch the active page to `page_id`.
    ///
    /// Navigation to an unknown id leaves the document untouched.
    pub fn navigate_to<R: ElementRegistry>(&mut self, reg: &mut R, page_id: &str) {
        if reg.find(page_id).is_none() {
            debug!("navigation target '{}' not found, ignoring", page_id);
            return;
        }

        for id in reg.ids_with_class(CLASS_PAGE) {
            if let Some(page) = reg.find_mut(&id) {
                page.remove_class(CLASS_ACTIVE);
            }
        }

        if let Some(target) = reg.find_mut(page_id) {
            target.add_class(CLASS_ACTIVE);
        }

        debug!("navigated to '{}'", page_id);
        self.pending_scroll = Some(page_id.to_string());
    }

    /// Apply a deferred scroll request against current layout.
    ///
    /// The target row is the page's offset minus the header height and the
    /// gutter, clamped at the document top.
    pub fn apply_pending_scroll<R: ElementRegistry>(&mut self, reg: &mut R) {
        let Some(page_id) = self.pending_scroll.take() else {
            return;
        };
        let Some(target) = reg.find(&page_id) else {
            return;
        };

        let y = target.offset_top as i32 - self.header_height as i32 - self.gutter as i32;
        reg.scroll_to(y);
    }

    /// Id of the currently active page, if any
    pub fn active_page<R: ElementRegistry>(&self, reg: &R) -> Option<String> {
        reg.ids_with_class(CLASS_PAGE)
            .into_iter()
            .find(|id| reg.find(id).is_some_and(|e| e.has_class(CLASS_ACTIVE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::document::{Document, Element};

    fn create_test_document() -> Document {
        let mut doc = Document::new();
        let mut navbar = Element::new(ID_NAVBAR);
        navbar.offset_height = 2;
        doc.push(navbar);

        let mut home = Element::new("home")
            .with_class(CLASS_PAGE)
            .with_class(CLASS_ACTIVE);
        home.offset_top = 0;
        doc.push(home);

        let mut about = Element::new("about").with_class(CLASS_PAGE);
        about.offset_top = 12;
        doc.push(about);

        doc
    }

    fn active_pages(doc: &Document) -> Vec<String> {
        doc.ids_with_class(CLASS_PAGE)
            .into_iter()
            .filter(|id| doc.find(id).is_some_and(|e| e.has_class(CLASS_ACTIVE)))
            .collect()
    }

    #[test]
    fn test_navigate_activates_exactly_one_page() {
        let mut doc = create_test_document();
        let mut router = PageRouter::new(1);

        router.navigate_to(&mut doc, "about");
        assert_eq!(active_pages(&doc), vec!["about".to_string()]);
    }

    #[test]
    fn test_navigate_to_missing_page_is_a_no_op() {
        let mut doc = create_test_document();
        let mut router = PageRouter::new(1);

        router.navigate_to(&mut doc, "pricing");
        assert_eq!(active_pages(&doc), vec!["home".to_string()]);

        router.apply_pending_scroll(&mut doc);
        assert_eq!(doc.scroll_y, 0);
    }

    #[test]
    fn test_scroll_is_deferred_and_offsets_header() {
        let mut doc = create_test_document();
        let mut router = PageRouter::new(1);
        router.update_scroll_padding(&mut doc);

        router.navigate_to(&mut doc, "about");
        // Nothing scrolled yet; the adjustment waits for the next frame
        assert_eq!(doc.scroll_y, 0);

        router.apply_pending_scroll(&mut doc);
        // offset 12 - header 2 - gutter 1
        assert_eq!(doc.scroll_y, 9);
    }

    #[test]
    fn test_scroll_reads_post_activation_layout() {
        let mut doc = create_test_document();
        let mut router = PageRouter::new(1);
        router.update_scroll_padding(&mut doc);

        router.navigate_to(&mut doc, "about");
        // Reflow between navigation and scroll application moves the page
        doc.find_mut("about").unwrap().offset_top = 30;

        router.apply_pending_scroll(&mut doc);
        assert_eq!(doc.scroll_y, 27);
    }

    #[test]
    fn test_scroll_clamps_at_document_top() {
        let mut doc = create_test_document();
        let mut router = PageRouter::new(1);
        router.update_scroll_padding(&mut doc);

        router.navigate_to(&mut doc, "home");
        router.apply_pending_scroll(&mut doc);
        assert_eq!(doc.scroll_y, 0);
    }

    #[test]
    fn test_update_scroll_padding_measures_header() {
        let mut doc = create_test_document();
        let mut router = PageRouter::new(1);

        router.update_scroll_padding(&mut doc);
        assert_eq!(router.header_height(), 2);
        assert_eq!(doc.scroll_padding_top, 3);
    }

    #[test]
    fn test_update_scroll_padding_without_navbar() {
        let mut doc = Document::new();
        doc.push(Element::new("home").with_class(CLASS_PAGE));
        let mut router = PageRouter::new(1);

        router.update_scroll_padding(&mut doc);
        assert_eq!(doc.scroll_padding_top, 0);
    }
}
