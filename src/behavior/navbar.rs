//! Navbar visibility policies
//!
//! Two mutually exclusive policies, one per run. Auto-hide shows the bar on
//! pointer movement and hides it after an inactivity timeout; always-visible
//! pins the bar and reserves layout space below it instead. The hide timer
//! is owned deadline state ticked by the frame loop, so re-arming it always
//! cancels the previous one (debounce, not throttle).

use crate::dom::document::{CLASS_VISIBLE, ElementRegistry, ID_NAVBAR};
use crate::types::NavbarPolicy;
use tracing::debug;

#[derive(Debug)]
pub struct NavbarController {
    policy: NavbarPolicy,
    hide_delay_ms: u64,
    hide_deadline: Option<u64>,
    attached: bool,
}

impl NavbarController {
    pub fn new(policy: NavbarPolicy, hide_delay_ms: u64) -> Self {
        NavbarController {
            policy,
            hide_delay_ms,
            hide_deadline: None,
            attached: false,
        }
    }

    /// Pending hide deadline in clock milliseconds, if one is armed
    pub fn hide_deadline(&self) -> Option<u64> {
        self.hide_deadline
    }

    /// Wire the controller up on load: force the bar visible once and, for
    /// the always-visible policy, reserve layout space below it.
    pub fn attach<R: ElementRegistry>(&mut self, reg: &mut R) {
        self.attached = true;
        show(reg);
        if self.policy == NavbarPolicy::AlwaysVisible {
            reserve_margin(reg);
        }
        debug!("navbar controller attached ({:?})", self.policy);
    }

    /// Stop driving the navbar; cancels any pending hide
    pub fn detach(&mut self) {
        self.attached = false;
        self.hide_deadline = None;
    }

    /// Pointer movement: show the bar and restart the inactivity timer.
    ///
    /// Arming the new deadline replaces the pending one, so a burst of
    /// movement produces a single hide timed from the last event.
    pub fn on_pointer_move<R: ElementRegistry>(&mut self, reg: &mut R, now_ms: u64) {
        if !self.attached || self.policy != NavbarPolicy::AutoHide {
            return;
        }
        show(reg);
        self.hide_deadline = Some(now_ms + self.hide_delay_ms);
    }

    /// Viewport resize: the always-visible policy re-measures the header
    /// and refreshes the reserved margin
    pub fn on_resize<R: ElementRegistry>(&mut self, reg: &mut R) {
        if !self.attached || self.policy != NavbarPolicy::AlwaysVisible {
            return;
        }
        show(reg);
        reserve_margin(reg);
    }

    /// Fire the hide deadline if it has passed
    pub fn tick<R: ElementRegistry>(&mut self, reg: &mut R, now_ms: u64) {
        let Some(deadline) = self.hide_deadline else {
            return;
        };
        if now_ms >= deadline {
            self.hide_deadline = None;
            if let Some(navbar) = reg.find_mut(ID_NAVBAR) {
                navbar.remove_class(CLASS_VISIBLE);
            }
            debug!("navbar hidden after inactivity");
        }
    }

    pub fn is_visible<R: ElementRegistry>(&self, reg: &R) -> bool {
        reg.find(ID_NAVBAR)
            .is_some_and(|e| e.has_class(CLASS_VISIBLE))
    }
}

fn show<R: ElementRegistry>(reg: &mut R) {
    if let Some(navbar) = reg.find_mut(ID_NAVBAR) {
        navbar.add_class(CLASS_VISIBLE);
    }
}

fn reserve_margin<R: ElementRegistry>(reg: &mut R) {
    let Some(navbar) = reg.find(ID_NAVBAR) else {
        return;
    };
    let height = navbar.offset_height;
    reg.set_top_margin(height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::document::{Document, Element};

    const DELAY: u64 = 3000;

    fn create_test_document() -> Document {
        let mut doc = Document::new();
        let mut navbar = Element::new(ID_NAVBAR);
        navbar.offset_height = 2;
        doc.push(navbar);
        doc
    }

    fn auto_hide() -> NavbarController {
        NavbarController::new(NavbarPolicy::AutoHide, DELAY)
    }

    #[test]
    fn test_attach_forces_visible() {
        let mut doc = create_test_document();
        let mut navbar = auto_hide();

        navbar.attach(&mut doc);
        assert!(navbar.is_visible(&doc));
        // Load alone arms no timer; the bar stays until the pointer moves
        assert_eq!(navbar.hide_deadline(), None);
    }

    #[test]
    fn test_hides_after_inactivity() {
        let mut doc = create_test_document();
        let mut navbar = auto_hide();
        navbar.attach(&mut doc);

        navbar.on_pointer_move(&mut doc, 1000);
        navbar.tick(&mut doc, 1000 + DELAY - 1);
        assert!(navbar.is_visible(&doc));

        navbar.tick(&mut doc, 1000 + DELAY);
        assert!(!navbar.is_visible(&doc));
    }

    #[test]
    fn test_movement_restarts_the_timer() {
        let mut doc = create_test_document();
        let mut navbar = auto_hide();
        navbar.attach(&mut doc);

        navbar.on_pointer_move(&mut doc, 0);
        navbar.on_pointer_move(&mut doc, 2000);

        // The first event's window passes without a hide
        navbar.tick(&mut doc, DELAY);
        assert!(navbar.is_visible(&doc));

        // Exactly one hide, timed from the second event
        navbar.tick(&mut doc, 2000 + DELAY);
        assert!(!navbar.is_visible(&doc));
        assert_eq!(navbar.hide_deadline(), None);
    }

    #[test]
    fn test_movement_after_hide_shows_again() {
        let mut doc = create_test_document();
        let mut navbar = auto_hide();
        navbar.attach(&mut doc);

        navbar.on_pointer_move(&mut doc, 0);
        navbar.tick(&mut doc, DELAY);
        assert!(!navbar.is_visible(&doc));

        navbar.on_pointer_move(&mut doc, DELAY + 500);
        assert!(navbar.is_visible(&doc));
    }

    #[test]
    fn test_detach_cancels_pending_hide() {
        let mut doc = create_test_document();
        let mut navbar = auto_hide();
        navbar.attach(&mut doc);

        navbar.on_pointer_move(&mut doc, 0);
        navbar.detach();
        navbar.tick(&mut doc, DELAY * 2);
        assert!(navbar.is_visible(&doc));
    }

    #[test]
    fn test_always_visible_reserves_margin() {
        let mut doc = create_test_document();
        let mut navbar = NavbarController::new(NavbarPolicy::AlwaysVisible, DELAY);

        navbar.attach(&mut doc);
        assert!(navbar.is_visible(&doc));
        assert_eq!(doc.margin_top, 2);

        // Resize re-measures the header
        doc.find_mut(ID_NAVBAR).unwrap().offset_height = 3;
        navbar.on_resize(&mut doc);
        assert_eq!(doc.margin_top, 3);
    }

    #[test]
    fn test_always_visible_ignores_pointer_movement() {
        let mut doc = create_test_document();
        let mut navbar = NavbarController::new(NavbarPolicy::AlwaysVisible, DELAY);
        navbar.attach(&mut doc);

        navbar.on_pointer_move(&mut doc, 1000);
        assert_eq!(navbar.hide_deadline(), None);

        navbar.tick(&mut doc, 1000 + DELAY);
        assert!(navbar.is_visible(&doc));
    }

    #[test]
    fn test_missing_navbar_never_panics() {
        let mut doc = Document::new();
        let mut navbar = auto_hide();

        navbar.attach(&mut doc);
        navbar.on_pointer_move(&mut doc, 0);
        navbar.tick(&mut doc, DELAY);
        navbar.on_resize(&mut doc);
        assert!(!navbar.is_visible(&doc));
    }
}
