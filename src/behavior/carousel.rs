//! Home page slide carousel

use crate::dom::document::{CLASS_ACTIVE, CLASS_SLIDE, ElementRegistry, ID_SLIDE_NUM};
use tracing::debug;

/// Cycles a fixed set of slides, wrapping the index at either edge.
///
/// The wrap is a single-step correction, not a full modulo: `next` and
/// `prev` only ever leave the index one step out of range, and the
/// corrected value is written back before the slide is shown.
#[derive(Debug)]
pub struct Carousel {
    current: i32,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Carousel { current: 0, total }
    }

    /// Index of the slide currently shown, always in range
    pub fn current_slide(&self) -> usize {
        self.current.max(0) as usize
    }

    /// Show slide `n`, wrapping once at either edge.
    ///
    /// Deactivates every slide element, activates the one at the corrected
    /// index, and writes the 1-based slide number into the status element.
    pub fn show_slide<R: ElementRegistry>(&mut self, reg: &mut R, n: i32) {
        let corrected = if n >= self.total as i32 {
            0
        } else if n < 0 {
            self.total as i32 - 1
        } else {
            n
        };
        self.current = corrected;

        let slides = reg.ids_with_class(CLASS_SLIDE);
        for id in &slides {
            if let Some(slide) = reg.find_mut(id) {
                slide.remove_class(CLASS_ACTIVE);
            }
        }
        if let Some(id) = slides.get(corrected as usize) {
            if let Some(slide) = reg.find_mut(id) {
                slide.add_class(CLASS_ACTIVE);
            }
        }

        if let Some(status) = reg.find_mut(ID_SLIDE_NUM) {
            status.text = (corrected + 1).to_string();
        }

        debug!("showing slide {}/{}", corrected + 1, self.total);
    }

    /// Advance to the next slide
    pub fn next<R: ElementRegistry>(&mut self, reg: &mut R) {
        let n = self.current + 1;
        self.show_slide(reg, n);
    }

    /// Go back to the previous slide
    pub fn prev<R: ElementRegistry>(&mut self, reg: &mut R) {
        let n = self.current - 1;
        self.show_slide(reg, n);
    }
}
