use crate::behavior::{Carousel, ContactForm, NavbarController, PageRouter};
use crate::constants::{MAX_FIELD_INPUT_LENGTH, TOTAL_SLIDES};
use crate::dom::document::{CLASS_FIELD, Document, ElementRegistry, ID_CONTACT_FORM};
use crate::dom::{build_site, layout};
use crate::types::{Config, UiMode, Viewport};

/// Top-level application state.
///
/// Owns the document and one instance of each behavior controller; all
/// mutable behavior state lives in these fields, constructed once per run.
pub struct AppState {
    pub document: Document,
    pub router: PageRouter,
    pub carousel: Carousel,
    pub navbar: NavbarController,
    pub contact_form: ContactForm,
    pub config: Config,
    pub viewport: Viewport,
    pub ui_mode: UiMode,
    pub focused_field: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            document: build_site(),
            router: PageRouter::new(config.scroll_gutter),
            carousel: Carousel::new(TOTAL_SLIDES),
            navbar: NavbarController::new(config.navbar_policy, config.hide_delay_ms),
            contact_form: ContactForm::new(ID_CONTACT_FORM),
            config,
            viewport: Viewport {
                width: 80,
                height: 24,
            },
            ui_mode: UiMode::Normal,
            focused_field: 0,
            should_quit: false,
        }
    }

    /// Wire the controllers up against the freshly built document.
    ///
    /// Layout runs first so the navbar measurement the controllers read is
    /// real, and again afterwards because the always-visible policy may have
    /// just reserved a top margin.
    pub fn attach(&mut self) {
        layout::reflow(&mut self.document, self.viewport.width);
        self.navbar.attach(&mut self.document);
        layout::reflow(&mut self.document, self.viewport.width);
        self.router.update_scroll_padding(&mut self.document);
    }

    pub fn detach(&mut self) {
        self.navbar.detach();
    }

    /// Per-frame housekeeping, after this frame's events were handled:
    /// reflow so activations take layout effect, then apply deferred
    /// scrolls against the fresh offsets, then drive the hide timer.
    pub fn tick(&mut self, now_ms: u64) {
        layout::reflow(&mut self.document, self.viewport.width);
        self.router.apply_pending_scroll(&mut self.document);
        self.navbar.tick(&mut self.document, now_ms);
    }

    pub fn update_viewport_size(&mut self, width: u16, height: u16) {
        self.viewport.width = width;
        self.viewport.height = height;

        layout::reflow(&mut self.document, width);
        self.router.update_scroll_padding(&mut self.document);
        self.navbar.on_resize(&mut self.document);
        layout::reflow(&mut self.document, width);
    }

    // Navigation

    pub fn navigate(&mut self, page_id: &str) {
        self.router.navigate_to(&mut self.document, page_id);
        self.focused_field = 0;
    }

    pub fn active_page(&self) -> Option<String> {
        self.router.active_page(&self.document)
    }

    pub fn is_page_active(&self, page_id: &str) -> bool {
        self.active_page().as_deref() == Some(page_id)
    }

    // Carousel

    pub fn carousel_next(&mut self) {
        self.carousel.next(&mut self.document);
    }

    pub fn carousel_prev(&mut self) {
        self.carousel.prev(&mut self.document);
    }

    // Navbar

    pub fn pointer_moved(&mut self, now_ms: u64) {
        self.navbar.on_pointer_move(&mut self.document, now_ms);
    }

    // Contact form

    pub fn submit_form(&mut self) {
        if let Some(message) = self.contact_form.handle_submit(&mut self.document) {
            self.ui_mode = UiMode::AckPopup(message);
        }
    }

    pub fn form_field_ids(&self) -> Vec<String> {
        self.document
            .children_of(ID_CONTACT_FORM)
            .into_iter()
            .filter(|id| {
                self.document
                    .find(id)
                    .is_some_and(|e| e.has_class(CLASS_FIELD))
            })
            .collect()
    }

    pub fn focused_field_id(&self) -> Option<String> {
        self.form_field_ids().get(self.focused_field).cloned()
    }

    pub fn focus_next_field(&mut self) {
        let count = self.form_field_ids().len();
        if count > 0 {
            self.focused_field = (self.focused_field + 1) % count;
        }
    }

    pub fn field_input(&mut self, c: char) {
        let Some(id) = self.focused_field_id() else {
            return;
        };
        if let Some(field) = self.document.find_mut(&id) {
            if field.value.len() < MAX_FIELD_INPUT_LENGTH {
                field.value.push(c);
            }
        }
    }

    pub fn field_backspace(&mut self) {
        let Some(id) = self.focused_field_id() else {
            return;
        };
        if let Some(field) = self.document.find_mut(&id) {
            field.value.pop();
        }
    }

    // Manual scrolling

    pub fn scroll_down(&mut self, rows: u16) {
        self.document.scroll_y = self.document.scroll_y.saturating_add(rows);
        self.clamp_scroll();
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.document.scroll_y = self.document.scroll_y.saturating_sub(rows);
    }

    fn clamp_scroll(&mut self) {
        // One row at the bottom belongs to the status bar
        let content_rows = self.viewport.height.saturating_sub(1);
        let max_scroll = layout::document_height(&self.document).saturating_sub(content_rows);
        self.document.scroll_y = self.document.scroll_y.min(max_scroll);
    }
}
