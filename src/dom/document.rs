//! In-memory document model and the element registry boundary
//!
//! The controllers never touch a real rendering environment. They operate
//! on a flat collection of elements through the `ElementRegistry` trait,
//! so tests can drive them against a plain `Document` (or any substitute)
//! without a terminal.

/// Class marking the active page or carousel slide
pub const CLASS_ACTIVE: &str = "active";

/// Class marking the shown navbar
pub const CLASS_VISIBLE: &str = "visible";

/// Class carried by every page container
pub const CLASS_PAGE: &str = "page";

/// Class carried by every carousel slide
pub const CLASS_SLIDE: &str = "carousel-slide";

/// Class carried by every editable form field
pub const CLASS_FIELD: &str = "field";

/// Class carried by navbar links
pub const CLASS_NAV_LINK: &str = "nav-link";

/// Id of the fixed header element
pub const ID_NAVBAR: &str = "navbar";

/// Id of the carousel status element (receives the 1-based slide number)
pub const ID_SLIDE_NUM: &str = "slideNum";

/// Id of the contact form container
pub const ID_CONTACT_FORM: &str = "contact-form";

/// Id of the contact form's name field
pub const ID_NAME_FIELD: &str = "name";

#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub classes: Vec<String>,
    /// Short display title (page heading, slide caption, field label)
    pub label: String,
    /// Text content; written by controllers for status elements, wrapped
    /// into `lines` by layout for page and slide bodies
    pub text: String,
    /// Current input value (form fields only)
    pub value: String,
    /// Id of the containing element, if any
    pub parent: Option<String>,
    /// Wrapped body lines, produced by the last reflow
    pub lines: Vec<String>,
    /// Row offset from the document top, produced by the last reflow
    pub offset_top: u16,
    /// Rendered height in rows, produced by the last reflow
    pub offset_height: u16,
}

impl Element {
    pub fn new(id: &str) -> Self {
        Element {
            id: id.to_string(),
            classes: Vec::new(),
            label: String::new(),
            text: String::new(),
            value: String::new(),
            parent: None,
            lines: Vec::new(),
            offset_top: 0,
            offset_height: 0,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class; adding an already-present class is a no-op
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// Capability interface the behavior controllers are written against.
///
/// Lookups by id return `None` for missing elements; callers treat absence
/// as a silent no-op, never an error.
pub trait ElementRegistry {
    fn find(&self, id: &str) -> Option<&Element>;

    fn find_mut(&mut self, id: &str) -> Option<&mut Element>;

    /// Ids of all elements carrying `class`, in document order
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    /// Ids of all elements whose parent is `parent`, in document order
    fn children_of(&self, parent: &str) -> Vec<String>;

    /// Scroll the viewport; negative targets clamp to the document top
    fn scroll_to(&mut self, y: i32);

    /// Reserve scroll offset below the fixed header
    fn set_scroll_padding(&mut self, rows: u16);

    /// Reserve layout space above the first page
    fn set_top_margin(&mut self, rows: u16);
}

/// Flat element collection plus document-level view state
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    pub scroll_y: u16,
    pub scroll_padding_top: u16,
    pub margin_top: u16,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl ElementRegistry for Document {
    fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect()
    }

    fn children_of(&self, parent: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.parent.as_deref() == Some(parent))
            .map(|e| e.id.clone())
            .collect()
    }

    fn scroll_to(&mut self, y: i32) {
        self.scroll_y = y.max(0) as u16;
    }

    fn set_scroll_padding(&mut self, rows: u16) {
        self.scroll_padding_top = rows;
    }

    fn set_top_margin(&mut self, rows: u16) {
        self.margin_top = rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_document() -> Document {
        let mut doc = Document::new();
        doc.push(Element::new("navbar").with_label("Site"));
        doc.push(Element::new("home").with_class(CLASS_PAGE).with_class(CLASS_ACTIVE));
        doc.push(Element::new("contact").with_class(CLASS_PAGE));
        doc.push(Element::new("name").with_class(CLASS_FIELD).with_parent("contact-form"));
        doc.push(Element::new("email").with_class(CLASS_FIELD).with_parent("contact-form"));
        doc
    }

    #[test]
    fn test_find_by_id() {
        let doc = create_test_document();
        assert!(doc.find("navbar").is_some());
        assert!(doc.find("missing").is_none());
    }

    #[test]
    fn test_class_toggling() {
        let mut el = Element::new("x");
        el.add_class("visible");
        el.add_class("visible");
        assert_eq!(el.classes.len(), 1);
        assert!(el.has_class("visible"));

        el.remove_class("visible");
        assert!(!el.has_class("visible"));
    }

    #[test]
    fn test_ids_with_class_in_document_order() {
        let doc = create_test_document();
        let pages = doc.ids_with_class(CLASS_PAGE);
        assert_eq!(pages, vec!["home".to_string(), "contact".to_string()]);
    }

    #[test]
    fn test_children_of() {
        let doc = create_test_document();
        let fields = doc.children_of("contact-form");
        assert_eq!(fields, vec!["name".to_string(), "email".to_string()]);
    }

    #[test]
    fn test_scroll_clamps_at_top() {
        let mut doc = create_test_document();
        doc.scroll_to(-5);
        assert_eq!(doc.scroll_y, 0);

        doc.scroll_to(12);
        assert_eq!(doc.scroll_y, 12);
    }
}
