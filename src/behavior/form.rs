//! Contact form submission

use crate::dom::document::{CLASS_FIELD, ElementRegistry, ID_NAME_FIELD};
use tracing::debug;

/// Handles contact form submission: acknowledge, then reset.
///
/// There is no network call and no validation; the acknowledgement is
/// unconditional and echoes whatever the name field holds.
#[derive(Debug)]
pub struct ContactForm {
    form_id: String,
}

impl ContactForm {
    pub fn new(form_id: &str) -> Self {
        ContactForm {
            form_id: form_id.to_string(),
        }
    }

    /// Consume a submit event.
    ///
    /// Reads the name field, clears every field belonging to the form, and
    /// returns the acknowledgement text for the caller to present. Returns
    /// `None` (and touches nothing) if the name field is missing.
    pub fn handle_submit<R: ElementRegistry>(&self, reg: &mut R) -> Option<String> {
        let name = reg.find(ID_NAME_FIELD)?.value.clone();

        let message = format!("Thank you, {}! We'll get back to you soon.", name);

        for id in reg.children_of(&self.form_id) {
            if let Some(field) = reg.find_mut(&id) {
                if field.has_class(CLASS_FIELD) {
                    field.value.clear();
                }
            }
        }

        debug!("contact form submitted, fields reset");
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::document::{Document, Element, ID_CONTACT_FORM};

    fn create_test_document() -> Document {
        let mut doc = Document::new();
        doc.push(Element::new(ID_CONTACT_FORM));
        let mut name = Element::new(ID_NAME_FIELD)
            .with_class(CLASS_FIELD)
            .with_parent(ID_CONTACT_FORM);
        name.value = "Ada".to_string();
        doc.push(name);
        let mut email = Element::new("email")
            .with_class(CLASS_FIELD)
            .with_parent(ID_CONTACT_FORM);
        email.value = "ada@example.com".to_string();
        doc.push(email);
        doc
    }

    #[test]
    fn test_acknowledgement_contains_name() {
        let mut doc = create_test_document();
        let form = ContactForm::new(ID_CONTACT_FORM);

        let message = form.handle_submit(&mut doc).unwrap();
        assert!(message.contains("Ada"));
    }

    #[test]
    fn test_submit_clears_all_fields() {
        let mut doc = create_test_document();
        let form = ContactForm::new(ID_CONTACT_FORM);

        form.handle_submit(&mut doc);
        assert!(doc.find(ID_NAME_FIELD).unwrap().value.is_empty());
        assert!(doc.find("email").unwrap().value.is_empty());
    }

    #[test]
    fn test_empty_name_still_acknowledged() {
        let mut doc = create_test_document();
        doc.find_mut(ID_NAME_FIELD).unwrap().value.clear();
        let form = ContactForm::new(ID_CONTACT_FORM);

        // No validation: the acknowledgement is unconditional
        let message = form.handle_submit(&mut doc).unwrap();
        assert!(message.starts_with("Thank you, !"));
    }

    #[test]
    fn test_missing_name_field_is_a_no_op() {
        let mut doc = Document::new();
        doc.push(Element::new(ID_CONTACT_FORM));
        let mut email = Element::new("email")
            .with_class(CLASS_FIELD)
            .with_parent(ID_CONTACT_FORM);
        email.value = "kept".to_string();
        doc.push(email);

        let form = ContactForm::new(ID_CONTACT_FORM);
        assert_eq!(form.handle_submit(&mut doc), None);
        assert_eq!(doc.find("email").unwrap().value, "kept");
    }
}
