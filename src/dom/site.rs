//! Demo site document
//!
//! Builds the single-page site the application ships with: three pages,
//! a fixed navbar, a two-slide carousel on the home page, and a contact
//! form. The initial active states match what a static markup file would
//! bake in: home page shown, first slide shown.

use crate::dom::document::{
    CLASS_ACTIVE, CLASS_FIELD, CLASS_NAV_LINK, CLASS_PAGE, CLASS_SLIDE, Document, Element,
    ID_CONTACT_FORM, ID_NAME_FIELD, ID_NAVBAR, ID_SLIDE_NUM,
};

const HOME_BODY: &str = "Shoal turns a terminal into a tiny single-page site. \
Pages swap in place, the header keeps out of your way, and everything you see \
is plain text laid out in rows.\n\
Use the number keys to move between pages, and the arrow keys to flip through \
the highlights below.";

const SLIDE_ONE_BODY: &str = "Instant page switching. Activating a page \
reflows the document and scrolls its heading to rest just below the header.";

const SLIDE_TWO_BODY: &str = "A header that earns its keep. Move the pointer \
and the navbar appears; leave it alone for a few seconds and it slips away.";

const FEATURES_BODY: &str = "Everything on this site is driven by four small \
controllers: a page router, a slide carousel, a navbar visibility policy, and \
a contact form handler.\n\
None of them talk to each other. They share nothing but the document, and \
each one shrugs off missing elements instead of failing.";

const CONTACT_BODY: &str = "Questions, bug reports, or just saying hello: \
fill in the form and press Enter. No network is involved; the message stays \
right here in your terminal.";

/// Build the demo site document
pub fn build_site() -> Document {
    let mut doc = Document::new();

    // Fixed header with its links
    doc.push(Element::new(ID_NAVBAR).with_label("Shoal"));
    doc.push(
        Element::new("nav-home")
            .with_class(CLASS_NAV_LINK)
            .with_parent(ID_NAVBAR)
            .with_label("Home")
            .with_text("home"),
    );
    doc.push(
        Element::new("nav-features")
            .with_class(CLASS_NAV_LINK)
            .with_parent(ID_NAVBAR)
            .with_label("Features")
            .with_text("features"),
    );
    doc.push(
        Element::new("nav-contact")
            .with_class(CLASS_NAV_LINK)
            .with_parent(ID_NAVBAR)
            .with_label("Contact")
            .with_text("contact"),
    );

    // Pages
    doc.push(
        Element::new("home")
            .with_class(CLASS_PAGE)
            .with_class(CLASS_ACTIVE)
            .with_label("Home")
            .with_text(HOME_BODY),
    );
    doc.push(
        Element::new("features")
            .with_class(CLASS_PAGE)
            .with_label("Features")
            .with_text(FEATURES_BODY),
    );
    doc.push(
        Element::new("contact")
            .with_class(CLASS_PAGE)
            .with_label("Contact")
            .with_text(CONTACT_BODY),
    );

    // Carousel on the home page
    doc.push(Element::new("carousel").with_parent("home"));
    doc.push(
        Element::new("slide-0")
            .with_class(CLASS_SLIDE)
            .with_class(CLASS_ACTIVE)
            .with_parent("carousel")
            .with_label("Navigate")
            .with_text(SLIDE_ONE_BODY),
    );
    doc.push(
        Element::new("slide-1")
            .with_class(CLASS_SLIDE)
            .with_parent("carousel")
            .with_label("Stay out of the way")
            .with_text(SLIDE_TWO_BODY),
    );
    doc.push(
        Element::new(ID_SLIDE_NUM)
            .with_parent("carousel")
            .with_text("1"),
    );

    // Contact form
    doc.push(Element::new(ID_CONTACT_FORM).with_parent("contact"));
    doc.push(
        Element::new(ID_NAME_FIELD)
            .with_class(CLASS_FIELD)
            .with_parent(ID_CONTACT_FORM)
            .with_label("Name"),
    );
    doc.push(
        Element::new("email")
            .with_class(CLASS_FIELD)
            .with_parent(ID_CONTACT_FORM)
            .with_label("Email"),
    );
    doc.push(
        Element::new("message")
            .with_class(CLASS_FIELD)
            .with_parent(ID_CONTACT_FORM)
            .with_label("Message"),
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_SLIDES;
    use crate::dom::document::ElementRegistry;

    #[test]
    fn test_required_elements_present() {
        let doc = build_site();
        assert!(doc.find(ID_NAVBAR).is_some());
        assert!(doc.find(ID_SLIDE_NUM).is_some());
        assert!(doc.find(ID_NAME_FIELD).is_some());
        assert!(doc.find(ID_CONTACT_FORM).is_some());
    }

    #[test]
    fn test_slide_count_matches_constant() {
        let doc = build_site();
        assert_eq!(doc.ids_with_class(CLASS_SLIDE).len(), TOTAL_SLIDES);
    }

    #[test]
    fn test_initial_active_states() {
        let doc = build_site();
        let active_pages: Vec<String> = doc
            .ids_with_class(CLASS_PAGE)
            .into_iter()
            .filter(|id| doc.find(id).is_some_and(|e| e.has_class(CLASS_ACTIVE)))
            .collect();
        assert_eq!(active_pages, vec!["home".to_string()]);

        let first_slide = doc.find("slide-0").unwrap();
        assert!(first_slide.has_class(CLASS_ACTIVE));
    }

    #[test]
    fn test_form_fields_belong_to_form() {
        let doc = build_site();
        let fields = doc.children_of(ID_CONTACT_FORM);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ID_NAME_FIELD);
    }
}
