//! Document reflow
//!
//! Recomputes element offsets, rendered heights, and wrapped body lines for
//! a viewport width. Runs once per frame before deferred scrolls are applied,
//! and again on resize, so every scroll target observes current layout.
//!
//! Pages stack vertically: the active page expands to its full wrapped
//! content (including its embedded carousel or form), inactive pages
//! collapse to a single heading row.

use crate::constants::{COLLAPSED_PAGE_ROWS, CONTENT_PADDING};
use crate::dom::document::{
    CLASS_ACTIVE, CLASS_FIELD, CLASS_NAV_LINK, CLASS_PAGE, CLASS_SLIDE, Document, ElementRegistry,
    ID_NAVBAR,
};

/// Narrowest content column layout will wrap to
const MIN_CONTENT_WIDTH: u16 = 20;

/// Recompute the whole document layout for a viewport width
pub fn reflow(doc: &mut Document, width: u16) {
    measure_navbar(doc, width);

    let content_width = width
        .saturating_sub(CONTENT_PADDING * 2)
        .max(MIN_CONTENT_WIDTH);

    let mut y = doc.margin_top;
    for page_id in doc.ids_with_class(CLASS_PAGE) {
        let active = doc
            .find(&page_id)
            .is_some_and(|e| e.has_class(CLASS_ACTIVE));

        let height = if active {
            layout_active_page(doc, &page_id, content_width)
        } else {
            if let Some(el) = doc.find_mut(&page_id) {
                el.lines.clear();
            }
            COLLAPSED_PAGE_ROWS
        };

        if let Some(el) = doc.find_mut(&page_id) {
            el.offset_top = y;
            el.offset_height = height;
        }

        // One blank separator row between pages
        y = y.saturating_add(height).saturating_add(1);
    }
}

/// Total laid-out document height in rows
pub fn document_height(doc: &Document) -> u16 {
    doc.ids_with_class(CLASS_PAGE)
        .last()
        .and_then(|id| doc.find(id))
        .map(|el| el.offset_top.saturating_add(el.offset_height))
        .unwrap_or(0)
}

/// Measure the fixed header for the current width.
///
/// The bar holds the brand label and every nav link on one row when it
/// fits, spilling the links onto a second row otherwise.
fn measure_navbar(doc: &mut Document, width: u16) {
    let link_ids = doc.children_of(ID_NAVBAR);
    let links_width: usize = link_ids
        .iter()
        .filter_map(|id| doc.find(id))
        .filter(|el| el.has_class(CLASS_NAV_LINK))
        .map(|el| el.label.len() + 3)
        .sum();

    let Some(navbar) = doc.find_mut(ID_NAVBAR) else {
        return;
    };

    let needed = navbar.label.len() + 4 + links_width;
    navbar.offset_top = 0;
    navbar.offset_height = if needed <= width as usize { 1 } else { 2 };
}

fn layout_active_page(doc: &mut Document, page_id: &str, content_width: u16) -> u16 {
    let body_lines = match doc.find(page_id) {
        Some(el) => wrap_body(&el.text, content_width),
        None => return COLLAPSED_PAGE_ROWS,
    };

    // Heading row + body
    let mut height = 1 + body_lines.len() as u16;
    if let Some(el) = doc.find_mut(page_id) {
        el.lines = body_lines;
    }

    for child_id in doc.children_of(page_id) {
        height = height.saturating_add(layout_container(doc, &child_id, content_width));
    }

    height
}

/// Lay out a container embedded in a page (carousel or form).
///
/// Returns the rows the container occupies; unknown containers take none.
fn layout_container(doc: &mut Document, container_id: &str, content_width: u16) -> u16 {
    let child_ids = doc.children_of(container_id);

    let slide_ids: Vec<&String> = child_ids
        .iter()
        .filter(|id| doc.find(id).is_some_and(|e| e.has_class(CLASS_SLIDE)))
        .collect();
    if !slide_ids.is_empty() {
        // Caption row + active slide body + status row, preceded by a blank
        let mut slide_rows = 0u16;
        for id in &slide_ids {
            let active = doc.find(id).is_some_and(|e| e.has_class(CLASS_ACTIVE));
            let lines = if active {
                doc.find(id)
                    .map(|el| wrap_body(&el.text, content_width))
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            if active {
                slide_rows = 1 + lines.len() as u16;
            }
            if let Some(el) = doc.find_mut(id) {
                el.lines = lines;
            }
        }
        let height = 1 + slide_rows + 1;
        if let Some(el) = doc.find_mut(container_id) {
            el.offset_height = height;
        }
        return height;
    }

    let field_count = child_ids
        .iter()
        .filter(|id| doc.find(id).is_some_and(|e| e.has_class(CLASS_FIELD)))
        .count() as u16;
    if field_count > 0 {
        // Blank row + one row per field + submit hint
        let height = 1 + field_count + 1;
        if let Some(el) = doc.find_mut(container_id) {
            el.offset_height = height;
        }
        return height;
    }

    0
}

/// Wrap paragraph text to the content column, blank row between paragraphs
fn wrap_body(text: &str, content_width: u16) -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, paragraph) in text.split('\n').enumerate() {
        if idx > 0 {
            lines.push(String::new());
        }
        for line in textwrap::wrap(paragraph, content_width as usize) {
            lines.push(line.into_owned());
        }
    }
    lines
}
