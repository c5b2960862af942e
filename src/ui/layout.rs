use crate::app::AppState;
use crate::constants::TOTAL_SLIDES;
use crate::dom::document::{
    CLASS_ACTIVE, CLASS_FIELD, CLASS_NAV_LINK, CLASS_PAGE, CLASS_SLIDE, ElementRegistry,
    ID_NAVBAR, ID_SLIDE_NUM,
};
use crate::types::UiMode;
use crate::ui::widgets::popups::{ack, help};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Document
            Constraint::Length(1), // Statusbar
        ])
        .split(f.area());

    render_document(f, app, chunks[0]);

    // The navbar is fixed-position: it overlays the scrolled document
    if app.navbar.is_visible(&app.document) {
        render_navbar(f, app, chunks[0]);
    }

    render_statusbar(f, app, chunks[1]);

    match &app.ui_mode {
        UiMode::AckPopup(message) => ack::render_ack_popup(f, message),
        UiMode::Help => help::render_help_popup(f),
        UiMode::Normal => {}
    }
}

/// Lines for the whole laid-out document, in the same row positions the
/// last reflow assigned (margin, stacked pages, separators)
fn build_document_lines(app: &AppState) -> Vec<Line<'static>> {
    let doc = &app.document;
    let mut lines: Vec<Line> = Vec::new();

    for _ in 0..doc.margin_top {
        lines.push(Line::default());
    }

    for page_id in doc.ids_with_class(CLASS_PAGE) {
        let Some(page) = doc.find(&page_id) else {
            continue;
        };

        if page.has_class(CLASS_ACTIVE) {
            lines.push(Line::from(Span::styled(
                page.label.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for text in &page.lines {
                lines.push(Line::from(text.clone()));
            }
            for child_id in doc.children_of(&page_id) {
                push_container_lines(app, &child_id, &mut lines);
            }
        } else {
            lines.push(Line::from(Span::styled(
                format!("▸ {}", page.label),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::default());
    }

    lines
}

/// Carousel and form rows; heights must match what reflow reserved
fn push_container_lines(app: &AppState, container_id: &str, lines: &mut Vec<Line<'static>>) {
    let doc = &app.document;
    let child_ids = doc.children_of(container_id);

    let slide_ids: Vec<&String> = child_ids
        .iter()
        .filter(|id| doc.find(id).is_some_and(|e| e.has_class(CLASS_SLIDE)))
        .collect();
    if !slide_ids.is_empty() {
        lines.push(Line::default());
        for id in &slide_ids {
            let Some(slide) = doc.find(id) else {
                continue;
            };
            if !slide.has_class(CLASS_ACTIVE) {
                continue;
            }
            lines.push(Line::from(Span::styled(
                format!("« {} »", slide.label),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for text in &slide.lines {
                lines.push(Line::from(text.clone()));
            }
        }
        let slide_num = doc
            .find(ID_SLIDE_NUM)
            .map(|e| e.text.clone())
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("Slide {} / {}  (←/→ to flip)", slide_num, TOTAL_SLIDES),
            Style::default().fg(Color::DarkGray),
        )));
        return;
    }

    let field_ids: Vec<&String> = child_ids
        .iter()
        .filter(|id| doc.find(id).is_some_and(|e| e.has_class(CLASS_FIELD)))
        .collect();
    if !field_ids.is_empty() {
        lines.push(Line::default());
        let focused = app.focused_field_id();
        for id in &field_ids {
            let Some(field) = doc.find(id) else {
                continue;
            };
            let is_focused = focused.as_deref() == Some(field.id.as_str());
            let marker = if is_focused { "▌" } else { " " };
            let style = if is_focused {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}: {}", marker, field.label, field.value),
                style,
            )));
        }
        lines.push(Line::from(Span::styled(
            "[Tab] next field  [Enter] send  [Esc] back".to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn render_document(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = build_document_lines(app);
    let scroll = app.document.scroll_y as usize;
    let visible_end = (scroll + area.height as usize).min(lines.len());
    let visible: Vec<Line> = if scroll < lines.len() {
        lines[scroll..visible_end].to_vec()
    } else {
        Vec::new()
    };

    let paragraph = Paragraph::new(visible);
    f.render_widget(paragraph, area);
}

fn render_navbar(f: &mut Frame, app: &AppState, area: Rect) {
    let doc = &app.document;
    let Some(navbar) = doc.find(ID_NAVBAR) else {
        return;
    };

    let height = navbar.offset_height.min(area.height);
    if height == 0 {
        return;
    }
    let bar_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height,
    };

    let links: Vec<String> = doc
        .children_of(ID_NAVBAR)
        .iter()
        .filter_map(|id| doc.find(id))
        .filter(|el| el.has_class(CLASS_NAV_LINK))
        .enumerate()
        .map(|(idx, el)| format!("[{}] {}", idx + 1, el.label))
        .collect();

    let style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let brand = Span::styled(
        format!(" {} ", navbar.label),
        style.add_modifier(Modifier::BOLD),
    );

    let mut bar_lines = Vec::new();
    if height == 1 {
        let mut spans = vec![brand, Span::styled("│ ", style)];
        spans.push(Span::styled(links.join("  "), style));
        bar_lines.push(Line::from(spans));
    } else {
        bar_lines.push(Line::from(brand));
        bar_lines.push(Line::from(Span::styled(links.join("  "), style)));
    }

    let bar = Paragraph::new(bar_lines).style(style);
    f.render_widget(bar, bar_area);
}

fn render_statusbar(f: &mut Frame, app: &AppState, area: Rect) {
    let page = app
        .active_page()
        .and_then(|id| app.document.find(&id).map(|e| e.label.clone()))
        .unwrap_or_else(|| "(no page)".to_string());

    let slide_num = app
        .document
        .find(ID_SLIDE_NUM)
        .map(|e| e.text.clone())
        .unwrap_or_default();

    let navbar_state = if app.navbar.is_visible(&app.document) {
        "shown"
    } else {
        "hidden"
    };

    let status_text = format!(
        "{} | Slide {}/{} | navbar {} | ? help | q quit",
        page, slide_num, TOTAL_SLIDES, navbar_state
    );

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    f.render_widget(status, area);
}
