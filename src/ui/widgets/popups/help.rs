use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_help_popup(f: &mut Frame) {
    // Calculate popup size (60% width, 70% height)
    let popup_width = (f.area().width as f32 * 0.6) as u16;
    let popup_height = (f.area().height as f32 * 0.7) as u16;

    let popup_x = (f.area().width.saturating_sub(popup_width)) / 2;
    let popup_y = (f.area().height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "PAGES",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from("  1 / 2 / 3          Go to Home/Features/Contact"),
        Line::from("  j / ↓, k / ↑       Scroll down/up one row"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "CAROUSEL (home page)",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from("  → / l              Next slide"),
        Line::from("  ← / h              Previous slide"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "CONTACT FORM",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from("  Tab                Next field"),
        Line::from("  Enter              Send message"),
        Line::from("  Esc                Back to home"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "NAVBAR",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from("  Move the mouse to show it; it hides again after a"),
        Line::from("  few seconds of stillness (auto-hide policy)."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "APPLICATION",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from("  ?                  Toggle this help"),
        Line::from("  q / Ctrl-c         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::Gray),
        )]),
    ];

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}
