// ABOUTME: Thank-you view shown once the subscription is confirmed

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::page::ElementId;

const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);

pub struct ConfirmationComponent;

impl ConfirmationComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, view: ElementId) {
        frame.render_widget(Clear, area);

        let page = &state.page;
        let mut lines = vec![Line::default()];
        for child in page.children(view) {
            let element = page.element(*child);
            match element.tag.as_str() {
                "img" => {
                    lines.push(Line::from(Span::styled(
                        "( ✔ )",
                        Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
                    )));
                }
                "h1" => {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled(
                        element.text.clone(),
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::default());
                }
                _ => {
                    let mut spans = vec![Span::styled(
                        element.text.clone(),
                        Style::default().fg(MUTED_GRAY),
                    )];
                    for inline in page.children(*child) {
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(
                            page.text(*inline).to_string(),
                            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                        ));
                    }
                    lines.push(Line::from(spans));
                }
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press q, Esc or Enter to exit",
            Style::default().fg(MUTED_GRAY),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SELECTION_GREEN))
            .style(Style::default().bg(PANEL_BG));
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Default for ConfirmationComponent {
    fn default() -> Self {
        Self::new()
    }
}
