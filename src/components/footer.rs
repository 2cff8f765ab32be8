// ABOUTME: Footer with the visible navigation controls and key hints

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;

const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let page = &state.page;
        let mut spans = vec![Span::raw("  ")];
        for button in page.children(state.form.footer) {
            if !page.is_rendered(*button) {
                continue;
            }
            let style = if page.focused() == Some(*button) {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(SOFT_WHITE)
            };
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(format!(" {} ", page.text(*button)), style));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::raw("  "));
        }

        spans.push(Span::styled("|  ", Style::default().fg(SUBDUED_BORDER)));
        for (key, action) in [
            ("Tab", "move"),
            ("Space", "select"),
            ("Enter", "next"),
            ("Esc", "back"),
        ] {
            spans.push(Span::styled(key, Style::default().fg(GOLD)));
            spans.push(Span::styled(format!(" {action}  "), Style::default().fg(MUTED_GRAY)));
        }

        let nav = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(nav, area);
    }
}

impl Default for FooterComponent {
    fn default() -> Self {
        Self::new()
    }
}
