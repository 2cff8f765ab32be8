// ABOUTME: Step indicator widgets - compact numbered strip for narrow terminals, labelled sidebar otherwise
// Highlighting reads the `active` class the wizard maintains on each indicator element

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::page::{ElementId, Page, CLASS_ACTIVE};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct StepIndicatorsComponent;

impl StepIndicatorsComponent {
    pub fn new() -> Self {
        Self
    }

    /// One row of numbered bubbles
    pub fn render_compact(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = Vec::new();
        for (index, indicator) in state.form.compact_indicators().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" ─ ", Style::default().fg(SUBDUED_BORDER)));
            }
            spans.push(bubble(&state.page, *indicator));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let strip = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(strip, area);
    }

    /// Numbered bubbles with "STEP n" captions and labels
    pub fn render_sidebar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![Line::default()];
        for (index, indicator) in state.form.sidebar_indicators().iter().enumerate() {
            let active = state.page.has_class(*indicator, CLASS_ACTIVE);
            let label = state.page.data(*indicator, "label").unwrap_or_default().to_uppercase();

            lines.push(Line::from(vec![
                Span::raw(" "),
                bubble(&state.page, *indicator),
                Span::styled(format!("  STEP {}", index + 1), Style::default().fg(MUTED_GRAY)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("      {label}"),
                if active {
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            )));
            lines.push(Line::default());
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Default for StepIndicatorsComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn bubble(page: &Page, indicator: ElementId) -> Span<'static> {
    let number = page.text(indicator);
    if page.has_class(indicator, CLASS_ACTIVE) {
        Span::styled(
            format!("({number})"),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        Span::styled(format!("({number})"), Style::default().fg(SOFT_WHITE))
    }
}
