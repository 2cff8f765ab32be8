// ABOUTME: Renders the visible step panel by walking its page elements
// Rows become single lines of inline spans; headings and descriptions get their own lines

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::page::{ElementId, InputControl, InputKind, Page, Tone};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

pub struct StepPanelComponent;

impl StepPanelComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.wizard.current_step();
        let title = format!(
            " Step {} of {} · {} ",
            step + 1,
            state.wizard.step_count(),
            state.config.steps.get(step).map_or("", |s| s.label.as_str())
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(title)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let lines = panel_lines(&state.page, state.wizard.current_panel());
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

impl Default for StepPanelComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines for every rendered element of `panel`
pub fn panel_lines(page: &Page, panel: ElementId) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for child in page.children(panel) {
        push_block(page, *child, &mut lines);
    }
    lines
}

fn push_block(page: &Page, id: ElementId, lines: &mut Vec<Line<'static>>) {
    if page.is_hidden(id) {
        return;
    }
    let element = page.element(id);

    if element.has_class("row") {
        let focused_inside = page
            .focused()
            .filter(|f| *f == id || page.descendants(id).contains(f));
        let marker = if focused_inside.is_some() {
            Span::styled("▸ ", Style::default().fg(GOLD))
        } else {
            Span::raw("  ")
        };

        let mut spans = vec![marker];
        for inline in page.descendants(id) {
            if !is_rendered_within(page, inline, id) {
                continue;
            }
            if let Some(span) = inline_span(page, inline) {
                if spans.len() > 1 {
                    spans.push(Span::raw("  "));
                }
                spans.push(span);
            }
        }
        lines.push(Line::from(spans));

        if let Some(report) = page.validation_report() {
            if report.element == id || page.descendants(id).contains(&report.element) {
                lines.push(Line::from(Span::styled(
                    format!("    ⚠ {}", report.message),
                    Style::default().fg(ERROR_RED),
                )));
            }
        }
        return;
    }

    match element.tag.as_str() {
        "h2" => {
            lines.push(Line::from(Span::styled(
                element.text.clone(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )));
        }
        "p" => {
            lines.push(Line::from(Span::styled(
                element.text.clone(),
                Style::default().fg(MUTED_GRAY),
            )));
            lines.push(Line::default());
        }
        _ => {
            if let Some(span) = inline_span(page, id) {
                lines.push(Line::from(vec![Span::raw("  "), span]));
            }
            for child in page.children(id) {
                push_block(page, *child, lines);
            }
        }
    }
}

fn is_rendered_within(page: &Page, id: ElementId, scope: ElementId) -> bool {
    let mut current = Some(id);
    while let Some(el) = current {
        if el == scope {
            return true;
        }
        if page.is_hidden(el) {
            return false;
        }
        current = page.parent(el);
    }
    true
}

/// A single element as an inline span, or `None` for pure containers
fn inline_span(page: &Page, id: ElementId) -> Option<Span<'static>> {
    let element = page.element(id);
    let focused = page.focused() == Some(id);

    if let Some(control) = &element.control {
        let is_switch = element.has_class("switch");
        return Some(control_span(control, is_switch, focused));
    }

    if element.tag == "button" {
        let style = if focused {
            Style::default().fg(GOLD).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::UNDERLINED)
        };
        return Some(Span::styled(element.text.clone(), style));
    }

    if element.text.is_empty() {
        return None;
    }
    let style = match element.tone {
        Some(Tone::Emphasis) => Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        Some(Tone::Muted) => Style::default().fg(MUTED_GRAY),
        None if element.has_class("description") || element.has_class("bonus") => {
            Style::default().fg(MUTED_GRAY)
        }
        None if element.has_class("month") || element.has_class("year") => {
            Style::default().fg(CORNFLOWER_BLUE)
        }
        None => Style::default().fg(SOFT_WHITE),
    };
    Some(Span::styled(element.text.clone(), style))
}

fn control_span(control: &InputControl, is_switch: bool, focused: bool) -> Span<'static> {
    let base = if focused {
        Style::default().fg(GOLD).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(SOFT_WHITE)
    };

    let text = match control.kind {
        InputKind::Checkbox if is_switch => {
            if control.checked { "[   ●]" } else { "[●   ]" }.to_string()
        }
        InputKind::Checkbox => if control.checked { "[x]" } else { "[ ]" }.to_string(),
        InputKind::Radio => if control.checked { "(•)" } else { "( )" }.to_string(),
        InputKind::Text | InputKind::Email | InputKind::Tel => {
            if control.value.is_empty() && !focused {
                return Span::styled(
                    format!("[{}]", control.placeholder),
                    Style::default().fg(MUTED_GRAY),
                );
            }
            let cursor = if focused { "▏" } else { "" };
            format!("[{}{cursor}]", control.value)
        }
    };

    let style = if control.checked && !focused {
        base.fg(SELECTION_GREEN)
    } else {
        base
    };
    Span::styled(text, style)
}
