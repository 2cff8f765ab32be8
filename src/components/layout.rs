// ABOUTME: Main layout component - indicators, step panel and footer, or the confirmation view
// Narrow terminals get the compact indicator strip on top; wider ones get the sidebar

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::Block,
};

use super::{ConfirmationComponent, FooterComponent, StepIndicatorsComponent, StepPanelComponent};
use crate::app::AppState;

const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SIDEBAR_WIDTH: u16 = 26;

pub struct LayoutComponent {
    indicators: StepIndicatorsComponent,
    panel: StepPanelComponent,
    footer: FooterComponent,
    confirmation: ConfirmationComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            indicators: StepIndicatorsComponent::new(),
            panel: StepPanelComponent::new(),
            footer: FooterComponent::new(),
            confirmation: ConfirmationComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        if let Some(view) = state.wizard.confirmation() {
            self.confirmation.render(frame, centered_rect(70, 60, area), state, view);
            return;
        }

        if area.width < state.config.ui_preferences.compact_breakpoint {
            self.render_compact(frame, area, state);
        } else {
            self.render_wide(frame, area, state);
        }
    }

    fn render_compact(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Indicator strip
                Constraint::Min(8),    // Step panel
                Constraint::Length(2), // Navigation footer
            ])
            .split(area);

        self.indicators.render_compact(frame, layout[0], state);
        self.panel.render(frame, layout[1], state);
        self.footer.render(frame, layout[2], state);
    }

    fn render_wide(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(2)])
            .split(columns[1]);

        self.indicators.render_sidebar(frame, columns[0], state);
        self.panel.render(frame, main[0], state);
        self.footer.render(frame, main[1], state);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
