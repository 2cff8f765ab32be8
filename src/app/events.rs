// ABOUTME: Event handling system for keyboard input and wizard actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::state::{Activation, AppState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    FocusNext,
    FocusPrevious,
    InputChar(char),
    Backspace,
    /// Space: select, toggle or press the focused control
    Activate,
    /// Enter: press a focused button, otherwise Next / Confirm
    Submit,
    Back,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c' | 'q') => Some(AppEvent::Quit),
                _ => None,
            };
        }

        // The confirmation view only offers a way out
        if state.wizard.is_confirmed() {
            return match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Some(AppEvent::Quit),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::FocusPrevious),
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Esc => Some(AppEvent::Back),
            KeyCode::Backspace if state.is_editing_text() => Some(AppEvent::Backspace),
            KeyCode::Char(c) if state.is_editing_text() => Some(AppEvent::InputChar(c)),
            KeyCode::Char(' ') => Some(AppEvent::Activate),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::FocusNext => state.focus_next(),
            AppEvent::FocusPrevious => state.focus_previous(),
            AppEvent::InputChar(c) => state.input_char(c),
            AppEvent::Backspace => state.backspace(),
            AppEvent::Activate => Self::log_outcome(state.activate()),
            AppEvent::Submit => Self::log_outcome(state.submit()),
            AppEvent::Back => Self::log_outcome(state.back()),
        }
    }

    fn log_outcome(outcome: Activation) {
        if outcome != Activation::Nothing {
            debug!(?outcome, "Handled activation");
        }
    }
}
