// ABOUTME: Application state for the terminal front-end
// Owns the page, the wizard controller and the billing engine, plus keyboard focus

use tracing::{debug, info};

use crate::billing::{BillingEngine, Summary};
use crate::config::AppConfig;
use crate::page::{build_page, ElementId, InputKind, Page, SignupForm};
use crate::wizard::{ConstraintValidator, NativeConstraints, ValidationError, WizardController};

/// What activating the focused element did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Selected,
    Toggled,
    Navigated,
    Rejected(ValidationError),
    Confirmed,
    Nothing,
}

pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub form: SignupForm,
    pub wizard: WizardController,
    pub billing: BillingEngine,
    validator: Box<dyn ConstraintValidator>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_validator(config, Box::new(NativeConstraints))
    }

    pub fn with_validator(config: AppConfig, validator: Box<dyn ConstraintValidator>) -> Self {
        let (page, form) = build_page(&config);
        let wizard = WizardController::new(&form, &config);
        let billing = BillingEngine::new(&form);

        let mut state = Self {
            config,
            page,
            form,
            wizard,
            billing,
            validator,
            should_quit: false,
        };
        state.initial_load();
        state
    }

    /// First render, then the billing display, then the summary
    fn initial_load(&mut self) {
        self.wizard.render(&mut self.page);
        self.billing.on_period_change(&mut self.page);
        self.focus_first();
        info!(steps = self.wizard.step_count(), "Signup wizard loaded");
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn summary(&self) -> Summary {
        self.billing.summary(&self.page)
    }

    // Focus

    /// Rendered controls of the current panel followed by the visible footer buttons
    pub fn focusables(&self) -> Vec<ElementId> {
        if self.wizard.is_confirmed() {
            return Vec::new();
        }
        let panel = self.wizard.current_panel();
        self.page
            .descendants(panel)
            .into_iter()
            .chain(self.page.descendants(self.form.footer))
            .filter(|id| {
                let element = self.page.element(*id);
                (element.control.is_some() || element.tag == "button") && self.page.is_rendered(*id)
            })
            .collect()
    }

    pub fn focus_first(&mut self) {
        match self.focusables().first() {
            Some(first) => self.page.focus(*first),
            None => self.page.blur(),
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let focusables = self.focusables();
        if focusables.is_empty() {
            return;
        }
        let count = focusables.len();
        let position = self
            .page
            .focused()
            .and_then(|focused| focusables.iter().position(|id| *id == focused));
        let next = match (position, forward) {
            (Some(pos), true) => (pos + 1) % count,
            (Some(pos), false) => (pos + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };
        self.page.focus(focusables[next]);
    }

    /// Focused control, when it accepts typed text
    fn focused_text_input(&self) -> Option<ElementId> {
        self.page
            .focused()
            .filter(|id| self.page.control(*id).is_some_and(|c| c.kind.is_text_like()))
    }

    pub fn is_editing_text(&self) -> bool {
        self.focused_text_input().is_some()
    }

    // Editing

    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.focused_text_input() {
            let mut value = self.page.value(input).to_string();
            value.push(c);
            self.page.set_value(input, value);
            self.clear_report_for(input);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_text_input() {
            let mut value = self.page.value(input).to_string();
            value.pop();
            self.page.set_value(input, value);
            self.clear_report_for(input);
        }
    }

    fn clear_report_for(&mut self, id: ElementId) {
        if self.page.validation_report().is_some_and(|r| r.element == id) {
            self.page.clear_validation_report();
        }
    }

    // Activation

    /// Space on the focused element: select, toggle or press it
    pub fn activate(&mut self) -> Activation {
        let Some(focused) = self.page.focused() else {
            return Activation::Nothing;
        };

        if focused == self.form.billing.switch {
            self.billing.toggle_period(&mut self.page);
            return Activation::Toggled;
        }
        if focused == self.form.summary.change_plan {
            self.wizard.change_plan(&mut self.page);
            self.focus_first();
            return Activation::Navigated;
        }
        if self.form.navigation.back.contains(&focused) {
            return self.back();
        }
        if self.form.navigation.next.contains(&focused) {
            return self.next_step();
        }
        if self.form.navigation.confirm.contains(&focused) {
            return self.confirm();
        }

        match self.page.control(focused).map(|c| (c.kind, c.checked)) {
            Some((InputKind::Radio, _)) => {
                self.page.set_checked(focused, true);
                self.billing.on_selection_change(&mut self.page);
                Activation::Selected
            }
            Some((InputKind::Checkbox, checked)) => {
                self.page.set_checked(focused, !checked);
                self.billing.on_selection_change(&mut self.page);
                Activation::Toggled
            }
            _ => Activation::Nothing,
        }
    }

    /// Enter: press a focused button, otherwise confirm on the last step and advance elsewhere
    pub fn submit(&mut self) -> Activation {
        let on_button = self
            .page
            .focused()
            .is_some_and(|id| self.page.element(id).tag == "button");
        if on_button {
            return self.activate();
        }
        if self.wizard.is_final_step() {
            self.confirm()
        } else {
            self.next_step()
        }
    }

    pub fn next_step(&mut self) -> Activation {
        match self.wizard.advance(&mut self.page, self.validator.as_ref()) {
            Ok(true) => {
                self.focus_first();
                Activation::Navigated
            }
            Ok(false) => Activation::Nothing,
            Err(err) => {
                debug!(field = %err.field, "Advance rejected");
                Activation::Rejected(err)
            }
        }
    }

    pub fn back(&mut self) -> Activation {
        if self.wizard.retreat(&mut self.page) {
            self.focus_first();
            Activation::Navigated
        } else {
            Activation::Nothing
        }
    }

    pub fn confirm(&mut self) -> Activation {
        if self.wizard.confirm(&mut self.page) {
            Activation::Confirmed
        } else {
            Activation::Nothing
        }
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}
