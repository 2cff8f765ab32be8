// ABOUTME: Wizard controller - owns the current step and drives panel, indicator and navigation state
// Moving forward is gated by validation; moving back, jumping and confirming are not

use tracing::{debug, info};

use super::indicators::StepIndicators;
use super::navigation::NavigationVisibility;
use super::validation::{validate_step, ConstraintValidator, ValidationError};
use crate::config::AppConfig;
use crate::page::{ElementId, NavigationHandles, Page, SignupForm, CLASS_HIDDEN};

pub const CONFIRMATION_HEADING: &str = "Thank you!";
const CONFIRMATION_BODY: &str = concat!(
    "Thanks for confirming your subscription! ",
    "We hope you enjoy our platform. ",
    "If you need support, contact"
);

#[derive(Debug, Clone)]
pub struct WizardController {
    panels: Vec<ElementId>,
    indicators: StepIndicators,
    navigation: NavigationHandles,
    main: ElementId,
    wizard_region: ElementId,
    footer: ElementId,
    change_plan_step: usize,
    support_contact: String,
    current_step: usize,
    confirmation: Option<ElementId>,
}

impl WizardController {
    pub fn new(form: &SignupForm, config: &AppConfig) -> Self {
        Self {
            panels: form.panels.clone(),
            indicators: StepIndicators::new(form.indicators.clone(), config.paired_steps.clone()),
            navigation: form.navigation.clone(),
            main: form.main,
            wizard_region: form.wizard_region,
            footer: form.footer,
            change_plan_step: config.change_plan_step,
            support_contact: config.support_contact.clone(),
            current_step: 0,
            confirmation: None,
        }
    }

    pub const fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.panels.len()
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step + 1 >= self.step_count()
    }

    pub const fn is_confirmed(&self) -> bool {
        self.confirmation.is_some()
    }

    /// The confirmation view, once appended
    pub const fn confirmation(&self) -> Option<ElementId> {
        self.confirmation
    }

    pub fn current_panel(&self) -> ElementId {
        self.panels[self.current_step]
    }

    pub fn navigation_visibility(&self) -> NavigationVisibility {
        NavigationVisibility::for_step(self.current_step, self.step_count())
    }

    /// Show the current panel only and resync indicators and navigation
    pub fn render(&self, page: &mut Page) {
        for (index, panel) in self.panels.iter().enumerate() {
            page.toggle_class(*panel, CLASS_HIDDEN, index != self.current_step);
        }
        self.indicators.sync(page, self.current_step);
        self.navigation_visibility().apply(page, &self.navigation);
        debug!(step = self.current_step, "Rendered step");
    }

    /// Validate the current step and move forward. Returns whether the step changed.
    pub fn advance(
        &mut self,
        page: &mut Page,
        validator: &dyn ConstraintValidator,
    ) -> Result<bool, ValidationError> {
        if self.is_confirmed() {
            return Ok(false);
        }
        validate_step(page, self.current_panel(), validator)?;
        if self.is_final_step() {
            return Ok(false);
        }
        self.current_step += 1;
        info!(step = self.current_step, "Advanced to step");
        self.render(page);
        Ok(true)
    }

    /// Move back one step without validating. Returns whether the step changed.
    pub fn retreat(&mut self, page: &mut Page) -> bool {
        if self.is_confirmed() || self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        info!(step = self.current_step, "Went back to step");
        self.render(page);
        true
    }

    /// Go straight to `step`, clamped to the last step, without validating
    pub fn jump_to(&mut self, page: &mut Page, step: usize) {
        if self.is_confirmed() {
            return;
        }
        let target = step.min(self.step_count().saturating_sub(1));
        info!(from = self.current_step, to = target, "Jumped to step");
        self.current_step = target;
        self.render(page);
    }

    /// The summary's "Change" shortcut
    pub fn change_plan(&mut self, page: &mut Page) {
        self.jump_to(page, self.change_plan_step);
    }

    /// Replace the wizard with the confirmation view. Only valid on the last step;
    /// returns whether the confirmation happened.
    pub fn confirm(&mut self, page: &mut Page) -> bool {
        if self.is_confirmed() || !self.is_final_step() {
            return false;
        }
        page.add_class(self.wizard_region, CLASS_HIDDEN);
        page.add_class(self.footer, CLASS_HIDDEN);
        page.blur();
        page.clear_validation_report();

        let view = page.create_element("div");
        page.add_class(view, "confirmation");

        let icon = page.create_element("img");
        page.set_data(icon, "alt", "Thank you icon");
        page.append_child(view, icon);

        let heading = page.create_element("h1");
        page.set_text(heading, CONFIRMATION_HEADING);
        page.append_child(view, heading);

        let body = page.create_element("p");
        page.set_text(body, CONFIRMATION_BODY);
        let contact = page.create_element("strong");
        page.set_text(contact, self.support_contact.clone());
        page.append_child(body, contact);
        page.append_child(view, body);

        page.append_child(self.main, view);
        self.confirmation = Some(view);

        info!(support = %self.support_contact, "Subscription confirmed");
        true
    }
}
