// ABOUTME: Shared fixtures for behavioral tests - a loaded form and helpers to fill it in

use signup_wizard::billing::BillingEngine;
use signup_wizard::config::AppConfig;
use signup_wizard::page::{build_page, ElementId, Page, SignupForm};
use signup_wizard::wizard::{NativeConstraints, WizardController};

/// A page after the initial load, with its controller and billing engine
pub struct LoadedForm {
    pub page: Page,
    pub form: SignupForm,
    pub wizard: WizardController,
    pub billing: BillingEngine,
    pub validator: NativeConstraints,
}

impl LoadedForm {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let (mut page, form) = build_page(config);
        let wizard = WizardController::new(&form, config);
        let billing = BillingEngine::new(&form);

        wizard.render(&mut page);
        billing.on_period_change(&mut page);

        Self {
            page,
            form,
            wizard,
            billing,
            validator: NativeConstraints,
        }
    }

    pub fn field(&self, name: &str) -> ElementId {
        self.page
            .get_element_by_id(name)
            .unwrap_or_else(|| panic!("no field named {name}"))
    }

    pub fn fill(&mut self, name: &str, value: &str) {
        let field = self.field(name);
        self.page.set_value(field, value);
    }

    pub fn fill_personal_info(&mut self) {
        self.fill("name", "Ada Lovelace");
        self.fill("email", "ada@example.com");
        self.fill("phone", "+1 234 567 890");
    }

    /// Visibility of every panel, in order
    pub fn visible_panels(&self) -> Vec<bool> {
        self.form.panels.iter().map(|p| !self.page.is_hidden(*p)).collect()
    }

    pub fn text_of(&self, html_id: &str) -> String {
        let id = self
            .page
            .get_element_by_id(html_id)
            .unwrap_or_else(|| panic!("no element #{html_id}"));
        self.page.text(id).to_string()
    }
}
