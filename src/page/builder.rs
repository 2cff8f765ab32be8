// ABOUTME: Builds the signup page from configuration and collects typed element handles
// Handles are gathered once here so nothing re-queries the page by class at render time

use super::{ElementId, InputControl, Page, CLASS_HIDDEN};
use crate::billing::{format_price, BillingPeriod};
use crate::config::{AppConfig, StepConfig, StepKind};

/// Radio group name shared by the plan options
pub const PLAN_GROUP: &str = "plan";

/// Back / Next / Confirm controls
#[derive(Debug, Clone, Default)]
pub struct NavigationHandles {
    pub back: Vec<ElementId>,
    pub next: Vec<ElementId>,
    pub confirm: Vec<ElementId>,
}

/// Billing switch, its captions and the period-tagged price elements
#[derive(Debug, Clone)]
pub struct BillingHandles {
    pub switch: ElementId,
    pub monthly_label: ElementId,
    pub yearly_label: ElementId,
    pub monthly_prices: Vec<ElementId>,
    pub yearly_prices: Vec<ElementId>,
}

#[derive(Debug, Clone, Copy)]
pub struct AddonHandle {
    pub checkbox: ElementId,
    pub title: ElementId,
}

#[derive(Debug, Clone, Copy)]
pub struct SummaryHandles {
    pub plan_name: ElementId,
    pub plan_price: ElementId,
    pub addons_list: ElementId,
    pub total_price: ElementId,
    pub change_plan: ElementId,
}

/// Everything the wizard needs to address on the page
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub main: ElementId,
    pub wizard_region: ElementId,
    pub footer: ElementId,
    pub panels: Vec<ElementId>,
    /// Compact indicators for every step, then sidebar indicators for every step
    pub indicators: Vec<ElementId>,
    pub navigation: NavigationHandles,
    pub billing: BillingHandles,
    pub plans: Vec<ElementId>,
    pub addons: Vec<AddonHandle>,
    pub summary: SummaryHandles,
}

impl SignupForm {
    pub fn step_count(&self) -> usize {
        self.panels.len()
    }

    /// Indicators of the compact strip, one per step
    pub fn compact_indicators(&self) -> &[ElementId] {
        &self.indicators[..self.step_count()]
    }

    /// Indicators of the sidebar, one per step
    pub fn sidebar_indicators(&self) -> &[ElementId] {
        &self.indicators[self.step_count()..]
    }
}

/// Build the page described by `config`. The config is expected to have passed
/// [`AppConfig::validate`].
pub fn build_page(config: &AppConfig) -> (Page, SignupForm) {
    let mut page = Page::new();
    let root = page.root();

    let main = page.create_element("main");
    page.append_child(root, main);
    let wizard_region = page.create_with_id("div", "multiStepForm");
    page.append_child(main, wizard_region);
    let footer = page.create_element("footer");
    page.append_child(root, footer);

    let indicators = build_indicators(&mut page, wizard_region, &config.steps);

    let steps_container = page.create_element("form");
    page.append_child(wizard_region, steps_container);

    // Built up front and attached when their step is reached
    let mut billing = build_billing_toggle(&mut page);
    let summary = build_summary(&mut page, &mut billing);

    let mut panels = Vec::with_capacity(config.steps.len());
    let mut plans = Vec::new();
    let mut addons = Vec::new();

    for (index, step) in config.steps.iter().enumerate() {
        let panel = page.create_element("section");
        page.add_class(panel, "form");
        page.set_data(panel, "step", index.to_string());
        page.append_child(steps_container, panel);
        append_header(&mut page, panel, step);

        match step.kind {
            StepKind::Fields => build_fields(&mut page, panel, step),
            StepKind::Plans => {
                plans = build_plans(&mut page, panel, config, &mut billing);
                page.append_child(panel, billing.row);
            }
            StepKind::Addons => addons = build_addons(&mut page, panel, config, &mut billing),
            StepKind::Summary => page.append_child(panel, summary.container),
        }
        panels.push(panel);
    }

    let navigation = build_navigation(&mut page, footer);

    let form = SignupForm {
        main,
        wizard_region,
        footer,
        panels,
        indicators,
        navigation,
        billing: billing.handles(),
        plans,
        addons,
        summary: summary.handles,
    };
    (page, form)
}

fn build_indicators(
    page: &mut Page,
    wizard_region: ElementId,
    steps: &[StepConfig],
) -> Vec<ElementId> {
    let mut indicators = Vec::with_capacity(steps.len() * 2);
    for set in ["compact", "sidebar"] {
        let nav = page.create_element("nav");
        page.add_class(nav, set);
        page.append_child(wizard_region, nav);
        for (index, step) in steps.iter().enumerate() {
            let indicator = page.create_element("li");
            page.add_class(indicator, "steps");
            page.set_text(indicator, (index + 1).to_string());
            page.set_data(indicator, "label", step.label.clone());
            page.append_child(nav, indicator);
            indicators.push(indicator);
        }
    }
    indicators
}

fn append_header(page: &mut Page, panel: ElementId, step: &StepConfig) {
    let heading = page.create_element("h2");
    page.set_text(heading, step.heading.clone());
    page.append_child(panel, heading);
    if !step.description.is_empty() {
        let description = page.create_element("p");
        page.add_class(description, "description");
        page.set_text(description, step.description.clone());
        page.append_child(panel, description);
    }
}

fn build_fields(page: &mut Page, panel: ElementId, step: &StepConfig) {
    for field in &step.fields {
        let row = page.create_element("div");
        page.add_class(row, "row");
        page.add_class(row, "field");
        page.append_child(panel, row);

        let label = page.create_element("label");
        page.set_text(label, field.label.clone());
        page.append_child(row, label);

        let input = page.create_with_id("input", &field.name);
        page.element_mut(input).control = Some(
            InputControl::new(field.kind, &field.name)
                .required(field.required)
                .with_placeholder(&field.placeholder)
                .with_pattern(field.pattern.clone())
                .with_length(field.min_length, field.max_length),
        );
        page.append_child(row, input);
    }
}

/// Tag a price element with its billing period, hiding yearly ones initially
fn tag_price(
    page: &mut Page,
    billing: &mut PendingBilling,
    element: ElementId,
    period: BillingPeriod,
) {
    match period {
        BillingPeriod::Monthly => {
            page.add_class(element, "month");
            billing.monthly_prices.push(element);
        }
        BillingPeriod::Yearly => {
            page.add_class(element, "year");
            page.add_class(element, CLASS_HIDDEN);
            billing.yearly_prices.push(element);
        }
    }
}

fn build_plans(
    page: &mut Page,
    panel: ElementId,
    config: &AppConfig,
    billing: &mut PendingBilling,
) -> Vec<ElementId> {
    let list = page.create_element("div");
    page.add_class(list, "plans");
    page.append_child(panel, list);

    let mut radios = Vec::with_capacity(config.plans.len());
    for (index, plan) in config.plans.iter().enumerate() {
        let card = page.create_element("label");
        page.add_class(card, "row");
        page.add_class(card, "plan");
        page.append_child(list, card);

        let radio = page.create_element("input");
        page.element_mut(radio).control =
            Some(InputControl::radio(PLAN_GROUP, &plan.name).checked(index == 0));
        page.set_data(radio, "price", plan.monthly_price.to_string());
        page.append_child(card, radio);
        radios.push(radio);

        let title = page.create_element("span");
        page.add_class(title, "title");
        page.set_text(title, plan.name.clone());
        page.append_child(card, title);

        for period in [BillingPeriod::Monthly, BillingPeriod::Yearly] {
            let price = page.create_element("span");
            page.set_text(price, format_price(period.apply(plan.monthly_price), period));
            tag_price(page, billing, price, period);
            page.append_child(card, price);
        }

        if !config.yearly_bonus.is_empty() {
            let bonus = page.create_element("span");
            page.add_class(bonus, "bonus");
            page.set_text(bonus, config.yearly_bonus.clone());
            tag_price(page, billing, bonus, BillingPeriod::Yearly);
            page.append_child(card, bonus);
        }
    }
    radios
}

fn build_addons(
    page: &mut Page,
    panel: ElementId,
    config: &AppConfig,
    billing: &mut PendingBilling,
) -> Vec<AddonHandle> {
    let list = page.create_element("div");
    page.add_class(list, "addons");
    page.append_child(panel, list);

    let mut handles = Vec::with_capacity(config.addons.len());
    for addon in &config.addons {
        let row = page.create_element("label");
        page.add_class(row, "row");
        page.add_class(row, "addon");
        page.append_child(list, row);

        let checkbox = page.create_element("input");
        page.element_mut(checkbox).control = Some(InputControl::checkbox("addon"));
        page.set_data(checkbox, "price", addon.monthly_price.to_string());
        page.append_child(row, checkbox);

        let title = page.create_element("span");
        page.add_class(title, "title");
        page.set_text(title, addon.title.clone());
        page.append_child(row, title);

        if !addon.description.is_empty() {
            let description = page.create_element("span");
            page.add_class(description, "description");
            page.set_text(description, addon.description.clone());
            page.append_child(row, description);
        }

        for period in [BillingPeriod::Monthly, BillingPeriod::Yearly] {
            let price = page.create_element("span");
            page.set_text(
                price,
                format!("+{}", format_price(period.apply(addon.monthly_price), period)),
            );
            tag_price(page, billing, price, period);
            page.append_child(row, price);
        }

        handles.push(AddonHandle { checkbox, title });
    }
    handles
}

/// Billing row plus the price elements collected while building the plan and add-on steps
struct PendingBilling {
    row: ElementId,
    switch: ElementId,
    monthly_label: ElementId,
    yearly_label: ElementId,
    monthly_prices: Vec<ElementId>,
    yearly_prices: Vec<ElementId>,
}

impl PendingBilling {
    fn handles(self) -> BillingHandles {
        BillingHandles {
            switch: self.switch,
            monthly_label: self.monthly_label,
            yearly_label: self.yearly_label,
            monthly_prices: self.monthly_prices,
            yearly_prices: self.yearly_prices,
        }
    }
}

fn build_billing_toggle(page: &mut Page) -> PendingBilling {
    let row = page.create_element("div");
    page.add_class(row, "row");
    page.add_class(row, "billing");

    let monthly_label = page.create_with_id("span", "monthly");
    page.set_text(monthly_label, "Monthly");
    page.append_child(row, monthly_label);

    let switch = page.create_with_id("input", "toggle-switch");
    page.add_class(switch, "switch");
    page.element_mut(switch).control = Some(InputControl::checkbox("billing"));
    page.append_child(row, switch);

    let yearly_label = page.create_with_id("span", "yearly");
    page.set_text(yearly_label, "Yearly");
    page.append_child(row, yearly_label);

    PendingBilling {
        row,
        switch,
        monthly_label,
        yearly_label,
        monthly_prices: Vec::new(),
        yearly_prices: Vec::new(),
    }
}

struct PendingSummary {
    container: ElementId,
    handles: SummaryHandles,
}

fn build_summary(page: &mut Page, billing: &mut PendingBilling) -> PendingSummary {
    let container = page.create_element("div");
    page.add_class(container, "summary");

    let plan_row = page.create_element("div");
    page.add_class(plan_row, "row");
    page.append_child(container, plan_row);

    let plan_name = page.create_with_id("span", "selected-plan-name");
    page.append_child(plan_row, plan_name);

    let change_plan = page.create_with_id("button", "plan-change");
    page.add_class(change_plan, "link");
    page.set_text(change_plan, "Change");
    page.append_child(plan_row, change_plan);

    let plan_price = page.create_with_id("span", "selected-plan-price");
    page.append_child(plan_row, plan_price);

    let addons_list = page.create_element("div");
    page.add_class(addons_list, "addons-summary");
    page.append_child(container, addons_list);

    let total_row = page.create_element("div");
    page.add_class(total_row, "row");
    page.add_class(total_row, "total");
    page.append_child(container, total_row);

    for period in [BillingPeriod::Monthly, BillingPeriod::Yearly] {
        let caption = page.create_element("span");
        page.add_class(caption, "caption");
        page.set_text(caption, format!("Total (per {})", period.noun()));
        tag_price(page, billing, caption, period);
        page.append_child(total_row, caption);
    }

    let total_price = page.create_with_id("span", "total-price");
    page.append_child(total_row, total_price);

    PendingSummary {
        container,
        handles: SummaryHandles {
            plan_name,
            plan_price,
            addons_list,
            total_price,
            change_plan,
        },
    }
}

fn build_navigation(page: &mut Page, footer: ElementId) -> NavigationHandles {
    let mut navigation = NavigationHandles::default();
    for (text, class) in [
        ("Go Back", "back-btn"),
        ("Next Step", "next-btn"),
        ("Confirm", "confirm-btn"),
    ] {
        let button = page.create_element("button");
        page.add_class(button, class);
        page.set_text(button, text);
        page.append_child(footer, button);
        match class {
            "back-btn" => navigation.back.push(button),
            "next-btn" => navigation.next.push(button),
            _ => navigation.confirm.push(button),
        }
    }
    navigation
}
