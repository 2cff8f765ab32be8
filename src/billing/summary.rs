// ABOUTME: Order summary computation and rendering
// The summary is a pure function of plan, checked add-ons and billing period; it is
// recomputed from the page and fully re-rendered on every call

use serde::Serialize;
use tracing::{debug, warn};

use super::period::{format_price, BillingPeriod};
use crate::page::{AddonHandle, ElementId, Page, SignupForm, SummaryHandles};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub title: String,
    /// Display price for the active period
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub plan_name: String,
    pub period: BillingPeriod,
    /// Display price for the active period
    pub plan_price: u32,
    pub addons: Vec<SummaryLine>,
    pub total: u32,
}

impl Summary {
    /// Apply the period multiplier to the plan and every add-on and total them up.
    /// Base prices are monthly.
    pub fn compute<'a>(
        plan: Option<(&str, u32)>,
        addons: impl IntoIterator<Item = (&'a str, u32)>,
        period: BillingPeriod,
    ) -> Self {
        let (plan_name, plan_base) = plan.unwrap_or(("", 0));
        let plan_price = period.apply(plan_base);

        let addons: Vec<SummaryLine> = addons
            .into_iter()
            .map(|(title, base)| SummaryLine {
                title: title.to_string(),
                price: period.apply(base),
            })
            .collect();
        let addons_total = addons
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.price));

        Self {
            plan_name: plan_name.to_string(),
            period,
            plan_price,
            addons,
            total: plan_price.saturating_add(addons_total),
        }
    }

    /// `Arcade (Yearly)`
    pub fn plan_label(&self) -> String {
        format!("{} ({})", self.plan_name, self.period.label())
    }

    pub fn plan_price_label(&self) -> String {
        format_price(self.plan_price, self.period)
    }

    /// `+$10/yr`
    pub fn addon_price_label(&self, line: &SummaryLine) -> String {
        format!("+{}", format_price(line.price, self.period))
    }

    pub fn total_label(&self) -> String {
        format_price(self.total, self.period)
    }
}

/// Reads selections from the page and writes the summary elements
#[derive(Debug, Clone)]
pub struct SummaryEngine {
    handles: SummaryHandles,
    plans: Vec<ElementId>,
    addons: Vec<AddonHandle>,
    switch: ElementId,
}

impl SummaryEngine {
    pub fn new(form: &SignupForm) -> Self {
        Self {
            handles: form.summary,
            plans: form.plans.clone(),
            addons: form.addons.clone(),
            switch: form.billing.switch,
        }
    }

    /// Compute the summary from the page's current selection state
    pub fn read(&self, page: &Page) -> Summary {
        let period = BillingPeriod::from_switch(page.is_checked(self.switch));

        let plan = self
            .plans
            .iter()
            .copied()
            .rev()
            .find(|radio| page.is_checked(*radio))
            .map(|radio| (page.value(radio), read_price(page, radio)));

        let addons = self
            .addons
            .iter()
            .filter(|addon| page.is_checked(addon.checkbox))
            .map(|addon| (page.text(addon.title), read_price(page, addon.checkbox)));

        Summary::compute(plan, addons, period)
    }

    /// Recompute and re-render the summary elements
    pub fn recompute(&self, page: &mut Page) -> Summary {
        let summary = self.read(page);
        self.render(page, &summary);
        debug!(
            plan = %summary.plan_name,
            period = summary.period.label(),
            addons = summary.addons.len(),
            total = summary.total,
            "Summary recomputed"
        );
        summary
    }

    fn render(&self, page: &mut Page, summary: &Summary) {
        page.set_text(self.handles.plan_name, summary.plan_label());
        page.set_text(self.handles.plan_price, summary.plan_price_label());

        page.remove_children(self.handles.addons_list);
        for line in &summary.addons {
            let item = page.create_element("div");
            page.add_class(item, "row");
            page.add_class(item, "addon-summary-item");

            let title = page.create_element("span");
            page.set_text(title, line.title.clone());
            page.append_child(item, title);

            let price = page.create_element("span");
            page.set_text(price, summary.addon_price_label(line));
            page.append_child(item, price);

            page.append_child(self.handles.addons_list, item);
        }

        page.set_text(self.handles.total_price, summary.total_label());
    }
}

/// Monthly base price from an option's `data-price`. Only the leading digits count
/// (`9.99` reads as 9); a price with no leading digits counts as 0.
fn read_price(page: &Page, id: ElementId) -> u32 {
    let raw = page.data(id, "price").unwrap_or_default();
    let digits = raw.trim_start();
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or_else(|_| {
        warn!(element = id.index(), price = raw, "Unreadable price, using 0");
        0
    })
}
