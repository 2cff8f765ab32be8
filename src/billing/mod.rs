// ABOUTME: Billing & summary engine - period toggle display and live order summary
// Both halves always update together when the billing switch changes

pub mod period;
pub mod summary;
pub mod toggle;

pub use period::{format_price, BillingPeriod, YEARLY_MULTIPLIER};
pub use summary::{Summary, SummaryEngine, SummaryLine};
pub use toggle::BillingToggle;

use crate::page::{Page, SignupForm};

/// Owns the billing toggle and summary engine for one form
#[derive(Debug, Clone)]
pub struct BillingEngine {
    toggle: BillingToggle,
    summary: SummaryEngine,
}

impl BillingEngine {
    pub fn new(form: &SignupForm) -> Self {
        Self {
            toggle: BillingToggle::new(form.billing.clone()),
            summary: SummaryEngine::new(form),
        }
    }

    /// Billing switch changed (and initial load): display side effect, then summary
    pub fn on_period_change(&self, page: &mut Page) -> Summary {
        self.toggle.apply(page);
        self.summary.recompute(page)
    }

    /// Flip the switch as the user would and react to the change
    pub fn toggle_period(&self, page: &mut Page) -> Summary {
        self.toggle.flip(page);
        self.on_period_change(page)
    }

    /// Plan or add-on selection changed
    pub fn on_selection_change(&self, page: &mut Page) -> Summary {
        self.summary.recompute(page)
    }

    /// Current summary without touching the page
    pub fn summary(&self, page: &Page) -> Summary {
        self.summary.read(page)
    }
}
