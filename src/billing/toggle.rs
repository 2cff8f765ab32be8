// ABOUTME: Billing switch presentation - caption tones and period-tagged price visibility

use tracing::debug;

use super::period::BillingPeriod;
use crate::page::{BillingHandles, Page, Tone, CLASS_HIDDEN};

#[derive(Debug, Clone)]
pub struct BillingToggle {
    handles: BillingHandles,
}

impl BillingToggle {
    pub const fn new(handles: BillingHandles) -> Self {
        Self { handles }
    }

    pub fn period(&self, page: &Page) -> BillingPeriod {
        BillingPeriod::from_switch(page.is_checked(self.handles.switch))
    }

    /// Flip the switch. The caller is responsible for re-applying the display.
    pub fn flip(&self, page: &mut Page) {
        let yearly = page.is_checked(self.handles.switch);
        page.set_checked(self.handles.switch, !yearly);
    }

    /// Recolour the captions and show the price elements of the active period only
    pub fn apply(&self, page: &mut Page) -> BillingPeriod {
        let period = self.period(page);
        let yearly = period == BillingPeriod::Yearly;

        let (monthly_tone, yearly_tone) = if yearly {
            (Tone::Muted, Tone::Emphasis)
        } else {
            (Tone::Emphasis, Tone::Muted)
        };
        page.set_tone(self.handles.monthly_label, monthly_tone);
        page.set_tone(self.handles.yearly_label, yearly_tone);

        for price in &self.handles.yearly_prices {
            page.toggle_class(*price, CLASS_HIDDEN, !yearly);
        }
        for price in &self.handles.monthly_prices {
            page.toggle_class(*price, CLASS_HIDDEN, yearly);
        }

        debug!(period = period.label(), "Billing display applied");
        period
    }
}
