// ABOUTME: Billing period and price formatting shared by the plan cards and the summary

use serde::{Deserialize, Serialize};

/// Yearly billing is framed as "10 months' worth", not 12
pub const YEARLY_MULTIPLIER: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// Period selected by the billing switch's checked state
    pub const fn from_switch(yearly: bool) -> Self {
        if yearly {
            Self::Yearly
        } else {
            Self::Monthly
        }
    }

    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => YEARLY_MULTIPLIER,
        }
    }

    /// Displayed price for a monthly base price
    pub const fn apply(self, base_price: u32) -> u32 {
        base_price.saturating_mul(self.multiplier())
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Unit suffix used after prices
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Monthly => "mo",
            Self::Yearly => "yr",
        }
    }

    pub const fn noun(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// `$90/yr`, `$9/mo`
pub fn format_price(amount: u32, period: BillingPeriod) -> String {
    format!("${amount}/{}", period.unit())
}
