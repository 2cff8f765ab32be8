// ABOUTME: Step indicator sync across the compact and sidebar indicator sets

use crate::page::{ElementId, Page, CLASS_ACTIVE};

/// Every indicator element plus the authored pairing table
#[derive(Debug, Clone)]
pub struct StepIndicators {
    indicators: Vec<ElementId>,
    paired_steps: Vec<usize>,
}

impl StepIndicators {
    pub const fn new(indicators: Vec<ElementId>, paired_steps: Vec<usize>) -> Self {
        Self {
            indicators,
            paired_steps,
        }
    }

    /// The step itself and its paired indicator light up
    pub fn is_active_for(&self, position: usize, step: usize) -> bool {
        position == step || self.paired_steps.get(step) == Some(&position)
    }

    /// Highlight exactly the active positions; every other indicator is cleared
    pub fn sync(&self, page: &mut Page, step: usize) {
        for (position, indicator) in self.indicators.iter().enumerate() {
            page.toggle_class(*indicator, CLASS_ACTIVE, self.is_active_for(position, step));
        }
    }
}
