// ABOUTME: Back / Next / Confirm visibility as a pure function of the current step

use serde::Serialize;

use crate::page::{NavigationHandles, Page, CLASS_HIDDEN};

/// Which navigation controls are visible for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationVisibility {
    pub back: bool,
    pub next: bool,
    pub confirm: bool,
}

impl NavigationVisibility {
    pub const fn for_step(step: usize, step_count: usize) -> Self {
        let last = step + 1 >= step_count;
        Self {
            back: step != 0,
            next: !last,
            confirm: last,
        }
    }

    /// Set the hidden class on every control of each kind
    pub fn apply(self, page: &mut Page, handles: &NavigationHandles) {
        for button in &handles.back {
            page.toggle_class(*button, CLASS_HIDDEN, !self.back);
        }
        for button in &handles.next {
            page.toggle_class(*button, CLASS_HIDDEN, !self.next);
        }
        for button in &handles.confirm {
            page.toggle_class(*button, CLASS_HIDDEN, !self.confirm);
        }
    }
}
