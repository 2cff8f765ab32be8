// ABOUTME: UI components for the signup wizard TUI - indicators, step panel, footer and confirmation

pub mod confirmation;
pub mod footer;
pub mod layout;
pub mod step_indicators;
pub mod step_panel;

pub use confirmation::ConfirmationComponent;
pub use footer::FooterComponent;
pub use layout::LayoutComponent;
pub use step_indicators::StepIndicatorsComponent;
pub use step_panel::StepPanelComponent;
