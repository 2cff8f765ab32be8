// ABOUTME: Multi-step wizard - controller, indicator sync, navigation visibility and validation gate

pub mod controller;
pub mod indicators;
pub mod navigation;
pub mod validation;

pub use controller::WizardController;
pub use indicators::StepIndicators;
pub use navigation::NavigationVisibility;
pub use validation::{
    validate_step, ConstraintValidator, NativeConstraints, ValidationError, Validity,
};
