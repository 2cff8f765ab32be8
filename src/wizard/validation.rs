// ABOUTME: Step validation gate - native-style constraint checks over a panel's controls
// The first failing control in document order is reported and focused; the rest wait

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::page::{ElementId, InputControl, InputKind, Page};

/// A step refused to advance because one of its controls is invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub element: ElementId,
    pub field: String,
    pub message: String,
}

/// Which constraints a control currently violates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validity {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
}

impl Validity {
    pub const fn is_valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short)
    }

    /// Browser-style message for the highest-priority violation
    pub fn message(&self, control: &InputControl) -> Option<String> {
        let length = control.value.chars().count();
        if self.value_missing {
            let message = match control.kind {
                InputKind::Checkbox => "Please check this box if you want to proceed.",
                InputKind::Radio => "Please select one of these options.",
                _ => "Please fill out this field.",
            };
            return Some(message.to_string());
        }
        if self.type_mismatch {
            return Some("Please enter an email address.".to_string());
        }
        if self.pattern_mismatch {
            return Some("Please match the requested format.".to_string());
        }
        if self.too_long {
            return Some(format!(
                "Please shorten this text to {} characters or less \
                 (you are currently using {length} characters).",
                control.max_length.unwrap_or_default()
            ));
        }
        if self.too_short {
            return Some(format!(
                "Please lengthen this text to {} characters or more \
                 (you are currently using {length} characters).",
                control.min_length.unwrap_or_default()
            ));
        }
        None
    }
}

/// Checks one control against its declared constraints
#[cfg_attr(test, mockall::automock)]
pub trait ConstraintValidator {
    /// `None` when the control is valid, otherwise the message to report
    fn check(&self, page: &Page, element: ElementId) -> Option<String>;
}

/// The constraint set a browser enforces for `required`, `type=email`,
/// `pattern`, `minlength` and `maxlength`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeConstraints;

impl NativeConstraints {
    pub fn validity(page: &Page, element: ElementId) -> Validity {
        let Some(control) = page.control(element) else {
            return Validity::default();
        };
        if control.disabled {
            return Validity::default();
        }

        let mut validity = Validity::default();
        let value = control.value.as_str();

        match control.kind {
            InputKind::Checkbox => {
                validity.value_missing = control.required && !control.checked;
            }
            InputKind::Radio => {
                validity.value_missing =
                    control.required && !page.radio_group_checked(&control.name);
            }
            InputKind::Text | InputKind::Email | InputKind::Tel => {
                validity.value_missing = control.required && value.is_empty();
                if !value.is_empty() {
                    validity.type_mismatch =
                        control.kind == InputKind::Email && !is_valid_email(value);
                    validity.pattern_mismatch = control
                        .pattern
                        .as_deref()
                        .is_some_and(|pattern| !matches_pattern(pattern, value));

                    let length = value.chars().count();
                    validity.too_long = control.max_length.is_some_and(|max| length > max);
                    validity.too_short = control.min_length.is_some_and(|min| length < min);
                }
            }
        }
        validity
    }
}

impl ConstraintValidator for NativeConstraints {
    fn check(&self, page: &Page, element: ElementId) -> Option<String> {
        let validity = Self::validity(page, element);
        if validity.is_valid() {
            return None;
        }
        page.control(element).and_then(|control| validity.message(control))
    }
}

/// Run every control of `panel` through `validator`, stopping at the first failure
pub fn validate_step(
    page: &mut Page,
    panel: ElementId,
    validator: &dyn ConstraintValidator,
) -> Result<(), ValidationError> {
    for element in page.inputs_in(panel) {
        if let Some(message) = validator.check(page, element) {
            let field = page
                .control(element)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            warn!(field = %field, message = %message, "Step validation failed");
            page.report_validity(element, message.clone());
            return Err(ValidationError {
                element,
                field,
                message,
            });
        }
    }
    debug!(panel = panel.index(), "Step validation passed");
    page.clear_validation_report();
    Ok(())
}

/// `pattern` must match the whole value. Patterns that fail to compile are ignored.
fn matches_pattern(pattern: &str, value: &str) -> bool {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(regex) => regex.is_match(value),
        Err(_) => true,
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    let domain_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    local_ok && domain_ok
}
