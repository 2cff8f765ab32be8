// ABOUTME: Form control state and the constraint attributes declared on each control

use serde::{Deserialize, Serialize};

/// Input types the signup form uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Radio,
    Checkbox,
}

impl InputKind {
    /// Types whose value is free text typed by the user
    pub const fn is_text_like(self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Tel)
    }
}

/// State and declared constraints of a single `<input>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputControl {
    pub kind: InputKind,
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub checked: bool,
    pub required: bool,
    pub disabled: bool,
    pub pattern: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl InputControl {
    pub fn new(kind: InputKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            value: String::new(),
            placeholder: String::new(),
            checked: false,
            required: false,
            disabled: false,
            pattern: None,
            min_length: None,
            max_length: None,
        }
    }

    pub fn radio(name: &str, value: &str) -> Self {
        let mut control = Self::new(InputKind::Radio, name);
        control.value = value.to_string();
        control
    }

    pub fn checkbox(name: &str) -> Self {
        Self::new(InputKind::Checkbox, name)
    }

    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: Option<String>) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub const fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}
