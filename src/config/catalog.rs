// ABOUTME: Form catalogue configuration - steps, fields, plans and add-ons
// Defaults reproduce the Lorem Gaming subscription form

use serde::{Deserialize, Serialize};

use crate::page::InputKind;

/// What a step panel contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Free-form input fields
    Fields,
    /// Plan radios plus the billing toggle
    Plans,
    /// Add-on checkboxes
    Addons,
    /// Order summary with the change-plan shortcut
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Short label shown next to the step indicator
    pub label: String,

    /// Panel heading
    pub heading: String,

    /// Line under the heading
    #[serde(default)]
    pub description: String,

    pub kind: StepKind,

    /// Inputs for `fields` steps
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,

    #[serde(default = "default_field_kind")]
    pub kind: InputKind,

    #[serde(default)]
    pub placeholder: String,

    #[serde(default)]
    pub required: bool,

    /// Whole-value regular expression, as in the HTML `pattern` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    /// Monthly base price in whole dollars
    pub monthly_price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Monthly base price in whole dollars
    pub monthly_price: u32,
}

const fn default_field_kind() -> InputKind {
    InputKind::Text
}

pub fn default_steps() -> Vec<StepConfig> {
    vec![
        StepConfig {
            label: "Your info".to_string(),
            heading: "Personal info".to_string(),
            description: "Please provide your name, email address, and phone number.".to_string(),
            kind: StepKind::Fields,
            fields: vec![
                FieldConfig {
                    name: "name".to_string(),
                    label: "Name".to_string(),
                    kind: InputKind::Text,
                    placeholder: "e.g. Stephen King".to_string(),
                    required: true,
                    pattern: None,
                    min_length: Some(2),
                    max_length: None,
                },
                FieldConfig {
                    name: "email".to_string(),
                    label: "Email Address".to_string(),
                    kind: InputKind::Email,
                    placeholder: "e.g. stephenking@lorem.com".to_string(),
                    required: true,
                    pattern: None,
                    min_length: None,
                    max_length: None,
                },
                FieldConfig {
                    name: "phone".to_string(),
                    label: "Phone Number".to_string(),
                    kind: InputKind::Tel,
                    placeholder: "e.g. +1 234 567 890".to_string(),
                    required: true,
                    pattern: Some(r"\+?[0-9][0-9 ]{6,18}".to_string()),
                    min_length: None,
                    max_length: None,
                },
            ],
        },
        StepConfig {
            label: "Select plan".to_string(),
            heading: "Select your plan".to_string(),
            description: "You have the option of monthly or yearly billing.".to_string(),
            kind: StepKind::Plans,
            fields: Vec::new(),
        },
        StepConfig {
            label: "Add-ons".to_string(),
            heading: "Pick add-ons".to_string(),
            description: "Add-ons help enhance your gaming experience.".to_string(),
            kind: StepKind::Addons,
            fields: Vec::new(),
        },
        StepConfig {
            label: "Summary".to_string(),
            heading: "Finishing up".to_string(),
            description: "Double-check everything looks OK before confirming.".to_string(),
            kind: StepKind::Summary,
            fields: Vec::new(),
        },
    ]
}

pub fn default_plans() -> Vec<PlanConfig> {
    [("Arcade", 9), ("Advanced", 12), ("Pro", 15)]
        .into_iter()
        .map(|(name, monthly_price)| PlanConfig {
            name: name.to_string(),
            monthly_price,
        })
        .collect()
}

pub fn default_addons() -> Vec<AddonConfig> {
    [
        ("Online service", "Access to multiplayer games", 1),
        ("Larger storage", "Extra 1TB of cloud save", 2),
        ("Customizable profile", "Custom theme on your profile", 2),
    ]
    .into_iter()
    .map(|(title, description, monthly_price)| AddonConfig {
        title: title.to_string(),
        description: description.to_string(),
        monthly_price,
    })
    .collect()
}
