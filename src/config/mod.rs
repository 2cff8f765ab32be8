// ABOUTME: Configuration management for the signup wizard
// Loads the form catalogue and UI preferences from TOML files layered over built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod catalog;

pub use catalog::{AddonConfig, FieldConfig, PlanConfig, StepConfig, StepKind};

/// Configuration problems that make the form impossible to build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the form needs at least one step")]
    NoSteps,

    #[error("paired_steps has {actual} entries but the form has {expected} steps")]
    PairingLength { expected: usize, actual: usize },

    #[error("paired_steps[{step}] = {target} is outside the {indicators} step indicators")]
    PairingOutOfRange {
        step: usize,
        target: usize,
        indicators: usize,
    },

    #[error("change_plan_step {step} is outside the {steps} steps")]
    ChangePlanStepOutOfRange { step: usize, steps: usize },

    #[error("change_plan_step {step} points at a '{kind:?}' step, not the plan step")]
    ChangePlanStepNotPlans { step: usize, kind: StepKind },

    #[error("expected {expected} '{kind:?}' step(s), found {found}")]
    StepKindCount {
        kind: StepKind,
        expected: &'static str,
        found: usize,
    },

    #[error("at least one plan is required")]
    NoPlans,

    #[error("plan '{0}' is defined more than once")]
    DuplicatePlan(String),

    #[error("field '{field}' has an invalid pattern: {reason}")]
    InvalidPattern { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Form pages, in order
    pub steps: Vec<StepConfig>,

    /// Selectable plans; the first one is checked on load
    pub plans: Vec<PlanConfig>,

    pub addons: Vec<AddonConfig>,

    /// For each step, the index of its counterpart in the combined indicator list
    /// (compact indicators first, sidebar indicators second)
    pub paired_steps: Vec<usize>,

    /// Step the summary's "Change" shortcut jumps to
    pub change_plan_step: usize,

    /// Contact shown on the confirmation view
    pub support_contact: String,

    /// Extra line shown under yearly plan prices
    pub yearly_bonus: String,

    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferences {
    /// Terminals narrower than this use the compact indicator strip
    pub compact_breakpoint: u16,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            compact_breakpoint: 80,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            steps: catalog::default_steps(),
            plans: catalog::default_plans(),
            addons: catalog::default_addons(),
            paired_steps: vec![4, 5, 6, 7],
            change_plan_step: 1,
            support_contact: "support@loremgaming.com".to_string(),
            yearly_bonus: "2 months free".to_string(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths() {
            if path.exists() {
                let file_config = Self::read_file(&path)?;
                config.merge(file_config);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a single explicit configuration file on top of the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Write the configuration as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. User config (~/.signup-wizard/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 2. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".signup-wizard").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    pub fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".signup-wizard"))
    }

    /// Merge another config into this one; sections left at their defaults don't override
    fn merge(&mut self, other: Self) {
        let defaults = Self::default();

        if other.steps != defaults.steps {
            self.steps = other.steps;
        }
        if other.plans != defaults.plans {
            self.plans = other.plans;
        }
        if other.addons != defaults.addons {
            self.addons = other.addons;
        }
        if other.paired_steps != defaults.paired_steps {
            self.paired_steps = other.paired_steps;
        }
        if other.change_plan_step != defaults.change_plan_step {
            self.change_plan_step = other.change_plan_step;
        }
        if other.support_contact != defaults.support_contact {
            self.support_contact = other.support_contact;
        }
        if other.yearly_bonus != defaults.yearly_bonus {
            self.yearly_bonus = other.yearly_bonus;
        }
        if other.ui_preferences != defaults.ui_preferences {
            self.ui_preferences = other.ui_preferences;
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Check the invariants the page builder and the wizard rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let steps = self.steps.len();
        if steps == 0 {
            return Err(ConfigError::NoSteps);
        }

        if self.paired_steps.len() != steps {
            return Err(ConfigError::PairingLength {
                expected: steps,
                actual: self.paired_steps.len(),
            });
        }

        let indicators = steps * 2;
        if let Some((step, &target)) = self
            .paired_steps
            .iter()
            .enumerate()
            .find(|(_, target)| **target >= indicators)
        {
            return Err(ConfigError::PairingOutOfRange {
                step,
                target,
                indicators,
            });
        }

        if self.change_plan_step >= steps {
            return Err(ConfigError::ChangePlanStepOutOfRange {
                step: self.change_plan_step,
                steps,
            });
        }

        let target = self.steps[self.change_plan_step].kind;
        if target != StepKind::Plans {
            return Err(ConfigError::ChangePlanStepNotPlans {
                step: self.change_plan_step,
                kind: target,
            });
        }

        for (kind, expected, allowed) in [
            (StepKind::Plans, "exactly one", 1..=1),
            (StepKind::Summary, "exactly one", 1..=1),
            (StepKind::Addons, "at most one", 0..=1),
        ] {
            let found = self.steps.iter().filter(|s| s.kind == kind).count();
            if !allowed.contains(&found) {
                return Err(ConfigError::StepKindCount {
                    kind,
                    expected,
                    found,
                });
            }
        }

        if self.plans.is_empty() {
            return Err(ConfigError::NoPlans);
        }

        let mut seen = HashSet::new();
        for plan in &self.plans {
            if !seen.insert(plan.name.as_str()) {
                return Err(ConfigError::DuplicatePlan(plan.name.clone()));
            }
        }

        for field in self.steps.iter().flat_map(|s| s.fields.iter()) {
            if let Some(pattern) = &field.pattern {
                regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
                    ConfigError::InvalidPattern {
                        field: field.name.clone(),
                        reason: e.to_string(),
                    }
                })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.step_count(), 4);
        assert_eq!(config.paired_steps, vec![4, 5, 6, 7]);
        assert_eq!(config.change_plan_step, 1);
    }

    #[test]
    fn test_pairing_length_must_match_steps() {
        let config = AppConfig {
            paired_steps: vec![4, 5, 6, 7, 0, 1, 2, 3],
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PairingLength {
                expected: 4,
                actual: 8
            })
        );
    }

    #[test]
    fn test_pairing_target_must_be_an_indicator() {
        let config = AppConfig {
            paired_steps: vec![4, 5, 6, 8],
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PairingOutOfRange {
                step: 3,
                target: 8,
                indicators: 8
            })
        );
    }

    #[test]
    fn test_change_plan_step_in_range() {
        let config = AppConfig {
            change_plan_step: 4,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ChangePlanStepOutOfRange { step: 4, steps: 4 })
        ));
    }

    #[test]
    fn test_summary_step_required() {
        let mut config = AppConfig::default();
        config.steps.pop();
        config.paired_steps = vec![3, 4, 5];
        assert_eq!(
            config.validate(),
            Err(ConfigError::StepKindCount {
                kind: StepKind::Summary,
                expected: "exactly one",
                found: 0
            })
        );
    }

    #[test]
    fn test_duplicate_plans_rejected() {
        let mut config = AppConfig::default();
        config.plans.push(PlanConfig {
            name: "Arcade".to_string(),
            monthly_price: 1,
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicatePlan("Arcade".to_string()))
        );
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut config = AppConfig::default();
        config.steps[0].fields[0].pattern = Some("([a-z".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPattern { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_merge_keeps_defaults_for_untouched_sections() {
        let mut config = AppConfig::default();
        let other: AppConfig = toml::from_str(
            r#"
            support_contact = "help@example.com"

            [ui_preferences]
            compact_breakpoint = 100
            "#,
        )
        .unwrap();

        config.merge(other);

        assert_eq!(config.support_contact, "help@example.com");
        assert_eq!(config.ui_preferences.compact_breakpoint, 100);
        assert_eq!(config.plans, catalog::default_plans());
    }
}
