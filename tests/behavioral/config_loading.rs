// ABOUTME: Behavioral tests for configuration files - defaults, explicit files and validation
// Verifies a config file reshapes the built form

use signup_wizard::config::{AppConfig, ConfigError, StepKind};
use std::fs;
use tempfile::TempDir;

use super::fixtures::LoadedForm;

/// Defaults reproduce the four-step subscription form
#[test]
fn test_default_config_has_sensible_values() {
    let config = AppConfig::default();

    let labels: Vec<&str> = config.steps.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Your info", "Select plan", "Add-ons", "Summary"]);
    assert_eq!(config.paired_steps, vec![4, 5, 6, 7]);
    assert_eq!(config.change_plan_step, 1);
    assert_eq!(config.ui_preferences.compact_breakpoint, 80);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_partial_file_overrides_only_named_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
support_contact = "help@example.org"

[[plans]]
name = "Starter"
monthly_price = 5

[[plans]]
name = "Team"
monthly_price = 20
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config.support_contact, "help@example.org");
    assert_eq!(config.plans.len(), 2);
    assert_eq!(config.steps.len(), 4);

    let loaded = LoadedForm::with_config(&config);
    assert_eq!(loaded.text_of("selected-plan-name"), "Starter (Monthly)");
    assert_eq!(loaded.text_of("total-price"), "$5/mo");
}

#[test]
fn test_invalid_pairing_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "paired_steps = [4, 5, 6]\n").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();

    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::PairingLength {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "steps = 'not a list'").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();

    assert!(format!("{err:#}").contains("broken.toml"));
}

/// A form without an add-ons step still builds and summarises
#[test]
fn test_three_step_form_without_addons() {
    let mut config = AppConfig::default();
    config.steps.retain(|s| s.kind != StepKind::Addons);
    config.paired_steps = vec![3, 4, 5];

    assert_eq!(config.validate(), Ok(()));

    let mut loaded = LoadedForm::with_config(&config);
    assert!(loaded.form.addons.is_empty());
    loaded.wizard.jump_to(&mut loaded.page, 2);
    assert!(loaded.wizard.confirm(&mut loaded.page));
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved").join("config.toml");
    let config = AppConfig {
        yearly_bonus: String::new(),
        ..AppConfig::default()
    };

    config.save_to(&path).unwrap();

    assert_eq!(AppConfig::load_from(&path).unwrap(), config);
}

/// Reordered steps must keep the "Change" shortcut on the plan step
#[test]
fn test_change_plan_step_must_point_at_plans() {
    let mut config = AppConfig::default();
    config.steps.swap(1, 2);

    assert_eq!(
        config.validate(),
        Err(ConfigError::ChangePlanStepNotPlans {
            step: 1,
            kind: StepKind::Addons
        })
    );

    config.change_plan_step = 2;
    assert_eq!(config.validate(), Ok(()));

    let mut loaded = LoadedForm::with_config(&config);
    loaded.wizard.jump_to(&mut loaded.page, 3);
    loaded.wizard.change_plan(&mut loaded.page);
    assert_eq!(loaded.wizard.current_step(), 2);
    assert_eq!(loaded.visible_panels(), vec![false, false, true, false]);
    assert!(loaded.page.is_rendered(loaded.form.plans[0]));
}
