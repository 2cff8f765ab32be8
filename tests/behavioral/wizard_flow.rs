// ABOUTME: Behavioral tests for step navigation, validation gating and confirmation

use pretty_assertions::assert_eq;
use signup_wizard::config::AppConfig;
use signup_wizard::page::{ElementId, CLASS_ACTIVE, CLASS_HIDDEN};
use signup_wizard::wizard::NavigationVisibility;

use super::fixtures::LoadedForm;

fn active_indicators(loaded: &LoadedForm) -> Vec<usize> {
    loaded
        .form
        .indicators
        .iter()
        .enumerate()
        .filter(|(_, id)| loaded.page.has_class(**id, CLASS_ACTIVE))
        .map(|(position, _)| position)
        .collect()
}

fn button_visibility(loaded: &LoadedForm) -> NavigationVisibility {
    let visible =
        |ids: &[ElementId]| ids.iter().all(|id| !loaded.page.has_class(*id, CLASS_HIDDEN));
    NavigationVisibility {
        back: visible(&loaded.form.navigation.back),
        next: visible(&loaded.form.navigation.next),
        confirm: visible(&loaded.form.navigation.confirm),
    }
}

/// Initial load shows step 0 with its indicators and only the Next button
#[test]
fn test_initial_load_state() {
    let loaded = LoadedForm::new();

    assert_eq!(loaded.wizard.current_step(), 0);
    assert_eq!(loaded.visible_panels(), vec![true, false, false, false]);
    assert_eq!(active_indicators(&loaded), vec![0, 4]);
    assert_eq!(
        button_visibility(&loaded),
        NavigationVisibility {
            back: false,
            next: true,
            confirm: false
        }
    );
}

/// Every step shows exactly its own panel, indicator pair and buttons
#[test]
fn test_render_every_step() {
    let mut loaded = LoadedForm::new();
    let steps = loaded.form.step_count();

    for step in 0..steps {
        loaded.wizard.jump_to(&mut loaded.page, step);

        let expected: Vec<bool> = (0..steps).map(|i| i == step).collect();
        assert_eq!(loaded.visible_panels(), expected, "step {step}");
        assert_eq!(active_indicators(&loaded), vec![step, step + steps]);
        assert_eq!(
            button_visibility(&loaded),
            NavigationVisibility::for_step(step, steps)
        );
    }
}

/// Advancing with valid personal info moves to the plan step and re-highlights
#[test]
fn test_valid_advance_moves_forward() {
    let mut loaded = LoadedForm::new();
    loaded.fill_personal_info();

    let moved = loaded.wizard.advance(&mut loaded.page, &loaded.validator).unwrap();

    assert!(moved);
    assert_eq!(loaded.wizard.current_step(), 1);
    assert_eq!(loaded.visible_panels(), vec![false, true, false, false]);
    assert_eq!(active_indicators(&loaded), vec![1, 5]);
    assert_eq!(
        button_visibility(&loaded),
        NavigationVisibility {
            back: true,
            next: true,
            confirm: false
        }
    );
}

/// An empty required field blocks the step and is reported with focus
#[test]
fn test_empty_required_field_blocks_advance() {
    let mut loaded = LoadedForm::new();
    loaded.fill("name", "Ada Lovelace");
    loaded.fill("phone", "+1 234 567 890");

    let err = loaded.wizard.advance(&mut loaded.page, &loaded.validator).unwrap_err();

    let email = loaded.field("email");
    assert_eq!(err.field, "email");
    assert_eq!(err.element, email);
    assert_eq!(loaded.page.focused(), Some(email));
    assert_eq!(loaded.page.validation_report().map(|r| r.element), Some(email));
    assert_eq!(loaded.wizard.current_step(), 0);
    assert_eq!(loaded.visible_panels(), vec![true, false, false, false]);
}

/// Only the first invalid control is reported
#[test]
fn test_first_invalid_control_wins() {
    let mut loaded = LoadedForm::new();
    loaded.fill("email", "not-an-email");

    let err = loaded.wizard.advance(&mut loaded.page, &loaded.validator).unwrap_err();

    assert_eq!(err.field, "name");
    assert_eq!(err.message, "Please fill out this field.");
}

#[test]
fn test_malformed_email_and_phone_are_rejected() {
    let mut loaded = LoadedForm::new();
    loaded.fill_personal_info();
    loaded.fill("email", "ada@");

    let err = loaded.wizard.advance(&mut loaded.page, &loaded.validator).unwrap_err();
    assert_eq!(err.message, "Please enter an email address.");

    loaded.fill("email", "ada@example.com");
    loaded.fill("phone", "call me");
    let err = loaded.wizard.advance(&mut loaded.page, &loaded.validator).unwrap_err();
    assert_eq!(err.field, "phone");
    assert_eq!(err.message, "Please match the requested format.");
}

/// Advance at the last step never increments and the retreat at step 0 never decrements
#[test]
fn test_bounds_are_silent_no_ops() {
    let mut loaded = LoadedForm::new();

    assert!(!loaded.wizard.retreat(&mut loaded.page));
    assert_eq!(loaded.wizard.current_step(), 0);
    assert!(loaded.page.validation_report().is_none());

    loaded.wizard.jump_to(&mut loaded.page, 3);
    assert_eq!(loaded.wizard.advance(&mut loaded.page, &loaded.validator), Ok(false));
    assert_eq!(loaded.wizard.current_step(), 3);
}

/// Going back skips validation even when the current step is invalid
#[test]
fn test_back_from_invalid_step() {
    let mut loaded = LoadedForm::new();
    loaded.fill_personal_info();
    loaded.wizard.advance(&mut loaded.page, &loaded.validator).unwrap();
    loaded.fill("name", "");

    assert!(loaded.wizard.retreat(&mut loaded.page));
    assert_eq!(loaded.wizard.current_step(), 0);
    assert!(loaded.page.validation_report().is_none());
}

/// The summary's change-plan shortcut returns to the plan step without validating
#[test]
fn test_change_plan_from_summary() {
    let mut loaded = LoadedForm::new();
    loaded.wizard.jump_to(&mut loaded.page, 3);

    loaded.wizard.change_plan(&mut loaded.page);

    assert_eq!(loaded.wizard.current_step(), 1);
    assert_eq!(loaded.visible_panels(), vec![false, true, false, false]);
    assert!(loaded.page.validation_report().is_none());
}

#[test]
fn test_full_walkthrough_and_confirmation() {
    let mut loaded = LoadedForm::new();
    loaded.fill_personal_info();
    for _ in 0..3 {
        assert_eq!(loaded.wizard.advance(&mut loaded.page, &loaded.validator), Ok(true));
    }

    assert_eq!(
        button_visibility(&loaded),
        NavigationVisibility {
            back: true,
            next: false,
            confirm: true
        }
    );

    assert!(loaded.wizard.confirm(&mut loaded.page));

    assert!(loaded.page.is_hidden(loaded.form.wizard_region));
    assert!(loaded.page.is_hidden(loaded.form.footer));
    assert!(loaded.form.panels.iter().all(|p| !loaded.page.is_rendered(*p)));

    let views = loaded.page.find_by_class(loaded.form.main, "confirmation");
    assert_eq!(views.len(), 1);
    let text = loaded.page.inner_text(views[0]);
    assert!(text.contains("Thank you!"));
    assert!(text.ends_with("support@loremgaming.com"));
}

#[test]
fn test_confirmation_cannot_be_undone() {
    let mut loaded = LoadedForm::new();
    loaded.wizard.jump_to(&mut loaded.page, 3);
    loaded.wizard.confirm(&mut loaded.page);

    assert!(!loaded.wizard.confirm(&mut loaded.page));
    assert!(!loaded.wizard.retreat(&mut loaded.page));
    assert_eq!(loaded.wizard.advance(&mut loaded.page, &loaded.validator), Ok(false));
    assert_eq!(loaded.page.find_by_class(loaded.form.main, "confirmation").len(), 1);
    assert!(loaded.page.is_hidden(loaded.form.wizard_region));
}

#[test]
fn test_configured_support_contact_is_shown() {
    let config = AppConfig {
        support_contact: "help@example.org".to_string(),
        ..AppConfig::default()
    };
    let mut loaded = LoadedForm::with_config(&config);
    loaded.wizard.jump_to(&mut loaded.page, 3);
    loaded.wizard.confirm(&mut loaded.page);

    let view = loaded.wizard.confirmation().unwrap();
    assert!(loaded.page.inner_text(view).ends_with("help@example.org"));
}
