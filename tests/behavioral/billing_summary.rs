// ABOUTME: Behavioral tests for the billing toggle and the live order summary

use pretty_assertions::assert_eq;
use signup_wizard::billing::BillingPeriod;
use signup_wizard::page::Tone;

use super::fixtures::LoadedForm;

fn addons_summary(loaded: &LoadedForm) -> Vec<String> {
    loaded
        .page
        .children(loaded.form.summary.addons_list)
        .iter()
        .map(|item| loaded.page.inner_text(*item))
        .collect()
}

#[test]
fn test_initial_summary_is_first_plan_monthly() {
    let loaded = LoadedForm::new();

    assert_eq!(loaded.text_of("selected-plan-name"), "Arcade (Monthly)");
    assert_eq!(loaded.text_of("selected-plan-price"), "$9/mo");
    assert_eq!(loaded.text_of("total-price"), "$9/mo");
    assert!(addons_summary(&loaded).is_empty());
}

#[test]
fn test_yearly_arcade_with_online_service() {
    let mut loaded = LoadedForm::new();
    loaded.page.set_checked(loaded.form.addons[0].checkbox, true);
    loaded.billing.on_selection_change(&mut loaded.page);

    let summary = loaded.billing.toggle_period(&mut loaded.page);

    assert_eq!(summary.period, BillingPeriod::Yearly);
    assert_eq!(loaded.text_of("selected-plan-name"), "Arcade (Yearly)");
    assert_eq!(loaded.text_of("selected-plan-price"), "$90/yr");
    assert_eq!(addons_summary(&loaded), vec!["Online service +$10/yr"]);
    assert_eq!(loaded.text_of("total-price"), "$100/yr");
}

#[test]
fn test_monthly_arcade_with_online_service() {
    let mut loaded = LoadedForm::new();
    loaded.page.set_checked(loaded.form.addons[0].checkbox, true);
    loaded.billing.on_selection_change(&mut loaded.page);

    assert_eq!(loaded.text_of("selected-plan-price"), "$9/mo");
    assert_eq!(addons_summary(&loaded), vec!["Online service +$1/mo"]);
    assert_eq!(loaded.text_of("total-price"), "$10/mo");
}

#[test]
fn test_toggle_twice_returns_to_monthly() {
    let mut loaded = LoadedForm::new();
    loaded.billing.toggle_period(&mut loaded.page);
    let summary = loaded.billing.toggle_period(&mut loaded.page);

    assert_eq!(summary.period, BillingPeriod::Monthly);
    assert_eq!(loaded.text_of("total-price"), "$9/mo");
    assert_eq!(loaded.page.tone(loaded.form.billing.monthly_label), Some(Tone::Emphasis));
    assert_eq!(loaded.page.tone(loaded.form.billing.yearly_label), Some(Tone::Muted));
}

#[test]
fn test_price_groups_swap_with_period() {
    let mut loaded = LoadedForm::new();
    let billing = loaded.form.billing.clone();

    assert!(billing.monthly_prices.iter().all(|p| !loaded.page.is_hidden(*p)));
    assert!(billing.yearly_prices.iter().all(|p| loaded.page.is_hidden(*p)));

    loaded.billing.toggle_period(&mut loaded.page);

    assert!(billing.monthly_prices.iter().all(|p| loaded.page.is_hidden(*p)));
    assert!(billing.yearly_prices.iter().all(|p| !loaded.page.is_hidden(*p)));
}

#[test]
fn test_plan_change_updates_summary() {
    let mut loaded = LoadedForm::new();
    loaded.page.set_checked(loaded.form.plans[1], true);
    loaded.billing.on_selection_change(&mut loaded.page);

    assert_eq!(loaded.text_of("selected-plan-name"), "Advanced (Monthly)");
    assert_eq!(loaded.text_of("total-price"), "$12/mo");
}

#[test]
fn test_total_is_plan_plus_every_addon() {
    let mut loaded = LoadedForm::new();
    loaded.page.set_checked(loaded.form.plans[2], true);
    for addon in loaded.form.addons.clone() {
        loaded.page.set_checked(addon.checkbox, true);
    }

    let summary = loaded.billing.toggle_period(&mut loaded.page);

    assert_eq!(summary.plan_price, 150);
    let addons: u32 = summary.addons.iter().map(|a| a.price).sum();
    assert_eq!(addons, 50);
    assert_eq!(summary.total, 200);
    assert_eq!(addons_summary(&loaded).len(), 3);
}

#[test]
fn test_navigation_does_not_recompute_summary() {
    let mut loaded = LoadedForm::new();
    loaded.page.set_checked(loaded.form.plans[2], true);

    loaded.wizard.jump_to(&mut loaded.page, 3);

    // Selection changed without a selection event; the summary still shows the old plan
    assert_eq!(loaded.text_of("selected-plan-name"), "Arcade (Monthly)");
}

/// A long session of toggling and re-selecting keeps the page the same size
#[test]
fn test_long_session_does_not_grow_page() {
    let mut loaded = LoadedForm::new();
    for addon in loaded.form.addons.clone() {
        loaded.page.set_checked(addon.checkbox, true);
    }
    loaded.billing.on_selection_change(&mut loaded.page);
    let slots = loaded.page.slot_count();

    for _ in 0..500 {
        loaded.billing.on_selection_change(&mut loaded.page);
        loaded.billing.toggle_period(&mut loaded.page);
    }

    assert_eq!(loaded.page.slot_count(), slots);
    assert_eq!(addons_summary(&loaded).len(), 3);
}
