// ABOUTME: Behavioral test suite for the signup wizard
//
// These tests drive the public page, wizard and billing APIs the way the terminal
// front-end does and assert on what a user would see.

#[path = "behavioral/fixtures.rs"]
pub mod fixtures;

#[path = "behavioral/wizard_flow.rs"]
mod wizard_flow;

#[path = "behavioral/billing_summary.rs"]
mod billing_summary;

#[path = "behavioral/config_loading.rs"]
mod config_loading;
