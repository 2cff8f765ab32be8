// ABOUTME: CLI steps command - walks the wizard through every step and reports what each one shows

use anyhow::Result;
use serde::Serialize;

use super::OutputFormat;
use crate::config::AppConfig;
use crate::page::{build_page, CLASS_ACTIVE};
use crate::wizard::{NavigationVisibility, WizardController};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// 1-based, as shown to users
    pub number: usize,
    pub label: String,
    pub heading: String,
    /// Positions of the highlighted indicators across both sets
    pub active_indicators: Vec<usize>,
    pub navigation: NavigationVisibility,
}

/// Render each step on a fresh page and read back the resulting state
pub fn collect(config: &AppConfig) -> Vec<StepReport> {
    let (mut page, form) = build_page(config);
    let mut wizard = WizardController::new(&form, config);

    config
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            wizard.jump_to(&mut page, index);
            let active_indicators = form
                .indicators
                .iter()
                .enumerate()
                .filter(|(_, id)| page.has_class(**id, CLASS_ACTIVE))
                .map(|(position, _)| position)
                .collect();
            StepReport {
                number: index + 1,
                label: step.label.clone(),
                heading: step.heading.clone(),
                active_indicators,
                navigation: wizard.navigation_visibility(),
            }
        })
        .collect()
}

pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let reports = collect(config);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", format_line(report));
            }
        }
    }
    Ok(())
}

fn format_line(report: &StepReport) -> String {
    let shown = |visible: bool| if visible { "shown" } else { "hidden" };
    format!(
        "{}. {:<14}{:<20}indicators {:?}  back: {}  next: {}  confirm: {}",
        report.number,
        report.label,
        report.heading,
        report.active_indicators,
        shown(report.navigation.back),
        shown(report.navigation.next),
        shown(report.navigation.confirm),
    )
}
