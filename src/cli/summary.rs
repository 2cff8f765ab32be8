// ABOUTME: CLI summary command - selects plan, period and add-ons on a headless page and prints the summary

use anyhow::Result;

use super::{CliError, OutputFormat, SummaryArgs};
use crate::billing::{BillingEngine, Summary};
use crate::config::AppConfig;
use crate::page::build_page;

/// Drive the same page and billing engine the wizard uses
pub fn compute(args: &SummaryArgs, config: &AppConfig) -> Result<Summary, CliError> {
    let (mut page, form) = build_page(config);
    let billing = BillingEngine::new(&form);

    let plan = form
        .plans
        .iter()
        .copied()
        .find(|radio| page.value(*radio).eq_ignore_ascii_case(args.plan.trim()))
        .ok_or_else(|| CliError::UnknownPlan {
            name: args.plan.clone(),
            available: join_names(config.plans.iter().map(|p| p.name.as_str())),
        })?;
    page.set_checked(plan, true);

    for wanted in &args.addons {
        let addon = form
            .addons
            .iter()
            .find(|addon| page.text(addon.title).eq_ignore_ascii_case(wanted.trim()))
            .ok_or_else(|| CliError::UnknownAddon {
                name: wanted.clone(),
                available: join_names(config.addons.iter().map(|a| a.title.as_str())),
            })?;
        page.set_checked(addon.checkbox, true);
    }

    page.set_checked(form.billing.switch, args.yearly);
    Ok(billing.on_period_change(&mut page))
}

pub fn execute(args: &SummaryArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let summary = compute(args, config)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print!("{}", format_text(&summary)),
    }
    Ok(())
}

/// Plain-text rendering, one line per entry
pub fn format_text(summary: &Summary) -> String {
    let mut out = format!("{:<28}{}\n", summary.plan_label(), summary.plan_price_label());
    for line in &summary.addons {
        out.push_str(&format!("  {:<26}{}\n", line.title, summary.addon_price_label(line)));
    }
    out.push_str(&format!(
        "{:<28}{}\n",
        format!("Total (per {})", summary.period.noun()),
        summary.total_label()
    ));
    out
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(plan: &str, yearly: bool, addons: &[&str]) -> SummaryArgs {
        SummaryArgs {
            plan: plan.to_string(),
            yearly,
            addons: addons.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_yearly_arcade_with_online_service() {
        let summary =
            compute(&args("arcade", true, &["online service"]), &AppConfig::default()).unwrap();
        assert_eq!(summary.plan_price_label(), "$90/yr");
        assert_eq!(summary.addon_price_label(&summary.addons[0]), "+$10/yr");
        assert_eq!(summary.total_label(), "$100/yr");
    }

    #[test]
    fn test_text_output() {
        let summary = compute(&args("Pro", false, &[]), &AppConfig::default()).unwrap();
        let text = format_text(&summary);
        assert!(text.starts_with("Pro (Monthly)"));
        assert!(text.trim_end().ends_with("$15/mo"));
    }

    #[test]
    fn test_unknown_plan_lists_available() {
        let err = compute(&args("Ultimate", false, &[]), &AppConfig::default()).unwrap_err();
        assert_eq!(
            err,
            CliError::UnknownPlan {
                name: "Ultimate".to_string(),
                available: "Arcade, Advanced, Pro".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_addon() {
        let err = compute(&args("Arcade", false, &["Jetpack"]), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::UnknownAddon { ref name, .. } if name == "Jetpack"));
    }
}
