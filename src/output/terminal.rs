//! Terminal rendering of analysis reports.
//!
//! Provides a human-readable dashboard: KPI cards, per-dimension ROI
//! tables, top performers and recommendations.

use super::report::{AnalysisReport, DimensionReport, TopPerformersReport};
use crate::recommend::{BudgetShiftOutcome, ImpactLevel};
use crate::utils::config::CURRENCY_SYMBOL;
use colored::*;

/// Render a full report for the terminal
pub fn render_terminal_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_kpis(report));
    for dimension in &report.dimensions {
        out.push_str(&render_dimension(dimension));
    }
    out.push_str(&render_top_performers(&report.top_performers));
    out.push_str(&render_recommendations(report));
    if let Some(outcome) = &report.budget_shift {
        out.push_str(&render_budget_shift(outcome));
    }

    out
}

fn render_header(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str("\n🎯 ");
    out.push_str(&"Ad Campaign Performance Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Source:  {}\n", report.source));
    out.push_str(&format!("Records: {}\n", report.overview.record_count));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_kpis(report: &AnalysisReport) -> String {
    let o = &report.overview;
    let roi = format_percent(o.overall_roi);
    let roi = if o.overall_roi >= 0.0 { roi.green() } else { roi.red() };

    format!(
        "Total Spend:       {}\nTotal Revenue:     {}\nOverall ROI:       {}\nTotal Conversions: {}\n",
        format_currency(o.total_spend, 0),
        format_currency(o.total_revenue, 0),
        roi,
        group_thousands(&o.total_conversions.to_string())
    )
}

fn render_dimension(report: &DimensionReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nROI by {}:\n", report.dimension.label()).bold().to_string());

    for group in &report.groups {
        let symbol = if group.roi >= 0.0 { "📈" } else { "📉" };
        out.push_str(&format!(
            "  {} {:<36} ROI {:>8}  spend {:>14}  revenue {:>14}\n",
            symbol,
            group.value,
            format_percent(group.roi),
            format_currency(group.spend, 2),
            format_currency(group.revenue, 2)
        ));
    }
    out
}

fn render_top_performers(report: &TopPerformersReport) -> String {
    let mut out = String::new();
    if report.rows.is_empty() {
        return out;
    }

    out.push_str(&format!("\nTop Performing Campaigns (by {}):\n", report.metric).bold().to_string());
    for row in &report.rows {
        let value = if report.metric.is_ratio() {
            format_percent(row.value)
        } else {
            format!("{:.2}", row.value)
        };
        out.push_str(&format!(
            "  {:>3}. {} / {} / {}: {} (spend {}, revenue {})\n",
            row.rank,
            row.campaign,
            row.platform,
            row.audience,
            value,
            format_currency(row.spend, 2),
            format_currency(row.revenue, 2)
        ));
    }
    out
}

fn render_recommendations(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(&"\nOptimization Recommendations:\n".bold().to_string());

    if report.recommendations.is_empty() {
        out.push_str(&format!("  {}\n", "No data for the current selection".yellow()));
        return out;
    }

    for rec in &report.recommendations {
        let impact = match rec.impact {
            ImpactLevel::High => rec.impact.to_string().red().bold(),
            ImpactLevel::Medium => rec.impact.to_string().yellow(),
            ImpactLevel::Low => rec.impact.to_string().normal(),
        };
        out.push_str(&format!("  💡 {}: {} ({} Impact)\n", rec.kind, rec.action, impact));
    }
    out
}

/// Render the outcome of a budget shift simulation
pub fn render_budget_shift(outcome: &BudgetShiftOutcome) -> String {
    format!(
        "\nBudget Reallocation: shift {:.0}% of {} to {} (ROI {})\n  Potential additional revenue: {}\n",
        outcome.shift_percent,
        format_currency(outcome.current_spend, 2),
        outcome.platform,
        format_percent(outcome.target_roi),
        format_currency(outcome.additional_revenue, 2).green()
    )
}

/// Format a money amount, e.g. `₹12,345.68`
pub fn format_currency(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let sign = if amount < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(int_part), frac),
        None => format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(int_part)),
    }
}

/// Format a ratio as a percentage with one decimal, e.g. `0.125` -> `12.5%`
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Insert commas every three digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.891, 2), "₹1,234,567.89");
        assert_eq!(format_currency(999.0, 0), "₹999");
        assert_eq!(format_currency(1000.0, 0), "₹1,000");
        assert_eq!(format_currency(0.0, 2), "₹0.00");
        assert_eq!(format_currency(-2500.5, 2), "-₹2,500.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(-0.125), "-12.5%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
