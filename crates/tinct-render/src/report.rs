//! Fixed-width text rendering of a [`ReadabilityReport`].

use std::fmt::Write;

use tinct_core::{Color, ReadabilityReport};

const WIDE_RULE: usize = 70;
const NARROW_RULE: usize = 50;

fn background_line(label: &str, color: &Color) -> String {
    format!(
        "{label:<18}{} (L: {:.1}%, S: {:.1}%)",
        color.hex(),
        color.lightness(),
        color.saturation()
    )
}

/// Renders the report for a terminal or a `.txt` artifact.
pub fn render_report(report: &ReadabilityReport) -> String {
    let wide = "=".repeat(WIDE_RULE);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{wide}");
    let _ = writeln!(out, "READABILITY REPORT");
    let _ = writeln!(out, "{wide}");
    let _ = writeln!(out, "Theme: {}", report.mode.as_str().to_uppercase());
    let _ = writeln!(out, "{}", background_line("Background:", &report.background));
    let _ = writeln!(out, "{}", background_line("Background Med:", &report.background_medium));
    let _ = writeln!(out, "{}", background_line("Background Light:", &report.background_light));

    for category in &report.categories {
        let _ = writeln!(out, "\n\n{} (min: {:?}:1)", category.name, category.required);
        let _ = write!(out, "{}", "-".repeat(NARROW_RULE));
        for check in &category.checks {
            let status = if check.passes() { "✓" } else { "✗ FAIL" };
            let _ = write!(
                out,
                "\n  {:<14} {}  vs bg: {:4.1}:1  vs bg_light: {:4.1}:1  {status}",
                check.role.as_str(),
                check.color.hex(),
                check.vs_background,
                check.vs_background_light,
            );
        }
    }

    let _ = writeln!(out, "\n\n{wide}");
    if report.issues.is_empty() {
        let _ = writeln!(out, "ALL COLORS PASS CONTRAST REQUIREMENTS ✓");
    } else {
        let _ = writeln!(out, "ISSUES FOUND: {}", report.issues.len());
        for issue in &report.issues {
            let _ = writeln!(
                out,
                "  - {}: {} has {:.1}:1, needs {:?}:1",
                issue.role,
                issue.color.hex(),
                issue.achieved,
                issue.required
            );
        }
    }
    out.push_str(&wide);
    out
}
