//! # Design Reports
//!
//! Plain-text report and CSV reinforcement table rendered from a finished
//! [`DesignResult`]. Rendering never recomputes anything; it only formats the
//! stage records.
//!
//! The report date is passed in rather than read from the clock so that the
//! same design always renders the same text.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slab_core::calculations::{calculate, DesignInput, SupportCondition};
//! use slab_core::loads::LoadSet;
//! use slab_core::materials::MaterialProperties;
//! use slab_core::report::{reinforcement_csv, render_text_report};
//!
//! let input = DesignInput::new(
//!     3500.0,
//!     MaterialProperties::new(28.0, 420.0),
//!     LoadSet::new(1.5, 3.0),
//!     SupportCondition::SimplySupported,
//! );
//! let result = calculate(&input).unwrap();
//!
//! let date = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
//! let text = render_text_report(&input, &result, date);
//! assert!(text.contains("Slab Thickness: 180 mm"));
//!
//! let csv = reinforcement_csv(&result);
//! assert!(csv.starts_with("Location,"));
//! ```

use chrono::{DateTime, Utc};

use crate::calculations::{DesignInput, DesignResult};
use crate::equations::registry::Equation;

/// Kind of downloadable artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Plain-text design report (.txt)
    Text,
    /// Reinforcement table (.csv)
    Csv,
}

/// Default download name, e.g. `slab_report_20261018.txt`
pub fn report_file_name(kind: ReportKind, date: DateTime<Utc>) -> String {
    let stamp = date.format("%Y%m%d");
    match kind {
        ReportKind::Text => format!("slab_report_{}.txt", stamp),
        ReportKind::Csv => format!("slab_results_{}.csv", stamp),
    }
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

/// Render the full plain-text design report.
pub fn render_text_report(
    input: &DesignInput,
    result: &DesignResult,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    let title = "ONE-WAY REINFORCED CONCRETE SLAB DESIGN REPORT";
    line(&mut out, title);
    line(&mut out, "=".repeat(title.len()));
    line(&mut out, format!("Date: {}", generated_at.format("%B %d, %Y at %H:%M")));
    line(&mut out, "Code: ACI 318-14");

    section(&mut out, "INPUT PARAMETERS");
    line(&mut out, format!("Clear Span: {} mm", input.clear_span_mm));
    line(&mut out, format!("Support Condition: {}", input.support));
    line(&mut out, format!("Concrete f'c: {} MPa", input.material.fc_mpa));
    line(&mut out, format!("Steel fy: {} MPa", input.material.fy_mpa));
    line(&mut out, format!("Concrete Density: {} kN/m³", input.material.density_kn_m3));
    line(&mut out, format!("Clear Cover: {} mm", input.material.cover_mm));
    line(&mut out, format!("Dead Load: {} kN/m²", input.loads.superimposed_dead_kn_m2));
    line(&mut out, format!("Live Load: {} kN/m²", input.loads.live_kn_m2));
    line(&mut out, format!("Main Reinforcement: {}", input.main_bar));
    line(&mut out, format!("Shrinkage Reinforcement: {}", input.shrinkage_bar));
    match input.user_thickness_mm {
        Some(h) => line(&mut out, format!("Thickness Override: {} mm", h)),
        None => line(&mut out, "Thickness Override: none"),
    }

    section(&mut out, "DESIGN RESULTS");
    line(
        &mut out,
        format!(
            "Slab Thickness: {} mm (minimum {} = {} mm)",
            result.thickness_mm(),
            result.support.thickness_rule(),
            result.thickness.minimum_mm
        ),
    );
    line(&mut out, format!("Effective Depth: {:.1} mm", result.effective_depth_mm));
    line(&mut out, format!("Self-Weight: {:.2} kN/m²", result.loads.self_weight_kn_m2));
    line(
        &mut out,
        format!(
            "Factored Load: {:.2} kN/m ({})",
            result.factored_load_kn_m(),
            result.loads.combination
        ),
    );

    line(&mut out, format!("Max Moment: {:.1} kN·m", result.max_abs_moment()));

    line(&mut out, "");
    line(&mut out, "Moments:");
    for m in &result.moments {
        line(
            &mut out,
            format!("  {}: {:.2} kN·m (C = {})", m.location, m.mu_knm, m.coefficient.fraction()),
        );
    }

    let shear = &result.shear;
    line(&mut out, "");
    line(&mut out, "Shear Check:");
    line(&mut out, format!("  Vu = {:.2} kN", shear.vu_kn));
    line(&mut out, format!("  φVc = {:.2} kN", shear.phi_vc_kn));
    line(
        &mut out,
        format!(
            "  Utilization = {:.1}% ({})",
            shear.utilization_pct,
            shear.band().description()
        ),
    );
    line(&mut out, format!("  Status: {}", shear.status.message()));

    line(&mut out, "");
    line(&mut out, "Reinforcement Summary:");
    for r in &result.reinforcement {
        line(
            &mut out,
            format!(
                "  {}: {} (As,req = {:.0}, As,final = {:.0}, As,prov = {:.0} mm²/m)",
                r.location,
                r.callout(),
                r.as_required_mm2,
                r.as_final_mm2,
                r.as_provided_mm2
            ),
        );
    }

    line(&mut out, "");
    line(&mut out, "Shrinkage Reinforcement:");
    line(
        &mut out,
        format!(
            "  {} (As,req = {:.0}, As,prov = {:.0} mm²/m)",
            result.shrinkage.callout(),
            result.shrinkage.as_required_mm2,
            result.shrinkage.as_provided_mm2
        ),
    );
    line(&mut out, format!("  Efficiency: {:.1}%", result.shrinkage.efficiency_pct()));

    section(&mut out, "DESIGN NOTES");
    if result.notes.is_empty() {
        line(&mut out, "  None");
    }
    for note in &result.notes {
        line(&mut out, format!("  - {}", note));
    }

    section(&mut out, "REFERENCES");
    for eq in Equation::ALL {
        let meta = eq.metadata();
        line(
            &mut out,
            format!("  {}: {} [{}]", meta.name, meta.formula_plain, meta.reference.citation()),
        );
    }

    line(&mut out, "");
    if result.passes() {
        line(&mut out, "This design complies with ACI 318-14 requirements.");
    } else {
        line(&mut out, "This design does NOT satisfy all ACI 318-14 checks; see design notes.");
    }

    out
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Reinforcement table as CSV, one row per main-steel location.
pub fn reinforcement_csv(result: &DesignResult) -> String {
    let mut out = String::from("Location,Moment (kN·m),Bar Size,Spacing (mm),As (mm²/m)\n");
    for r in &result.reinforcement {
        let row = [
            csv_field(r.location.label()),
            format!("{:.1}", r.mu_knm),
            csv_field(r.bar.designation()),
            format!("{}", r.spacing_final_mm),
            format!("{:.0}", r.as_provided_mm2),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
