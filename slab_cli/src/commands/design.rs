//! `slab design` command

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::cli::{DesignArgs, OutputFormat};
use slab_core::report::{reinforcement_csv, render_text_report, report_file_name, ReportKind};
use slab_core::{calculate, DesignInput, LoadSet, MaterialProperties, SupportCondition};

const DEFAULT_SPAN_MM: f64 = 3500.0;
const DEFAULT_FC_MPA: f64 = 28.0;
const DEFAULT_FY_MPA: f64 = 420.0;
const DEFAULT_DEAD_KN_M2: f64 = 1.5;
const DEFAULT_LIVE_KN_M2: f64 = 3.0;

pub fn execute(args: DesignArgs) -> Result<()> {
    let input = build_input(&args)?;
    tracing::debug!(
        span_mm = input.clear_span_mm,
        support = input.support.code(),
        "running design"
    );

    let result = calculate(&input).context("slab design failed")?;
    let now = Utc::now();
    let report = render_text_report(&input, &result, now);

    match args.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if let Some(path) = &args.report {
        let written = write_artifact(path, &report_file_name(ReportKind::Text, now), &report)?;
        tracing::info!("wrote report to {}", written.display());
    }
    if let Some(path) = &args.csv {
        let csv = reinforcement_csv(&result);
        let written = write_artifact(path, &report_file_name(ReportKind::Csv, now), &csv)?;
        tracing::info!("wrote reinforcement table to {}", written.display());
    }

    Ok(())
}

/// Start from the input file (or the defaults) and apply any flags on top.
fn build_input(args: &DesignArgs) -> Result<DesignInput> {
    let mut input = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            DesignInput::from_json(&text)
                .with_context(|| format!("failed to parse design input {}", path.display()))?
        }
        None => DesignInput::new(
            DEFAULT_SPAN_MM,
            MaterialProperties::new(DEFAULT_FC_MPA, DEFAULT_FY_MPA),
            LoadSet::new(DEFAULT_DEAD_KN_M2, DEFAULT_LIVE_KN_M2),
            SupportCondition::default(),
        ),
    };

    if let Some(span) = args.span {
        input.clear_span_mm = span;
    }
    if let Some(support) = args.support {
        input.support = support;
    }
    if let Some(fc) = args.fc {
        input.material.fc_mpa = fc;
    }
    if let Some(fy) = args.fy {
        input.material.fy_mpa = fy;
    }
    if let Some(density) = args.density {
        input.material.density_kn_m3 = density;
    }
    if let Some(cover) = args.cover {
        input.material.cover_mm = cover;
    }
    if let Some(dead) = args.dead {
        input.loads.superimposed_dead_kn_m2 = dead;
    }
    if let Some(live) = args.live {
        input.loads.live_kn_m2 = live;
    }
    if let Some(bar) = args.main_bar {
        input.main_bar = bar;
    }
    if let Some(bar) = args.shrinkage_bar {
        input.shrinkage_bar = bar;
    }
    if args.thickness.is_some() {
        input.user_thickness_mm = args.thickness;
    }

    Ok(input)
}

/// Write to `path`, or to `default_name` inside it when `path` is a directory.
fn write_artifact(path: &Path, default_name: &str, contents: &str) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(default_name)
    } else {
        path.to_path_buf()
    };
    fs::write(&target, contents)
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}
