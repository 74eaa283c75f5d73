// File: crates/burnup-cli/src/main.rs
// Summary: Annotates burnup charts in an SVG/XHTML file with projections, once or continuously.

mod cli;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use anyhow::{Context, Result};
use burnup_core::schedule::Scheduler;
use burnup_core::{ChartReport, CycleReport, NodeId, Projector, RenderOptions, SvgDocument};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Annotate { input, output, render } => {
            let output = output.unwrap_or_else(|| out_name_for(&input));
            let report = annotate_file(&input, &output, render.to_options()?)?;
            print_report(&report);
            println!("Wrote {}", output.display());
        }
        Commands::Watch { input, output, interval_ms, resize_delay_ms, max_cycles, render } => {
            let output = output.unwrap_or_else(|| out_name_for(&input));
            let scheduler = Scheduler::new(
                Duration::from_millis(interval_ms),
                Duration::from_millis(resize_delay_ms),
            );
            watch_file(&input, &output, render.to_options()?, scheduler, max_cycles)?;
        }
    }

    Ok(())
}

/// Run a single cycle over `input` and write the annotated document to `output`.
fn annotate_file(input: &Path, output: &Path, opts: RenderOptions) -> Result<CycleReport> {
    let mut doc = load_document(input)?;
    let mut projector: Projector<NodeId> = Projector::new(opts);
    let report = projector.run_cycle(&mut doc);
    write_document(output, &doc)?;
    Ok(report)
}

/// Redraw on a timer, and after `resize_delay` whenever the input file changes.
fn watch_file(
    input: &Path,
    output: &Path,
    opts: RenderOptions,
    mut scheduler: Scheduler,
    max_cycles: Option<u64>,
) -> Result<()> {
    let mut doc = load_document(input)?;
    let mut seen = modified_at(input);
    let mut projector: Projector<NodeId> = Projector::new(opts);
    let mut cycles = 0u64;

    scheduler.start(Instant::now());
    info!(input = %input.display(), output = %output.display(), "watching");

    loop {
        let now = Instant::now();
        let stamp = modified_at(input);
        if stamp != seen {
            seen = stamp;
            match load_document(input) {
                Ok(fresh) => {
                    doc = fresh;
                    projector.reset();
                    scheduler.on_resize(now);
                    debug!("input changed, redraw scheduled");
                }
                Err(e) => warn!(error = %format!("{e:#}"), "reload failed, keeping previous document"),
            }
        }

        if let Some(trigger) = scheduler.poll(now) {
            let report = projector.run_cycle(&mut doc);
            write_document(output, &doc)?;
            cycles += 1;
            debug!(?trigger, cycle = cycles, charts = report.charts.len(), "cycle done");
            if max_cycles.is_some_and(|max| cycles >= max) {
                print_report(&report);
                return Ok(());
            }
        }

        std::thread::sleep(scheduler.next_wakeup(Instant::now()).min(Duration::from_millis(50)));
    }
}

fn load_document(path: &Path) -> Result<SvgDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    SvgDocument::parse(&text).with_context(|| format!("parsing {}", path.display()))
}

fn write_document(path: &Path, doc: &SvgDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, doc.to_xml()).with_context(|| format!("writing {}", path.display()))
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Produce an output name like `<dir>/<stem>.projected.<ext>`.
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("svg");
    input.with_file_name(format!("{stem}.projected.{ext}"))
}

fn print_report(report: &CycleReport) {
    if report.charts.is_empty() {
        println!("No charts found.");
    }
    for (i, chart) in report.charts.iter().enumerate() {
        match chart {
            ChartReport::Rendered(o) => match o.projection {
                Some(p) => println!(
                    "chart {i}: {} line(s), projection at ({:.2}, {:.2})",
                    o.lines_drawn, p.x, p.y
                ),
                None => println!("chart {i}: {} line(s), no projection", o.lines_drawn),
            },
            ChartReport::Skipped(reason) => println!("chart {i}: skipped ({reason})"),
        }
    }
}
