// File: crates/burnup-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Runs one projection cycle over a fixed burnup page and serializes it.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the markup for exact match.
// - Else, fails: the golden file is committed alongside the test.

use burnup_core::{NodeId, Projector, RenderOptions, SvgDocument, Theme};

const PAGE: &str = r#"<html xmlns="http://www.w3.org/1999/xhtml"><body>
<div class="BurnupChart">
<svg xmlns="http://www.w3.org/2000/svg" class="highcharts-root" width="600" height="400" viewBox="0 0 600 400">
<g class="highcharts-series highcharts-series-0"><path class="highcharts-tracker-line" d="M 40 80 L 120 80 L 200 60 L 280 60"/></g>
<g class="highcharts-series highcharts-series-1"><path class="highcharts-tracker-line" d="M 40 380 L 120 380 L 200 340 L 280 300 L 360 260"/></g>
</svg>
</div>
</body></html>"#;

fn render_markup() -> String {
    let mut doc = SvgDocument::parse(PAGE).expect("parse page");
    let opts = RenderOptions { projection_width: 1000.0, theme: Theme::gray(), ..RenderOptions::default() };
    let mut projector: Projector<NodeId> = Projector::new(opts);
    projector.run_cycle(&mut doc);
    doc.to_xml()
}

#[test]
fn golden_projected_chart() {
    let markup = render_markup();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("projected_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &markup).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), markup.len());
        return;
    }

    let want = std::fs::read_to_string(&snap_path).unwrap_or_else(|_| {
        panic!("missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless", snap_path.display())
    });
    assert_eq!(markup, want, "projected markup differs from golden snapshot: {}", snap_path.display());
}

#[test]
fn page_projects_at_exact_coordinates() {
    // total flat at 60, done on y = 440 - x/2 after trimming
    let markup = render_markup();
    assert!(markup.contains(r#"d="M 0 60 L 1000 60""#), "{markup}");
    assert!(markup.contains(r#"d="M 0 440 L 1000 -60""#), "{markup}");
    assert!(markup.contains(r#"<circle cx="760" cy="60" r="5" fill="red"/>"#), "{markup}");
    assert!(markup.contains(r#"viewBox="0 0 880 400""#), "{markup}");
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render_markup(), render_markup());
}
