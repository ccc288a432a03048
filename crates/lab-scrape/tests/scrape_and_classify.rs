//! End-to-end: portal HTML fixtures through extraction and classification.

use lab_core::ResolvedResult;
use lab_scrape::{Classification, classify, extract_cells};
use pretty_assertions::assert_eq;

fn run(html: &str) -> Classification {
    let cells: Vec<String> = extract_cells(html.as_bytes()).unwrap().collect();
    classify(&cells)
}

#[test]
fn minimal_table_round_trip() {
    let html = "<table><tr><td>a</td><td>H1</td><td>H2</td><td>2024-01-01</td></tr></table>";
    assert_eq!(
        run(html),
        Classification::Resolved(ResolvedResult {
            text: "H1 H2".into(),
            sample_date: "H2".into(),
        })
    );
}

#[test]
fn ready_page_resolves() {
    let html = include_str!("fixtures/result_ready.html");
    assert_eq!(
        run(html),
        Classification::Resolved(ResolvedResult {
            text: "SARS-CoV-2 Not Detected | Influenza A Not Detected".into(),
            sample_date: "01/02/2024".into(),
        })
    );
}

#[test]
fn comparison_results_keep_their_positions() {
    assert_eq!(
        run(include_str!("fixtures/viral_load.html")),
        Classification::Resolved(ResolvedResult {
            text: "Viral load <20 copies/mL | Ct value Ct > 40".into(),
            sample_date: "01/02/2024".into(),
        })
    );
}

#[test]
fn header_only_page_with_comparison_result() {
    let html = "<td>B-1</td><td>Viral load</td><td><20 copies/mL</td><td>01/02/2024</td>";
    assert_eq!(
        run(html),
        Classification::Resolved(ResolvedResult {
            text: "Viral load <20 copies/mL".into(),
            sample_date: "<20 copies/mL".into(),
        })
    );
}

#[test]
fn page_without_table_is_not_yet_available() {
    assert_eq!(
        run(include_str!("fixtures/not_ready.html")),
        Classification::NotYetAvailable
    );
}

#[test]
fn empty_body_is_not_yet_available() {
    assert_eq!(run(""), Classification::NotYetAvailable);
}

#[test]
fn changed_layout_is_unrecognized() {
    assert_eq!(
        run(include_str!("fixtures/changed_layout.html")),
        Classification::Unrecognized { cell_count: 6 }
    );
}
