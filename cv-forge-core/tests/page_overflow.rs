//! Pagination behavior of the fixed-page planner.

use cv_forge_core::classify::classify_resume;
use cv_forge_core::pdf;

fn long_resume(body_lines: usize) -> String {
    let mut text = String::from("JOHN SMITH\n+1 555 | New York | john@x.com\nEXPERIENCE\n");
    for i in 0..body_lines {
        text.push_str(&format!("- Delivered improvement number {i} across the platform\n"));
    }
    text
}

#[test]
fn long_content_overflows_onto_additional_pages() {
    let resume = classify_resume(&long_resume(150));
    let plan = pdf::plan(&resume);
    assert!(
        plan.pages.len() > 1,
        "150 bullets cannot fit one page, got {} page(s)",
        plan.pages.len()
    );
    assert!(plan.pages.iter().all(|p| !p.texts.is_empty()));
}

#[test]
fn no_line_is_placed_outside_the_printable_band() {
    let resume = classify_resume(&long_resume(150));
    let plan = pdf::plan(&resume);
    for page in &plan.pages {
        for text in &page.texts {
            assert!(
                text.y_mm <= pdf::PAGE_HEIGHT_MM - pdf::MARGIN_BOTTOM_MM + 0.01,
                "baseline {} leaks into the bottom margin",
                text.y_mm
            );
            assert!(text.y_mm >= pdf::MARGIN_TOP_MM);
        }
    }
}

#[test]
fn short_content_stays_on_a_single_page() {
    let resume = classify_resume(&long_resume(5));
    assert_eq!(pdf::plan(&resume).pages.len(), 1);
}
