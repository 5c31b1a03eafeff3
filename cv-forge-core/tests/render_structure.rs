//! Cross-renderer agreement: both output formats must reflect the same
//! ordered role structure for the same classified input.

use cv_forge_core::classify::{classify_resume, Role};
use cv_forge_core::{docx, pdf};

const SAMPLE: &str = "JOHN SMITH\n\
                      +1 555 | New York | john@x.com\n\
                      PROFESSIONAL SUMMARY\n\
                      Experienced engineer.\n\
                      EXPERIENCE\n\
                      Senior Dev | Acme | 2020-2023\n\
                      - Shipped 3 products\n\
                      \n";

#[test]
fn renderers_agree_on_role_transitions() {
    let resume = classify_resume(SAMPLE);
    let flow_roles: Vec<Role> = docx::plan(&resume).iter().map(|b| b.role).collect();
    let fixed_roles = pdf::plan(&resume).block_roles;
    assert_eq!(flow_roles, fixed_roles);
    assert_eq!(
        flow_roles,
        vec![
            Role::Title,
            Role::ContactLine,
            Role::SectionHeader,
            Role::Body,
            Role::SectionHeader,
            Role::SubHeader,
            Role::Bullet,
        ]
    );
}

#[test]
fn every_section_header_gets_exactly_one_rule() {
    let resume = classify_resume(SAMPLE);
    let plan = pdf::plan(&resume);
    let headers = plan
        .block_roles
        .iter()
        .filter(|r| **r == Role::SectionHeader)
        .count();
    let rules: usize = plan.pages.iter().map(|p| p.rules.len()).sum();
    assert_eq!(headers, 2);
    assert_eq!(rules, headers);
}

#[test]
fn bullets_lose_their_source_marker() {
    let resume = classify_resume(SAMPLE);

    let flow_bullet = docx::plan(&resume)
        .into_iter()
        .find(|b| b.role == Role::Bullet)
        .expect("sample has a bullet");
    assert_eq!(flow_bullet.text, "Shipped 3 products");

    let plan = pdf::plan(&resume);
    let fixed_bullet = plan
        .pages
        .iter()
        .flat_map(|p| &p.texts)
        .find(|t| t.role == Role::Bullet)
        .expect("sample has a bullet");
    assert_eq!(fixed_bullet.text, "• Shipped 3 products");
    assert!(!fixed_bullet.text.starts_with('-'));
}

#[test]
fn trailing_blank_line_produces_no_output_element() {
    let with_blank = classify_resume(SAMPLE);
    let without_blank = classify_resume(SAMPLE.trim_end());
    assert_eq!(
        docx::plan(&with_blank).len(),
        docx::plan(&without_blank).len()
    );
}

#[test]
fn contact_line_is_centered_in_the_fixed_layout() {
    let resume = classify_resume(SAMPLE);
    let plan = pdf::plan(&resume);
    let contact = plan
        .pages
        .iter()
        .flat_map(|p| &p.texts)
        .find(|t| t.role == Role::ContactLine)
        .expect("sample has a contact line");
    assert!(
        contact.x_mm > pdf::MARGIN_LEFT_MM,
        "centered text starts inside the left margin"
    );
}

#[test]
fn flow_document_is_a_valid_package() {
    let resume = classify_resume(SAMPLE);
    let bytes = docx::render(&resume).expect("flow render succeeds");
    assert!(bytes.len() > 500);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn rerendering_the_same_snapshot_is_deterministic() {
    let resume = classify_resume(SAMPLE);
    assert_eq!(pdf::plan(&resume), pdf::plan(&resume));
    assert_eq!(docx::plan(&resume), docx::plan(&resume));
}
