//! Line-oriented role classification for AI-generated resume text.
//!
//! The rewriting collaborator returns newline-delimited plain text: line one is
//! the display name, line two the pipe-delimited contact fields, and the rest
//! follows loose conventions (upper-case section headers, `Role | Company`
//! sub-headers, `-`/`•` bullets). Classification is a pure function of a line's
//! text and its position among the non-blank lines, implemented as one ordered
//! rule list so both renderers consume identical decisions.

use regex::Regex;
use std::sync::OnceLock;

/// Semantic role of one line of resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Title,
    ContactLine,
    SectionHeader,
    SubHeader,
    Bullet,
    Body,
    Blank,
}

/// One classified line, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine {
    pub role: Role,
    /// The line as received from the collaborator (trimmed).
    pub raw: String,
    /// The text a renderer should draw: markers and numbering stripped.
    pub display: String,
}

/// Title and contact lines, extracted once and passed to both renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeHeader {
    pub name: String,
    pub contact: Option<String>,
}

/// Full classification of one ResumeText snapshot: the header plus the
/// remaining renderable lines in order. Blank lines are already dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedResume {
    pub header: ResumeHeader,
    pub lines: Vec<ClassifiedLine>,
}

const SECTION_HEADER_MAX_CHARS: usize = 60;

fn numbering_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("hard-coded pattern compiles"))
}

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#{1,6}\s+").expect("hard-coded pattern compiles"))
}

/// Strips a leading list-numbering token (`1. `, `12.`) from a line.
fn strip_numbering(line: &str) -> &str {
    match numbering_re().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

fn is_blank(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.contains("___")
}

/// Classifies one line given its index among the non-blank lines of the text
/// (0 for the first non-blank line, 1 for the second, and so on).
///
/// The first two positions are decided by convention, not content: line one is
/// always the `Title`, and line two is the `ContactLine` when it carries both
/// a pipe separator and an `@` sign. The remaining rules are content
/// heuristics, applied in order, with `Body` as the fallback.
pub fn classify(line: &str, non_blank_index: usize) -> Role {
    let trimmed = line.trim();
    if is_blank(trimmed) {
        return Role::Blank;
    }
    if non_blank_index == 0 {
        return Role::Title;
    }
    if non_blank_index == 1 && trimmed.contains('|') && trimmed.contains('@') {
        return Role::ContactLine;
    }
    if marker_re().is_match(trimmed) {
        return Role::SectionHeader;
    }
    let unnumbered = strip_numbering(trimmed);
    let has_upper = unnumbered.chars().any(|c| c.is_uppercase());
    let has_lower = unnumbered.chars().any(|c| c.is_lowercase());
    if unnumbered.chars().count() < SECTION_HEADER_MAX_CHARS
        && !unnumbered.contains('|')
        && has_upper
        && !has_lower
    {
        return Role::SectionHeader;
    }
    if trimmed.contains('|') && !trimmed.contains('@') {
        return Role::SubHeader;
    }
    if trimmed.starts_with('-') || trimmed.starts_with('•') {
        return Role::Bullet;
    }
    Role::Body
}

/// Derives the text a renderer should draw for a line of the given role.
///
/// Residual markdown bold markers are dropped everywhere; section headers
/// additionally lose numbering and structural markers, bullets lose their
/// leading glyph.
pub fn display_text(line: &str, role: Role) -> String {
    let trimmed = line.trim().replace("**", "");
    match role {
        Role::SectionHeader => {
            let unmarked = marker_re().replace(&trimmed, "");
            strip_numbering(unmarked.trim()).trim().to_string()
        }
        Role::Bullet => trimmed
            .trim_start_matches(['-', '•'])
            .trim()
            .to_string(),
        _ => trimmed,
    }
}

/// Classifies one line and derives its display text in one step.
pub fn classify_line(line: &str, non_blank_index: usize) -> ClassifiedLine {
    let role = classify(line, non_blank_index);
    ClassifiedLine {
        role,
        raw: line.trim().to_string(),
        display: display_text(line, role),
    }
}

/// Walks a full ResumeText snapshot: extracts the header and returns the
/// remaining renderable lines in order. Blank lines (including `___`
/// horizontal-rule artifacts) are dropped and never reach a renderer.
pub fn classify_resume(text: &str) -> ClassifiedResume {
    let mut header = ResumeHeader::default();
    let mut lines = Vec::new();
    let mut non_blank_index = 0usize;

    for line in text.lines() {
        let classified = classify_line(line, non_blank_index);
        match classified.role {
            Role::Blank => continue,
            Role::Title => header.name = classified.display.clone(),
            Role::ContactLine => header.contact = Some(classified.display.clone()),
            _ => lines.push(classified),
        }
        non_blank_index += 1;
    }

    tracing::debug!(
        name = %header.name,
        has_contact = header.contact.is_some(),
        lines = lines.len(),
        "Classified resume text"
    );
    ClassifiedResume { header, lines }
}
