//! Fixed-page renderer: classified resume lines to a paginated PDF.
//!
//! Two stages. `plan` is pure layout: an explicit vertical cursor walks an
//! A4 page, each role advancing it by a role-specific line height, wrapping
//! long lines against an estimated character budget, drawing a rule under
//! every section header and breaking to a fresh page when the printable
//! height would be exceeded (a wrapped visual line is never split). `emit`
//! maps the plan onto `printpdf` operations with the embedded regular and
//! bold faces.
//!
//! All text is passed through the bidi shaper before placement, since the
//! backend draws strings strictly left-to-right. Width measurement is a
//! deterministic per-glyph estimate; exact typographic fidelity is a
//! non-goal.

use printpdf::{
    Color, Line, LinePoint, Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt,
    Rgb, TextItem,
};
use tracing::debug;

use crate::classify::{ClassifiedResume, Role};
use crate::contract::FontSet;
use crate::error::{FontResourceError, RenderError};
use crate::shape;
use crate::style::{style_for, HAlign};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_TOP_MM: f32 = 14.0;
pub const MARGIN_BOTTOM_MM: f32 = 15.0;
pub const MARGIN_LEFT_MM: f32 = 12.0;
pub const MARGIN_RIGHT_MM: f32 = 12.0;

const BULLET_INDENT_MM: f32 = 5.0;
const RULE_GAP_MM: f32 = 1.2;
const RULE_ADVANCE_MM: f32 = 3.0;

const PT_TO_MM: f32 = 0.352_778;
const LINE_HEIGHT_FACTOR: f32 = 1.35;
/// Average glyph advance as a fraction of the font size. An estimate is
/// enough here: wrapping just has to be stable and conservative.
const AVG_GLYPH_FACTOR: f32 = 0.5;

/// One visual line placed on a page. `y_mm` is the baseline measured from
/// the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub role: Role,
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub bold: bool,
}

/// A hand-drawn separator rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRule {
    pub x0_mm: f32,
    pub x1_mm: f32,
    pub y_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePlan {
    pub texts: Vec<PlacedText>,
    pub rules: Vec<PlacedRule>,
}

/// The full paginated layout. `block_roles` records the ordered roles of the
/// placed source lines, independent of wrapping and pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub pages: Vec<PagePlan>,
    pub block_roles: Vec<Role>,
}

pub fn content_width_mm() -> f32 {
    PAGE_WIDTH_MM - MARGIN_LEFT_MM - MARGIN_RIGHT_MM
}

/// Lays out the classified resume onto one or more pages.
pub fn plan(resume: &ClassifiedResume) -> LayoutPlan {
    let mut planner = Planner::new();
    if !resume.header.name.is_empty() {
        planner.place_block(Role::Title, &resume.header.name);
    }
    if let Some(contact) = &resume.header.contact {
        planner.place_block(Role::ContactLine, contact);
    }
    for line in &resume.lines {
        planner.place_block(line.role, &line.display);
    }
    debug!(
        pages = planner.pages.len(),
        blocks = planner.block_roles.len(),
        "Planned fixed-page layout"
    );
    LayoutPlan {
        pages: planner.pages,
        block_roles: planner.block_roles,
    }
}

/// Renders the classified resume into a complete fixed-page byte buffer.
pub fn render(resume: &ClassifiedResume, fonts: &FontSet) -> Result<Vec<u8>, RenderError> {
    emit(&plan(resume), fonts)
}

/// Emits a planned layout as PDF bytes with the given font family embedded.
pub fn emit(layout: &LayoutPlan, fonts: &FontSet) -> Result<Vec<u8>, RenderError> {
    let mut warnings = Vec::new();
    let regular = ParsedFont::from_bytes(&fonts.regular, 0, &mut warnings)
        .ok_or(FontResourceError::Unparseable { face: "regular" })?;
    let bold = ParsedFont::from_bytes(&fonts.bold, 0, &mut warnings)
        .ok_or(FontResourceError::Unparseable { face: "bold" })?;

    let mut doc = PdfDocument::new("Resume");
    let regular_id = doc.add_font(&regular);
    let bold_id = doc.add_font(&bold);

    let mut pages = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let mut ops = vec![Op::SetFillColor {
            col: Color::Rgb(Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                icc_profile: None,
            }),
        }];
        for text in &page.texts {
            let font = if text.bold {
                bold_id.clone()
            } else {
                regular_id.clone()
            };
            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: Point::new(Mm(text.x_mm), Mm(PAGE_HEIGHT_MM - text.y_mm)),
            });
            ops.push(Op::SetFontSize {
                size: Pt(text.size_pt),
                font: font.clone(),
            });
            ops.push(Op::WriteText {
                items: vec![TextItem::Text(text.text.clone())],
                font,
            });
            ops.push(Op::EndTextSection);
        }
        for rule in &page.rules {
            ops.push(Op::SetOutlineColor {
                col: Color::Rgb(Rgb {
                    r: 0.2,
                    g: 0.2,
                    b: 0.2,
                    icc_profile: None,
                }),
            });
            ops.push(Op::SetOutlineThickness { pt: Pt(0.8) });
            ops.push(Op::DrawLine {
                line: Line {
                    points: vec![
                        LinePoint {
                            p: Point::new(Mm(rule.x0_mm), Mm(PAGE_HEIGHT_MM - rule.y_mm)),
                            bezier: false,
                        },
                        LinePoint {
                            p: Point::new(Mm(rule.x1_mm), Mm(PAGE_HEIGHT_MM - rule.y_mm)),
                            bezier: false,
                        },
                    ],
                    is_closed: false,
                },
            });
        }
        pages.push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops));
    }

    let bytes = doc
        .with_pages(pages)
        .save(&PdfSaveOptions::default(), &mut warnings);
    debug!(
        pages = layout.pages.len(),
        size = bytes.len(),
        "Emitted fixed-page document"
    );
    Ok(bytes)
}

struct Planner {
    pages: Vec<PagePlan>,
    cursor_mm: f32,
    block_roles: Vec<Role>,
}

impl Planner {
    fn new() -> Self {
        Self {
            pages: vec![PagePlan::default()],
            cursor_mm: MARGIN_TOP_MM,
            block_roles: Vec::new(),
        }
    }

    fn place_block(&mut self, role: Role, text: &str) {
        let style = style_for(role);
        let shaped = shape::shape(text);
        let display = if role == Role::Bullet {
            format!("• {shaped}")
        } else {
            shaped
        };
        let indent = if role == Role::Bullet {
            BULLET_INDENT_MM
        } else {
            0.0
        };
        let available = content_width_mm() - indent;
        let line_height = style.size_pt * PT_TO_MM * LINE_HEIGHT_FACTOR;

        self.cursor_mm += style.space_before_pt * PT_TO_MM;
        for piece in wrap(&display, char_budget(available, style.size_pt)) {
            if self.cursor_mm + line_height > PAGE_HEIGHT_MM - MARGIN_BOTTOM_MM {
                self.break_page();
            }
            let x_mm = match style.align {
                HAlign::Left => MARGIN_LEFT_MM + indent,
                HAlign::Center => {
                    let slack = content_width_mm() - estimated_width_mm(&piece, style.size_pt);
                    MARGIN_LEFT_MM + (slack / 2.0).max(0.0)
                }
            };
            let y_mm = self.cursor_mm + line_height;
            self.current_page().texts.push(PlacedText {
                role,
                text: piece,
                x_mm,
                y_mm,
                size_pt: style.size_pt,
                bold: style.bold,
            });
            self.cursor_mm += line_height;
        }
        if style.rule_below {
            let y_mm = self.cursor_mm + RULE_GAP_MM;
            self.current_page().rules.push(PlacedRule {
                x0_mm: MARGIN_LEFT_MM,
                x1_mm: PAGE_WIDTH_MM - MARGIN_RIGHT_MM,
                y_mm,
            });
            self.cursor_mm += RULE_ADVANCE_MM;
        }
        self.cursor_mm += style.space_after_pt * PT_TO_MM;
        self.block_roles.push(role);
    }

    fn break_page(&mut self) {
        self.pages.push(PagePlan::default());
        self.cursor_mm = MARGIN_TOP_MM;
    }

    fn current_page(&mut self) -> &mut PagePlan {
        self.pages.last_mut().expect("planner always holds a page")
    }
}

fn estimated_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * PT_TO_MM * AVG_GLYPH_FACTOR
}

fn char_budget(available_mm: f32, size_pt: f32) -> usize {
    let glyph_mm = size_pt * PT_TO_MM * AVG_GLYPH_FACTOR;
    ((available_mm / glyph_mm) as usize).max(1)
}

/// Greedy word wrap against a character budget. Words longer than the budget
/// are hard-split so a single token can never overflow the content width.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len <= max_chars {
            current.push_str(word);
            current_len = word_len;
        } else {
            let mut chunk = String::new();
            let mut chunk_len = 0usize;
            for ch in word.chars() {
                chunk.push(ch);
                chunk_len += 1;
                if chunk_len == max_chars {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_len = 0;
                }
            }
            current = chunk;
            current_len = chunk_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}
