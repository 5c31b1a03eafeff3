//! The process-wide typography table shared by both renderers.

use crate::classify::Role;

/// Horizontal alignment of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

/// Typography for one role. Read-only, never mutated at runtime; both
/// renderers translate the same entry into their own document model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub bold: bool,
    pub size_pt: f32,
    pub align: HAlign,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    /// Draw a horizontal rule spanning the content width below the line
    /// (fixed-page renderer only; the flow format has no rule primitive here).
    pub rule_below: bool,
}

const TITLE: RenderStyle = RenderStyle {
    bold: true,
    size_pt: 16.0,
    align: HAlign::Center,
    space_before_pt: 0.0,
    space_after_pt: 2.0,
    rule_below: false,
};

const CONTACT: RenderStyle = RenderStyle {
    bold: false,
    size_pt: 9.0,
    align: HAlign::Center,
    space_before_pt: 0.0,
    space_after_pt: 10.0,
    rule_below: false,
};

const SECTION_HEADER: RenderStyle = RenderStyle {
    bold: true,
    size_pt: 12.0,
    align: HAlign::Center,
    space_before_pt: 12.0,
    space_after_pt: 6.0,
    rule_below: true,
};

const SUB_HEADER: RenderStyle = RenderStyle {
    bold: true,
    size_pt: 10.5,
    align: HAlign::Left,
    space_before_pt: 8.0,
    space_after_pt: 2.0,
    rule_below: false,
};

const BULLET: RenderStyle = RenderStyle {
    bold: false,
    size_pt: 10.0,
    align: HAlign::Left,
    space_before_pt: 0.0,
    space_after_pt: 2.0,
    rule_below: false,
};

const BODY: RenderStyle = RenderStyle {
    bold: false,
    size_pt: 10.0,
    align: HAlign::Left,
    space_before_pt: 0.0,
    space_after_pt: 2.0,
    rule_below: false,
};

// Blank lines are filtered out before rendering; the zeroed entry keeps the
// mapping total.
const BLANK: RenderStyle = RenderStyle {
    bold: false,
    size_pt: 0.0,
    align: HAlign::Left,
    space_before_pt: 0.0,
    space_after_pt: 0.0,
    rule_below: false,
};

/// Selects the single style entry for a role.
pub const fn style_for(role: Role) -> &'static RenderStyle {
    match role {
        Role::Title => &TITLE,
        Role::ContactLine => &CONTACT,
        Role::SectionHeader => &SECTION_HEADER,
        Role::SubHeader => &SUB_HEADER,
        Role::Bullet => &BULLET,
        Role::Body => &BODY,
        Role::Blank => &BLANK,
    }
}
