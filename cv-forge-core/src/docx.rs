//! Flow-document renderer: classified resume lines to an OOXML package.
//!
//! Planning and emission are split so structure can be asserted without
//! unzipping the output: `plan` maps the header and classified lines to flow
//! blocks, `render` turns those blocks into `docx-rs` paragraphs. Pagination
//! is left entirely to the host format's natural reflow.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, PageMargin, Paragraph, Run, SpecialIndentType, Start,
};
use tracing::debug;

use crate::classify::{ClassifiedResume, Role};
use crate::error::RenderError;
use crate::style::{style_for, HAlign};

/// Uniform 0.5-inch page inset, in twentieths of a point.
const MARGIN_TWIPS: i32 = 720;

const BULLET_NUMBERING_ID: usize = 1;

/// One reflowable paragraph of the planned document.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowBlock {
    pub role: Role,
    pub text: String,
}

/// Maps the header and classified lines onto flow blocks, in render order.
pub fn plan(resume: &ClassifiedResume) -> Vec<FlowBlock> {
    let mut blocks = Vec::with_capacity(resume.lines.len() + 2);
    if !resume.header.name.is_empty() {
        blocks.push(FlowBlock {
            role: Role::Title,
            text: resume.header.name.clone(),
        });
    }
    if let Some(contact) = &resume.header.contact {
        blocks.push(FlowBlock {
            role: Role::ContactLine,
            text: contact.clone(),
        });
    }
    for line in &resume.lines {
        blocks.push(FlowBlock {
            role: line.role,
            text: line.display.clone(),
        });
    }
    blocks
}

/// Renders the classified resume into a complete flow-document byte buffer.
pub fn render(resume: &ClassifiedResume) -> Result<Vec<u8>, RenderError> {
    let blocks = plan(resume);
    debug!(blocks = blocks.len(), "Emitting flow document");

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(MARGIN_TWIPS)
                .bottom(MARGIN_TWIPS)
                .left(MARGIN_TWIPS)
                .right(MARGIN_TWIPS),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for block in &blocks {
        docx = docx.add_paragraph(paragraph_for(block));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| RenderError::FlowPack(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn paragraph_for(block: &FlowBlock) -> Paragraph {
    let style = style_for(block.role);

    let mut run = Run::new()
        .add_text(block.text.as_str())
        .size(half_points(style.size_pt));
    if style.bold {
        run = run.bold();
    }

    let mut paragraph = Paragraph::new().add_run(run).line_spacing(
        LineSpacing::new()
            .before(twips(style.space_before_pt))
            .after(twips(style.space_after_pt)),
    );
    paragraph = match style.align {
        HAlign::Center => paragraph.align(AlignmentType::Center),
        HAlign::Left => paragraph.align(AlignmentType::Left),
    };
    if block.role == Role::Bullet {
        paragraph = paragraph.numbering(
            NumberingId::new(BULLET_NUMBERING_ID),
            IndentLevel::new(0),
        );
    }
    paragraph
}

fn twips(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

fn half_points(pt: f32) -> usize {
    (pt * 2.0).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_resume;

    #[test]
    fn plan_starts_with_title_then_contact() {
        let resume = classify_resume("JANE DOE\n+1 555 | jane@x.com\nSUMMARY\nBuilds things.");
        let blocks = plan(&resume);
        assert_eq!(blocks[0].role, Role::Title);
        assert_eq!(blocks[0].text, "JANE DOE");
        assert_eq!(blocks[1].role, Role::ContactLine);
        assert_eq!(blocks[2].role, Role::SectionHeader);
    }

    #[test]
    fn output_is_a_zip_package() {
        let resume = classify_resume("JANE DOE\n+1 555 | jane@x.com\nSUMMARY\nBuilds things.");
        let bytes = render(&resume).expect("flow render succeeds");
        assert_eq!(&bytes[0..2], b"PK", "OOXML packages start with the zip signature");
    }
}
