use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Lay out rendered report Markdown as a DOCX document.
///
/// Understood line forms:
/// - `#`, `##`, `###` headings
/// - `- item` bullets
/// - `> text` callouts, set in italics
/// - `---` page break
/// - `**bold**` spans inside any text line
///
/// Blank lines are dropped; every other line becomes its own paragraph.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size, styles))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size, styles))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size, styles));

    let mut paragraphs = 0usize;
    for line in rendered.lines() {
        let Some(block) = Block::parse(line) else {
            continue;
        };
        docx = docx.add_paragraph(block.into_paragraph(styles));
        paragraphs += 1;
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(paragraphs, "docx packed");
    Ok(buf.into_inner())
}

/// One line of report Markdown, classified.
#[derive(Debug, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    Callout(&'a str),
    PageBreak,
    Text(&'a str),
}

impl<'a> Block<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let block = if let Some(text) = trimmed.strip_prefix("### ") {
            Block::Heading { level: 3, text }
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            Block::Heading { level: 2, text }
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            Block::Heading { level: 1, text }
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            Block::Bullet(text)
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            Block::Callout(text)
        } else if trimmed == "---" {
            Block::PageBreak
        } else {
            Block::Text(trimmed)
        };
        Some(block)
    }

    fn into_paragraph(self, styles: &DocumentStyles) -> Paragraph {
        match self {
            Block::Heading { level, text } => Paragraph::new()
                .style(&format!("Heading{level}"))
                .add_run(Run::new().add_text(text)),
            Block::Bullet(text) => {
                let bullet = body_run("\u{2022} ", styles);
                with_runs(Paragraph::new().add_run(bullet), text, false, styles)
            }
            Block::Callout(text) => with_runs(Paragraph::new(), text, true, styles),
            Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            Block::Text(text) => with_runs(Paragraph::new(), text, false, styles),
        }
    }
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .bold()
        .size(size_pt * 2) // OOXML uses half-points
        .fonts(RunFonts::new().ascii(&styles.heading_font))
}

fn with_runs(para: Paragraph, text: &str, italic: bool, styles: &DocumentStyles) -> Paragraph {
    split_bold(text)
        .into_iter()
        .fold(para.align(AlignmentType::Left), |para, (segment, bold)| {
            let mut run = body_run(segment, styles);
            if bold {
                run = run.bold();
            }
            if italic {
                run = run.italic();
            }
            para.add_run(run)
        })
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split text on `**` markers into `(segment, is_bold)` pairs. An unclosed
/// marker is kept as literal text.
pub fn split_bold(text: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after = &remaining[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            segments.push((&remaining[..start], false));
        }
        if end > 0 {
            segments.push((&after[..end], true));
        }
        remaining = &after[end + 2..];
    }

    if !remaining.is_empty() {
        segments.push((remaining, false));
    }
    segments
}
