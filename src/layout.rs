use crate::config::LetterConfig;
use crate::model::{Document, Page, PlacedLine};
use crate::wrap;

/// Place the letter's wrapped lines on pages.
///
/// A vertical cursor starts at `first_line_y`. Before each line, a cursor at
/// or below `bottom_threshold` closes the page and restarts at the top of a
/// fresh one. Each line moves the cursor down by `line_pitch`, and each
/// finished paragraph by a further `paragraph_spacing`; that extra drop is
/// not checked against the threshold on its own, only by the next line.
///
/// Always yields at least one page, so empty text renders as a blank sheet.
pub fn paginate(text: &str, config: &LetterConfig) -> Document {
    let paragraphs = wrap::paragraphs(text, config.wrap_width);

    let mut pages: Vec<Page> = Vec::new();
    let mut page = Page::default();
    let mut cursor_y = config.first_line_y;

    for para in &paragraphs {
        for line in &para.lines {
            if cursor_y <= config.bottom_threshold {
                pages.push(std::mem::take(&mut page));
                cursor_y = config.page_top();
            }
            page.lines.push(PlacedLine {
                text: line.clone(),
                x: config.left_margin,
                y: cursor_y,
                paragraph: para.index,
            });
            cursor_y -= config.line_pitch;
        }
        cursor_y -= config.paragraph_spacing;
    }
    pages.push(page);

    log::debug!(
        "Laid out {} paragraphs, {} lines on {} pages",
        paragraphs.len(),
        paragraphs.iter().map(|p| p.lines.len()).sum::<usize>(),
        pages.len()
    );

    Document {
        page_width: config.page_width,
        page_height: config.page_height,
        pages,
    }
}
