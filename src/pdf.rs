use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::config::LetterConfig;
use crate::error::Result;
use crate::fonts::{self, FontEntry};
use crate::model::{Document, Page};

fn rgb(color: [u8; 3]) -> (f32, f32, f32) {
    (
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    )
}

fn draw_header(content: &mut Content, config: &LetterConfig, title_font: Option<&FontEntry>) {
    if let Some(bar) = &config.header {
        let (r, g, b) = rgb(bar.color);
        content
            .save_state()
            .set_fill_rgb(r, g, b)
            .rect(bar.x, bar.y, bar.width, bar.height)
            .fill_nonzero()
            .restore_state();
    }

    if let (Some(title), Some(font)) = (&config.title, title_font) {
        let (r, g, b) = rgb(title.color);
        let text = fonts::to_winansi_bytes(&title.text);
        content
            .set_fill_rgb(r, g, b)
            .begin_text()
            .set_font(Name(font.pdf_name.as_bytes()), title.size)
            .next_line(title.x, title.y)
            .show(Str(&text))
            .end_text();
    }
}

fn draw_body(content: &mut Content, page: &Page, config: &LetterConfig, body_font: &FontEntry) {
    if page.lines.is_empty() {
        return;
    }
    let (r, g, b) = rgb(config.text_color);
    content.set_fill_rgb(r, g, b);

    for line in &page.lines {
        let text = fonts::to_winansi_bytes(&line.text);
        content
            .begin_text()
            .set_font(Name(body_font.pdf_name.as_bytes()), config.body_font_size)
            .next_line(line.x, line.y)
            .show(Str(&text))
            .end_text();
    }
}

/// Serialize a laid-out letter. Page 1 (or every page, with
/// `repeat_header`) gets the header bar and title. No timestamps are
/// written, so equal inputs produce equal bytes.
pub fn render(doc: &Document, config: &LetterConfig) -> Result<Vec<u8>> {
    let mut pdf = Pdf::new();

    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();

    let body_font = fonts::register_font(&mut pdf, &config.body_font, "F1".into(), &mut alloc)?;
    let title_font = match &config.title {
        Some(title) => Some(fonts::register_font(
            &mut pdf,
            &title.font,
            "F2".into(),
            &mut alloc,
        )?),
        None => None,
    };

    let page_ids: Vec<(Ref, Ref)> = doc.pages.iter().map(|_| (alloc(), alloc())).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().map(|&(page_id, _)| page_id))
        .count(page_ids.len() as i32);

    {
        let mut info = pdf.document_info(info_id);
        if let Some(title) = &config.title {
            info.title(TextStr(&title.text));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
    }

    for (index, (page, &(page_id, content_id))) in doc.pages.iter().zip(&page_ids).enumerate() {
        let mut content = Content::new();
        if index == 0 || config.repeat_header {
            draw_header(&mut content, config, title_font.as_ref());
        }
        draw_body(&mut content, page, config, &body_font);
        pdf.stream(content_id, &content.finish());

        let mut page_writer = pdf.page(page_id);
        page_writer
            .media_box(Rect::new(0.0, 0.0, doc.page_width, doc.page_height))
            .parent(pages_id)
            .contents(content_id);
        let mut resources = page_writer.resources();
        let mut font_dict = resources.fonts();
        font_dict.pair(Name(body_font.pdf_name.as_bytes()), body_font.font_ref);
        if let Some(title_font) = &title_font {
            font_dict.pair(Name(title_font.pdf_name.as_bytes()), title_font.font_ref);
        }
    }

    log::debug!("Rendered {} pages", page_ids.len());
    Ok(pdf.finish())
}
