mod config;
mod conversation;
mod error;
mod fonts;
mod layout;
mod model;
mod pdf;
pub mod prompt;
mod wrap;

pub use config::{DEFAULT_TITLE, FontSource, HeaderBar, LetterConfig, Title};
pub use conversation::{Conversation, Message, Role};
pub use error::{Error, Result};
pub use layout::paginate;
pub use model::{Document, Page, Paragraph, PlacedLine};
pub use pdf::render;
pub use wrap::{paragraphs, wrap};

use std::path::Path;

/// Lay out `text` and return the finished PDF bytes.
pub fn render_letter(text: &str, config: &LetterConfig) -> Result<Vec<u8>> {
    let doc = paginate(text, config);
    render(&doc, config)
}

/// Render the most recent letter in a caller-owned conversation log.
pub fn render_conversation(log: &Conversation, config: &LetterConfig) -> Result<Vec<u8>> {
    let letter = log.latest_letter().ok_or(Error::NoLetter)?;
    render_letter(letter, config)
}

/// Lay out `text` and write the PDF to `output`, replacing any existing file.
pub fn write_letter_pdf(text: &str, output: &Path, config: &LetterConfig) -> Result<()> {
    let bytes = render_letter(text, config)?;
    std::fs::write(output, bytes)?;
    log::info!("Wrote {}", output.display());
    Ok(())
}
