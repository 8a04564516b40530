use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_TITLE: &str = "Cover Letter - [Candidate name] - [Company]";

/// Where a font comes from: one of the PDF standard-14 fonts, referenced by
/// name, or a TrueType/OpenType file that gets embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSource {
    Builtin(String),
    File(PathBuf),
}

impl FontSource {
    pub fn builtin(name: &str) -> Self {
        FontSource::Builtin(name.to_string())
    }
}

/// Filled rectangle drawn behind the title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderBar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [u8; 3],
}

impl Default for HeaderBar {
    fn default() -> Self {
        HeaderBar {
            x: 0.0,
            y: 746.0,
            width: 612.0,
            height: 30.0,
            color: [135, 206, 250], // light sky blue
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    pub text: String,
    pub font: FontSource,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub color: [u8; 3],
}

impl Default for Title {
    fn default() -> Self {
        Title {
            text: DEFAULT_TITLE.to_string(),
            font: FontSource::builtin("Helvetica-Bold"),
            size: 14.0,
            x: 72.0,
            y: 755.0,
            color: [0, 0, 0],
        }
    }
}

/// Every layout and styling knob of a rendered letter. All distances are in
/// PDF points, y measured up from the bottom edge of the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// x of every body line.
    pub left_margin: f32,
    /// Cursor position of the first body line on page 1.
    pub first_line_y: f32,
    /// Cursor position of the first body line on every later page.
    pub continuation_top: f32,
    /// A line is never placed at or below this y; the page breaks instead.
    pub bottom_threshold: f32,
    pub line_pitch: f32,
    /// Extra drop after each paragraph, on top of the line pitch.
    pub paragraph_spacing: f32,
    /// Maximum characters per line.
    pub wrap_width: usize,
    pub body_font: FontSource,
    pub body_font_size: f32,
    pub text_color: [u8; 3],
    pub header: Option<HeaderBar>,
    pub title: Option<Title>,
    /// Draw header and title on every page, not only the first.
    pub repeat_header: bool,
}

impl Default for LetterConfig {
    fn default() -> Self {
        LetterConfig {
            page_width: 612.0,
            page_height: 792.0,
            left_margin: 72.0,
            first_line_y: 720.0,
            continuation_top: 750.0,
            bottom_threshold: 100.0,
            line_pitch: 14.0,
            paragraph_spacing: 12.0,
            wrap_width: 105,
            body_font: FontSource::builtin("Helvetica"),
            body_font_size: 10.0,
            text_color: [0, 0, 0],
            header: Some(HeaderBar::default()),
            title: Some(Title::default()),
            repeat_header: false,
        }
    }
}

impl LetterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LetterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(Error::Config(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if !(self.line_pitch > 0.0) {
            return Err(Error::Config(format!(
                "line_pitch must be positive, got {}",
                self.line_pitch
            )));
        }
        if !(self.body_font_size > 0.0) {
            return Err(Error::Config(format!(
                "body_font_size must be positive, got {}",
                self.body_font_size
            )));
        }
        if let Some(title) = &self.title
            && !(title.size > 0.0)
        {
            return Err(Error::Config(format!(
                "title size must be positive, got {}",
                title.size
            )));
        }
        if self.bottom_threshold >= self.first_line_y {
            return Err(Error::Config(format!(
                "bottom_threshold ({}) must lie below first_line_y ({})",
                self.bottom_threshold, self.first_line_y
            )));
        }
        if self.continuation_top <= self.bottom_threshold {
            return Err(Error::Config(format!(
                "bottom_threshold ({}) must lie below continuation_top ({})",
                self.bottom_threshold, self.continuation_top
            )));
        }
        if self.paragraph_spacing < 0.0 {
            return Err(Error::Config(format!(
                "paragraph_spacing must not be negative, got {}",
                self.paragraph_spacing
            )));
        }
        Ok(())
    }

    /// Cursor position of the first body line on a page that is not the first.
    pub(crate) fn page_top(&self) -> f32 {
        if self.repeat_header {
            self.first_line_y
        } else {
            self.continuation_top
        }
    }
}
