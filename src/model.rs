/// A newline-delimited block of letter text, wrapped into lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub index: usize,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32, // baseline, PDF user space (origin bottom-left)
    pub paragraph: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// The laid-out letter. Built fresh for every render and dropped once the
/// PDF bytes exist.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}
