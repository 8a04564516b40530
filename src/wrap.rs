use crate::model::Paragraph;

const TABSIZE: usize = 8;

/// Split letter text into paragraphs, one per non-blank line, each wrapped to
/// at most `width` characters per line.
pub fn paragraphs(text: &str, width: usize) -> Vec<Paragraph> {
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    text.split('\n')
        .filter(|candidate| !candidate.trim().is_empty())
        .enumerate()
        .map(|(index, candidate)| Paragraph {
            index,
            lines: wrap(candidate, width),
        })
        .collect()
}

/// Expand tabs to the next multiple-of-8 column and turn the remaining ASCII
/// whitespace controls into plain spaces.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = TABSIZE - column % TABSIZE;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' | '\u{0B}' | '\u{0C}' => {
                out.push(' ');
                column += 1;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}

/// Alternating runs of spaces and non-spaces, in order.
fn chunks(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut in_space = None;
    for ch in text.chars() {
        let is_space = ch == ' ';
        if in_space == Some(is_space)
            && let Some(chunk) = chunks.last_mut()
        {
            chunk.push(ch);
        } else {
            chunks.push(ch.to_string());
        }
        in_space = Some(is_space);
    }
    chunks
}

fn is_space(chunk: &str) -> bool {
    chunk.chars().all(|c| c == ' ')
}

/// Greedy wrap over runs of spaces and words. Lines break only between
/// words; spacing inside a line is kept as written, while spaces at a break
/// are dropped. A word that cannot fit on a line of its own is cut: its
/// first characters fill whatever room the current line has left and the
/// rest carries on to the next lines, so no line exceeds `width`.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut pending = chunks(&normalize_whitespace(text));
    pending.reverse();
    let mut lines: Vec<String> = Vec::new();

    loop {
        // spaces at the start of a continuation line are dropped
        if !lines.is_empty() && pending.last().is_some_and(|c| is_space(c)) {
            pending.pop();
        }
        if pending.is_empty() {
            break;
        }

        let mut line = String::new();
        let mut line_len = 0usize;
        while let Some(chunk) = pending.last() {
            let len = chunk.chars().count();
            if line_len + len > width {
                break;
            }
            line.push_str(chunk);
            line_len += len;
            pending.pop();
        }

        if let Some(chunk) = pending.last_mut()
            && chunk.chars().count() > width
        {
            let room = width - line_len;
            let head: String = chunk.chars().take(room).collect();
            *chunk = chunk.chars().skip(room).collect();
            line.push_str(&head);
        }

        let kept = line.trim_end_matches(' ').len();
        line.truncate(kept);
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}
