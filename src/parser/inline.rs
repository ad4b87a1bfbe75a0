//! Inline formatting: `**bold**`, `*italic*` and `[text](url)`.
//!
//! The scanner walks the content once, left to right. At each position it
//! tries to open a span in the order bold, italic, link. An opened span
//! searches forward for its closer; if there is none, the opener is retried
//! with the next alternative and the failure is remembered, since a closer
//! that is missing after one position is missing after every later one too.
//! That keeps the scan linear and means unterminated delimiters simply stay
//! in the output as literal text.
//!
//! Spans never nest. `***text***` opens bold at the first `**` and closes at
//! the next `**`, yielding bold `*text` followed by a literal `*`.

use crate::model::StyledRun;

/// Split content into styled runs.
///
/// Concatenating the run texts yields the content with recognized delimiter
/// syntax removed. Empty runs are never returned.
///
/// # Example
///
/// ```
/// use md2page::parser::format_inline;
///
/// let runs = format_inline("Hi **there**");
/// assert_eq!(runs.len(), 2);
/// assert!(runs[1].bold);
/// ```
pub fn format_inline(content: &str) -> Vec<StyledRun> {
    InlineScanner::new(content).scan()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Plain,
    InBold { open: usize },
    InItalic { open: usize },
    InLinkText { open: usize },
    InLinkUrl { open: usize, text_end: usize },
}

/// Openers known to have no closer anywhere after the current position.
#[derive(Debug, Default, Clone, Copy)]
struct Exhausted {
    bold: bool,
    italic: bool,
    link: bool,
}

/// Single-pass inline scanner.
#[derive(Debug)]
pub struct InlineScanner<'a> {
    src: &'a str,
    pos: usize,
    plain_start: usize,
    state: ScanState,
    exhausted: Exhausted,
    runs: Vec<StyledRun>,
}

impl<'a> InlineScanner<'a> {
    /// Create a scanner over `src`.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            plain_start: 0,
            state: ScanState::Plain,
            exhausted: Exhausted::default(),
            runs: Vec::new(),
        }
    }

    /// Run the scanner to completion.
    pub fn scan(mut self) -> Vec<StyledRun> {
        let len = self.src.len();

        loop {
            self.state = match self.state {
                ScanState::Plain => {
                    if self.pos >= len {
                        break;
                    }
                    self.open_at(self.pos)
                }
                ScanState::InBold { open } => match self.find(b"**", open + 2) {
                    Some(close) => {
                        let text = &self.src[open + 2..close];
                        self.close_span(open, close + 2, StyledRun::bold(text));
                        ScanState::Plain
                    }
                    None => {
                        self.exhausted.bold = true;
                        ScanState::Plain
                    }
                },
                ScanState::InItalic { open } => match self.find_italic_close(open + 1) {
                    Some(close) => {
                        let text = &self.src[open + 1..close];
                        self.close_span(open, close + 1, StyledRun::italic(text));
                        ScanState::Plain
                    }
                    None => {
                        self.exhausted.italic = true;
                        ScanState::Plain
                    }
                },
                ScanState::InLinkText { open } => match self.find(b"](", open + 1) {
                    Some(text_end) => ScanState::InLinkUrl { open, text_end },
                    None => {
                        self.exhausted.link = true;
                        ScanState::Plain
                    }
                },
                ScanState::InLinkUrl { open, text_end } => match self.find(b")", text_end + 2) {
                    Some(close) => {
                        let text = &self.src[open + 1..text_end];
                        let url = &self.src[text_end + 2..close];
                        if url.trim().is_empty() {
                            // No target: the text stays visible without a hyperlink.
                            self.close_span(open, close + 1, StyledRun::plain(text));
                        } else {
                            self.close_span(open, close + 1, StyledRun::link(text, url));
                        }
                        ScanState::Plain
                    }
                    None => {
                        self.exhausted.link = true;
                        ScanState::Plain
                    }
                },
            };
        }

        self.flush_plain(len);
        self.runs
    }

    /// Try to open a span at `pos`, or step past the current byte.
    fn open_at(&mut self, pos: usize) -> ScanState {
        let rest = &self.src.as_bytes()[pos..];

        if !self.exhausted.bold && rest.starts_with(b"**") {
            return ScanState::InBold { open: pos };
        }
        if !self.exhausted.italic && rest[0] == b'*' && rest.get(1) != Some(&b'*') {
            return ScanState::InItalic { open: pos };
        }
        if !self.exhausted.link && rest[0] == b'[' {
            return ScanState::InLinkText { open: pos };
        }

        // Delimiters are ASCII, so byte steps never land a slice mid-character.
        self.pos += 1;
        ScanState::Plain
    }

    /// Emit the pending plain text and a span covering `open..end`.
    fn close_span(&mut self, open: usize, end: usize, run: StyledRun) {
        self.flush_plain(open);
        self.push(run);
        self.pos = end;
        self.plain_start = end;
    }

    fn flush_plain(&mut self, end: usize) {
        if end > self.plain_start {
            let text = &self.src[self.plain_start..end];
            self.push(StyledRun::plain(text));
        }
        self.plain_start = end;
    }

    fn push(&mut self, run: StyledRun) {
        if !run.is_empty() {
            self.runs.push(run);
        }
    }

    fn find(&self, pat: &[u8], from: usize) -> Option<usize> {
        let bytes = self.src.as_bytes();
        if from > bytes.len() {
            return None;
        }
        bytes[from..]
            .windows(pat.len())
            .position(|window| window == pat)
            .map(|offset| from + offset)
    }

    /// First `*` at or after `from` that is not followed by another `*`.
    fn find_italic_close(&self, from: usize) -> Option<usize> {
        let bytes = self.src.as_bytes();
        (from..bytes.len()).find(|&i| bytes[i] == b'*' && bytes.get(i + 1) != Some(&b'*'))
    }
}
