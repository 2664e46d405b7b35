//! Terminal output types and the renderer contract.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ring_buffer::RingBuffer;

// =============================================================================
// Renderer Contract
// =============================================================================

/// Sink for everything commands print.
///
/// Owned by the host; the shell never reads back from it.
pub trait Renderer {
    /// Append a line of plain text.
    fn append_line(&mut self, text: &str);

    /// Append an error message. Hosts may style it differently.
    fn append_error(&mut self, text: &str) {
        self.append_line(text);
    }

    /// Append a raw markup fragment.
    fn append_markup(&mut self, html: &str);

    /// Append an image given its URL or data URL.
    fn append_image(&mut self, src: &str);

    /// Remove everything rendered so far.
    fn clear_all(&mut self);
}

// =============================================================================
// Output Lines
// =============================================================================

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Echo of a submitted line with its prompt
    Command { prompt: String, input: String },
    Text(String),
    /// Error message (red)
    Error(String),
    /// Raw markup inserted as HTML
    Markup(String),
    /// Image source
    Image(String),
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn markup(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Markup(s.into()))
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(OutputLineData::Image(src.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Text of the line, if it carries any.
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            OutputLineData::Text(s) | OutputLineData::Error(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

impl Renderer for RingBuffer<OutputLine> {
    fn append_line(&mut self, text: &str) {
        self.push(OutputLine::text(text));
    }

    fn append_error(&mut self, text: &str) {
        self.push(OutputLine::error(text));
    }

    fn append_markup(&mut self, html: &str) {
        self.push(OutputLine::markup(html));
    }

    fn append_image(&mut self, src: &str) {
        self.push(OutputLine::image(src));
    }

    fn clear_all(&mut self) {
        self.clear();
    }
}
