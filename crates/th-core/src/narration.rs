//! Player-facing narration.
//!
//! Operations hand back narration lines instead of writing to a shared
//! message buffer. The tone tells the frontend how to color a line.

/// How a line of narration should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary text.
    Plain,
    /// Town announcements and neutral news.
    Info,
    /// Something went the hunter's way.
    Good,
    /// Something went against the hunter.
    Bad,
}

/// A single line of narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Presentation hint.
    pub tone: Tone,
    /// The text, without a trailing newline.
    pub text: String,
}

impl Narration {
    /// Create a line with the given tone.
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    /// A plain line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }

    /// An informational line.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    /// A favourable line.
    pub fn good(text: impl Into<String>) -> Self {
        Self::new(Tone::Good, text)
    }

    /// An unfavourable line.
    pub fn bad(text: impl Into<String>) -> Self {
        Self::new(Tone::Bad, text)
    }
}

impl std::fmt::Display for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join narration lines into plain text, one per line.
pub fn to_text(lines: &[Narration]) -> String {
    lines
        .iter()
        .map(|n| n.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
