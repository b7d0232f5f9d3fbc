//! Diagnostics and the text edits that make up their fixes.

use oxc_span::Span;

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single replacement over the original source text.
///
/// An empty span (`start == end`) is an insertion at that offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: Span,
    pub replacement: String,
}

impl TextEdit {
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        Self {
            span: Span::new(at, at),
            replacement: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.span.start == self.span.end
    }

    /// Whether applying both edits would be ambiguous or clobber each other.
    ///
    /// Touching ranges are fine. Two insertions at the same offset conflict
    /// because their relative order is undefined.
    pub fn conflicts_with(&self, other: &TextEdit) -> bool {
        if self.is_insertion() && other.is_insertion() {
            return self.span.start == other.span.start;
        }
        if self.is_insertion() {
            return other.span.start < self.span.start && self.span.start < other.span.end;
        }
        if other.is_insertion() {
            return self.span.start < other.span.start && other.span.start < self.span.end;
        }
        self.span.start < other.span.end && other.span.start < self.span.end
    }
}

/// An ordered set of edits that must be applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fix {
    pub edits: Vec<TextEdit>,
}

impl Fix {
    pub fn new(edits: Vec<TextEdit>) -> Self {
        Self { edits }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Smallest span covering every edit, `None` for an empty fix.
    pub fn span(&self) -> Option<Span> {
        let start = self.edits.iter().map(|edit| edit.span.start).min()?;
        let end = self.edits.iter().map(|edit| edit.span.end).max()?;
        Some(Span::new(start, end))
    }
}

/// A rule violation reported for one AST node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Rule name, e.g. "prefer-box-as-tag"
    pub rule: &'static str,
    /// Key into the rule's message table
    pub message_id: &'static str,
    /// Message with data already interpolated
    pub message: String,
    /// Interpolation data, kept for machine-readable output
    pub data: Vec<(&'static str, String)>,
    pub span: Span,
    pub severity: Severity,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Look up an interpolation value by key
    pub fn data(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.as_ref().is_some_and(|fix| !fix.is_empty())
    }
}
