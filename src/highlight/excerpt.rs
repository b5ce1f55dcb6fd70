use crate::foundation::error::{WalkthroughError, WalkthroughResult};
use crate::highlight::tokenizer::{Token, tokenize};

/// A source fragment embedded in commentary, with optional provenance.
///
/// This is domain data only. The collapsed/expanded state lives on an [`ExcerptView`], which
/// is created fresh every time the excerpt is mounted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CodeExcerpt {
    source_text: String,
    origin_label: Option<String>,
    start_line: Option<u32>,
    initially_collapsed: bool,
}

impl CodeExcerpt {
    /// Excerpt without a label: always expanded, no header.
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            origin_label: None,
            start_line: None,
            initially_collapsed: false,
        }
    }

    /// Attach an origin label (e.g. `model.py — Block`). Enables the header and collapsing.
    ///
    /// An empty label counts as no label.
    pub fn origin(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.origin_label = (!label.is_empty()).then_some(label);
        self
    }

    /// Set the 1-based source line of the first row.
    pub fn starting_at(mut self, line: u32) -> WalkthroughResult<Self> {
        if line == 0 {
            return Err(WalkthroughError::validation(
                "excerpt start line must be >= 1",
            ));
        }
        self.start_line = Some(line);
        Ok(self)
    }

    /// Start collapsed when mounted. Ignored for excerpts without an origin label.
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.initially_collapsed = collapsed;
        self
    }

    /// Raw source as given, before boundary trimming.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Origin label, if any.
    pub fn origin_label(&self) -> Option<&str> {
        self.origin_label.as_deref()
    }

    /// 1-based line number of the first row, if known.
    pub fn start_line(&self) -> Option<u32> {
        self.start_line
    }

    /// Requested initial state.
    pub fn initially_collapsed(&self) -> bool {
        self.initially_collapsed
    }

    /// Only labeled excerpts get a header, and only the header can collapse the body.
    pub fn is_collapsible(&self) -> bool {
        self.origin_label.is_some()
    }

    /// Source with leading and trailing newline runs removed. Interior blank lines are kept.
    pub fn trimmed_source(&self) -> &str {
        self.source_text
            .trim_start_matches('\n')
            .trim_end_matches('\n')
    }

    /// Tokenize the trimmed source, one row per line.
    pub fn rows(&self) -> Vec<ExcerptRow> {
        let rows: Vec<ExcerptRow> = self
            .trimmed_source()
            .split('\n')
            .enumerate()
            .map(|(index, line)| ExcerptRow {
                index,
                line_number: self
                    .start_line
                    .and_then(|start| u32::try_from(index).ok()?.checked_add(start)),
                tokens: tokenize(line),
            })
            .collect();
        tracing::trace!(
            rows = rows.len(),
            label = self.origin_label.as_deref().unwrap_or(""),
            "tokenized excerpt"
        );
        rows
    }

    /// Create a rendered instance with fresh view state.
    pub fn mount(&self) -> ExcerptView {
        ExcerptView::new(self.clone())
    }
}

/// One tokenized source line.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExcerptRow {
    /// 0-based row index within the excerpt.
    pub index: usize,
    /// Absolute source line number, when the excerpt has a start line.
    pub line_number: Option<u32>,
    /// Tokens of the line, in order.
    pub tokens: Vec<Token>,
}

impl ExcerptRow {
    /// Source text of the row.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Header shown above a labeled excerpt.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExcerptHeader {
    /// Origin label.
    pub label: String,
    /// Start line shown as a `:<line>` suffix.
    pub start_line: Option<u32>,
    /// Current state of the owning view.
    pub collapsed: bool,
}

impl ExcerptHeader {
    /// `▶` when collapsed, `▼` when expanded.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.collapsed { "▶" } else { "▼" }
    }

    /// `:<line>` when a start line is known.
    pub fn line_suffix(&self) -> Option<String> {
        self.start_line.map(|l| format!(":{l}"))
    }
}

/// Output of [`ExcerptView::render`].
///
/// `rows` is `None` while collapsed: the body is absent, not hidden.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RenderedExcerpt {
    /// Present only for labeled excerpts.
    pub header: Option<ExcerptHeader>,
    /// Tokenized body; `None` when collapsed.
    pub rows: Option<Vec<ExcerptRow>>,
}

impl RenderedExcerpt {
    /// Body text with a newline between rows, or `None` when collapsed.
    pub fn body_text(&self) -> Option<String> {
        self.rows.as_ref().map(|rows| {
            rows.iter()
                .map(ExcerptRow::text)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Pretty-printed JSON form of the header and token rows.
    pub fn to_json(&self) -> WalkthroughResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A mounted excerpt. Owns the collapsed flag exclusively.
#[derive(Clone, Debug)]
pub struct ExcerptView {
    excerpt: CodeExcerpt,
    collapsed: bool,
}

impl ExcerptView {
    /// Mount `excerpt` with its initial state.
    pub fn new(excerpt: CodeExcerpt) -> Self {
        let collapsed = initial_state(&excerpt);
        Self { excerpt, collapsed }
    }

    /// Underlying excerpt.
    pub fn excerpt(&self) -> &CodeExcerpt {
        &self.excerpt
    }

    /// Whether the body is currently omitted.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Header click. Returns the new collapsed state; excerpts without a header never collapse.
    pub fn toggle(&mut self) -> bool {
        if self.excerpt.is_collapsible() {
            self.collapsed = !self.collapsed;
        }
        self.collapsed
    }

    /// Reset view state as if freshly mounted.
    pub fn remount(&mut self) {
        self.collapsed = initial_state(&self.excerpt);
    }

    /// Build the presentation structure for the current state.
    pub fn render(&self) -> RenderedExcerpt {
        let header = self.excerpt.origin_label.as_ref().map(|label| ExcerptHeader {
            label: label.clone(),
            start_line: self.excerpt.start_line,
            collapsed: self.collapsed,
        });
        let rows = (!self.collapsed).then(|| self.excerpt.rows());
        RenderedExcerpt { header, rows }
    }
}

fn initial_state(excerpt: &CodeExcerpt) -> bool {
    excerpt.is_collapsible() && excerpt.initially_collapsed
}

#[cfg(test)]
#[path = "../../tests/unit/highlight/excerpt.rs"]
mod tests;
