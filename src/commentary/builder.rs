use crate::commentary::{Commentary, ContentBlock, Embed};
use crate::foundation::error::{WalkthroughError, WalkthroughResult};
use crate::highlight::excerpt::CodeExcerpt;
use crate::walkthrough::phase::Phase;

/// Interleave literal fragments with embedded values.
///
/// The layout is `fragment, value, fragment, ..., value, fragment`, so there must be exactly one
/// more fragment than values. Empty fragments produce no block; every value produces exactly
/// one block, in position.
pub fn commentary(
    phase: Phase,
    fragments: &[&str],
    values: Vec<Embed>,
) -> WalkthroughResult<Commentary> {
    if fragments.len() != values.len() + 1 {
        return Err(WalkthroughError::validation(format!(
            "commentary for phase '{}' needs one more fragment than values (got {} fragments, {} values)",
            phase.name(),
            fragments.len(),
            values.len()
        )));
    }

    let mut builder = CommentaryBuilder::new(phase);
    let mut values = values.into_iter();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            // length check above guarantees a value between every pair of fragments
            if let Some(value) = values.next() {
                builder = builder.value(value);
            }
        }
        builder = builder.text(*fragment);
    }
    Ok(builder.build())
}

/// Construct an embeddable excerpt from optional metadata.
pub fn code_excerpt(
    source_text: impl Into<String>,
    origin_label: Option<&str>,
    start_line: Option<u32>,
    initially_collapsed: Option<bool>,
) -> WalkthroughResult<Embed> {
    let mut excerpt = CodeExcerpt::new(source_text);
    if let Some(label) = origin_label {
        excerpt = excerpt.origin(label);
    }
    if let Some(line) = start_line {
        excerpt = excerpt.starting_at(line)?;
    }
    Ok(excerpt
        .collapsed(initially_collapsed.unwrap_or(false))
        .into())
}

/// Incremental commentary assembly. Blocks keep insertion order.
pub struct CommentaryBuilder {
    phase: Phase,
    blocks: Vec<ContentBlock>,
}

impl CommentaryBuilder {
    /// Empty commentary for `phase`.
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            blocks: Vec::new(),
        }
    }

    /// Append a literal text run. Empty text is dropped.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.blocks.push(ContentBlock::Text(text));
        }
        self
    }

    /// Append one embedded value.
    pub fn value(mut self, value: impl Into<Embed>) -> Self {
        self.blocks.push(ContentBlock::Embedded(value.into()));
        self
    }

    /// Append a code excerpt as an inline unit.
    pub fn excerpt(self, excerpt: CodeExcerpt) -> Self {
        self.value(excerpt)
    }

    /// Finish.
    pub fn build(self) -> Commentary {
        Commentary::from_blocks(self.phase, self.blocks)
    }
}

/// Template-style commentary: `commentary!(phase, "A", value, "B", value, "C")`.
///
/// Fragments and values must alternate, starting and ending with a fragment. Expands to a call to
/// [`commentary`](crate::commentary) and yields a `WalkthroughResult<Commentary>`.
#[macro_export]
macro_rules! commentary {
    ($phase:expr, $first:expr $(, $value:expr, $fragment:expr)*) => {
        $crate::commentary(
            $phase,
            &[$first $(, $fragment)*],
            vec![$($crate::Embed::from($value)),*],
        )
    };
}

#[cfg(test)]
#[path = "../../tests/unit/commentary/builder.rs"]
mod tests;
